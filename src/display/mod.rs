//! Rendering layer: all terminal output lives here.
//!
//! The simulation works in fixed-size pixel space; `Viewport` scales those
//! rectangles onto whatever terminal grid is available.  No game logic is
//! performed here.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use shooter_jets::entities::{Enemy, GameState, Player, Projectile, Rect, ScreenSize};
use shooter_jets::session::{Button, Screen, Session};
use shooter_jets::sprites::{Sprite, SpriteSet};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TITLE: Color = Color::Cyan;
const C_HUD_SCORE: Color = Color::White;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_BAR_FILL: Color = Color::Red;
const C_BAR_EMPTY: Color = Color::White;
const C_BUTTON: Color = Color::Rgb { r: 15, g: 161, b: 246 };
const C_BUTTON_HOVER: Color = Color::Rgb { r: 0, g: 100, b: 200 };
const C_HINT: Color = Color::DarkGrey;

/// Health bar `(length, gap above the sprite)` in pixels.
const PLAYER_BAR: (f32, f32) = (100.0, 20.0);
const ENEMY_BAR: (f32, f32) = (50.0, 10.0);

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Maps simulation pixels to terminal cells and back.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
    scale_x: f32,
    scale_y: f32,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16, size: ScreenSize) -> Self {
        Self {
            cols,
            rows,
            scale_x: cols as f32 / size.width,
            scale_y: rows as f32 / size.height,
        }
    }

    /// Cells per pixel on each axis.
    pub fn scale(&self) -> (f32, f32) {
        (self.scale_x, self.scale_y)
    }

    /// Centre of a terminal cell, in pixels.
    pub fn to_pixel(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) / self.scale_x,
            (row as f32 + 0.5) / self.scale_y,
        )
    }

    fn cell(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x * self.scale_x).floor() as i32,
            (y * self.scale_y).floor() as i32,
        )
    }

    fn visible(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < self.cols as i32 && row < self.rows as i32
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whichever screen is active.
pub fn render<W: Write>(
    out: &mut W,
    session: &Session,
    sprites: &SpriteSet,
    view: &Viewport,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    match (session.screen(), session.game()) {
        (Screen::Menu, _) => draw_menu(out, session, view)?,
        (Screen::Playing, Some(game)) => draw_game(out, game, sprites, view)?,
        (Screen::GameOver, Some(game)) => draw_end(out, session, game, view)?,
        _ => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_menu<W: Write>(out: &mut W, session: &Session, view: &Viewport) -> std::io::Result<()> {
    let size = session.size();
    draw_centered(out, view, size.height * 0.25, "SHOOTER  JETS", C_TITLE)?;
    for button in session.buttons() {
        draw_button(out, &button, view)?;
    }
    draw_centered(
        out,
        view,
        size.height - 30.0,
        "Mouse: steer + click   ENTER: Start   Q: Quit",
        C_HINT,
    )
}

fn draw_game<W: Write>(
    out: &mut W,
    game: &GameState,
    sprites: &SpriteSet,
    view: &Viewport,
) -> std::io::Result<()> {
    let enemy_shot = flip_vertical(&sprites.bullet);

    draw_player(out, &game.player, sprites, view)?;
    for bullet in &game.player.bullets {
        draw_sprite(out, &sprites.bullet, &bullet.rect, C_BULLET_PLAYER, view)?;
    }
    for enemy in &game.enemies {
        draw_enemy(out, enemy, sprites, view)?;
        draw_enemy_shots(out, &enemy.bullets, &enemy_shot, view)?;
    }

    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {}", game.score)))?;
    Ok(())
}

fn draw_end<W: Write>(
    out: &mut W,
    session: &Session,
    game: &GameState,
    view: &Viewport,
) -> std::io::Result<()> {
    let size = session.size();
    draw_centered(out, view, size.height * 0.3, "GAME  OVER", Color::Red)?;
    draw_centered(
        out,
        view,
        size.height / 2.0 + 90.0,
        &format!("Score: {}", game.score),
        Color::Yellow,
    )?;
    for button in session.buttons() {
        draw_button(out, &button, view)?;
    }
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(
    out: &mut W,
    player: &Player,
    sprites: &SpriteSet,
    view: &Viewport,
) -> std::io::Result<()> {
    draw_sprite(out, &sprites.player, &player.rect, C_PLAYER, view)?;
    draw_health_bar(out, &player.rect, player.health, player.max_health, PLAYER_BAR, view)
}

fn draw_enemy<W: Write>(
    out: &mut W,
    enemy: &Enemy,
    sprites: &SpriteSet,
    view: &Viewport,
) -> std::io::Result<()> {
    if let Some(sprite) = sprites.enemy(enemy.kind()) {
        draw_sprite(out, sprite, &enemy.rect, C_ENEMY, view)?;
    }
    draw_health_bar(out, &enemy.rect, enemy.health, enemy.max_health, ENEMY_BAR, view)
}

fn draw_enemy_shots<W: Write>(
    out: &mut W,
    shots: &[Projectile],
    sprite: &Sprite,
    view: &Viewport,
) -> std::io::Result<()> {
    for shot in shots {
        draw_sprite(out, sprite, &shot.rect, C_BULLET_ENEMY, view)?;
    }
    Ok(())
}

/// One-row bar above `rect`, filled in proportion to health.
fn draw_health_bar<W: Write>(
    out: &mut W,
    rect: &Rect,
    health: u32,
    max_health: u32,
    (length, gap): (f32, f32),
    view: &Viewport,
) -> std::io::Result<()> {
    let ratio = if max_health == 0 { 0.0 } else { health as f32 / max_health as f32 };
    let (col, row) = view.cell(rect.x, rect.y - gap);
    let cols = ((length * view.scale_x).round() as i32).max(1);
    let filled = (cols as f32 * ratio).round() as i32;

    for i in 0..cols {
        let c = col + i;
        if !view.visible(c, row) {
            continue;
        }
        let (glyph, color) = if i < filled { ('█', C_BAR_FILL) } else { ('░', C_BAR_EMPTY) };
        out.queue(cursor::MoveTo(c as u16, row as u16))?;
        out.queue(style::SetForegroundColor(color))?;
        out.queue(Print(glyph))?;
    }
    Ok(())
}

// ── Primitives ────────────────────────────────────────────────────────────────

/// Blit `sprite` with its top-left at `rect`'s top-left, clipped to the
/// terminal.
fn draw_sprite<W: Write>(
    out: &mut W,
    sprite: &Sprite,
    rect: &Rect,
    color: Color,
    view: &Viewport,
) -> std::io::Result<()> {
    let (col, row) = view.cell(rect.x, rect.y);
    out.queue(style::SetForegroundColor(color))?;
    for (i, line) in sprite.lines.iter().enumerate() {
        let r = row + i as i32;
        if r < 0 || r >= view.rows as i32 {
            continue;
        }
        let skip = (-col).max(0) as usize;
        let start = col.max(0);
        let room = (view.cols as i32 - start).max(0) as usize;
        let visible: String = line.chars().skip(skip).take(room).collect();
        if visible.is_empty() {
            continue;
        }
        out.queue(cursor::MoveTo(start as u16, r as u16))?;
        out.queue(Print(visible))?;
    }
    Ok(())
}

fn draw_button<W: Write>(out: &mut W, button: &Button, view: &Viewport) -> std::io::Result<()> {
    let (col, row) = view.cell(button.rect.x, button.rect.y);
    let cols = ((button.rect.w * view.scale_x).round() as i32).max(1);
    let rows = ((button.rect.h * view.scale_y).round() as i32).max(1);
    let fill = if button.hovered { C_BUTTON_HOVER } else { C_BUTTON };

    out.queue(style::SetBackgroundColor(fill))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    let label_row = row + rows / 2;
    for r in row..row + rows {
        if r < 0 || r >= view.rows as i32 || col < 0 {
            continue;
        }
        let mut text = " ".repeat(cols as usize);
        if r == label_row {
            let len = button.label.chars().count() as i32;
            let pad = ((cols - len) / 2).max(0) as usize;
            text = format!("{:pad$}{:<width$}", "", button.label, pad = pad, width = cols as usize - pad);
        }
        let text: String = text.chars().take((view.cols as i32 - col).max(0) as usize).collect();
        out.queue(cursor::MoveTo(col as u16, r as u16))?;
        out.queue(Print(text))?;
    }
    out.queue(style::ResetColor)?;
    Ok(())
}

fn draw_centered<W: Write>(
    out: &mut W,
    view: &Viewport,
    y: f32,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let (_, row) = view.cell(0.0, y);
    if !view.visible(0, row) {
        return Ok(());
    }
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row as u16))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

/// Upside-down copy of a sprite, used for shots travelling downward.
fn flip_vertical(sprite: &Sprite) -> Sprite {
    let lines = sprite
        .lines
        .iter()
        .rev()
        .map(|line| {
            line.chars()
                .map(|c| match c {
                    '^' => 'v',
                    'v' => '^',
                    '▲' => '▼',
                    '▼' => '▲',
                    '/' => '\\',
                    '\\' => '/',
                    other => other,
                })
                .collect()
        })
        .collect();
    Sprite { lines, ..sprite.clone() }
}
