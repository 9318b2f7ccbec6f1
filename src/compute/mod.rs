//! Pure game-logic functions.
//!
//! `init_state` builds a session and `tick` advances it by one frame.  `tick`
//! takes an immutable reference to the current `GameState` and returns a
//! brand-new one; time and randomness arrive through `FrameContext` so tests
//! can pin both.

pub mod actors;
pub mod difficulty;
pub mod projectile;
pub mod spawner;

use rand::Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, Player, ScreenSize};

pub use actors::Actor;

/// Per-frame collaborators: the clock reading and the RNG.
pub struct FrameContext<'a, R: Rng> {
    pub now_ms: u64,
    pub rng: &'a mut R,
}

impl<'a, R: Rng> FrameContext<'a, R> {
    pub fn new(now_ms: u64, rng: &'a mut R) -> Self {
        Self { now_ms, rng }
    }
}

/// Input sampled at the top of the frame, in simulation pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    pub pointer: (f32, f32),
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Fresh session: full-health player, no enemies, score 0, multiplier 1.0.
/// Both the spawn and fire timers start at `now_ms`.
pub fn init_state(config: GameConfig, screen: ScreenSize, now_ms: u64) -> GameState {
    GameState {
        player: Player::new(&config, &screen, now_ms),
        enemies: Vec::new(),
        score: 0,
        difficulty_multiplier: 1.0,
        difficulty_threshold: 0,
        last_spawn_ms: now_ms,
        next_enemy_id: 0,
        status: GameStatus::Playing,
        frame: 0,
        screen,
        config,
    }
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Run one resolver pass.
///
/// Order: difficulty ramp, spawn, player move + fire, enemy pass, player-shot
/// pass, terminal check.  Nothing is removed from a collection while that
/// collection is being walked: each pass records indices and compacts
/// afterwards.  A state that is already `Lost` is returned unchanged.
pub fn tick<R: Rng>(
    state: &GameState,
    input: FrameInput,
    ctx: &mut FrameContext<'_, R>,
) -> GameState {
    let mut next = state.clone();
    if next.status != GameStatus::Playing {
        return next;
    }
    next.frame += 1;

    // ── 1. Difficulty ramp ───────────────────────────────────────────────────
    difficulty::ramp(&mut next);

    // ── 2. Spawn ─────────────────────────────────────────────────────────────
    spawner::maybe_spawn(&mut next, ctx.now_ms, &mut *ctx.rng);

    // ── 3. Player ────────────────────────────────────────────────────────────
    let offset = next.config.pointer_offset;
    next.player.update_position(input.pointer, offset);
    let config = next.config;
    next.player.try_fire(ctx.now_ms, &config);

    // ── 4. Enemies, their shots, kamikaze hits ───────────────────────────────
    resolve_enemies(&mut next, ctx.now_ms);

    // ── 5. Player shots ──────────────────────────────────────────────────────
    resolve_player_shots(&mut next);

    // ── 6. Terminal check ────────────────────────────────────────────────────
    if next.player.is_dead() {
        next.status = GameStatus::Lost;
        info!(score = next.score, frame = next.frame, "player destroyed");
    }

    next
}

fn resolve_enemies(state: &mut GameState, now_ms: u64) {
    let GameState { player, enemies, screen, config, .. } = state;
    let mut removed: Vec<usize> = Vec::new();

    for (ei, enemy) in enemies.iter_mut().enumerate() {
        enemy.step(config);
        enemy.try_fire(now_ms, config);

        let mut gone = false;
        if enemy.collides_with(player) {
            player.apply_damage(config.collision_damage);
            gone = true;
            debug!(id = enemy.id.0, health = player.health, "enemy rammed player");
        }

        let mut spent: Vec<usize> = Vec::new();
        for (bi, bullet) in enemy.bullets.iter_mut().enumerate() {
            bullet.advance();
            if bullet.overlaps(&player.rect) {
                player.apply_damage(config.enemy_shot_damage);
                spent.push(bi);
            } else if bullet.is_out_of_bounds(screen) {
                spent.push(bi);
            }
        }
        compact(&mut enemy.bullets, &spent);

        if enemy.is_off_screen(screen) {
            gone = true;
        }
        if gone {
            removed.push(ei);
        }
    }

    compact(enemies, &removed);
}

fn resolve_player_shots(state: &mut GameState) {
    let GameState { player, enemies, score, screen, config, .. } = state;
    let mut spent: Vec<usize> = Vec::new();
    let mut killed: Vec<usize> = Vec::new();

    for (bi, bullet) in player.bullets.iter_mut().enumerate() {
        bullet.advance();

        // First live enemy in insertion order absorbs the shot.
        let hit = enemies
            .iter()
            .enumerate()
            .find(|(ei, enemy)| !killed.contains(ei) && bullet.overlaps(&enemy.rect))
            .map(|(ei, _)| ei);

        match hit {
            Some(ei) => {
                let enemy = &mut enemies[ei];
                enemy.apply_damage(config.player_shot_damage);
                spent.push(bi);
                if enemy.is_dead() {
                    killed.push(ei);
                    let points = enemy.kind().score();
                    *score += points;
                    debug!(id = enemy.id.0, kind = ?enemy.kind(), points, "enemy destroyed");
                }
            }
            None if bullet.is_out_of_bounds(screen) => spent.push(bi),
            None => {}
        }
    }

    compact(&mut player.bullets, &spent);
    compact(enemies, &killed);
}

/// Drop the elements at `removed` (indices into the pre-pass order).
fn compact<T>(items: &mut Vec<T>, removed: &[usize]) {
    if removed.is_empty() {
        return;
    }
    let mut index = 0;
    items.retain(|_| {
        let keep = !removed.contains(&index);
        index += 1;
        keep
    });
}
