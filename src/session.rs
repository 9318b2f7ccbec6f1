//! Session controller: which screen is showing, and the play session behind it.
//!
//! ```text
//! Menu ──Start──▶ Playing ──player dead──▶ GameOver ──PlayAgain──▶ Playing
//!   │                │                        │
//!   └──Quit──────────┴──Quit─────────────────┴──Quit──▶ Terminated
//! ```
//!
//! Rendering happens between `update` and `finish_frame`, so the frame that
//! kills the player is still drawn as a `Playing` frame.

use rand::Rng;
use tracing::info;

use crate::compute::{init_state, tick, FrameContext, FrameInput};
use crate::config::GameConfig;
use crate::entities::{GameState, GameStatus, Rect, ScreenSize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
    Terminated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    PlayAgain,
    Quit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    pub rect: Rect,
    pub label: &'static str,
    pub command: Command,
    pub hovered: bool,
}

impl Button {
    fn new(rect: Rect, label: &'static str, command: Command) -> Self {
        Self { rect, label, command, hovered: false }
    }
}

const BUTTON_W: f32 = 200.0;
const BUTTON_H: f32 = 50.0;

pub fn menu_buttons(size: &ScreenSize) -> Vec<Button> {
    let x = size.width / 2.0 - BUTTON_W / 2.0;
    let cy = size.height / 2.0;
    vec![
        Button::new(Rect::new(x, cy - 25.0, BUTTON_W, BUTTON_H), "START", Command::Start),
        Button::new(Rect::new(x, cy + 50.0, BUTTON_W, BUTTON_H), "QUIT", Command::Quit),
    ]
}

pub fn end_buttons(size: &ScreenSize) -> Vec<Button> {
    let x = size.width / 2.0 - BUTTON_W / 2.0;
    vec![
        Button::new(
            Rect::new(x, size.height - 190.0, BUTTON_W, BUTTON_H),
            "PLAY AGAIN",
            Command::PlayAgain,
        ),
        Button::new(Rect::new(x, size.height - 120.0, BUTTON_W, BUTTON_H), "QUIT", Command::Quit),
    ]
}

#[derive(Debug)]
pub struct Session {
    screen: Screen,
    game: Option<GameState>,
    config: GameConfig,
    size: ScreenSize,
    pointer: (f32, f32),
}

impl Session {
    pub fn new(config: GameConfig, size: ScreenSize) -> Self {
        Self {
            screen: Screen::Menu,
            game: None,
            config,
            size,
            pointer: (size.width / 2.0, size.height / 2.0),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// The current or most recent play session.
    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn game_mut(&mut self) -> Option<&mut GameState> {
        self.game.as_mut()
    }

    pub fn size(&self) -> ScreenSize {
        self.size
    }

    pub fn pointer(&self) -> (f32, f32) {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: (f32, f32)) {
        self.pointer = pointer;
    }

    pub fn is_terminated(&self) -> bool {
        self.screen == Screen::Terminated
    }

    /// Buttons on the current screen, with hover state from the pointer.
    pub fn buttons(&self) -> Vec<Button> {
        let mut buttons = match self.screen {
            Screen::Menu => menu_buttons(&self.size),
            Screen::GameOver => end_buttons(&self.size),
            Screen::Playing | Screen::Terminated => Vec::new(),
        };
        for button in &mut buttons {
            button.hovered = button.rect.contains(self.pointer.0, self.pointer.1);
        }
        buttons
    }

    /// Resolve a click against the current screen's buttons and apply it.
    pub fn click(&mut self, at: (f32, f32), now_ms: u64) -> Option<Command> {
        let command = self
            .buttons()
            .into_iter()
            .find(|b| b.rect.contains(at.0, at.1))
            .map(|b| b.command)?;
        self.handle(command, now_ms);
        Some(command)
    }

    /// Apply a command.  Commands that mean nothing on the current screen
    /// are ignored.
    pub fn handle(&mut self, command: Command, now_ms: u64) -> Screen {
        let next = match (self.screen, command) {
            (Screen::Terminated, _) => Screen::Terminated,
            (_, Command::Quit) => Screen::Terminated,
            (Screen::Menu, Command::Start) | (Screen::GameOver, Command::PlayAgain) => {
                self.game = Some(init_state(self.config, self.size, now_ms));
                Screen::Playing
            }
            (screen, _) => screen,
        };
        if next != self.screen {
            info!(from = ?self.screen, to = ?next, "screen change");
            self.screen = next;
        }
        self.screen
    }

    /// Run one simulation frame if a game is in progress.
    pub fn update<R: Rng>(&mut self, ctx: &mut FrameContext<'_, R>) {
        if self.screen != Screen::Playing {
            return;
        }
        let input = FrameInput { pointer: self.pointer };
        if let Some(game) = self.game.as_mut() {
            *game = tick(game, input, ctx);
        }
    }

    /// Called after the frame has been drawn: a lost game moves to the end
    /// screen now.
    pub fn finish_frame(&mut self) -> Screen {
        let lost = self
            .game
            .as_ref()
            .map_or(false, |g| g.status == GameStatus::Lost);
        if self.screen == Screen::Playing && lost {
            if let Some(game) = &self.game {
                info!(score = game.score, "game over");
            }
            self.screen = Screen::GameOver;
        }
        self.screen
    }
}
