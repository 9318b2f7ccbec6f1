mod display;

use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal, ExecutableCommand,
};
use rand::thread_rng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use shooter_jets::clock::{FrameGovernor, MonotonicClock};
use shooter_jets::compute::FrameContext;
use shooter_jets::config::{GameConfig, FRAMES_PER_SECOND, SCREEN_HEIGHT, SCREEN_WIDTH};
use shooter_jets::entities::ScreenSize;
use shooter_jets::session::{Command, Session};
use shooter_jets::sprites::SpriteSet;

use display::Viewport;

const ASSET_DIR: &str = "assets";

const SCREEN: ScreenSize = ScreenSize {
    width: SCREEN_WIDTH,
    height: SCREEN_HEIGHT,
};

/// Keyboard shortcuts for the on-screen buttons.
fn key_command(code: KeyCode, modifiers: KeyModifiers) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(Command::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::PlayAgain),
        _ => None,
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

/// Input → simulate → render → wait, until the session terminates.
///
/// Pending input is drained at the top of each frame; a quit seen there ends
/// the loop before the frame is simulated.
fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> Result<()> {
    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let mut view = Viewport::new(cols, rows, SCREEN);
    let mut sprites = SpriteSet::load(Path::new(ASSET_DIR), view.scale());

    let mut session = Session::new(GameConfig::default(), SCREEN);
    let clock = MonotonicClock::new();
    let mut governor = FrameGovernor::new(FRAMES_PER_SECOND);
    let mut rng = thread_rng();

    loop {
        let now_ms = clock.now_ms();

        while let Ok(event) = rx.try_recv() {
            match event {
                Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                    let at = view.to_pixel(column, row);
                    match kind {
                        MouseEventKind::Moved | MouseEventKind::Drag(_) => session.set_pointer(at),
                        MouseEventKind::Down(MouseButton::Left) => {
                            session.set_pointer(at);
                            session.click(at, now_ms);
                        }
                        _ => {}
                    }
                }
                Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) => {
                    if let Some(command) = key_command(code, modifiers) {
                        session.handle(command, now_ms);
                    }
                }
                Event::Resize(cols, rows) => {
                    view = Viewport::new(cols, rows, SCREEN);
                    sprites = SpriteSet::load(Path::new(ASSET_DIR), view.scale());
                }
                _ => {}
            }
            if session.is_terminated() {
                return Ok(());
            }
        }

        let mut ctx = FrameContext::new(now_ms, &mut rng);
        session.update(&mut ctx);
        display::render(out, &session, &sprites, &view).context("drawing frame")?;
        session.finish_frame();

        governor.wait();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    let setup = terminal::enable_raw_mode()
        .and_then(|_| out.execute(terminal::EnterAlternateScreen).map(|_| ()))
        .and_then(|_| out.execute(cursor::Hide).map(|_| ()))
        .and_then(|_| out.execute(EnableMouseCapture).map(|_| ()))
        .context("setting up the terminal");

    let result = match setup {
        Ok(()) => {
            // Dedicate a thread exclusively to blocking event reads, sending them
            // through a channel so the frame loop never blocks on I/O.
            let (tx, rx) = mpsc::channel::<Event>();
            thread::spawn(move || {
                while let Ok(ev) = event::read() {
                    if tx.send(ev).is_err() {
                        break; // receiver dropped → program exiting
                    }
                }
            });
            run(&mut out, &rx)
        }
        Err(err) => Err(err),
    };

    // Always restore the terminal
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    match &result {
        Ok(()) => info!("quit"),
        Err(err) => error!("shooter jets stopped: {err:#}"),
    }
    result
}
