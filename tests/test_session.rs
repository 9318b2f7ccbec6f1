use shooter_jets::compute::FrameContext;
use shooter_jets::config::GameConfig;
use shooter_jets::entities::*;
use shooter_jets::session::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

fn size() -> ScreenSize {
    ScreenSize { width: 500.0, height: 700.0 }
}

fn new_session() -> Session {
    Session::new(GameConfig::default(), size())
}

fn step(session: &mut Session, now_ms: u64) {
    let mut rng = StdRng::seed_from_u64(7);
    let mut ctx = FrameContext::new(now_ms, &mut rng);
    session.update(&mut ctx);
}

fn centre(rect: &Rect) -> (f32, f32) {
    (rect.center_x(), rect.center_y())
}

#[test]
fn starts_on_menu_without_a_game() {
    let s = new_session();
    assert_eq!(s.screen(), Screen::Menu);
    assert!(s.game().is_none());
}

#[test]
fn start_begins_a_fresh_game() {
    let mut s = new_session();
    assert_eq!(s.handle(Command::Start, 500), Screen::Playing);
    let game = s.game().expect("game after start");
    assert_eq!(game.score, 0);
    assert_eq!(game.last_spawn_ms, 500);
}

#[test]
fn quit_terminates_from_every_screen() {
    let mut s = new_session();
    assert_eq!(s.handle(Command::Quit, 0), Screen::Terminated);
    assert!(s.is_terminated());

    let mut s = new_session();
    s.handle(Command::Start, 0);
    assert_eq!(s.handle(Command::Quit, 10), Screen::Terminated);

    // Terminated is final
    assert_eq!(s.handle(Command::Start, 20), Screen::Terminated);
}

#[test]
fn commands_that_do_not_apply_are_ignored() {
    let mut s = new_session();
    assert_eq!(s.handle(Command::PlayAgain, 0), Screen::Menu);
    s.handle(Command::Start, 0);
    assert_eq!(s.handle(Command::Start, 0), Screen::Playing);
    assert_eq!(s.handle(Command::PlayAgain, 0), Screen::Playing);
}

#[test]
fn menu_buttons_are_clickable() {
    let mut s = new_session();
    let buttons = s.buttons();
    assert_eq!(buttons.len(), 2);
    assert_eq!(buttons[0].rect, Rect::new(150.0, 325.0, 200.0, 50.0));
    assert_eq!(buttons[1].rect, Rect::new(150.0, 400.0, 200.0, 50.0));

    assert_eq!(s.click((10.0, 10.0), 0), None);
    assert_eq!(s.screen(), Screen::Menu);

    assert_eq!(s.click(centre(&buttons[0].rect), 0), Some(Command::Start));
    assert_eq!(s.screen(), Screen::Playing);
    assert!(s.buttons().is_empty());
}

#[test]
fn menu_quit_button() {
    let mut s = new_session();
    let quit = s.buttons()[1].rect;
    assert_eq!(s.click(centre(&quit), 0), Some(Command::Quit));
    assert!(s.is_terminated());
}

#[test]
fn hover_follows_pointer() {
    let mut s = new_session();
    s.set_pointer((10.0, 10.0));
    assert!(s.buttons().iter().all(|b| !b.hovered));
    s.set_pointer((250.0, 420.0));
    let buttons = s.buttons();
    assert!(!buttons[0].hovered);
    assert!(buttons[1].hovered);
}

#[test]
fn updates_only_run_while_playing() {
    let mut s = new_session();
    step(&mut s, 100);
    assert!(s.game().is_none());

    s.handle(Command::Start, 0);
    step(&mut s, 100);
    assert_eq!(s.game().map(|g| g.frame), Some(1));
}

#[test]
fn lethal_frame_is_rendered_before_game_over_then_play_again_resets() {
    let mut s = new_session();
    s.handle(Command::Start, 0);
    s.set_pointer((250.0, 350.0));

    {
        let game = s.game_mut().expect("playing");
        game.player.health = 50;
        game.score = 900;
        game.difficulty_multiplier = 1.6;
        game.difficulty_threshold = 3;
        // Parked right on top of where the pointer puts the player.
        game.enemies.push(Enemy {
            id: EnemyId(0),
            rect: Rect::new(210.0, 310.0, 110.0, 90.0),
            health: 100,
            max_health: 100,
            speed: 0.0,
            movement: Movement::Straight,
            fire_cadence_ms: 900,
            last_shot_ms: 0,
            bullets: Vec::new(),
        });
    }

    step(&mut s, 100);
    let game = s.game().expect("game");
    assert_eq!(game.player.health, 0);
    assert_eq!(game.status, GameStatus::Lost);
    // Still the playing screen until the frame has been drawn.
    assert_eq!(s.screen(), Screen::Playing);

    assert_eq!(s.finish_frame(), Screen::GameOver);
    assert_eq!(s.game().map(|g| g.score), Some(900));
    assert_eq!(s.buttons()[0].label, "PLAY AGAIN");

    assert_eq!(s.handle(Command::PlayAgain, 2000), Screen::Playing);
    let game = s.game().expect("new game");
    assert_eq!(game.score, 0);
    assert_eq!(game.difficulty_multiplier, 1.0);
    assert_eq!(game.player.health, 100);
    assert!(game.enemies.is_empty());
}

#[test]
fn game_over_buttons() {
    let mut s = new_session();
    s.handle(Command::Start, 0);
    s.game_mut().expect("playing").status = GameStatus::Lost;
    s.finish_frame();

    let buttons = s.buttons();
    assert_eq!(buttons[0].rect, Rect::new(150.0, 510.0, 200.0, 50.0));
    assert_eq!(buttons[1].rect, Rect::new(150.0, 580.0, 200.0, 50.0));
    assert_eq!(s.click(centre(&buttons[1].rect), 0), Some(Command::Quit));
    assert!(s.is_terminated());
}

#[test]
fn finish_frame_without_loss_keeps_playing() {
    let mut s = new_session();
    s.handle(Command::Start, 0);
    step(&mut s, 100);
    assert_eq!(s.finish_frame(), Screen::Playing);
}
