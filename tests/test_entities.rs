use shooter_jets::compute::init_state;
use shooter_jets::config::GameConfig;
use shooter_jets::entities::*;

#[test]
fn overlap_needs_positive_area() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.overlaps(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.overlaps(&Rect::new(2.0, 2.0, 1.0, 1.0)));

    // Shared edges and corners are not overlaps
    assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    assert!(!a.overlaps(&Rect::new(10.0, 10.0, 5.0, 5.0)));
    assert!(!a.overlaps(&Rect::new(30.0, 30.0, 5.0, 5.0)));
}

#[test]
fn overlap_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let b = Rect::new(9.5, -3.0, 4.0, 4.0);
    assert_eq!(a.overlaps(&b), b.overlaps(&a));
}

#[test]
fn centred_rect_helpers() {
    let r = Rect::centered_at(100.0, 50.0, 20.0, 10.0);
    assert_eq!(r, Rect::new(90.0, 45.0, 20.0, 10.0));
    assert_eq!(r.center_x(), 100.0);
    assert_eq!(r.center_y(), 50.0);
    assert_eq!(r.top(), 45.0);
    assert_eq!(r.bottom(), 55.0);
    assert!(r.contains(90.0, 45.0));
    assert!(!r.contains(110.0, 50.0));
}

#[test]
fn enemy_kind_tables() {
    assert_eq!(EnemyKind::Straight.score(), 25);
    assert_eq!(EnemyKind::Oscillating.score(), 75);
    assert_eq!(EnemyKind::Zigzag.score(), 50);
    assert_eq!(EnemyKind::Zigzag.size(), (145.0, 95.0));
    assert_eq!(EnemyKind::ALL.len(), 3);
}

#[test]
fn movement_knows_its_kind() {
    assert_eq!(Movement::Straight.kind(), EnemyKind::Straight);
    assert_eq!(
        Movement::Oscillating { steps: 3, direction: -1 }.kind(),
        EnemyKind::Oscillating
    );
    assert_eq!(
        Movement::Zigzag { steps: 0, spawn_x: 4.0 }.kind(),
        EnemyKind::Zigzag
    );
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(
        GameConfig::default(),
        ScreenSize { width: 500.0, height: 700.0 },
        0,
    );
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.health = 1;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        id: EnemyId(7),
        rect: Rect::new(0.0, 0.0, 110.0, 90.0),
        health: 100,
        max_health: 100,
        speed: 2.0,
        movement: Movement::Straight,
        fire_cadence_ms: 900,
        last_shot_ms: 0,
        bullets: Vec::new(),
    });

    assert_eq!(original.player.health, 100);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
