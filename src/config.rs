//! Tuning constants and the `GameConfig` bundle that carries them.
//!
//! All distances are in simulation pixels, all speeds in pixels per frame,
//! all cadences in milliseconds.

// ── Screen & timing ──────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 500.0;
pub const SCREEN_HEIGHT: f32 = 700.0;
pub const FRAMES_PER_SECOND: u32 = 60;

// ── Player ───────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: (f32, f32) = (125.0, 115.0);
pub const PLAYER_MAX_HEALTH: u32 = 100;
pub const PLAYER_FIRE_CADENCE_MS: u64 = 450;

/// Distance from the pointer to the player's top-left corner.  The sprite's
/// visual centre sits roughly here, so the craft follows the pointer.
pub const PLAYER_POINTER_OFFSET: (f32, f32) = (50.0, 50.0);

// ── Enemies ──────────────────────────────────────────────────────────────────

pub const ENEMY_MAX_HEALTH: u32 = 100;
pub const ENEMY_FIRE_CADENCE_MS: u64 = 900;
pub const ENEMY_SPAWN_BAND: (i32, i32) = (-100, -50);
pub const ENEMY_BASE_SPEED: (u32, u32) = (2, 5);
pub const SPAWN_DELAY_MS: u64 = 1000;

pub const OSCILLATION_FLIP_STEPS: u32 = 30;
pub const ZIGZAG_PERIOD_STEPS: u32 = 60;
pub const ZIGZAG_AMPLITUDE: f32 = 100.0;

// ── Projectiles ──────────────────────────────────────────────────────────────

pub const PROJECTILE_SIZE: (f32, f32) = (25.0, 50.0);
pub const PROJECTILE_SPEED: f32 = 8.0;
pub const ANGLED_SHOT_SLOWDOWN: f32 = 0.9;
pub const SPREAD_LEFT_DX: f32 = -1.5;
pub const SPREAD_RIGHT_DX: f32 = 1.0;

// ── Damage & difficulty ──────────────────────────────────────────────────────

pub const COLLISION_DAMAGE: u32 = 50;
pub const ENEMY_SHOT_DAMAGE: u32 = 25;
pub const PLAYER_SHOT_DAMAGE: u32 = 50;
pub const DIFFICULTY_SCORE_STEP: u32 = 300;
pub const DIFFICULTY_INCREMENT: f32 = 0.2;

/// Every gameplay knob in one place.  A `GameState` owns a copy, so tests
/// can change a single value without touching the constants above.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    pub player_size: (f32, f32),
    pub player_max_health: u32,
    pub player_fire_cadence_ms: u64,
    pub pointer_offset: (f32, f32),

    pub enemy_max_health: u32,
    pub enemy_fire_cadence_ms: u64,
    pub spawn_band: (i32, i32),
    pub base_speed: (u32, u32),
    pub spawn_delay_ms: u64,
    pub oscillation_flip_steps: u32,
    pub zigzag_period_steps: u32,
    pub zigzag_amplitude: f32,

    pub projectile_size: (f32, f32),
    pub projectile_speed: f32,
    pub angled_shot_slowdown: f32,
    pub spread_dx: (f32, f32),

    pub collision_damage: u32,
    pub enemy_shot_damage: u32,
    pub player_shot_damage: u32,
    pub difficulty_score_step: u32,
    pub difficulty_increment: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_size: PLAYER_SIZE,
            player_max_health: PLAYER_MAX_HEALTH,
            player_fire_cadence_ms: PLAYER_FIRE_CADENCE_MS,
            pointer_offset: PLAYER_POINTER_OFFSET,

            enemy_max_health: ENEMY_MAX_HEALTH,
            enemy_fire_cadence_ms: ENEMY_FIRE_CADENCE_MS,
            spawn_band: ENEMY_SPAWN_BAND,
            base_speed: ENEMY_BASE_SPEED,
            spawn_delay_ms: SPAWN_DELAY_MS,
            oscillation_flip_steps: OSCILLATION_FLIP_STEPS,
            zigzag_period_steps: ZIGZAG_PERIOD_STEPS,
            zigzag_amplitude: ZIGZAG_AMPLITUDE,

            projectile_size: PROJECTILE_SIZE,
            projectile_speed: PROJECTILE_SPEED,
            angled_shot_slowdown: ANGLED_SHOT_SLOWDOWN,
            spread_dx: (SPREAD_LEFT_DX, SPREAD_RIGHT_DX),

            collision_damage: COLLISION_DAMAGE,
            enemy_shot_damage: ENEMY_SHOT_DAMAGE,
            player_shot_damage: PLAYER_SHOT_DAMAGE,
            difficulty_score_step: DIFFICULTY_SCORE_STEP,
            difficulty_increment: DIFFICULTY_INCREMENT,
        }
    }
}
