//! All game entity types: plain data plus the rectangle geometry they share.
//! Behaviour lives in `compute`.

use crate::config::GameConfig;

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in simulation pixels.  `(x, y)` is the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// A `w`×`h` rectangle whose centre is `(cx, cy)`.
    pub fn centered_at(cx: f32, cy: f32, w: f32, h: f32) -> Self {
        Self { x: cx - w / 2.0, y: cy - h / 2.0, w, h }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True iff the rectangles share positive area.  Touching edges do not
    /// count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectileOwner {
    Player,
    Enemy,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub rect: Rect,
    pub owner: ProjectileOwner,
    /// Vertical speed magnitude; direction comes from `owner`.
    pub speed: f32,
    /// Lateral speed, non-zero only for angled enemy shots.
    pub speed_x: f32,
}

// ── Player & enemy ────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Player {
    pub rect: Rect,
    pub health: u32,
    pub max_health: u32,
    pub fire_cadence_ms: u64,
    pub last_shot_ms: u64,
    pub bullets: Vec<Projectile>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Straight,
    Oscillating,
    Zigzag,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Straight, EnemyKind::Oscillating, EnemyKind::Zigzag];

    /// Points awarded when the player shoots one down.
    pub fn score(self) -> u32 {
        match self {
            EnemyKind::Straight => 25,
            EnemyKind::Oscillating => 75,
            EnemyKind::Zigzag => 50,
        }
    }

    pub fn size(self) -> (f32, f32) {
        match self {
            EnemyKind::Straight | EnemyKind::Oscillating => (110.0, 90.0),
            EnemyKind::Zigzag => (145.0, 95.0),
        }
    }
}

/// Per-kind movement state, stepped once per frame.
#[derive(Clone, Debug, PartialEq)]
pub enum Movement {
    Straight,
    /// `direction` flips between 1 and -1 every few steps.  Nothing reads it
    /// for positioning.
    Oscillating { steps: u32, direction: i8 },
    /// Triangular sweep anchored at `spawn_x`.
    Zigzag { steps: u32, spawn_x: f32 },
}

impl Movement {
    pub fn kind(&self) -> EnemyKind {
        match self {
            Movement::Straight => EnemyKind::Straight,
            Movement::Oscillating { .. } => EnemyKind::Oscillating,
            Movement::Zigzag { .. } => EnemyKind::Zigzag,
        }
    }
}

/// Stable per-session enemy handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u64);

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub rect: Rect,
    pub health: u32,
    pub max_health: u32,
    pub speed: f32,
    pub movement: Movement,
    pub fire_cadence_ms: u64,
    pub last_shot_ms: u64,
    pub bullets: Vec<Projectile>,
}

impl Enemy {
    pub fn kind(&self) -> EnemyKind {
        self.movement.kind()
    }
}

// ── Session state ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// The player's health reached zero during the last tick.
    Lost,
}

/// Everything one play session owns.  Cloneable so `compute::tick` can hand
/// back a new copy without mutating its input.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    /// Live enemies in insertion order.
    pub enemies: Vec<Enemy>,
    pub score: u32,
    pub difficulty_multiplier: f32,
    /// Number of score steps already turned into difficulty increases.
    pub difficulty_threshold: u32,
    pub last_spawn_ms: u64,
    pub next_enemy_id: u64,
    pub status: GameStatus,
    pub frame: u64,
    pub screen: ScreenSize,
    pub config: GameConfig,
}
