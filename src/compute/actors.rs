//! Player and enemy behaviour: pointer-follow, movement patterns, firing
//! policies and damage.

use rand::Rng;

use crate::config::GameConfig;
use crate::entities::{
    Enemy, EnemyId, EnemyKind, Movement, Player, Projectile, ProjectileOwner, Rect, ScreenSize,
};

/// Capabilities shared by every health-bearing entity.
pub trait Actor {
    fn rect(&self) -> &Rect;
    fn health(&self) -> u32;
    fn health_mut(&mut self) -> &mut u32;

    /// Subtract `amount`, stopping at zero.
    fn apply_damage(&mut self, amount: u32) {
        let health = self.health_mut();
        *health = health.saturating_sub(amount);
    }

    fn is_dead(&self) -> bool {
        self.health() == 0
    }
}

/// True once strictly more than `cadence_ms` has passed since `last_ms`.
fn cadence_elapsed(now_ms: u64, last_ms: u64, cadence_ms: u64) -> bool {
    now_ms.saturating_sub(last_ms) > cadence_ms
}

// ── Player ───────────────────────────────────────────────────────────────────

impl Player {
    /// Full health, centred on screen, shot timer starting at `now_ms`.
    pub fn new(config: &GameConfig, screen: &ScreenSize, now_ms: u64) -> Self {
        let (w, h) = config.player_size;
        Player {
            rect: Rect::centered_at(screen.width / 2.0, screen.height / 2.0, w, h),
            health: config.player_max_health,
            max_health: config.player_max_health,
            fire_cadence_ms: config.player_fire_cadence_ms,
            last_shot_ms: now_ms,
            bullets: Vec::new(),
        }
    }

    /// Snap to the pointer.  The position is set, not integrated.
    pub fn update_position(&mut self, pointer: (f32, f32), offset: (f32, f32)) {
        self.rect.x = pointer.0 - offset.0;
        self.rect.y = pointer.1 - offset.1;
    }

    /// Fire one upward shot from the top-centre if the cadence allows it.
    pub fn try_fire(&mut self, now_ms: u64, config: &GameConfig) -> bool {
        if !cadence_elapsed(now_ms, self.last_shot_ms, self.fire_cadence_ms) {
            return false;
        }
        self.bullets.push(Projectile::new(
            self.rect.center_x(),
            self.rect.top(),
            ProjectileOwner::Player,
            config,
        ));
        self.last_shot_ms = now_ms;
        true
    }
}

impl Actor for Player {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut u32 {
        &mut self.health
    }
}

// ── Enemy ────────────────────────────────────────────────────────────────────

impl Enemy {
    /// Random x across the screen, random y in the band above it, speed
    /// scaled by the current difficulty.
    pub fn spawn(
        id: EnemyId,
        kind: EnemyKind,
        difficulty_multiplier: f32,
        config: &GameConfig,
        screen: &ScreenSize,
        now_ms: u64,
        rng: &mut impl Rng,
    ) -> Self {
        let (w, h) = kind.size();
        let max_x = (screen.width - w).max(0.0) as i32;
        let x = rng.gen_range(0..=max_x) as f32;
        let y = rng.gen_range(config.spawn_band.0..=config.spawn_band.1) as f32;
        let base_speed = rng.gen_range(config.base_speed.0..=config.base_speed.1) as f32;

        let movement = match kind {
            EnemyKind::Straight => Movement::Straight,
            EnemyKind::Oscillating => Movement::Oscillating { steps: 0, direction: 1 },
            EnemyKind::Zigzag => Movement::Zigzag { steps: 0, spawn_x: x },
        };

        Enemy {
            id,
            rect: Rect::new(x, y, w, h),
            health: config.enemy_max_health,
            max_health: config.enemy_max_health,
            speed: base_speed * difficulty_multiplier,
            movement,
            fire_cadence_ms: config.enemy_fire_cadence_ms,
            last_shot_ms: now_ms,
            bullets: Vec::new(),
        }
    }

    /// Advance the movement pattern by one frame.
    pub fn step(&mut self, config: &GameConfig) {
        self.rect.y += self.speed;
        match &mut self.movement {
            Movement::Straight => {}
            Movement::Oscillating { steps, direction } => {
                *steps += 1;
                if *steps % config.oscillation_flip_steps.max(1) == 0 {
                    *direction = -*direction;
                }
            }
            Movement::Zigzag { steps, spawn_x } => {
                *steps += 1;
                let period = config.zigzag_period_steps.max(1);
                let progress = (*steps % period) as f32 / period as f32;
                let offset = if progress < 0.5 { progress } else { 1.0 - progress };
                self.rect.x = *spawn_x + offset * config.zigzag_amplitude;
            }
        }
    }

    /// Fire this kind's pattern from the bottom-centre if the cadence allows
    /// it.  Returns the number of projectiles added.
    pub fn try_fire(&mut self, now_ms: u64, config: &GameConfig) -> usize {
        if !cadence_elapsed(now_ms, self.last_shot_ms, self.fire_cadence_ms) {
            return 0;
        }
        let muzzle = Projectile::new(
            self.rect.center_x(),
            self.rect.bottom(),
            ProjectileOwner::Enemy,
            config,
        );
        let before = self.bullets.len();
        match self.kind() {
            EnemyKind::Straight | EnemyKind::Oscillating => self.bullets.push(muzzle),
            EnemyKind::Zigzag => {
                let (left_dx, right_dx) = config.spread_dx;
                let slowdown = config.angled_shot_slowdown;
                self.bullets.push(muzzle.clone());
                self.bullets.push(muzzle.clone().angled(left_dx, slowdown));
                self.bullets.push(muzzle.angled(right_dx, slowdown));
            }
        }
        self.last_shot_ms = now_ms;
        self.bullets.len() - before
    }

    /// Past the bottom edge.
    pub fn is_off_screen(&self, screen: &ScreenSize) -> bool {
        self.rect.y > screen.height
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        self.rect.overlaps(&player.rect)
    }
}

impl Actor for Enemy {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn health(&self) -> u32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut u32 {
        &mut self.health
    }
}
