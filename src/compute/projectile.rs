//! Projectile motion and bounds.

use crate::config::GameConfig;
use crate::entities::{Projectile, ProjectileOwner, Rect, ScreenSize};

impl Projectile {
    /// A projectile whose centre sits on `(cx, cy)`, e.g. the muzzle point.
    pub fn new(cx: f32, cy: f32, owner: ProjectileOwner, config: &GameConfig) -> Self {
        let (w, h) = config.projectile_size;
        Projectile {
            rect: Rect::centered_at(cx, cy, w, h),
            owner,
            speed: config.projectile_speed,
            speed_x: 0.0,
        }
    }

    /// Angled variant used for spread shots: lateral drift plus a reduced
    /// vertical speed.
    pub fn angled(mut self, speed_x: f32, slowdown: f32) -> Self {
        self.speed_x = speed_x;
        self.speed *= slowdown;
        self
    }

    /// Move by one frame's worth of velocity.  Player shots travel up,
    /// enemy shots travel down.
    pub fn advance(&mut self) {
        match self.owner {
            ProjectileOwner::Player => self.rect.y -= self.speed,
            ProjectileOwner::Enemy => {
                self.rect.y += self.speed;
                self.rect.x += self.speed_x;
            }
        }
    }

    pub fn is_out_of_bounds(&self, screen: &ScreenSize) -> bool {
        self.rect.y < 0.0 || self.rect.y > screen.height
    }

    pub fn overlaps(&self, target: &Rect) -> bool {
        self.rect.overlaps(target)
    }
}
