//! Time-gated enemy factory.

use rand::Rng;
use tracing::debug;

use crate::entities::{Enemy, EnemyId, EnemyKind, GameState};

/// Append one enemy of a random kind once the spawn delay has elapsed since
/// the previous spawn.  Returns the new enemy's id.
pub fn maybe_spawn(state: &mut GameState, now_ms: u64, rng: &mut impl Rng) -> Option<EnemyId> {
    if now_ms.saturating_sub(state.last_spawn_ms) <= state.config.spawn_delay_ms {
        return None;
    }
    let kind = EnemyKind::ALL[rng.gen_range(0..EnemyKind::ALL.len())];
    let id = EnemyId(state.next_enemy_id);
    state.next_enemy_id += 1;

    let enemy = Enemy::spawn(
        id,
        kind,
        state.difficulty_multiplier,
        &state.config,
        &state.screen,
        now_ms,
        rng,
    );
    debug!(id = id.0, ?kind, speed = enemy.speed, "enemy spawned");
    state.enemies.push(enemy);
    state.last_spawn_ms = now_ms;
    Some(id)
}
