//! Score-driven difficulty ramp.

use tracing::info;

use crate::entities::GameState;

/// Raise `difficulty_multiplier` once for every score step crossed since the
/// last call.  Returns true when the multiplier changed.
pub fn ramp(state: &mut GameState) -> bool {
    let step = state.config.difficulty_score_step.max(1);
    let reached = state.score / step;
    if reached <= state.difficulty_threshold {
        return false;
    }
    state.difficulty_threshold = reached;
    state.difficulty_multiplier =
        1.0 + state.config.difficulty_increment * state.difficulty_threshold as f32;
    info!(
        score = state.score,
        multiplier = state.difficulty_multiplier,
        "difficulty increased"
    );
    true
}
