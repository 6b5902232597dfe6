//! Collision detection and response
//!
//! Hits use a generous axis-aligned box rather than a radius: two entities
//! collide when they are within HIT_HALF_EXTENT of each other on both axes.

use super::state::{CollisionRule, Entity, GameEvent, SimulationState};
use crate::consts::*;

impl Entity {
    /// Axis-aligned overlap test with a fixed 20-unit half extent
    pub fn overlaps(&self, other: &Entity) -> bool {
        let delta = (self.pose.pos - other.pose.pos).abs();
        delta.x <= HIT_HALF_EXTENT && delta.y <= HIT_HALF_EXTENT
    }
}

/// Shared response: impact sound, respawn, score change
fn record_hit(state: &mut SimulationState, rule: CollisionRule, score_delta: i64) {
    state.events.push(GameEvent::Impact { rule });
    state.add_score(score_delta);
    log::debug!(
        "{:?} at tick {}: score {} ({:+})",
        rule,
        state.time_ticks,
        state.score,
        score_delta
    );
}

/// Rule 1: player rams a hostile drifter. Lives are untouched.
///
/// Every resolver returns false for an index outside its drifter list.
pub fn resolve_hostile_rammed(state: &mut SimulationState, index: usize) -> bool {
    let Some(hostile) = state.hostiles.get(index) else {
        return false;
    };
    if !state.player.overlaps(hostile) {
        return false;
    }
    let spawn = state.random_respawn_point();
    state.hostiles[index].pose.teleport(spawn);
    record_hit(state, CollisionRule::HostileRammed, HOSTILE_RAM_PENALTY);
    true
}

/// Rule 2: projectile in flight hits a hostile drifter, triggering a burst
pub fn resolve_hostile_shot(state: &mut SimulationState, index: usize) -> bool {
    let Some(hostile) = state.hostiles.get(index) else {
        return false;
    };
    if !state.projectile.is_firing() || !state.projectile.overlaps(hostile) {
        return false;
    }
    let spawn = state.random_respawn_point();
    state.hostiles[index].pose.teleport(spawn);
    state.projectile.stop_projectile();
    record_hit(state, CollisionRule::HostileShot, HOSTILE_SHOT_REWARD);
    let origin = state.projectile.pose.pos;
    state.burst(origin);
    true
}

/// Rule 3: projectile hits a neutral drifter.
///
/// Unlike rule 2 this does not require the projectile to be in flight, so a
/// projectile resting where it last hit something can still catch a neutral.
pub fn resolve_neutral_shot(state: &mut SimulationState, index: usize) -> bool {
    let Some(neutral) = state.neutrals.get(index) else {
        return false;
    };
    if !state.projectile.overlaps(neutral) {
        return false;
    }
    let spawn = state.random_respawn_point();
    state.neutrals[index].pose.teleport(spawn);
    state.projectile.stop_projectile();
    record_hit(state, CollisionRule::NeutralShot, NEUTRAL_SHOT_PENALTY);
    true
}
