//! Fixed-step simulation tick
//!
//! Core update that advances the arena by one step.

use super::collision::{resolve_hostile_rammed, resolve_hostile_shot, resolve_neutral_shot};
use super::state::SimulationState;
use crate::input::InputCommand;

/// Apply a player command immediately. The next tick reads the result.
pub fn apply_command(state: &mut SimulationState, command: InputCommand) {
    match command {
        InputCommand::TurnLeft => state.player.turn_left(),
        InputCommand::TurnRight => state.player.turn_right(),
        InputCommand::Accelerate => state.player.accelerate(),
        InputCommand::Decelerate => state.player.decelerate(),
        InputCommand::Fire => {
            if !state.fire() {
                log::trace!("fire ignored: projectile already in flight");
            }
        }
    }
}

/// Advance the simulation by one tick
///
/// Order: player, projectile, each hostile (move, ram check, shot check),
/// each neutral (move, shot check), then the particle pool.
pub fn tick(state: &mut SimulationState) {
    state.time_ticks += 1;

    state.player.advance();
    state.projectile.advance();

    for i in 0..state.hostiles.len() {
        state.hostiles[i].advance();
        resolve_hostile_rammed(state, i);
        resolve_hostile_shot(state, i);
    }

    for i in 0..state.neutrals.len() {
        state.neutrals[i].advance();
        resolve_neutral_shot(state, i);
    }

    for particle in state.particles.iter_mut() {
        particle.advance();
    }
}
