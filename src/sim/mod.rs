//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (player, projectile, hostiles, neutrals, particles)
//! - No rendering, audio or platform dependencies

pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{resolve_hostile_rammed, resolve_hostile_shot, resolve_neutral_shot};
pub use motion::outside_arena;
pub use state::{
    Color, CollisionRule, Entity, EntityKind, GameEvent, Pose, ProjectileStatus, Shape,
    SimulationState,
};
pub use tick::{apply_command, tick};
