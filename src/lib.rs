//! Space Sniper - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, score)
//! - `game_loop`: Fixed-cadence driver feeding input into the simulation
//! - `render`: Per-tick frame snapshots handed to a frontend
//! - `audio`: Fire-and-forget sound effects
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod game_loop;
pub mod hud;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;

pub use game_loop::{Clock, GameLoop, SystemClock};
pub use input::InputCommand;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Nominal sleep between ticks (~50 ticks/second)
    pub const TICK_INTERVAL_MS: u64 = 20;

    /// Entities clamp at this half-extent
    pub const ARENA_LIMIT: f32 = 290.0;
    /// The visual border is drawn at this half-extent (wider than the clamp)
    pub const BORDER_HALF_EXTENT: f32 = 300.0;
    /// Respawned drifters land inside [-RESPAWN_LIMIT, RESPAWN_LIMIT]²
    pub const RESPAWN_LIMIT: i32 = 250;

    /// Axis-aligned hitbox half-width/half-height
    pub const HIT_HALF_EXTENT: f32 = 20.0;

    /// Degrees per turn command
    pub const TURN_STEP_DEG: f32 = 45.0;
    /// Clockwise deflection applied per violated bound
    pub const BOUNCE_TURN_DEG: f32 = 60.0;

    /// Speeds (units per tick)
    pub const PLAYER_SPEED: f32 = 4.0;
    pub const HOSTILE_SPEED: f32 = 6.0;
    pub const NEUTRAL_SPEED: f32 = 8.0;
    pub const PROJECTILE_SPEED: f32 = 20.0;
    pub const PARTICLE_STEP: f32 = 10.0;

    /// Particles animate for this many frames before going idle
    pub const PARTICLE_FRAMES: u8 = 15;
    pub const PARTICLE_POOL_SIZE: usize = 20;

    pub const HOSTILE_COUNT: usize = 6;
    pub const NEUTRAL_COUNT: usize = 6;
    pub const PLAYER_LIVES: u8 = 3;

    /// Off-arena parking spots
    pub const PROJECTILE_SENTINEL: Vec2 = Vec2::new(-1000.0, 1000.0);
    pub const PARTICLE_SENTINEL: Vec2 = Vec2::new(-1000.0, -1000.0);

    /// Spawn points
    pub const HOSTILE_SPAWN: Vec2 = Vec2::new(-100.0, 0.0);
    pub const NEUTRAL_SPAWN: Vec2 = Vec2::new(100.0, 0.0);

    /// Score deltas
    pub const HOSTILE_RAM_PENALTY: i64 = -100;
    pub const HOSTILE_SHOT_REWARD: i64 = 100;
    pub const NEUTRAL_SHOT_PENALTY: i64 = -50;
}

/// Normalize a heading in degrees to [0, 360)
#[inline]
pub fn normalize_heading(heading: f32) -> f32 {
    let h = heading.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if h >= 360.0 { 0.0 } else { h }
}

/// Unit vector pointing along a heading in degrees (counter-clockwise from +x)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    let theta = heading.to_radians();
    Vec2::new(theta.cos(), theta.sin())
}
