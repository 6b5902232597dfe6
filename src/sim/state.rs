//! Simulation state and core entity types
//!
//! Every entity is the same concrete [`Entity`] type; what it does each tick
//! is decided by its [`EntityKind`] tag.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{heading_vector, normalize_heading};

/// Position plus heading (degrees, counter-clockwise from +x)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub pos: Vec2,
    pub heading: f32,
}

impl Pose {
    pub fn new(pos: Vec2, heading: f32) -> Self {
        Self {
            pos,
            heading: normalize_heading(heading),
        }
    }

    /// Move `distance` units along the current heading
    pub fn forward(&mut self, distance: f32) {
        self.pos += heading_vector(self.heading) * distance;
    }

    /// Rotate counter-clockwise by `degrees` (negative turns clockwise)
    pub fn turn(&mut self, degrees: f32) {
        self.heading = normalize_heading(self.heading + degrees);
    }

    pub fn teleport(&mut self, pos: Vec2) {
        self.pos = pos;
    }
}

/// Projectile state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileStatus {
    /// Waiting to be fired (parked off-arena, or resting where it last hit)
    Ready,
    /// In flight
    Firing,
}

/// Sprite outline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Triangle,
    Circle,
    Square,
}

/// Sprite fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Red,
    Blue,
    Orange,
}

/// Entity variant with its variant-specific data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    /// The ship. `lives` is tracked but never decremented during play.
    Player { lives: u8 },
    /// Enemy drifter: ramming it costs points, shooting it earns points
    Hostile,
    /// Ally drifter: shooting it costs points
    Neutral,
    /// The single projectile
    Projectile { status: ProjectileStatus },
    /// Explosion particle; `frame == 0` means idle
    Particle { frame: u8 },
}

impl EntityKind {
    /// Accepts turn/thrust commands
    pub fn is_steerable(&self) -> bool {
        matches!(self, EntityKind::Player { .. })
    }

    /// Accepts `fire`
    pub fn is_fireable(&self) -> bool {
        matches!(self, EntityKind::Projectile { .. })
    }

    /// Accepts `explode`
    pub fn is_explodable(&self) -> bool {
        matches!(self, EntityKind::Particle { .. })
    }

    pub fn is_drifter(&self) -> bool {
        matches!(self, EntityKind::Hostile | EntityKind::Neutral)
    }
}

/// A moving object in the arena
///
/// Entities are never removed: "destroying" one teleports it off-arena or
/// respawns it somewhere inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub pose: Pose,
    /// Scalar distance per tick along the heading (may go negative for the player)
    pub speed: f32,
    pub shape: Shape,
    pub color: Color,
    pub kind: EntityKind,
}

impl Entity {
    pub fn player() -> Self {
        Self {
            pose: Pose::new(Vec2::ZERO, 0.0),
            speed: PLAYER_SPEED,
            shape: Shape::Triangle,
            color: Color::White,
            kind: EntityKind::Player {
                lives: PLAYER_LIVES,
            },
        }
    }

    pub fn hostile(heading: f32) -> Self {
        Self {
            pose: Pose::new(HOSTILE_SPAWN, heading),
            speed: HOSTILE_SPEED,
            shape: Shape::Circle,
            color: Color::Red,
            kind: EntityKind::Hostile,
        }
    }

    pub fn neutral(heading: f32) -> Self {
        Self {
            pose: Pose::new(NEUTRAL_SPAWN, heading),
            speed: NEUTRAL_SPEED,
            shape: Shape::Square,
            color: Color::Blue,
            kind: EntityKind::Neutral,
        }
    }

    pub fn projectile() -> Self {
        Self {
            pose: Pose::new(PROJECTILE_SENTINEL, 0.0),
            speed: PROJECTILE_SPEED,
            shape: Shape::Triangle,
            color: Color::Yellow,
            kind: EntityKind::Projectile {
                status: ProjectileStatus::Ready,
            },
        }
    }

    pub fn particle() -> Self {
        Self {
            pose: Pose::new(PARTICLE_SENTINEL, 0.0),
            speed: PARTICLE_STEP,
            shape: Shape::Circle,
            color: Color::Orange,
            kind: EntityKind::Particle { frame: 0 },
        }
    }

    pub fn lives(&self) -> Option<u8> {
        match self.kind {
            EntityKind::Player { lives } => Some(lives),
            _ => None,
        }
    }

    pub fn projectile_status(&self) -> Option<ProjectileStatus> {
        match self.kind {
            EntityKind::Projectile { status } => Some(status),
            _ => None,
        }
    }

    pub fn particle_frame(&self) -> Option<u8> {
        match self.kind {
            EntityKind::Particle { frame } => Some(frame),
            _ => None,
        }
    }

    pub fn is_firing(&self) -> bool {
        self.projectile_status() == Some(ProjectileStatus::Firing)
    }

    // === Steering (player only) ===

    pub fn turn_left(&mut self) {
        if self.kind.is_steerable() {
            self.pose.turn(TURN_STEP_DEG);
        }
    }

    pub fn turn_right(&mut self) {
        if self.kind.is_steerable() {
            self.pose.turn(-TURN_STEP_DEG);
        }
    }

    /// Unbounded above
    pub fn accelerate(&mut self) {
        if self.kind.is_steerable() {
            self.speed += 1.0;
        }
    }

    /// Unbounded below: negative speed makes the ship travel backwards
    pub fn decelerate(&mut self) {
        if self.kind.is_steerable() {
            self.speed -= 1.0;
        }
    }

    // === Projectile ===

    /// Launch from `shooter` if ready. Returns true if the projectile fired.
    pub fn fire(&mut self, shooter: Pose) -> bool {
        match &mut self.kind {
            EntityKind::Projectile { status } if *status == ProjectileStatus::Ready => {
                self.pose = shooter;
                *status = ProjectileStatus::Firing;
                true
            }
            _ => false,
        }
    }

    /// Force the projectile back to `Ready` without moving it
    pub fn stop_projectile(&mut self) {
        if let EntityKind::Projectile { status } = &mut self.kind {
            *status = ProjectileStatus::Ready;
        }
    }

    // === Particle ===

    /// Start the burst animation at `origin`
    pub fn explode(&mut self, origin: Vec2, heading: f32) {
        if let EntityKind::Particle { frame } = &mut self.kind {
            self.pose = Pose::new(origin, heading);
            *frame = 1;
        }
    }
}

/// Which collision rule produced an impact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionRule {
    /// Player overlapped a hostile drifter
    HostileRammed,
    /// Projectile in flight hit a hostile drifter
    HostileShot,
    /// Projectile hit a neutral drifter
    NeutralShot,
}

/// Side effects raised during a tick, drained by the driver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Play the impact sound
    Impact { rule: CollisionRule },
    /// Score changed; refresh the display
    ScoreChanged { score: i64 },
    /// Every particle exploded at `origin`
    Burst { origin: Vec2 },
}

/// Complete simulation state, owned by the driver
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// May go negative
    pub score: i64,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub player: Entity,
    pub projectile: Entity,
    pub hostiles: Vec<Entity>,
    pub neutrals: Vec<Entity>,
    /// Fixed pool reused by every burst
    pub particles: [Entity; PARTICLE_POOL_SIZE],
    /// Pending side effects for the current tick
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create the starting population with the given seed
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_ticks: 0,
            player: Entity::player(),
            projectile: Entity::projectile(),
            hostiles: Vec::with_capacity(HOSTILE_COUNT),
            neutrals: Vec::with_capacity(NEUTRAL_COUNT),
            particles: [Entity::particle(); PARTICLE_POOL_SIZE],
            events: Vec::new(),
        };

        for _ in 0..HOSTILE_COUNT {
            let heading = state.random_heading();
            state.hostiles.push(Entity::hostile(heading));
        }
        for _ in 0..NEUTRAL_COUNT {
            let heading = state.random_heading();
            state.neutrals.push(Entity::neutral(heading));
        }

        state
    }

    /// Uniform integer heading in 0..=359
    pub fn random_heading(&mut self) -> f32 {
        self.rng.random_range(0u16..360) as f32
    }

    /// Uniform integer point inside the respawn square
    pub fn random_respawn_point(&mut self) -> Vec2 {
        let x = self.rng.random_range(-RESPAWN_LIMIT..=RESPAWN_LIMIT);
        let y = self.rng.random_range(-RESPAWN_LIMIT..=RESPAWN_LIMIT);
        Vec2::new(x as f32, y as f32)
    }

    /// Apply a score delta and queue a display refresh
    pub fn add_score(&mut self, delta: i64) {
        self.score += delta;
        self.events.push(GameEvent::ScoreChanged { score: self.score });
    }

    /// Fire the projectile from the player's current pose
    pub fn fire(&mut self) -> bool {
        let shooter = self.player.pose;
        self.projectile.fire(shooter)
    }

    /// Explode every particle in the pool at `origin`, each with its own heading
    pub fn burst(&mut self, origin: Vec2) {
        for i in 0..self.particles.len() {
            let heading = self.random_heading();
            self.particles[i].explode(origin, heading);
        }
        self.events.push(GameEvent::Burst { origin });
    }

    /// Take the events raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
