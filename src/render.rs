//! Frame snapshots and the display seam
//!
//! The simulation never draws. Once per tick the driver builds a [`Frame`]
//! and hands it to a [`Frontend`], which owns the actual window or terminal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::hud::{Border, SCORE_ANCHOR, ScoreBoard};
use crate::sim::{Color, Entity, EntityKind, Shape, SimulationState};

/// One entity as it should appear on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteView {
    pub pos: Vec2,
    pub heading: f32,
    pub shape: Shape,
    pub color: Color,
    /// (width, length) multipliers on the base shape
    pub stretch: (f32, f32),
}

/// Shape scale per entity kind
fn stretch_for(kind: &EntityKind) -> (f32, f32) {
    match kind {
        EntityKind::Player { .. } => (0.6, 1.1),
        EntityKind::Projectile { .. } => (0.2, 0.4),
        EntityKind::Particle { .. } => (0.1, 0.1),
        EntityKind::Hostile | EntityKind::Neutral => (1.0, 1.0),
    }
}

impl From<&Entity> for SpriteView {
    fn from(entity: &Entity) -> Self {
        Self {
            pos: entity.pose.pos,
            heading: entity.pose.heading,
            shape: entity.shape,
            color: entity.color,
            stretch: stretch_for(&entity.kind),
        }
    }
}

/// Everything a frontend needs to draw one tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub tick: u64,
    pub score: i64,
    /// Draw order: drifters, particles, projectile, player on top
    pub sprites: Vec<SpriteView>,
}

impl Frame {
    pub fn capture(state: &SimulationState) -> Self {
        let mut sprites = Vec::with_capacity(
            state.hostiles.len() + state.neutrals.len() + state.particles.len() + 2,
        );
        sprites.extend(state.hostiles.iter().map(SpriteView::from));
        sprites.extend(state.neutrals.iter().map(SpriteView::from));
        sprites.extend(state.particles.iter().map(SpriteView::from));
        sprites.push(SpriteView::from(&state.projectile));
        sprites.push(SpriteView::from(&state.player));

        Self {
            tick: state.time_ticks,
            score: state.score,
            sprites,
        }
    }
}

/// Display side of the surrounding shell
pub trait Frontend {
    /// Draw the static arena outline (called once at startup)
    fn draw_border(&mut self, border: &Border);
    /// Replace the displayed score
    fn update_score_display(&mut self, score: i64);
    /// Flush all entity poses to the display
    fn render_frame(&mut self, frame: &Frame);
}

/// Headless frontend that reports through the logger
#[derive(Debug, Default)]
pub struct LogFrontend {
    score: ScoreBoard,
}

impl LogFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_text(&self) -> &str {
        self.score.text()
    }
}

impl Frontend for LogFrontend {
    fn draw_border(&mut self, border: &Border) {
        log::debug!("Border: {:?}", border.corners());
    }

    fn update_score_display(&mut self, score: i64) {
        let text = self.score.show(score);
        log::info!("{} @ ({}, {})", text, SCORE_ANCHOR.x, SCORE_ANCHOR.y);
    }

    fn render_frame(&mut self, frame: &Frame) {
        if log::log_enabled!(log::Level::Trace) {
            match serde_json::to_string(frame) {
                Ok(json) => log::trace!("{json}"),
                Err(err) => log::warn!("Failed to encode frame {}: {}", frame.tick, err),
            }
        }
    }
}
