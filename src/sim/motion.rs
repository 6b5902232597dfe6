//! Per-kind movement rules
//!
//! Player and drifters share the clamp-and-deflect arena response. The
//! projectile and particles replace it with their own state machines.

use glam::Vec2;

use super::state::{Entity, EntityKind, ProjectileStatus};
use crate::consts::*;

/// True if `pos` lies outside the ±ARENA_LIMIT box on either axis
#[inline]
pub fn outside_arena(pos: Vec2) -> bool {
    pos.x < -ARENA_LIMIT || pos.x > ARENA_LIMIT || pos.y < -ARENA_LIMIT || pos.y > ARENA_LIMIT
}

impl Entity {
    /// Advance one tick according to this entity's kind
    pub fn advance(&mut self) {
        match self.kind {
            EntityKind::Player { .. } | EntityKind::Hostile | EntityKind::Neutral => {
                self.move_bounded();
            }
            EntityKind::Projectile { .. } => self.move_projectile(),
            EntityKind::Particle { .. } => self.move_particle(),
        }
    }

    /// Move forward, then clamp each violated bound and deflect 60° clockwise
    /// per violation. Returns the number of bounds hit.
    pub fn move_bounded(&mut self) -> u32 {
        self.pose.forward(self.speed);

        let mut hits = 0;
        if self.pose.pos.x > ARENA_LIMIT {
            self.pose.pos.x = ARENA_LIMIT;
            hits += 1;
        }
        if self.pose.pos.x < -ARENA_LIMIT {
            self.pose.pos.x = -ARENA_LIMIT;
            hits += 1;
        }
        if self.pose.pos.y > ARENA_LIMIT {
            self.pose.pos.y = ARENA_LIMIT;
            hits += 1;
        }
        if self.pose.pos.y < -ARENA_LIMIT {
            self.pose.pos.y = -ARENA_LIMIT;
            hits += 1;
        }
        for _ in 0..hits {
            self.pose.turn(-BOUNCE_TURN_DEG);
        }
        hits
    }

    /// In flight: fly straight, despawn to the sentinel on leaving the arena
    fn move_projectile(&mut self) {
        let speed = self.speed;
        if let EntityKind::Projectile { status } = &mut self.kind {
            if *status != ProjectileStatus::Firing {
                return;
            }
            self.pose.forward(speed);
            if outside_arena(self.pose.pos) {
                self.pose.teleport(PROJECTILE_SENTINEL);
                *status = ProjectileStatus::Ready;
            }
        }
    }

    /// Burst animation: step outward each frame, then hide
    fn move_particle(&mut self) {
        if let EntityKind::Particle { frame } = &mut self.kind {
            if *frame > 0 {
                self.pose.forward(PARTICLE_STEP);
                *frame += 1;
            }
            if *frame > PARTICLE_FRAMES {
                *frame = 0;
                self.pose.teleport(PARTICLE_SENTINEL);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Pose;
    use proptest::prelude::*;

    fn drifter_at(x: f32, y: f32, heading: f32, speed: f32) -> Entity {
        let mut e = Entity::hostile(heading);
        e.pose = Pose::new(Vec2::new(x, y), heading);
        e.speed = speed;
        e
    }

    #[test]
    fn test_move_inside_arena() {
        let mut e = drifter_at(0.0, 0.0, 0.0, 6.0);
        assert_eq!(e.move_bounded(), 0);
        assert!((e.pose.pos - Vec2::new(6.0, 0.0)).length() < 1e-4);
        assert_eq!(e.pose.heading, 0.0);
    }

    #[test]
    fn test_clamp_right_wall_deflects_clockwise() {
        let mut e = drifter_at(288.0, 0.0, 0.0, 6.0);
        assert_eq!(e.move_bounded(), 1);
        assert_eq!(e.pose.pos.x, ARENA_LIMIT);
        assert_eq!(e.pose.heading, 300.0);
    }

    #[test]
    fn test_corner_deflects_twice() {
        // Heading 45° from near the top-right corner crosses both bounds
        let mut e = drifter_at(288.0, 288.0, 45.0, 10.0);
        assert_eq!(e.move_bounded(), 2);
        assert_eq!(e.pose.pos, Vec2::new(ARENA_LIMIT, ARENA_LIMIT));
        assert_eq!(e.pose.heading, 285.0);
    }

    #[test]
    fn test_negative_speed_moves_backwards() {
        let mut player = Entity::player();
        player.speed = -3.0;
        player.advance();
        assert!((player.pose.pos - Vec2::new(-3.0, 0.0)).length() < 1e-4);
        assert_eq!(player.pose.heading, 0.0);
    }

    #[test]
    fn test_ready_projectile_does_not_move() {
        let mut p = Entity::projectile();
        p.advance();
        assert_eq!(p.pose.pos, PROJECTILE_SENTINEL);
    }

    #[test]
    fn test_projectile_leaving_arena_resets() {
        let mut p = Entity::projectile();
        assert!(p.fire(Pose::new(Vec2::new(280.0, 0.0), 0.0)));
        p.advance();
        assert_eq!(p.pose.pos, PROJECTILE_SENTINEL);
        assert_eq!(p.projectile_status(), Some(ProjectileStatus::Ready));
        // No bounce deflection applied
        assert_eq!(p.pose.heading, 0.0);
    }

    #[test]
    fn test_projectile_in_flight() {
        let mut p = Entity::projectile();
        p.fire(Pose::new(Vec2::ZERO, 90.0));
        p.advance();
        assert!((p.pose.pos - Vec2::new(0.0, PROJECTILE_SPEED)).length() < 1e-4);
        assert!(p.is_firing());
    }

    #[test]
    fn test_idle_particle_stays_hidden() {
        let mut p = Entity::particle();
        for _ in 0..5 {
            p.advance();
        }
        assert_eq!(p.particle_frame(), Some(0));
        assert_eq!(p.pose.pos, PARTICLE_SENTINEL);
    }

    #[test]
    fn test_particle_lifecycle() {
        let origin = Vec2::new(50.0, -20.0);
        let heading = 30.0;
        let mut p = Entity::particle();
        p.explode(origin, heading);
        assert_eq!(p.particle_frame(), Some(1));

        for _ in 0..14 {
            p.advance();
            let frame = p.particle_frame().unwrap_or(0);
            let travelled = PARTICLE_STEP * (frame - 1) as f32;
            let expected = origin + crate::heading_vector(heading) * travelled;
            assert!((p.pose.pos - expected).length() < 1e-3);
        }
        assert_eq!(p.particle_frame(), Some(PARTICLE_FRAMES));

        p.advance();
        assert_eq!(p.particle_frame(), Some(0));
        assert_eq!(p.pose.pos, PARTICLE_SENTINEL);
    }

    proptest! {
        #[test]
        fn prop_x_violation_clamps_and_deflects(
            x in 291.0f32..600.0,
            y in -280.0f32..280.0,
            heading in 0u16..360,
            flip in any::<bool>(),
        ) {
            let x = if flip { -x } else { x };
            let mut e = drifter_at(x, y, heading as f32, 0.0);
            let hits = e.move_bounded();
            prop_assert_eq!(hits, 1);
            prop_assert_eq!(e.pose.pos.x, if flip { -ARENA_LIMIT } else { ARENA_LIMIT });
            let expected = crate::normalize_heading(heading as f32 - BOUNCE_TURN_DEG);
            prop_assert_eq!(e.pose.heading, expected);
        }

        #[test]
        fn prop_moves_stay_within_arena(
            x in -290.0f32..290.0,
            y in -290.0f32..290.0,
            heading in 0.0f32..360.0,
            speed in 0.0f32..50.0,
        ) {
            let mut e = drifter_at(x, y, heading, speed);
            for _ in 0..20 {
                e.advance();
                prop_assert!(!outside_arena(e.pose.pos));
                prop_assert!((0.0..360.0).contains(&e.pose.heading));
            }
        }
    }
}
