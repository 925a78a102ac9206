//! Capability traits.
//!
//! Code that only needs one capability of an agent (a pursuit target, a
//! command sink for visual targets) is written against these instead of the
//! concrete [`Agent`].

use mf_core::{AgentRng, Rgb, Vec2};
use mf_motion::Kinematics;
use mf_steering::Neighbor;

use crate::{Agent, Shape};

/// Anything with a position and a velocity.
pub trait Positionable {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
}

/// Accepts steering behaviors into its force accumulator.
pub trait Steerable {
    fn seek(&mut self, target: Vec2, arrive: Option<f32>);
    fn flee(&mut self, target: Vec2, avoid_boundary: f32);
    fn pursue<T: Positionable + ?Sized>(&mut self, target: &T);
    fn wander(&mut self, avoid_boundary: f32, rng: &mut AgentRng);
    fn flock(&mut self, neighbors: &[Neighbor], anchor: Option<Vec2>, rng: &mut AgentRng);
    /// Drop the accumulated force and stop.
    fn halt(&mut self);
}

/// Accepts new targets for the animated attributes.
pub trait Animatable {
    fn set_target_radius(&mut self, radius: f32);
    fn set_shape(&mut self, shape: Shape);
    fn set_target_color(&mut self, color: Rgb);
    fn set_target_max_speed(&mut self, max_speed: f32);
}

// ── Positionable ──────────────────────────────────────────────────────────────

impl Positionable for Kinematics {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

impl Positionable for Neighbor {
    fn position(&self) -> Vec2 {
        self.position
    }
    fn velocity(&self) -> Vec2 {
        self.velocity
    }
}

impl Positionable for Agent {
    fn position(&self) -> Vec2 {
        self.body.position
    }
    fn velocity(&self) -> Vec2 {
        self.body.velocity
    }
}

// ── Steerable / Animatable for Agent ──────────────────────────────────────────

impl Steerable for Agent {
    fn seek(&mut self, target: Vec2, arrive: Option<f32>) {
        self.steering.seek(&self.body, target, arrive);
    }

    fn flee(&mut self, target: Vec2, avoid_boundary: f32) {
        self.steering.flee(&self.body, target, avoid_boundary);
    }

    fn pursue<T: Positionable + ?Sized>(&mut self, target: &T) {
        self.steering.pursue(&self.body, target.position(), target.velocity());
    }

    fn wander(&mut self, avoid_boundary: f32, rng: &mut AgentRng) {
        self.steering.wander(&self.body, avoid_boundary, rng);
    }

    fn flock(&mut self, neighbors: &[Neighbor], anchor: Option<Vec2>, rng: &mut AgentRng) {
        self.steering.flock(&self.body, neighbors, anchor, rng);
    }

    fn halt(&mut self) {
        self.steering.clear(&mut self.body);
    }
}

impl Animatable for Agent {
    fn set_target_radius(&mut self, radius: f32) {
        self.animator.set_target_radius(radius);
    }

    fn set_shape(&mut self, shape: Shape) {
        self.animator.set_shape(shape);
    }

    fn set_target_color(&mut self, color: Rgb) {
        self.animator.set_target_color(color);
    }

    fn set_target_max_speed(&mut self, max_speed: f32) {
        self.animator.set_target_max_speed(max_speed);
    }
}
