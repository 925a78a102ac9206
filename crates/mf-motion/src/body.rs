//! Per-agent kinematic state and the one-frame integration step.

use std::f32::consts::FRAC_PI_2;

use mf_core::{AgentId, Boundary, EdgeBehavior, Rgb, Vec2};

use crate::BodyParams;

/// Squared speed above which auto-rotation updates the heading.  Slower
/// bodies keep their last rotation so they don't spin while settling.
const AUTO_ROTATE_MIN_SPEED_SQ: f32 = 0.1;

/// A point mass with a radius, moving inside an optional boundary.
///
/// Fields that feed cached values (`max_speed`, `radius`, `boundary`,
/// `edge_behavior`, `rotation`) are private and go through setters so the
/// caches can never go stale.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Kinematics {
    pub id:       AgentId,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass:     f32,
    pub color:    Rgb,
    pub scale:    f32,
    pub auto_rotate: bool,

    max_speed:     f32,
    max_speed_sq:  f32,
    radius:        f32,
    rotation:      f32,
    edge_behavior: EdgeBehavior,
    boundary:      Option<Boundary>,

    /// `boundary` shrunk by `radius`.
    bounce_bounds: Boundary,
    /// `boundary` grown by `2·radius`.
    wrap_bounds:   Boundary,
}

impl Kinematics {
    /// A body at `position`, at rest, with no boundary.
    pub fn new(id: AgentId, position: Vec2, params: &BodyParams) -> Self {
        let zero = Boundary::new(0.0, 0.0, 0.0, 0.0);
        Self {
            id,
            position,
            velocity:      Vec2::ZERO,
            mass:          params.mass,
            color:         params.color,
            scale:         params.scale,
            auto_rotate:   params.auto_rotate,
            max_speed:     params.max_speed,
            max_speed_sq:  params.max_speed * params.max_speed,
            radius:        params.radius,
            rotation:      0.0,
            edge_behavior: params.edge_behavior,
            boundary:      None,
            bounce_bounds: zero,
            wrap_bounds:   zero,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge_behavior
    }

    #[inline]
    pub fn boundary(&self) -> Option<Boundary> {
        self.boundary
    }

    /// The rectangle the body's center is confined to under `Bounce`.
    #[inline]
    pub fn bounce_bounds(&self) -> Option<Boundary> {
        self.boundary.map(|_| self.bounce_bounds)
    }

    /// The rectangle the body's center may leave before wrapping.
    #[inline]
    pub fn wrap_bounds(&self) -> Option<Boundary> {
        self.boundary.map(|_| self.wrap_bounds)
    }

    // ── Setters ───────────────────────────────────────────────────────────

    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
        self.max_speed_sq = max_speed * max_speed;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
        self.refresh_bounds();
    }

    /// Install (or with `None`, remove) the boundary.
    pub fn set_boundary(&mut self, boundary: Option<Boundary>) {
        self.boundary = boundary;
        self.refresh_bounds();
    }

    pub fn set_edge_behavior(&mut self, edge_behavior: EdgeBehavior) {
        self.edge_behavior = edge_behavior;
    }

    /// Manual heading.  Ignored while `auto_rotate` is on.
    pub fn set_rotation(&mut self, rotation: f32) {
        if !self.auto_rotate {
            self.rotation = rotation;
        }
    }

    fn refresh_bounds(&mut self) {
        if let Some(b) = self.boundary {
            self.bounce_bounds = b.expand(-self.radius);
            self.wrap_bounds = b.expand(self.radius * 2.0);
        }
    }

    // ── Integration ───────────────────────────────────────────────────────

    /// Advance one frame.  See the crate docs for the exact sequence.
    pub fn integrate(&mut self) {
        if self.velocity.is_zero() {
            return;
        }

        let speed_sq = self.velocity.length_squared();
        if speed_sq > self.max_speed_sq {
            self.velocity *= self.max_speed / speed_sq.sqrt();
        }

        self.position += self.velocity;

        if self.boundary.is_some() {
            match self.edge_behavior {
                EdgeBehavior::Bounce => self.bounce(),
                EdgeBehavior::Wrap   => self.wrap(),
            }
        }

        if self.auto_rotate && speed_sq > AUTO_ROTATE_MIN_SPEED_SQ {
            self.rotation = self.velocity.y.atan2(self.velocity.x) + FRAC_PI_2;
        }
    }

    fn bounce(&mut self) {
        let b = self.bounce_bounds;
        if self.position.x > b.right {
            self.position.x = b.right;
            self.velocity.x = -self.velocity.x;
        } else if self.position.x < b.left {
            self.position.x = b.left;
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y > b.bottom {
            self.position.y = b.bottom;
            self.velocity.y = -self.velocity.y;
        } else if self.position.y < b.top {
            self.position.y = b.top;
            self.velocity.y = -self.velocity.y;
        }
    }

    fn wrap(&mut self) {
        let b = self.wrap_bounds;
        if self.position.x > b.right {
            self.position.x = b.left + (self.position.x - b.right);
        } else if self.position.x < b.left {
            self.position.x = b.right - (b.left - self.position.x);
        }
        if self.position.y > b.bottom {
            self.position.y = b.top + (self.position.y - b.bottom);
        } else if self.position.y < b.top {
            self.position.y = b.bottom - (b.top - self.position.y);
        }
    }
}
