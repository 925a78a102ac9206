//! Smooth morphing of an agent's visual attributes and speed cap.

use mf_core::{ColorId, Rgb};
use mf_motion::Kinematics;

use crate::{AnimatorParams, Channel};

/// Discrete shape the renderer morphs toward.  The animated *shape step* is
/// `1.0` for a full circle and `0.0` for a square.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    #[default]
    Circle,
    Square,
}

impl Shape {
    #[inline]
    pub fn step_target(self) -> f32 {
        match self {
            Shape::Circle => 1.0,
            Shape::Square => 0.0,
        }
    }
}

/// Five eased channels plus the eased max-speed target.
///
/// The animator owns the animated values; [`step`](Self::step) pushes radius,
/// color and max speed into the body so integration and the boundary
/// thresholds always see the current values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Animator {
    radius:           Channel,
    shape_step:       Channel,
    color:            [Channel; 3],
    shape:            Shape,
    target_max_speed: f32,
    max_speed_decay:  f32,
}

impl Animator {
    /// An animator at rest on the body's current radius, color and max speed.
    pub fn new(body: &Kinematics, params: &AnimatorParams) -> Self {
        let shape = Shape::Circle;
        let color = body.color.channels().map(|c| Channel::new(c, params.color_speed, 0.0, 255.0));
        Self {
            radius:           Channel::new(body.radius(), params.radius_speed, 0.0, f32::MAX),
            shape_step:       Channel::new(shape.step_target(), params.shape_speed, 0.0, 1.0),
            color,
            shape,
            target_max_speed: body.max_speed(),
            max_speed_decay:  params.max_speed_decay,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn radius(&self) -> &Channel {
        &self.radius
    }

    #[inline]
    pub fn shape_step(&self) -> f32 {
        self.shape_step.value()
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        Rgb::from_channels(self.color.map(|c| c.value()))
    }

    #[inline]
    pub fn target_color(&self) -> Rgb {
        Rgb::from_channels(self.color.map(|c| c.target()))
    }

    /// Grouping key from the *target* color.
    #[inline]
    pub fn color_id(&self) -> ColorId {
        self.target_color().id()
    }

    #[inline]
    pub fn target_max_speed(&self) -> f32 {
        self.target_max_speed
    }

    // ── Targets ───────────────────────────────────────────────────────────

    pub fn set_target_radius(&mut self, radius: f32) {
        self.radius.set_target(radius);
    }

    pub fn set_shape(&mut self, shape: Shape) {
        if shape != self.shape {
            self.shape_step.set_target(shape.step_target());
        }
        self.shape = shape;
    }

    /// All three channels restart from rest if any component differs.
    pub fn set_target_color(&mut self, color: Rgb) {
        let [r, g, b] = color.clamped().channels();
        if self.target_color() != Rgb::new(r, g, b) {
            for (channel, value) in self.color.iter_mut().zip([r, g, b]) {
                channel.restart(value);
            }
        }
    }

    pub fn set_target_max_speed(&mut self, max_speed: f32) {
        self.target_max_speed = max_speed;
    }

    // ── Direct writes ─────────────────────────────────────────────────────

    /// Jump the radius (and its target) to `radius`, writing through to the
    /// body.
    pub fn snap_radius(&mut self, body: &mut Kinematics, radius: f32) {
        self.radius.snap_to(radius);
        body.set_radius(self.radius.value());
    }

    /// Overwrite the current color without touching the target.
    pub fn set_color(&mut self, body: &mut Kinematics, color: Rgb) {
        for (channel, value) in self.color.iter_mut().zip(color.channels()) {
            channel.set_value(value);
        }
        body.color = self.color();
    }

    // ── Frame step ────────────────────────────────────────────────────────

    /// Advance every channel one frame and ease the body's max speed.
    pub fn step(&mut self, body: &mut Kinematics) {
        self.radius.step();
        self.shape_step.step();
        for channel in &mut self.color {
            channel.step();
        }

        if self.radius.value() != body.radius() {
            body.set_radius(self.radius.value());
        }
        body.color = self.color();

        let max_speed = body.max_speed();
        if max_speed > self.target_max_speed {
            body.set_max_speed(max_speed * self.max_speed_decay);
        } else if max_speed < self.target_max_speed {
            body.set_max_speed(self.target_max_speed);
        }
    }
}
