//! A single eased scalar.
//!
//! # Convergence rule
//!
//! Each frame a channel accelerates toward its target by a constant `speed`
//! (velocity grows, the value moves by the velocity).  As soon as the value
//! reaches or passes the target while still moving toward it, it snaps to the
//! target and velocity and acceleration drop to exactly zero.  A channel at
//! rest on its target does nothing.
//!
//! Changing the target to a *different* value restarts the motion from rest.
//! Values and targets are clamped into `[min, max]`.

/// One animated attribute (radius, shape step, or a color channel).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Channel {
    current:      f32,
    target:       f32,
    velocity:     f32,
    acceleration: f32,
    speed:        f32,
    min:          f32,
    max:          f32,
}

impl Channel {
    /// A channel at rest on `value`.
    pub fn new(value: f32, speed: f32, min: f32, max: f32) -> Self {
        let value = value.clamp(min, max);
        Self {
            current:      value,
            target:       value,
            velocity:     0.0,
            acceleration: 0.0,
            speed,
            min,
            max,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.current
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn acceleration(&self) -> f32 {
        self.acceleration
    }

    #[inline]
    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// New target; motion restarts from rest only if it differs.
    pub fn set_target(&mut self, target: f32) {
        let target = target.clamp(self.min, self.max);
        if target != self.target {
            self.velocity = 0.0;
            self.acceleration = 0.0;
        }
        self.target = target;
    }

    /// New target, restarting from rest even if the target is unchanged.
    pub fn restart(&mut self, target: f32) {
        self.velocity = 0.0;
        self.acceleration = 0.0;
        self.target = target.clamp(self.min, self.max);
    }

    /// Overwrite the current value (velocity is kept).
    pub fn set_value(&mut self, value: f32) {
        self.current = value.clamp(self.min, self.max);
    }

    /// Jump straight to `value` and rest there.
    pub fn snap_to(&mut self, value: f32) {
        self.set_target(value);
        self.current = self.target;
        self.velocity = 0.0;
        self.acceleration = 0.0;
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        let diff = self.current - self.target;
        if diff == 0.0 && self.velocity == 0.0 {
            return;
        }

        let passed = (self.velocity < 0.0 && diff <= 0.0) || (self.velocity > 0.0 && diff >= 0.0);
        if passed {
            self.acceleration = 0.0;
            self.velocity = 0.0;
            self.current = self.target;
        } else {
            self.acceleration = if self.target < self.current { -self.speed } else { self.speed };
            self.velocity += self.acceleration;
            self.current = (self.current + self.velocity).clamp(self.min, self.max);
        }
    }
}
