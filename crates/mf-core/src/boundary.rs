//! The rectangular play area and what happens at its edges.

use crate::{MfError, MfResult, Vec2};

/// Axis-aligned rectangle in screen coordinates (`y` grows downward, so
/// `top < bottom`).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boundary {
    pub left:   f32,
    pub top:    f32,
    pub right:  f32,
    pub bottom: f32,
}

impl Boundary {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// A viewport anchored at the origin.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Same rectangle grown by `margin` on every side (shrunk if negative).
    #[inline]
    pub fn expand(&self, margin: f32) -> Boundary {
        Boundary::new(
            self.left - margin,
            self.top - margin,
            self.right + margin,
            self.bottom + margin,
        )
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.top && p.y <= self.bottom
    }

    /// All four edges finite and `left <= right`, `top <= bottom`.
    pub fn is_valid(&self) -> bool {
        [self.left, self.top, self.right, self.bottom].iter().all(|v| v.is_finite())
            && self.left <= self.right
            && self.top <= self.bottom
    }

    /// `Ok(self)` if [`is_valid`](Self::is_valid), else a config error.
    pub fn validated(self) -> MfResult<Boundary> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(MfError::Config(format!(
                "invalid boundary [{}, {}, {}, {}]",
                self.left, self.top, self.right, self.bottom
            )))
        }
    }
}

/// Boundary policy applied after each integration step.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EdgeBehavior {
    /// Leave one side, reappear on the opposite side.
    #[default]
    Wrap,
    /// Clamp at the edge and reflect the velocity component.
    Bounce,
}
