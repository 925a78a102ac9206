//! `Vec2` — a plain 2D value type with the operations steering code needs.
//!
//! All operations are value-returning; the `*Assign` operator impls cover the
//! in-place forms used on hot paths (`force += v`, `velocity *= s`).
//!
//! Distance checks across the engine compare *squared* lengths against
//! squared thresholds, so `length_squared` / `distance_squared` are the
//! preferred accessors; `length` costs a square root.

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Tolerance used by [`Vec2::is_normalized`].
const UNIT_EPSILON: f32 = 1e-5;

/// A 2D vector with `f32` components.
///
/// Equality is component-wise value equality; there is no identity.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const X:    Vec2 = Vec2 { x: 1.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// A vector of `length` pointing along `angle` (radians, from +x).
    #[inline]
    pub fn from_angle(angle: f32, length: f32) -> Self {
        Self::new(angle.cos() * length, angle.sin() * length)
    }

    // ── Scalar properties ─────────────────────────────────────────────────

    #[inline]
    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Heading in radians, `atan2(y, x)`.
    #[inline]
    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[inline]
    pub fn distance_squared(self, other: Vec2) -> f32 {
        (other - self).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Exactly zero in both components.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn is_normalized(self) -> bool {
        (self.length_squared() - 1.0).abs() < UNIT_EPSILON
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// `-1.0` if `other` lies to the left of `self` (negative perp-dot),
    /// otherwise `+1.0`.
    #[inline]
    pub fn sign(self, other: Vec2) -> f32 {
        if self.perpendicular().dot(other) < 0.0 { -1.0 } else { 1.0 }
    }

    // ── Derived vectors ───────────────────────────────────────────────────

    /// Unit vector in the same direction.  The zero vector normalizes to
    /// `(1, 0)` so callers never see NaN.
    #[inline]
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 {
            return Vec2::X;
        }
        self / len
    }

    /// Same direction, new length.  A zero vector keeps its zero heading and
    /// becomes `(length, 0)`.
    #[inline]
    pub fn with_length(self, length: f32) -> Vec2 {
        Vec2::from_angle(self.angle(), length)
    }

    /// Same length, new heading.
    #[inline]
    pub fn with_angle(self, angle: f32) -> Vec2 {
        Vec2::from_angle(angle, self.length())
    }

    /// Cap the length at `max`, preserving direction.
    #[inline]
    pub fn truncate(self, max: f32) -> Vec2 {
        let len_sq = self.length_squared();
        if len_sq > max * max {
            self * (max / len_sq.sqrt())
        } else {
            self
        }
    }

    /// `(-y, x)`: rotated a quarter turn counter-clockwise.
    #[inline]
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    #[inline]
    pub fn reverse(self) -> Vec2 {
        -self
    }

    /// Unsigned angle between two vectors in radians, `[0, π]`.
    ///
    /// Inputs that are not already unit length are normalized first.
    pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
        let a = if a.is_normalized() { a } else { a.normalize() };
        let b = if b.is_normalized() { b } else { b.normalize() };
        a.dot(b).clamp(-1.0, 1.0).acos()
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vec2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec2) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f32> for Vec2 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f32> for Vec2 {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Vec2::new(x, y)
    }
}
