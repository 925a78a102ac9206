//! A single expanding, fading pulse.

use mf_core::{ExplosionId, Rgb, Vec2};

/// `life` at or below this is treated as spent, so `⌈1 / decay⌉` frames is
/// exact despite `f32` rounding in the repeated subtraction.
const LIFE_EPSILON: f32 = 1e-6;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExplosionParams {
    /// Radius growth per frame.  Default: 20.
    pub expansion_speed: f32,
    /// Life lost per frame.  Default: 0.05 (20 frames).
    pub decay: f32,
}

impl Default for ExplosionParams {
    fn default() -> Self {
        Self { expansion_speed: 20.0, decay: 0.05 }
    }
}

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Explosion {
    pub id:              ExplosionId,
    pub position:        Vec2,
    pub color:           Rgb,
    pub expansion_speed: f32,
    pub decay:           f32,
    radius:              f32,
    life:                f32,
}

impl Explosion {
    /// An inert explosion.
    pub fn new(id: ExplosionId, params: &ExplosionParams) -> Self {
        Self {
            id,
            position:        Vec2::ZERO,
            color:           Rgb::WHITE,
            expansion_speed: params.expansion_speed,
            decay:           params.decay,
            radius:          0.0,
            life:            0.0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Remaining life in `[0, 1]`; renderers use it as opacity.
    #[inline]
    pub fn life(&self) -> f32 {
        self.life
    }

    #[inline]
    pub fn is_awake(&self) -> bool {
        self.life > 0.0
    }

    /// Restart the pulse: full life, zero radius.
    pub fn awake(&mut self) {
        self.life = 1.0;
        self.radius = 0.0;
    }

    /// Advance one frame.  Inert explosions are untouched.
    pub fn update(&mut self) {
        if !self.is_awake() {
            return;
        }
        self.radius += self.expansion_speed;
        self.life -= self.decay;
        if self.life <= LIFE_EPSILON {
            self.life = 0.0;
        }
    }
}
