//! RGB colors, color grouping keys, and the palette helpers hosts use to pick
//! target colors.

use std::f32::consts::PI;
use std::fmt;

use rand::Rng;

/// An RGB color with channels in `[0, 255]`.
///
/// Channels are `f32` because the animator eases them continuously; only the
/// rendered value and [`ColorId`] round to integers.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0,   g: 0.0,   b: 0.0 };
    pub const WHITE: Rgb = Rgb { r: 255.0, g: 255.0, b: 255.0 };

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub fn channels(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_channels([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b }
    }

    /// Every channel clamped into `[0, 255]`.
    #[inline]
    pub fn clamped(self) -> Rgb {
        Rgb::new(
            self.r.clamp(0.0, 255.0),
            self.g.clamp(0.0, 255.0),
            self.b.clamp(0.0, 255.0),
        )
    }

    /// Channels rounded to bytes, for renderers.
    #[inline]
    pub fn to_u8(self) -> [u8; 3] {
        let c = self.clamped();
        [c.r.round() as u8, c.g.round() as u8, c.b.round() as u8]
    }

    /// Grouping key: two colors with the same rounded channels share an id.
    #[inline]
    pub fn id(self) -> ColorId {
        let [r, g, b] = self.to_u8();
        ColorId(u32::from(r) << 16 | u32::from(g) << 8 | u32::from(b))
    }

    // ── Palette ───────────────────────────────────────────────────────────

    /// A saturated color: one random channel is 0, the other two are drawn
    /// from `155..255`.
    pub fn random_vivid<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
        let dark = rng.gen_range(0..3usize);
        let mut c = [0.0f32; 3];
        for (i, channel) in c.iter_mut().enumerate() {
            if i != dark {
                *channel = 155.0 + rng.gen_range(0..100u32) as f32;
            }
        }
        Rgb::from_channels(c)
    }

    /// `count` independent [`random_vivid`](Self::random_vivid) colors.
    pub fn palette<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Rgb> {
        (0..count).map(|_| Rgb::random_vivid(rng)).collect()
    }

    /// Map a scalar (typically noise in `[0, 1]`) onto a smooth sine ramp
    /// from red through green to blue.  Out-of-range channels are clamped.
    pub fn from_noise(value: f32) -> Rgb {
        Rgb::new(
            (PI + value * PI).cos() * 255.0,
            (PI * 0.5 + value * PI).sin() * 255.0,
            (value * PI).sin() * 255.0,
        )
        .clamped()
    }
}

// ── ColorId ───────────────────────────────────────────────────────────────────

/// Packed `0xRRGGBB` key derived from a color's rounded channels.  Hosts group
/// agents into flocks by the id of their *target* color.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorId(pub u32);

impl ColorId {
    #[inline]
    pub fn rgb(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb();
        write!(f, "{r}_{g}_{b}")
    }
}
