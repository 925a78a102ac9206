//! Construction defaults for [`Kinematics`][crate::Kinematics].

use mf_core::{EdgeBehavior, Rgb};

/// Initial kinematic parameters shared by every agent in a pool.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BodyParams {
    /// Speed cap in units per frame.  Default: 0.75.
    pub max_speed: f32,
    /// Default: 5.
    pub radius: f32,
    /// Divides the applied steering force.  Default: 1.
    pub mass: f32,
    /// Face the direction of travel.  Default: `true`.
    pub auto_rotate: bool,
    pub edge_behavior: EdgeBehavior,
    pub color: Rgb,
    pub scale: f32,
}

impl Default for BodyParams {
    fn default() -> Self {
        Self {
            max_speed:     0.75,
            radius:        5.0,
            mass:          1.0,
            auto_rotate:   true,
            edge_behavior: EdgeBehavior::Wrap,
            color:         Rgb::WHITE,
            scale:         1.0,
        }
    }
}
