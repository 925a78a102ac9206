//! Per-agent construction parameters.

use mf_motion::BodyParams;
use mf_steering::SteeringParams;

/// Easing speeds for the animator channels.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnimatorParams {
    /// Radius acceleration per frame.  Default: 0.01.
    pub radius_speed: f32,
    /// Shape-step acceleration per frame.  Default: 0.01.
    pub shape_speed: f32,
    /// Color channel acceleration per frame.  Default: 0.05.
    pub color_speed: f32,
    /// Per-frame decay factor while max speed is above its target.  Default: 0.95.
    pub max_speed_decay: f32,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            radius_speed:    0.01,
            shape_speed:     0.01,
            color_speed:     0.05,
            max_speed_decay: 0.95,
        }
    }
}

/// Sleep durations for the target-seeking state machine, in milliseconds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SeekerParams {
    /// Default: 1 000.
    pub min_sleep_ms: u64,
    /// Default: 3 000.
    pub max_sleep_ms: u64,
}

impl Default for SeekerParams {
    fn default() -> Self {
        Self { min_sleep_ms: 1_000, max_sleep_ms: 3_000 }
    }
}

/// Everything needed to construct one [`Agent`][crate::Agent].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentParams {
    pub body:     BodyParams,
    pub steering: SteeringParams,
    pub animator: AnimatorParams,
    pub seeker:   SeekerParams,
}
