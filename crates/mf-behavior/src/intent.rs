//! Steering intents: what a behavior model asks an agent to do this frame.

use mf_core::{AgentId, Vec2};

/// A steering request for the agent currently being processed.
///
/// Intents are produced by [`BehaviorModel::steer`][crate::BehaviorModel::steer]
/// and applied by mf-sim in order, each adding to the agent's force
/// accumulator.  Several may be returned for one agent; they combine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intent {
    /// Random-walk ahead of the current heading, repelled from boundary edges
    /// closer than `avoid_boundary` (0 disables).
    Wander { avoid_boundary: f32 },

    /// Steer toward `target`, tapering inside the arrival band when `arrive`.
    Seek {
        target:          Vec2,
        arrive:          bool,
        arrive_distance: f32,
    },

    /// Steer away from `from`.
    Flee { from: Vec2, avoid_boundary: f32 },

    /// Intercept another agent using its snapshot position and velocity.
    ///
    /// Unknown ids are ignored.
    Pursue(AgentId),

    /// Flock with `members`, optionally pulled toward `anchor`.
    ///
    /// Members are resolved against the frame snapshot; the agent itself and
    /// unknown ids are skipped.
    Flock {
        members: Vec<AgentId>,
        anchor:  Option<Vec2>,
    },

    /// Drop the accumulated force and zero the velocity.
    Halt,
}

impl Intent {
    /// `Seek` with the default arrival taper.
    pub fn arrive_at(target: Vec2) -> Self {
        Intent::Seek {
            target,
            arrive:          true,
            arrive_distance: mf_steering::DEFAULT_ARRIVE_DISTANCE,
        }
    }

    /// `Seek` at full speed all the way.
    pub fn seek(target: Vec2) -> Self {
        Intent::Seek {
            target,
            arrive:          false,
            arrive_distance: mf_steering::DEFAULT_ARRIVE_DISTANCE,
        }
    }
}
