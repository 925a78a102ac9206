//! World configuration.

use mf_agent::AgentParams;
use mf_core::{Boundary, EdgeBehavior};
use mf_effect::ExplosionParams;

use crate::{SimError, SimResult};

/// Everything needed to build a [`World`][crate::World].
///
/// With the `serde` feature this deserializes from a partial document:
/// every missing field takes its default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WorldConfig {
    /// Size of the agent pool.  Fixed for the life of the world.
    pub agent_count: usize,

    /// Size of the explosion pool.  At most `u16::MAX`.
    pub explosion_count: usize,

    /// Global RNG seed.  The same seed and command sequence reproduce a run
    /// exactly.
    pub seed: u64,

    /// Initial world boundary; `None` leaves bodies unbounded.
    pub boundary: Option<Boundary>,

    /// Edge policy installed on every body.  Overrides `agent.body.edge_behavior`.
    pub edge_behavior: EdgeBehavior,

    pub agent: AgentParams,

    pub explosion: ExplosionParams,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            agent_count:     144,
            explosion_count: 20,
            seed:            0,
            boundary:        None,
            edge_behavior:   EdgeBehavior::Wrap,
            agent:           AgentParams::default(),
            explosion:       ExplosionParams::default(),
        }
    }
}

impl WorldConfig {
    /// Reject values the engine cannot step sensibly.
    pub fn validate(&self) -> SimResult<()> {
        let body = &self.agent.body;
        non_negative("agent.body.max_speed", body.max_speed)?;
        non_negative("agent.body.radius", body.radius)?;
        non_negative("agent.steering.max_force", self.agent.steering.max_force)?;

        if !(body.mass.is_finite() && body.mass > 0.0) {
            return Err(SimError::Config(format!(
                "agent.body.mass must be positive, got {}",
                body.mass
            )));
        }

        let seeker = &self.agent.seeker;
        if seeker.min_sleep_ms > seeker.max_sleep_ms {
            return Err(SimError::Config(format!(
                "agent.seeker.min_sleep_ms ({}) exceeds max_sleep_ms ({})",
                seeker.min_sleep_ms, seeker.max_sleep_ms
            )));
        }

        if !(self.explosion.decay.is_finite() && self.explosion.decay > 0.0) {
            return Err(SimError::Config(format!(
                "explosion.decay must be positive, got {}",
                self.explosion.decay
            )));
        }
        if !self.explosion.expansion_speed.is_finite() {
            return Err(SimError::Config("explosion.expansion_speed must be finite".into()));
        }
        if self.explosion_count > u16::MAX as usize {
            return Err(SimError::Config(format!(
                "explosion_count {} exceeds {}",
                self.explosion_count,
                u16::MAX
            )));
        }

        if let Some(boundary) = self.boundary {
            boundary.validated()?;
        }
        Ok(())
    }
}

fn non_negative(what: &str, value: f32) -> SimResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SimError::Config(format!("{what} must be finite and non-negative, got {value}")))
    }
}
