//! A behavior model that leaves agents to their own seekers.

use mf_agent::Agent;
use mf_core::AgentRng;

use crate::{BehaviorModel, FrameContext, Intent};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Agents still seek their targets, sleep, wake and flee explosions; only
/// host-driven steering is absent.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdleBehavior;

impl BehaviorModel for IdleBehavior {
    fn steer(
        &self,
        _agent: &Agent,
        _ctx:   &FrameContext<'_>,
        _rng:   &mut AgentRng,
    ) -> Vec<Intent> {
        vec![]
    }
}
