//! The `BehaviorModel` trait — the main extension point for host code.

use mf_agent::Agent;
use mf_core::AgentRng;

use crate::{BehaviorResult, FrameContext, Intent};

/// Pluggable agent behavior.
///
/// Implement this trait to decide how agents steer each frame on top of their
/// own target seeking.  `steer` receives the agent read-only, the shared
/// [`FrameContext`] and the agent's own [`AgentRng`], so behavior is
/// deterministic regardless of thread ordering.
///
/// # Thread safety
///
/// With the `parallel` feature mf-sim calls `steer` for many agents at once
/// via Rayon, so implementations must be `Send + Sync`.  Per-agent state
/// belongs on the agent (targets, flock index, colors), not in the model.
///
/// # Example
///
/// ```rust
/// use mf_agent::Agent;
/// use mf_behavior::{BehaviorModel, FrameContext, Intent};
/// use mf_core::AgentRng;
///
/// /// Flock with everything of the same color; wander when alone.
/// struct ColorFlocks;
///
/// impl BehaviorModel for ColorFlocks {
///     fn steer(&self, agent: &Agent, ctx: &FrameContext<'_>, _rng: &mut AgentRng) -> Vec<Intent> {
///         let members = ctx.same_color(agent);
///         if members.is_empty() {
///             vec![Intent::Wander { avoid_boundary: 50.0 }]
///         } else {
///             vec![Intent::Flock { members, anchor: None }]
///         }
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Called once per agent per frame, before the agent's own seeker runs.
    ///
    /// An empty `Vec` leaves the agent to its seeker and flee override.
    fn steer(
        &self,
        agent: &Agent,
        ctx:   &FrameContext<'_>,
        rng:   &mut AgentRng,
    ) -> Vec<Intent>;

    /// Checked once when the world is built.
    ///
    /// Default: always valid.
    fn validate(&self) -> BehaviorResult<()> {
        Ok(())
    }
}
