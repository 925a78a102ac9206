//! Read-only frame state passed to every behavior callback.

use mf_agent::Agent;
use mf_core::{AgentId, Boundary, ColorId, Millis};
use mf_steering::Neighbor;

/// A read-only snapshot of the world passed to every
/// [`BehaviorModel`][crate::BehaviorModel] call.
///
/// Built once per frame by mf-sim *before* any agent moves, and shared
/// immutably across the steering phase.
///
/// # Indexing
///
/// `neighbors` and `colors` are parallel slices indexed by `AgentId`:
/// `neighbors[id.index()]` is that agent's kinematic snapshot and
/// `colors[id.index()]` the [`ColorId`] of its *target* color.
pub struct FrameContext<'a> {
    /// The `now` passed to `World::tick`.
    pub now: Millis,

    /// Active world boundary, if any.
    pub boundary: Option<Boundary>,

    /// Kinematic snapshot of every agent.
    pub neighbors: &'a [Neighbor],

    /// Target-color grouping key of every agent.
    pub colors: &'a [ColorId],
}

impl<'a> FrameContext<'a> {
    #[inline]
    pub fn new(
        now:       Millis,
        boundary:  Option<Boundary>,
        neighbors: &'a [Neighbor],
        colors:    &'a [ColorId],
    ) -> Self {
        Self { now, boundary, neighbors, colors }
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.neighbors.len()
    }

    #[inline]
    pub fn neighbor(&self, id: AgentId) -> Option<&Neighbor> {
        self.neighbors.get(id.index())
    }

    #[inline]
    pub fn color_of(&self, id: AgentId) -> Option<ColorId> {
        self.colors.get(id.index()).copied()
    }

    /// Every other agent `agent` would flock with right now: in its group,
    /// within its flock vicinity and not behind its heading.
    pub fn in_sight_of(&self, agent: &Agent) -> Vec<AgentId> {
        let me = agent.id();
        self.neighbors
            .iter()
            .filter(|n| {
                n.id != me && agent.steering.is_in_sight(&agent.body, n.position, n.flock_index)
            })
            .map(|n| n.id)
            .collect()
    }

    /// Every other agent whose target color matches `agent`'s.
    pub fn same_color(&self, agent: &Agent) -> Vec<AgentId> {
        let me = agent.id();
        let color = agent.color_id();
        self.neighbors
            .iter()
            .zip(self.colors)
            .filter(|(n, c)| n.id != me && **c == color)
            .map(|(n, _)| n.id)
            .collect()
    }
}
