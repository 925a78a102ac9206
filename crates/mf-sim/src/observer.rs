//! World observer trait for progress reporting and host reactions.

use mf_core::{AgentId, Millis};

/// Per-frame counters returned by [`World::tick`][crate::World::tick].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickStats {
    /// Agents that woke from an arrival sleep this frame.
    pub arrivals:         usize,
    /// Agents whose update was skipped for a non-finite steering force.
    pub skipped:          usize,
    /// Explosions still awake after the frame.
    pub explosions_awake: usize,
}

/// Callbacks invoked by [`World::tick_with`][crate::World::tick_with] and
/// [`World::run_frames`][crate::World::run_frames].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — arrival counter
///
/// ```rust
/// use mf_core::{AgentId, Millis};
/// use mf_sim::WorldObserver;
///
/// #[derive(Default)]
/// struct Arrivals(Vec<AgentId>);
///
/// impl WorldObserver for Arrivals {
///     fn on_arrival(&mut self, agent: AgentId, _now: Millis) {
///         self.0.push(agent);
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each frame, before the snapshot is taken.
    fn on_tick_start(&mut self, _now: Millis) {}

    /// Called once for every agent that completed an arrival (slept at its
    /// target and woke up) this frame, in ascending `AgentId` order.
    fn on_arrival(&mut self, _agent: AgentId, _now: Millis) {}

    /// Called at the end of each frame, after explosions advanced.
    fn on_tick_end(&mut self, _now: Millis, _stats: &TickStats) {}
}

/// A [`WorldObserver`] that does nothing.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
