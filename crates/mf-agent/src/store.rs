//! Per-agent RNG storage.
//!
//! # Why a separate struct?
//!
//! The steering phase needs `&mut Agent` and `&mut AgentRng` for the same
//! agent while other world state (the neighbor snapshot, the behavior model)
//! is borrowed immutably.  Keeping RNGs out of `Agent` lets the world zip
//! the two pools:
//!
//! ```ignore
//! agents.par_iter_mut()
//!     .zip(rngs.inner.par_iter_mut())
//!     .map(|(agent, rng)| agent.steer(now, rng))
//! ```

use mf_core::{AgentId, AgentRng};

/// Per-agent deterministic RNG state, index-aligned with the agent pool.
///
/// `AgentRngs` is `Send` but not meant to be shared: each agent's RNG is
/// touched only by whoever is stepping that agent.
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from `global_seed`.
    pub fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
