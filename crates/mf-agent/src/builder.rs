//! Fluent builder for an agent pool + its `AgentRngs` in one step.
//!
//! # Usage
//!
//! ```rust
//! use mf_agent::AgentPoolBuilder;
//! use mf_core::Boundary;
//!
//! let (agents, rngs) = AgentPoolBuilder::new(144, /*seed=*/ 42)
//!     .boundary(Boundary::from_size(1280.0, 720.0))
//!     .scatter()
//!     .radius_range(10.0, 20.0)
//!     .build();
//!
//! assert_eq!(agents.len(), 144);
//! assert_eq!(rngs.len(),   144);
//! ```

use mf_core::{AgentId, AgentRng, Boundary, Vec2};

use crate::{Agent, AgentParams, AgentRngs};

/// Fluent builder for a `Vec<Agent>` + [`AgentRngs`].
///
/// Randomised initial state (scatter, radius range) is drawn from each
/// agent's own RNG, so the same seed always produces the same pool.
pub struct AgentPoolBuilder {
    count:        usize,
    seed:         u64,
    params:       AgentParams,
    boundary:     Option<Boundary>,
    scatter:      bool,
    radius_range: Option<(f32, f32)>,
}

impl AgentPoolBuilder {
    /// Create a builder for `count` agents using `seed` as the global RNG seed.
    pub fn new(count: usize, seed: u64) -> Self {
        Self {
            count,
            seed,
            params:       AgentParams::default(),
            boundary:     None,
            scatter:      false,
            radius_range: None,
        }
    }

    /// Parameters shared by every agent.
    pub fn params(mut self, params: AgentParams) -> Self {
        self.params = params;
        self
    }

    /// Boundary installed on every body.
    pub fn boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = Some(boundary);
        self
    }

    /// Place agents uniformly inside the boundary inset by their own radius
    /// instead of at its center (or the origin without a boundary).
    pub fn scatter(mut self) -> Self {
        self.scatter = true;
        self
    }

    /// Give each agent a random initial radius in `[min, max)`.
    pub fn radius_range(mut self, min: f32, max: f32) -> Self {
        self.radius_range = Some((min, max));
        self
    }

    pub fn build(self) -> (Vec<Agent>, AgentRngs) {
        let mut rngs = AgentRngs::new(self.count, self.seed);
        let home = self.boundary.map_or(Vec2::ZERO, |b| b.center());

        let agents = rngs
            .inner
            .iter_mut()
            .enumerate()
            .map(|(i, rng)| {
                let radius = match self.radius_range {
                    Some((min, max)) => rng.range(min, max),
                    None => self.params.body.radius,
                };
                let position = match (self.scatter, self.boundary) {
                    (true, Some(b)) => scatter_point(b, radius, rng),
                    _ => home,
                };

                let mut agent = Agent::new(AgentId(i as u32), position, &self.params);
                agent.body.set_boundary(self.boundary);
                if self.radius_range.is_some() {
                    agent.snap_radius(radius);
                }
                agent
            })
            .collect();

        (agents, rngs)
    }
}

/// Uniform point at least `radius` inside every edge of `b`; the center when
/// the boundary is too small to hold the body.
fn scatter_point(b: Boundary, radius: f32, rng: &mut AgentRng) -> Vec2 {
    let inset = b.expand(-radius);
    if !inset.is_valid() {
        return b.center();
    }
    Vec2::new(rng.range(inset.left, inset.right), rng.range(inset.top, inset.bottom))
}
