//! Fluent builder for constructing a [`World`].

use mf_agent::AgentPoolBuilder;
use mf_behavior::BehaviorModel;
use mf_core::{SimRng, Vec2};
use mf_effect::ExplosionPool;
use tracing::debug;

use crate::{SimError, SimResult, World, WorldConfig};

/// Fluent builder for [`World<B>`].
///
/// # Required inputs
///
/// - [`WorldConfig`]: pool sizes, seed, boundary, per-agent parameters
/// - `B: BehaviorModel`: the host behavior (e.g. [`mf_behavior::IdleBehavior`])
///
/// # Optional inputs
///
/// | Method                  | Default                                       |
/// |-------------------------|-----------------------------------------------|
/// | `.initial_positions(v)` | Boundary center (origin without a boundary)   |
/// | `.scatter()`            | Off                                           |
/// | `.radius_range(a, b)`   | `config.agent.body.radius` for everyone       |
///
/// # Example
///
/// ```rust
/// use mf_behavior::IdleBehavior;
/// use mf_core::{Boundary, Millis};
/// use mf_sim::{WorldBuilder, WorldConfig};
///
/// let config = WorldConfig {
///     agent_count: 16,
///     boundary:    Some(Boundary::from_size(640.0, 480.0)),
///     ..WorldConfig::default()
/// };
/// let mut world = WorldBuilder::new(config, IdleBehavior).scatter().build()?;
/// world.tick(Millis(0));
/// assert_eq!(world.agent_snapshots().len(), 16);
/// # Ok::<(), mf_sim::SimError>(())
/// ```
pub struct WorldBuilder<B: BehaviorModel> {
    config:       WorldConfig,
    behavior:     B,
    positions:    Option<Vec<Vec2>>,
    scatter:      bool,
    radius_range: Option<(f32, f32)>,
}

impl<B: BehaviorModel> WorldBuilder<B> {
    pub fn new(config: WorldConfig, behavior: B) -> Self {
        Self {
            config,
            behavior,
            positions:    None,
            scatter:      false,
            radius_range: None,
        }
    }

    /// Explicit starting position per agent (must be length `agent_count`).
    /// Takes precedence over [`scatter`](Self::scatter).
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Place agents uniformly inside the boundary.
    pub fn scatter(mut self) -> Self {
        self.scatter = true;
        self
    }

    /// Give each agent a random initial radius in `[min, max)`.
    pub fn radius_range(mut self, min: f32, max: f32) -> Self {
        self.radius_range = Some((min, max));
        self
    }

    /// Validate inputs, allocate both pools and return a ready-to-tick
    /// [`World`].
    pub fn build(self) -> SimResult<World<B>> {
        self.config.validate()?;
        self.behavior.validate()?;

        let agent_count = self.config.agent_count;

        if let Some(p) = &self.positions {
            if p.len() != agent_count {
                return Err(SimError::PoolSizeMismatch {
                    expected: agent_count,
                    got:      p.len(),
                    what:     "initial positions",
                });
            }
        }
        if let Some((min, max)) = self.radius_range {
            if !(min.is_finite() && max.is_finite() && 0.0 <= min && min <= max) {
                return Err(SimError::Config(format!("invalid radius range [{min}, {max})")));
            }
        }

        // ── Agent pool ────────────────────────────────────────────────────
        let mut params = self.config.agent.clone();
        params.body.edge_behavior = self.config.edge_behavior;

        let mut pool = AgentPoolBuilder::new(agent_count, self.config.seed).params(params);
        if let Some(boundary) = self.config.boundary {
            pool = pool.boundary(boundary);
        }
        if self.scatter {
            pool = pool.scatter();
        }
        if let Some((min, max)) = self.radius_range {
            pool = pool.radius_range(min, max);
        }
        let (mut agents, rngs) = pool.build();

        if let Some(positions) = self.positions {
            for (agent, position) in agents.iter_mut().zip(positions) {
                agent.body.position = position;
            }
        }

        // ── Explosion pool ────────────────────────────────────────────────
        let explosions = ExplosionPool::new(self.config.explosion_count, &self.config.explosion);

        debug!(
            agents     = agent_count,
            explosions = explosions.capacity(),
            seed       = self.config.seed,
            "world built"
        );

        Ok(World::from_parts(
            agents,
            rngs,
            explosions,
            SimRng::new(self.config.seed),
            self.config.boundary,
            self.config.edge_behavior,
            self.behavior,
        ))
    }
}
