//! The `World` struct and its frame loop.

use mf_agent::{Agent, AgentRngs, Animatable, Arrival, Shape, Steerable};
use mf_behavior::{BehaviorModel, FrameContext, Intent};
use mf_core::{
    AgentId, AgentRng, Boundary, ColorId, EdgeBehavior, ExplosionId, FrameClock, Millis, Rgb,
    SimRng, Vec2,
};
use mf_effect::ExplosionPool;
use mf_steering::{Neighbor, StepOutcome};
use tracing::{debug, trace, warn};

use crate::{
    AgentSnapshot, ExplosionSnapshot, NoopObserver, SimError, SimResult, TickStats, WorldObserver,
};

// ── Detonation constants ──────────────────────────────────────────────────────

/// Agents closer than this to a detonation flee it.
const SCARE_RADIUS: f32 = 200.0;
/// Extra flee speed at the blast center, fading linearly to 0 at the radius.
const SCARE_FORCE: f32 = 100.0;
/// Steering force cap given to scared agents.
const SCARED_MAX_FORCE: f32 = 0.9;
/// Flee duration is `SCARE_MIN_MS + u · SCARE_SPREAD_MS`.
const SCARE_MIN_MS: u64 = 500;
const SCARE_SPREAD_MS: f32 = 500.0;

// ── World ─────────────────────────────────────────────────────────────────────

/// The agent and explosion pools plus everything needed to step them.
///
/// `World<B>` drives the four-phase frame:
///
/// 1. **Snapshot** every agent's kinematic state and target color.
/// 2. **Steering phase** (optionally parallel with the `parallel` feature):
///    per agent, apply the behavior model's [`Intent`]s, then run the agent's
///    animator, flee override and seeker.  Cross-agent reads go through the
///    snapshot only.
/// 3. **Integration phase**: apply each accumulated force and move the body.
/// 4. **Effects**: advance every awake explosion.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct World<B: BehaviorModel> {
    agents:        Vec<Agent>,
    rngs:          AgentRngs,
    explosions:    ExplosionPool,
    rng:           SimRng,
    boundary:      Option<Boundary>,
    edge_behavior: EdgeBehavior,

    /// The behavior model.  Hosts may swap its internal mode between frames.
    pub behavior: B,
}

impl<B: BehaviorModel> World<B> {
    pub(crate) fn from_parts(
        agents:        Vec<Agent>,
        rngs:          AgentRngs,
        explosions:    ExplosionPool,
        rng:           SimRng,
        boundary:      Option<Boundary>,
        edge_behavior: EdgeBehavior,
        behavior:      B,
    ) -> Self {
        Self { agents, rngs, explosions, rng, boundary, edge_behavior, behavior }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: AgentId) -> SimResult<&Agent> {
        self.agents.get(id.index()).ok_or(SimError::AgentNotFound(id))
    }

    fn agent_mut(&mut self, id: AgentId) -> SimResult<&mut Agent> {
        self.agents.get_mut(id.index()).ok_or(SimError::AgentNotFound(id))
    }

    #[inline]
    pub fn explosions(&self) -> &ExplosionPool {
        &self.explosions
    }

    #[inline]
    pub fn boundary(&self) -> Option<Boundary> {
        self.boundary
    }

    #[inline]
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge_behavior
    }

    // ── Snapshots ─────────────────────────────────────────────────────────

    pub fn agent_snapshots(&self) -> Vec<AgentSnapshot> {
        self.agents.iter().map(AgentSnapshot::of).collect()
    }

    pub fn explosion_snapshots(&self) -> Vec<ExplosionSnapshot> {
        self.explosions.iter().map(ExplosionSnapshot::of).collect()
    }

    // ── Frame loop ────────────────────────────────────────────────────────

    /// Advance one frame at time `now`.
    pub fn tick(&mut self, now: Millis) -> TickStats {
        self.tick_with(now, &mut NoopObserver)
    }

    /// Advance one frame at time `now`, reporting to `observer`.
    pub fn tick_with<O: WorldObserver>(&mut self, now: Millis, observer: &mut O) -> TickStats {
        observer.on_tick_start(now);

        // ── Phase 1: snapshot ─────────────────────────────────────────────
        let neighbors: Vec<Neighbor> = self.agents.iter().map(Agent::neighbor).collect();
        let colors: Vec<ColorId> = self.agents.iter().map(Agent::color_id).collect();
        let ctx = FrameContext::new(now, self.boundary, &neighbors, &colors);

        // ── Phase 2: steering ─────────────────────────────────────────────
        let arrivals = self.steer_all(&ctx);

        // ── Phase 3: integration ──────────────────────────────────────────
        let mut skipped = 0;
        for agent in &mut self.agents {
            if agent.integrate() == StepOutcome::Skipped {
                warn!(agent = %agent.id(), "non-finite steering force, frame skipped");
                skipped += 1;
            }
        }

        // ── Phase 4: effects ──────────────────────────────────────────────
        let explosions_awake = self.explosions.update();

        for arrival in &arrivals {
            trace!(agent = %arrival.agent, x = arrival.target.x, y = arrival.target.y, "arrived");
            observer.on_arrival(arrival.agent, now);
        }

        let stats = TickStats { arrivals: arrivals.len(), skipped, explosions_awake };
        observer.on_tick_end(now, &stats);
        stats
    }

    /// Run `n` frames, reading `now` from `clock` and advancing it after each.
    pub fn run_frames<O: WorldObserver>(
        &mut self,
        n:        u64,
        clock:    &mut FrameClock,
        observer: &mut O,
    ) {
        for _ in 0..n {
            self.tick_with(clock.now(), observer);
            clock.advance();
        }
    }

    /// Steering phase over every agent.  Returns arrivals in `AgentId` order.
    fn steer_all(&mut self, ctx: &FrameContext<'_>) -> Vec<Arrival> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let behavior = &self.behavior;
        let agents   = &mut self.agents;
        let rngs     = &mut self.rngs.inner;

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter_mut()
                .zip(rngs.iter_mut())
                .filter_map(|(agent, rng)| steer_agent(behavior, agent, ctx, rng))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .filter_map(|(agent, rng)| steer_agent(behavior, agent, ctx, rng))
                .collect()
        }
    }

    // ── Agent commands ────────────────────────────────────────────────────

    pub fn set_seek_target(&mut self, id: AgentId, target: Option<Vec2>) -> SimResult<()> {
        self.agent_mut(id)?.seeker.seek_target = target;
        Ok(())
    }

    pub fn set_final_destination(&mut self, id: AgentId, target: Option<Vec2>) -> SimResult<()> {
        self.agent_mut(id)?.seeker.final_destination = target;
        Ok(())
    }

    pub fn set_target_radius(&mut self, id: AgentId, radius: f32) -> SimResult<()> {
        self.agent_mut(id)?.set_target_radius(radius);
        Ok(())
    }

    pub fn set_target_shape(&mut self, id: AgentId, shape: Shape) -> SimResult<()> {
        self.agent_mut(id)?.set_shape(shape);
        Ok(())
    }

    pub fn set_target_color(&mut self, id: AgentId, color: Rgb) -> SimResult<()> {
        self.agent_mut(id)?.set_target_color(color);
        Ok(())
    }

    pub fn set_target_max_speed(&mut self, id: AgentId, max_speed: f32) -> SimResult<()> {
        self.agent_mut(id)?.set_target_max_speed(max_speed);
        Ok(())
    }

    /// Make `id` flee `origin` until `until`, starting at `speed`.
    pub fn flee_from(
        &mut self,
        id:     AgentId,
        origin: Vec2,
        until:  Millis,
        speed:  f32,
    ) -> SimResult<()> {
        self.agent_mut(id)?.flee_from(origin, until, speed);
        Ok(())
    }

    // ── Direct writes ─────────────────────────────────────────────────────

    pub fn set_position(&mut self, id: AgentId, position: Vec2) -> SimResult<()> {
        self.agent_mut(id)?.body.position = position;
        Ok(())
    }

    pub fn set_velocity(&mut self, id: AgentId, velocity: Vec2) -> SimResult<()> {
        self.agent_mut(id)?.body.velocity = velocity;
        Ok(())
    }

    /// Set the radius immediately, without easing.
    pub fn set_radius(&mut self, id: AgentId, radius: f32) -> SimResult<()> {
        self.agent_mut(id)?.snap_radius(radius);
        Ok(())
    }

    /// Set the current color immediately; the target color is unchanged.
    pub fn set_color(&mut self, id: AgentId, color: Rgb) -> SimResult<()> {
        self.agent_mut(id)?.set_color(color);
        Ok(())
    }

    pub fn set_max_force(&mut self, id: AgentId, max_force: f32) -> SimResult<()> {
        self.agent_mut(id)?.steering.set_max_force(max_force);
        Ok(())
    }

    pub fn set_flock_index(&mut self, id: AgentId, flock_index: u32) -> SimResult<()> {
        self.agent_mut(id)?.steering.set_flock_index(flock_index);
        Ok(())
    }

    // ── Explosions ────────────────────────────────────────────────────────

    /// Start an explosion in the last inert slot.  `None` when the pool is
    /// full; nothing changes in that case.
    pub fn trigger_explosion(&mut self, position: Vec2, color: Rgb) -> Option<ExplosionId> {
        self.explosions.trigger(position, color)
    }

    /// Trigger an explosion and scare every agent near it.
    ///
    /// Only when a slot was free: each agent closer than 200 takes the blast
    /// color (current and target), a 0.9 force cap, and flees `position` for
    /// 500–1000 ms starting at `max_speed + 100 · (1 − d / 200)`.
    pub fn detonate(&mut self, position: Vec2, color: Rgb, now: Millis) -> Option<ExplosionId> {
        let id = self.explosions.trigger(position, color)?;

        let mut scared = 0usize;
        for agent in &mut self.agents {
            let d = agent.body.position.distance(position);
            if d >= SCARE_RADIUS {
                continue;
            }
            let speed = (1.0 - (d / SCARE_RADIUS).min(1.0)) * SCARE_FORCE + agent.body.max_speed();
            let until = now + SCARE_MIN_MS + (self.rng.unit() * SCARE_SPREAD_MS) as u64;

            agent.steering.set_max_force(SCARED_MAX_FORCE);
            agent.set_color(color);
            agent.set_target_color(color);
            agent.flee_from(position, until, speed);
            scared += 1;
        }

        debug!(explosion = %id, scared, "detonation");
        Some(id)
    }

    // ── World-wide settings ───────────────────────────────────────────────

    /// Replace the boundary on every body.  `None` removes it.
    pub fn set_boundary(&mut self, boundary: Option<Boundary>) -> SimResult<()> {
        let boundary = boundary.map(Boundary::validated).transpose()?;
        for agent in &mut self.agents {
            agent.body.set_boundary(boundary);
        }
        self.boundary = boundary;
        debug!(?boundary, "boundary changed");
        Ok(())
    }

    pub fn set_edge_behavior(&mut self, edge_behavior: EdgeBehavior) {
        for agent in &mut self.agents {
            agent.body.set_edge_behavior(edge_behavior);
        }
        self.edge_behavior = edge_behavior;
    }
}

// ── Steering phase helpers ────────────────────────────────────────────────────

/// One agent's steering phase: behavior intents, then its own state machines.
pub(crate) fn steer_agent<B: BehaviorModel>(
    behavior: &B,
    agent:    &mut Agent,
    ctx:      &FrameContext<'_>,
    rng:      &mut AgentRng,
) -> Option<Arrival> {
    for intent in behavior.steer(agent, ctx, rng) {
        apply_intent(agent, intent, ctx, rng);
    }
    agent.steer(ctx.now, rng)
}

fn apply_intent(agent: &mut Agent, intent: Intent, ctx: &FrameContext<'_>, rng: &mut AgentRng) {
    match intent {
        Intent::Wander { avoid_boundary } => agent.wander(avoid_boundary, rng),

        Intent::Seek { target, arrive, arrive_distance } => {
            agent.seek(target, arrive.then_some(arrive_distance));
        }

        Intent::Flee { from, avoid_boundary } => agent.flee(from, avoid_boundary),

        Intent::Pursue(target) => {
            if target != agent.id() {
                if let Some(n) = ctx.neighbor(target) {
                    agent.pursue(n);
                }
            }
        }

        Intent::Flock { members, anchor } => {
            let group: Vec<Neighbor> = members
                .iter()
                .filter_map(|&id| ctx.neighbor(id))
                .copied()
                .collect();
            agent.flock(&group, anchor, rng);
        }

        Intent::Halt => agent.halt(),
    }
}
