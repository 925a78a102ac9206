//! The agent aggregate.

use mf_core::{AgentId, AgentRng, ColorId, Millis, Rgb, Vec2};
use mf_motion::Kinematics;
use mf_steering::{Neighbor, Steering, StepOutcome};

use crate::{AgentParams, Animator, Arrival, Seeker};

/// Temporary forced flight from a point, set by [`Agent::flee_from`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleeOverride {
    pub origin: Vec2,
    pub until:  Millis,
}

/// One simulated agent: a body, its steering accumulator, a target seeker
/// and an attribute animator.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    pub body:     Kinematics,
    pub steering: Steering,
    pub seeker:   Seeker,
    pub animator: Animator,
    flee:         Option<FleeOverride>,
}

impl Agent {
    pub fn new(id: AgentId, position: Vec2, params: &AgentParams) -> Self {
        let body = Kinematics::new(id, position, &params.body);
        let animator = Animator::new(&body, &params.animator);
        Self {
            steering: Steering::new(params.steering.clone()),
            seeker:   Seeker::new(params.seeker.clone()),
            animator,
            body,
            flee:     None,
        }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.body.id
    }

    /// Grouping key of the agent's *target* color.
    #[inline]
    pub fn color_id(&self) -> ColorId {
        self.animator.color_id()
    }

    /// Read-only copy for other agents' cross-agent queries.
    #[inline]
    pub fn neighbor(&self) -> Neighbor {
        Neighbor::of(&self.body, self.steering.params().flock_index)
    }

    // ── Flee override ─────────────────────────────────────────────────────

    /// Flee `origin` until `until`, starting at `speed` (the max speed then
    /// eases back toward its target).
    pub fn flee_from(&mut self, origin: Vec2, until: Millis, speed: f32) {
        self.flee = Some(FleeOverride { origin, until });
        self.body.set_max_speed(speed);
    }

    #[inline]
    pub fn flee_override(&self) -> Option<FleeOverride> {
        self.flee
    }

    #[inline]
    pub fn is_fleeing(&self, now: Millis) -> bool {
        self.flee.is_some_and(|f| now < f.until)
    }

    // ── Direct writes ─────────────────────────────────────────────────────

    pub fn snap_radius(&mut self, radius: f32) {
        self.animator.snap_radius(&mut self.body, radius);
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.animator.set_color(&mut self.body, color);
    }

    // ── Frame step ────────────────────────────────────────────────────────

    /// Steering half of a frame: animate attributes, apply the flee override,
    /// run the seeker.  Only accumulates force; the body does not move.
    pub fn steer(&mut self, now: Millis, rng: &mut AgentRng) -> Option<Arrival> {
        self.animator.step(&mut self.body);

        if let Some(flee) = self.flee.filter(|f| now < f.until) {
            self.steering.flee(&self.body, flee.origin, 0.0);
        }

        self.seeker.step(&mut self.steering, &self.body, now, rng)
    }

    /// Integration half of a frame.
    #[inline]
    pub fn integrate(&mut self) -> StepOutcome {
        self.steering.apply(&mut self.body)
    }

    /// A whole frame for a stand-alone agent.
    pub fn update(&mut self, now: Millis, rng: &mut AgentRng) -> (Option<Arrival>, StepOutcome) {
        let arrival = self.steer(now, rng);
        (arrival, self.integrate())
    }
}
