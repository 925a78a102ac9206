//! Sleep/wake target seeking.
//!
//! ```text
//!            reach target (< 50)                  now > wake_at, still near
//!  Awake ─────────────────────────▶ Asleep ────────────────────────────────▶ Awake
//!        schedule wake_at =                       report Arrival
//!        now + min + u·(max − min)
//! ```
//!
//! While a target exists, each frame either wanders (probability 0.5 awake,
//! 0.2 asleep) or seeks the target with the default arrival band.  Without a
//! target the seeker does nothing and never changes state.

use mf_core::{AgentId, AgentRng, Millis, Vec2};
use mf_motion::Kinematics;
use mf_steering::{DEFAULT_ARRIVE_DISTANCE, Steering};

use crate::SeekerParams;

/// Distance from the target that counts as "there".
const ARRIVAL_RADIUS: f32 = 50.0;
const ARRIVAL_RADIUS_SQ: f32 = ARRIVAL_RADIUS * ARRIVAL_RADIUS;

const WANDER_CHANCE_AWAKE:  f32 = 0.5;
const WANDER_CHANCE_ASLEEP: f32 = 0.2;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SleepState {
    #[default]
    Awake,
    Asleep { wake_at: Millis },
}

/// Reported when an agent wakes up next to its target.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Arrival {
    pub agent:  AgentId,
    pub target: Vec2,
    pub at:     Millis,
}

#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seeker {
    /// Short-term target; takes precedence over `final_destination`.
    pub seek_target:       Option<Vec2>,
    pub final_destination: Option<Vec2>,
    state:  SleepState,
    params: SeekerParams,
}

impl Seeker {
    pub fn new(params: SeekerParams) -> Self {
        Self { params, ..Self::default() }
    }

    #[inline]
    pub fn target(&self) -> Option<Vec2> {
        self.seek_target.or(self.final_destination)
    }

    #[inline]
    pub fn state(&self) -> SleepState {
        self.state
    }

    #[inline]
    pub fn is_sleeping(&self) -> bool {
        matches!(self.state, SleepState::Asleep { .. })
    }

    pub fn params(&self) -> &SeekerParams {
        &self.params
    }

    /// Wake up without reporting an arrival.
    pub fn reset(&mut self) {
        self.state = SleepState::Awake;
    }

    /// One frame of target seeking: add a wander or seek force, then run the
    /// sleep/wake transition.  Returns the arrival on the wake-up frame.
    pub fn step(
        &mut self,
        steering: &mut Steering,
        body:     &Kinematics,
        now:      Millis,
        rng:      &mut AgentRng,
    ) -> Option<Arrival> {
        let target = self.target()?;

        let wander_chance = if self.is_sleeping() { WANDER_CHANCE_ASLEEP } else { WANDER_CHANCE_AWAKE };
        if rng.unit() < wander_chance {
            steering.wander(body, 0.0, rng);
        } else {
            steering.seek(body, target, Some(DEFAULT_ARRIVE_DISTANCE));
        }

        if body.position.distance_squared(target) >= ARRIVAL_RADIUS_SQ {
            return None;
        }

        match self.state {
            SleepState::Awake => {
                self.state = SleepState::Asleep { wake_at: now + self.sleep_duration(rng) };
                None
            }
            SleepState::Asleep { wake_at } if now > wake_at => {
                self.state = SleepState::Awake;
                Some(Arrival { agent: body.id, target, at: now })
            }
            SleepState::Asleep { .. } => None,
        }
    }

    fn sleep_duration(&self, rng: &mut AgentRng) -> u64 {
        let min = self.params.min_sleep_ms;
        let span = self.params.max_sleep_ms.saturating_sub(min);
        min + (rng.unit() * span as f32) as u64
    }
}
