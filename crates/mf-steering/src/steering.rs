//! The steering force accumulator and its single-target behaviors.

use mf_core::{AgentRng, Vec2};
use mf_motion::Kinematics;

use crate::SteeringParams;

/// Arrival distance used by `seek` when the caller has no preference.
pub const DEFAULT_ARRIVE_DISTANCE: f32 = 50.0;

/// What [`Steering::apply`] did this frame.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StepOutcome {
    /// Force applied (if any) and the body integrated.
    Integrated,
    /// The accumulated force was NaN or infinite: nothing moved this frame
    /// and the force was discarded.
    Skipped,
}

/// Steering state for one agent.
///
/// Squared copies of the distance parameters are cached; change parameters
/// through the setters or [`set_params`](Self::set_params) to keep them in
/// sync.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Steering {
    force:        Vec2,
    wander_angle: f32,
    params:       SteeringParams,

    pub(crate) max_force_sq:      f32,
    pub(crate) flock_vicinity_sq: f32,
    pub(crate) flock_buffer_sq:   f32,
}

impl Steering {
    pub fn new(params: SteeringParams) -> Self {
        let mut s = Self {
            force:             Vec2::ZERO,
            wander_angle:      0.0,
            params,
            max_force_sq:      0.0,
            flock_vicinity_sq: 0.0,
            flock_buffer_sq:   0.0,
        };
        s.refresh_cache();
        s
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn params(&self) -> &SteeringParams {
        &self.params
    }

    /// The force accumulated so far this frame.
    #[inline]
    pub fn force(&self) -> Vec2 {
        self.force
    }

    #[inline]
    pub fn wander_angle(&self) -> f32 {
        self.wander_angle
    }

    pub fn set_params(&mut self, params: SteeringParams) {
        self.params = params;
        self.refresh_cache();
    }

    pub fn set_max_force(&mut self, max_force: f32) {
        self.params.max_force = max_force;
        self.refresh_cache();
    }

    pub fn set_flock_index(&mut self, flock_index: u32) {
        self.params.flock_index = flock_index;
    }

    fn refresh_cache(&mut self) {
        let p = &self.params;
        self.max_force_sq      = p.max_force * p.max_force;
        self.flock_vicinity_sq = p.flock_vicinity * p.flock_vicinity;
        self.flock_buffer_sq   = p.flock_buffer * p.flock_buffer;
    }

    /// Add a raw force to the accumulator.
    #[inline]
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    // ── Frame step ────────────────────────────────────────────────────────

    /// Apply the accumulated force to `body` and integrate it.
    ///
    /// The accumulator is always empty afterwards, including when the frame
    /// is skipped for a non-finite force.
    pub fn apply(&mut self, body: &mut Kinematics) -> StepOutcome {
        let force = std::mem::take(&mut self.force);
        if !force.is_finite() {
            return StepOutcome::Skipped;
        }

        if !force.is_zero() {
            let len_sq = force.length_squared();
            let applied = if len_sq > self.max_force_sq {
                force * (self.params.max_force / len_sq.sqrt())
            } else {
                force
            };
            body.velocity += applied / body.mass;
        }

        body.integrate();
        StepOutcome::Integrated
    }

    /// Stop dead: zero both the accumulator and the body's velocity.
    pub fn clear(&mut self, body: &mut Kinematics) {
        self.force = Vec2::ZERO;
        body.velocity = Vec2::ZERO;
    }

    // ── Behaviors ─────────────────────────────────────────────────────────

    /// Steer toward `target`.
    ///
    /// With `arrive = Some(d)` (and a non-zero arrival threshold) the desired
    /// speed tapers linearly across the band `(d, d + threshold]`: full speed
    /// beyond it, `max_speed · (dist − d) / threshold` inside it.  Inside `d`
    /// the desired speed goes negative and the agent backs off.  With
    /// `arrive = None` the desired speed is always `max_speed`.
    pub fn seek(&mut self, body: &Kinematics, target: Vec2, arrive: Option<f32>) {
        let max_speed = body.max_speed();
        let threshold = self.params.arrival_threshold;
        let arriving = arrive.filter(|_| threshold != 0.0);
        let d = target - body.position;

        if d.is_zero() {
            let desired = match arriving {
                None    => Vec2::new(max_speed, 0.0),
                Some(_) => Vec2::ZERO,
            };
            self.force += desired - body.velocity;
            return;
        }

        let dist = d.length();
        let speed = match arriving {
            None => max_speed,
            Some(arrive_distance) => {
                let offset = dist - arrive_distance;
                if offset > threshold {
                    max_speed
                } else {
                    max_speed * (offset / threshold)
                }
            }
        };
        self.force += d * (speed / dist) - body.velocity;
    }

    /// Steer directly away from `target`.
    ///
    /// When `avoid_boundary > 0`, each boundary edge closer than that distance
    /// also pushes on the force.
    pub fn flee(&mut self, body: &Kinematics, target: Vec2, avoid_boundary: f32) {
        let d = target - body.position;
        if d.is_zero() {
            self.force -= Vec2::new(body.max_speed(), 0.0) - body.velocity;
            return;
        }
        self.force -= d * (body.max_speed() / d.length()) - body.velocity;
        self.avoid_boundary(body, avoid_boundary);
    }

    /// Seek the point where a target moving at `target_velocity` is predicted
    /// to be, looking ahead `dist / (max_speed · |v_t|)` frames.
    pub fn pursue(&mut self, body: &Kinematics, target: Vec2, target_velocity: Vec2) {
        if target_velocity.is_zero() {
            self.seek(body, target, Some(DEFAULT_ARRIVE_DISTANCE));
            return;
        }
        let lookahead =
            body.position.distance(target) / (body.max_speed() * target_velocity.length());
        let predicted = target + target_velocity * lookahead;
        self.seek(body, predicted, Some(DEFAULT_ARRIVE_DISTANCE));
    }

    /// Meander: push toward a point on a circle projected ahead of the
    /// heading, then jitter the circle angle by `wander_range · (u − 0.5)`.
    pub fn wander(&mut self, body: &Kinematics, avoid_boundary: f32, rng: &mut AgentRng) {
        let p = &self.params;
        let ahead = if body.velocity.is_zero() {
            Vec2::new(p.wander_distance, 0.0)
        } else {
            body.velocity * (p.wander_distance / body.velocity.length())
        };
        self.force += ahead + Vec2::from_angle(self.wander_angle, p.wander_radius);
        self.wander_angle += p.wander_range * (rng.unit() - 0.5);
        self.avoid_boundary(body, avoid_boundary);
    }

    /// Push back from every boundary edge within `distance`.
    fn avoid_boundary(&mut self, body: &Kinematics, distance: f32) {
        if distance <= 0.0 {
            return;
        }
        let Some(b) = body.boundary() else {
            return;
        };
        let p = body.position;

        let left = p.x - b.left;
        if left <= distance {
            self.force.x += left;
        }
        let right = b.right - p.x;
        if right <= distance {
            self.force.x -= right;
        }
        let top = p.y - b.top;
        if top <= distance {
            self.force.y += top;
        }
        let bottom = b.bottom - p.y;
        if bottom <= distance {
            self.force.y -= bottom;
        }
    }
}

impl Default for Steering {
    fn default() -> Self {
        Self::new(SteeringParams::default())
    }
}
