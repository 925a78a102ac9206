//! Flocking: cohesion, separation and alignment over a neighbor snapshot.

use mf_core::{AgentId, AgentRng, Vec2};
use mf_motion::Kinematics;

use crate::Steering;
use crate::steering::DEFAULT_ARRIVE_DISTANCE;

/// Weight of the neighbor centroid when blending it with a flock anchor.
const CENTROID_WEIGHT: f32 = 0.75;

/// Read-only copy of another agent's kinematic state, taken before the frame
/// started so every agent flocks against the same picture of the world.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Neighbor {
    pub id:          AgentId,
    pub position:    Vec2,
    pub velocity:    Vec2,
    pub flock_index: u32,
}

impl Neighbor {
    pub fn of(body: &Kinematics, flock_index: u32) -> Self {
        Self {
            id:       body.id,
            position: body.position,
            velocity: body.velocity,
            flock_index,
        }
    }
}

/// Unit heading; `+x` when stationary.
#[inline]
fn heading(velocity: Vec2) -> Vec2 {
    if velocity.is_zero() { Vec2::X } else { velocity.normalize() }
}

impl Steering {
    /// Flock with `neighbors`, optionally pulled toward `anchor`.
    ///
    /// One pass over the slice.  Entries with the body's own id are skipped;
    /// the rest count only if [in sight](Self::is_in_sight).  Each in-sight
    /// neighbor closer than `flock_buffer` is also fled.  Afterwards:
    ///
    /// - some in sight: seek the neighbor centroid (blended 75/25 with the
    ///   anchor when given, arrival per `flock_arrive` / `flock_buffer`) and
    ///   steer toward the neighbors' mean velocity;
    /// - none in sight: seek the anchor, or wander without one.
    pub fn flock(
        &mut self,
        body:      &Kinematics,
        neighbors: &[Neighbor],
        anchor:    Option<Vec2>,
        rng:       &mut AgentRng,
    ) {
        let heading = heading(body.velocity);
        let mut sum_velocity = Vec2::ZERO;
        let mut sum_position = Vec2::ZERO;
        let mut in_sight = 0u32;

        for n in neighbors {
            if n.id == body.id || !self.sees(body, heading, n.position, n.flock_index) {
                continue;
            }
            sum_velocity += n.velocity;
            sum_position += n.position;
            if body.position.distance_squared(n.position) < self.flock_buffer_sq {
                self.flee(body, n.position, 0.0);
            }
            in_sight += 1;
        }

        if in_sight == 0 {
            match anchor {
                Some(a) => self.seek(body, a, Some(DEFAULT_ARRIVE_DISTANCE)),
                None    => self.wander(body, 0.0, rng),
            }
            return;
        }

        let count = in_sight as f32;
        let centroid = sum_position / count;
        let target = match anchor {
            Some(a) => centroid * CENTROID_WEIGHT + a * (1.0 - CENTROID_WEIGHT),
            None    => centroid,
        };
        let arrive = self.params().flock_arrive.then_some(self.params().flock_buffer);
        self.seek(body, target, arrive);
        self.add_force(sum_velocity / count - body.velocity);
    }

    /// `true` if a point is a flocking candidate: same group (when this agent
    /// has a non-zero `flock_index`), within `flock_vicinity`, and not behind
    /// the current heading.
    pub fn is_in_sight(&self, body: &Kinematics, position: Vec2, flock_index: u32) -> bool {
        self.sees(body, heading(body.velocity), position, flock_index)
    }

    /// `true` if a point of the same group is inside `flock_buffer`.
    pub fn is_too_close(&self, body: &Kinematics, position: Vec2, flock_index: u32) -> bool {
        self.same_group(flock_index)
            && body.position.distance_squared(position) < self.flock_buffer_sq
    }

    #[inline]
    fn same_group(&self, flock_index: u32) -> bool {
        let own = self.params().flock_index;
        own == 0 || own == flock_index
    }

    fn sees(&self, body: &Kinematics, heading: Vec2, position: Vec2, flock_index: u32) -> bool {
        if !self.same_group(flock_index) {
            return false;
        }
        let d = position - body.position;
        if d.length_squared() > self.flock_vicinity_sq {
            return false;
        }
        d.dot(heading) >= 0.0
    }
}
