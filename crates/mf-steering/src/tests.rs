//! Unit tests for mf-steering.

use mf_core::{AgentId, AgentRng, Boundary, Vec2};
use mf_motion::{BodyParams, Kinematics};

use crate::{Neighbor, Steering, SteeringParams, StepOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn body_at(id: u32, x: f32, y: f32, max_speed: f32) -> Kinematics {
    let params = BodyParams { max_speed, ..BodyParams::default() };
    Kinematics::new(AgentId(id), Vec2::new(x, y), &params)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn approx_vec(a: Vec2, b: Vec2) -> bool {
    approx(a.x, b.x) && approx(a.y, b.y)
}

fn rng() -> AgentRng {
    AgentRng::new(99, AgentId(0))
}

// ── Force application ─────────────────────────────────────────────────────────

#[cfg(test)]
mod apply {
    use super::*;

    #[test]
    fn clamps_to_max_force_and_clears() {
        let mut body = body_at(0, 0.0, 0.0, 10.0);
        let mut s = Steering::default();
        s.add_force(Vec2::new(3.0, 4.0));
        assert_eq!(s.apply(&mut body), StepOutcome::Integrated);
        assert!(approx(body.velocity.length(), 0.1));
        assert!(approx_vec(body.velocity, Vec2::new(0.06, 0.08)));
        assert_eq!(s.force(), Vec2::ZERO);
        assert!(approx_vec(body.position, Vec2::new(0.06, 0.08)));
    }

    #[test]
    fn small_forces_are_divided_by_mass() {
        let mut body = body_at(0, 0.0, 0.0, 10.0);
        body.mass = 2.0;
        let mut s = Steering::default();
        s.add_force(Vec2::new(0.05, 0.0));
        s.apply(&mut body);
        assert!(approx(body.velocity.x, 0.025));
    }

    #[test]
    fn non_finite_force_skips_the_frame_and_recovers() {
        let mut body = body_at(0, 5.0, 5.0, 10.0);
        body.velocity = Vec2::new(1.0, 0.0);
        let mut s = Steering::default();
        s.add_force(Vec2::new(f32::NAN, 0.0));
        assert_eq!(s.apply(&mut body), StepOutcome::Skipped);
        assert_eq!(body.position, Vec2::new(5.0, 5.0));
        assert_eq!(s.force(), Vec2::ZERO);
        assert_eq!(s.apply(&mut body), StepOutcome::Integrated);
        assert_eq!(body.position, Vec2::new(6.0, 5.0));
    }

    #[test]
    fn clear_stops_dead() {
        let mut body = body_at(0, 0.0, 0.0, 1.0);
        body.velocity = Vec2::new(0.5, 0.5);
        let mut s = Steering::default();
        s.add_force(Vec2::new(1.0, 1.0));
        s.clear(&mut body);
        assert_eq!(s.force(), Vec2::ZERO);
        assert_eq!(body.velocity, Vec2::ZERO);
    }

    #[test]
    fn speed_never_exceeds_max_after_many_frames() {
        let mut body = body_at(0, 0.0, 0.0, 0.75);
        let mut s = Steering::default();
        for _ in 0..200 {
            s.seek(&body, Vec2::new(1_000.0, 300.0), None);
            s.apply(&mut body);
            assert!(body.velocity.length() <= 0.75 + 1e-5);
        }
    }
}

// ── Seek / flee / pursue ──────────────────────────────────────────────────────

#[cfg(test)]
mod seek {
    use super::*;

    #[test]
    fn band_upper_edge_is_full_speed() {
        // dist 100, arrive 50, threshold 50 → offset == threshold.
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.seek(&body, Vec2::new(100.0, 0.0), Some(50.0));
        assert!(approx_vec(s.force(), Vec2::new(1.0, 0.0)));
    }

    #[test]
    fn taper_is_linear_inside_the_band() {
        // dist 60 = arrive + threshold / 5 → 0.2 · max_speed.
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.seek(&body, Vec2::new(60.0, 0.0), Some(50.0));
        assert!(approx(s.force().length(), 0.2));
        assert!(s.force().x > 0.0);
    }

    #[test]
    fn inside_arrive_distance_backs_off() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.seek(&body, Vec2::new(40.0, 0.0), Some(50.0));
        assert!(approx(s.force().x, -0.2));
    }

    #[test]
    fn without_arrival_is_full_speed() {
        let body = body_at(0, 0.0, 0.0, 2.0);
        let mut s = Steering::default();
        s.seek(&body, Vec2::new(0.0, 10.0), None);
        assert!(approx_vec(s.force(), Vec2::new(0.0, 2.0)));
    }

    #[test]
    fn zero_threshold_disables_arrival() {
        let body = body_at(0, 0.0, 0.0, 2.0);
        let mut s = Steering::new(SteeringParams { arrival_threshold: 0.0, ..Default::default() });
        s.seek(&body, Vec2::new(10.0, 0.0), Some(50.0));
        assert!(approx_vec(s.force(), Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn on_target() {
        let mut body = body_at(0, 3.0, 3.0, 1.0);
        body.velocity = Vec2::new(0.5, 0.25);

        let mut arriving = Steering::default();
        arriving.seek(&body, Vec2::new(3.0, 3.0), Some(50.0));
        assert_eq!(arriving.force(), Vec2::new(-0.5, -0.25));

        let mut plain = Steering::default();
        plain.seek(&body, Vec2::new(3.0, 3.0), None);
        assert_eq!(plain.force(), Vec2::new(0.5, -0.25));
    }

    #[test]
    fn flee_is_reverse_desired_velocity() {
        let mut body = body_at(0, 0.0, 0.0, 1.0);
        body.velocity = Vec2::new(0.0, 0.5);
        let mut s = Steering::default();
        s.flee(&body, Vec2::new(10.0, 0.0), 0.0);
        // -(desired - v) = -((1, 0) - (0, 0.5))
        assert!(approx_vec(s.force(), Vec2::new(-1.0, 0.5)));
    }

    #[test]
    fn flee_avoids_near_edges() {
        let mut body = body_at(0, 10.0, 50.0, 1.0);
        body.set_boundary(Some(Boundary::from_size(100.0, 100.0)));
        let mut s = Steering::default();
        s.flee(&body, Vec2::new(20.0, 50.0), 20.0);
        // flee: (-1, 0); left edge 10 away → +10 on x.
        assert!(approx_vec(s.force(), Vec2::new(9.0, 0.0)));
    }

    #[test]
    fn flee_on_target() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.flee(&body, Vec2::ZERO, 0.0);
        assert_eq!(s.force(), Vec2::new(-1.0, 0.0));
    }

    #[test]
    fn pursue_stationary_target_is_seek() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut a = Steering::default();
        let mut b = Steering::default();
        a.pursue(&body, Vec2::new(300.0, 40.0), Vec2::ZERO);
        b.seek(&body, Vec2::new(300.0, 40.0), Some(50.0));
        assert_eq!(a.force(), b.force());
    }

    #[test]
    fn pursue_leads_a_moving_target() {
        // dist 200, max_speed 1, |v_t| = 2 → lookahead 100 frames → (200, 200).
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut a = Steering::default();
        let mut b = Steering::default();
        a.pursue(&body, Vec2::new(200.0, 0.0), Vec2::new(0.0, 2.0));
        b.seek(&body, Vec2::new(200.0, 200.0), Some(50.0));
        assert!(approx_vec(a.force(), b.force()));
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use super::*;

    #[test]
    fn stationary_wander_projects_along_x() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        let mut r = rng();
        s.wander(&body, 0.0, &mut r);
        // angle 0: (10 + 100, 0)
        assert!(approx_vec(s.force(), Vec2::new(110.0, 0.0)));
        assert!(s.wander_angle().abs() <= 0.25);
    }

    #[test]
    fn moving_wander_follows_heading() {
        let mut body = body_at(0, 0.0, 0.0, 1.0);
        body.velocity = Vec2::new(0.0, 0.5);
        let mut s = Steering::default();
        s.wander(&body, 0.0, &mut rng());
        assert!(approx_vec(s.force(), Vec2::new(100.0, 10.0)));
    }

    #[test]
    fn angle_random_walk_is_bounded_per_call() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        let mut r = rng();
        let mut prev = s.wander_angle();
        for _ in 0..100 {
            s.wander(&body, 0.0, &mut r);
            assert!((s.wander_angle() - prev).abs() <= 0.25 + 1e-6);
            prev = s.wander_angle();
        }
    }
}

// ── Flocking ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod flock {
    use super::*;

    fn neighbor(id: u32, x: f32, y: f32, vx: f32, vy: f32) -> Neighbor {
        Neighbor {
            id:          AgentId(id),
            position:    Vec2::new(x, y),
            velocity:    Vec2::new(vx, vy),
            flock_index: 0,
        }
    }

    #[test]
    fn nobody_in_sight_without_anchor_is_wander() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let behind = [neighbor(1, -50.0, 0.0, 0.0, 0.0), neighbor(0, 0.0, 0.0, 0.0, 0.0)];

        let mut flocking = Steering::default();
        let mut wandering = Steering::default();
        let (mut r1, mut r2) = (rng(), rng());
        for _ in 0..5 {
            flocking.flock(&body, &behind, None, &mut r1);
            wandering.wander(&body, 0.0, &mut r2);
        }
        assert_eq!(flocking.force(), wandering.force());
        assert_eq!(flocking.wander_angle(), wandering.wander_angle());
    }

    #[test]
    fn nobody_in_sight_with_anchor_seeks_it() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut a = Steering::default();
        let mut b = Steering::default();
        a.flock(&body, &[], Some(Vec2::new(0.0, 500.0)), &mut rng());
        b.seek(&body, Vec2::new(0.0, 500.0), Some(50.0));
        assert_eq!(a.force(), b.force());
    }

    #[test]
    fn cohesion_and_alignment() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.flock(&body, &[neighbor(1, 100.0, 0.0, 0.0, 1.0)], None, &mut rng());
        // seek centroid at full speed (1, 0) + align (0, 1).
        assert!(approx_vec(s.force(), Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn anchor_blends_with_centroid() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        let mut expected = Steering::default();
        s.flock(&body, &[neighbor(1, 100.0, 0.0, 0.0, 0.0)], Some(Vec2::new(0.0, 100.0)), &mut rng());
        expected.seek(&body, Vec2::new(75.0, 25.0), None);
        assert!(approx_vec(s.force(), expected.force()));
    }

    #[test]
    fn close_neighbors_are_fled() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.flock(&body, &[neighbor(1, 40.0, 0.0, 0.0, 0.0)], None, &mut rng());
        // seek centroid (+1, 0) then flee it (-1, 0): separation cancels cohesion.
        assert!(approx_vec(s.force(), Vec2::ZERO));
    }

    #[test]
    fn own_entry_is_skipped() {
        let body = body_at(7, 0.0, 0.0, 1.0);
        let mut with_self = Steering::default();
        let mut without = Steering::default();
        let others = [neighbor(1, 100.0, 0.0, 0.0, 1.0)];
        let all = [neighbor(7, 0.0, 0.0, 0.0, 0.0), others[0]];
        with_self.flock(&body, &all, None, &mut rng());
        without.flock(&body, &others, None, &mut rng());
        assert_eq!(with_self.force(), without.force());
    }

    #[test]
    fn far_agents_are_out_of_sight_both_ways() {
        let a = body_at(0, 0.0, 0.0, 1.0);
        let b = body_at(1, 300.0, 0.0, 1.0);
        let s = Steering::default();
        assert!(!s.is_in_sight(&a, b.position, 0));
        assert!(!s.is_in_sight(&b, a.position, 0));
    }

    #[test]
    fn sight_is_a_forward_half_space() {
        let mut body = body_at(0, 0.0, 0.0, 1.0);
        body.velocity = Vec2::new(0.0, 1.0);
        let s = Steering::default();
        assert!(s.is_in_sight(&body, Vec2::new(50.0, 0.0), 0), "perpendicular counts");
        assert!(s.is_in_sight(&body, Vec2::new(0.0, 50.0), 0));
        assert!(!s.is_in_sight(&body, Vec2::new(0.0, -50.0), 0));
    }

    #[test]
    fn group_tag_gates_predicates() {
        let body = body_at(0, 0.0, 0.0, 1.0);
        let mut s = Steering::default();
        s.set_flock_index(3);
        assert!(!s.is_in_sight(&body, Vec2::new(10.0, 0.0), 2));
        assert!(s.is_in_sight(&body, Vec2::new(10.0, 0.0), 3));
        assert!(!s.is_too_close(&body, Vec2::new(10.0, 0.0), 2));
        assert!(s.is_too_close(&body, Vec2::new(10.0, 0.0), 3));
        assert!(!s.is_too_close(&body, Vec2::new(90.0, 0.0), 3));
    }
}
