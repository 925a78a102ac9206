//! Unit tests for mf-agent.

use mf_core::{AgentId, AgentRng, Boundary, Millis, Rgb, Vec2};

use crate::{Agent, AgentParams, AgentPoolBuilder, Channel, Shape};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn agent_at(x: f32, y: f32) -> Agent {
    Agent::new(AgentId(0), Vec2::new(x, y), &AgentParams::default())
}

fn rng() -> AgentRng {
    AgentRng::new(5, AgentId(0))
}

// ── Channel ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod channel {
    use super::*;

    /// Step until settled; return the frames taken.  Fails on oscillation.
    fn run_to_rest(c: &mut Channel, limit: usize) -> usize {
        let start_side = (c.value() - c.target()).signum();
        for frame in 1..=limit {
            c.step();
            if c.is_settled() {
                return frame;
            }
            if (c.value() - c.target()).signum() == -start_side {
                // Passed the target: the very next frame must snap.
                c.step();
                assert!(c.is_settled(), "overshoot must snap on the next frame");
                return frame + 1;
            }
        }
        panic!("channel did not settle in {limit} frames");
    }

    #[test]
    fn converges_without_oscillation() {
        let mut c = Channel::new(5.0, 0.01, 0.0, f32::MAX);
        c.set_target(6.0);
        let frames = run_to_rest(&mut c, 100);
        assert!(frames <= 16, "took {frames} frames");
        assert_eq!(c.value(), 6.0);
        assert_eq!(c.velocity(), 0.0);
        assert_eq!(c.acceleration(), 0.0);
    }

    #[test]
    fn converges_downward() {
        let mut c = Channel::new(255.0, 0.05, 0.0, 255.0);
        c.set_target(0.0);
        run_to_rest(&mut c, 200);
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn at_rest_on_target_is_still() {
        let mut c = Channel::new(3.0, 0.5, 0.0, 10.0);
        for _ in 0..10 {
            c.step();
            assert_eq!(c.value(), 3.0);
            assert_eq!(c.velocity(), 0.0);
        }
    }

    #[test]
    fn same_target_keeps_velocity_new_target_resets() {
        let mut c = Channel::new(0.0, 0.1, 0.0, 10.0);
        c.set_target(10.0);
        c.step();
        c.step();
        let v = c.velocity();
        assert!(v > 0.0);
        c.set_target(10.0);
        assert_eq!(c.velocity(), v);
        c.set_target(9.0);
        assert_eq!(c.velocity(), 0.0);
    }

    #[test]
    fn values_stay_in_bounds() {
        let mut c = Channel::new(0.0, 0.3, 0.0, 1.0);
        c.set_target(5.0);
        assert_eq!(c.target(), 1.0);
        for _ in 0..20 {
            c.step();
            assert!((0.0..=1.0).contains(&c.value()));
        }
        assert!(c.is_settled());
    }
}

// ── Animator ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod animator {
    use super::*;

    #[test]
    fn shape_targets() {
        let mut a = agent_at(0.0, 0.0);
        assert_eq!(a.animator.shape_step(), 1.0);
        a.animator.set_shape(Shape::Square);
        for _ in 0..50 {
            a.animator.step(&mut a.body);
        }
        assert_eq!(a.animator.shape_step(), 0.0);
        assert_eq!(a.animator.shape(), Shape::Square);
    }

    #[test]
    fn radius_writes_through_to_body_thresholds() {
        let mut a = agent_at(50.0, 50.0);
        a.body.set_boundary(Some(Boundary::from_size(100.0, 100.0)));
        a.animator.set_target_radius(6.0);
        for _ in 0..40 {
            a.animator.step(&mut a.body);
        }
        assert_eq!(a.body.radius(), 6.0);
        assert_eq!(a.body.bounce_bounds(), Some(Boundary::new(6.0, 6.0, 94.0, 94.0)));
    }

    #[test]
    fn target_color_change_restarts_all_channels() {
        let mut a = agent_at(0.0, 0.0);
        a.animator.set_target_color(Rgb::new(0.0, 0.0, 0.0));
        a.animator.step(&mut a.body);
        a.animator.step(&mut a.body);
        a.animator.set_target_color(Rgb::new(0.0, 0.0, 10.0));
        a.animator.step(&mut a.body);
        // Red restarted from rest too: 0.05 + 0.1 before, then a single 0.05.
        let moved = 255.0 - a.animator.color().r;
        assert!((moved - 0.2).abs() < 1e-3, "moved {moved}");
    }

    #[test]
    fn color_id_follows_target_color() {
        let mut a = agent_at(0.0, 0.0);
        let red = Rgb::new(255.0, 0.0, 0.0);
        a.animator.set_target_color(red);
        assert_eq!(a.color_id(), red.id());
        assert_ne!(a.animator.color().id(), red.id());
    }

    #[test]
    fn max_speed_decays_down_and_snaps_up() {
        let mut a = agent_at(0.0, 0.0);
        a.body.set_max_speed(2.0);
        a.animator.set_target_max_speed(1.0);
        a.animator.step(&mut a.body);
        assert!((a.body.max_speed() - 1.9).abs() < 1e-6);
        a.animator.set_target_max_speed(3.0);
        a.animator.step(&mut a.body);
        assert_eq!(a.body.max_speed(), 3.0);
    }

    #[test]
    fn snap_radius_and_set_color() {
        let mut a = agent_at(0.0, 0.0);
        a.snap_radius(12.0);
        assert_eq!(a.body.radius(), 12.0);
        assert!(a.animator.radius().is_settled());
        a.set_color(Rgb::new(1.0, 2.0, 3.0));
        assert_eq!(a.body.color, Rgb::new(1.0, 2.0, 3.0));
    }
}

// ── Seeker ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod seeker {
    use super::*;
    use crate::SleepState;

    #[test]
    fn no_target_no_transition() {
        let mut a = agent_at(0.0, 0.0);
        let mut r = rng();
        assert!(a.steer(Millis(0), &mut r).is_none());
        assert_eq!(a.steering.force(), Vec2::ZERO);
        assert_eq!(a.seeker.state(), SleepState::Awake);
    }

    #[test]
    fn sleep_then_wake_reports_arrival() {
        let mut a = agent_at(10.0, 10.0);
        a.seeker.seek_target = Some(Vec2::new(20.0, 10.0));
        let mut r = rng();

        assert!(a.steer(Millis(0), &mut r).is_none());
        let SleepState::Asleep { wake_at } = a.seeker.state() else {
            panic!("should be asleep");
        };
        assert!((1_000..=3_000).contains(&wake_at.0));

        assert!(a.steer(wake_at, &mut r).is_none(), "wake needs now > wake_at");
        let arrival = a.steer(wake_at + 1, &mut r).expect("arrival on wake");
        assert_eq!(arrival.target, Vec2::new(20.0, 10.0));
        assert_eq!(arrival.agent, AgentId(0));
        assert!(!a.seeker.is_sleeping());
    }

    #[test]
    fn far_from_target_stays_awake_and_steers() {
        let mut a = agent_at(0.0, 0.0);
        a.seeker.final_destination = Some(Vec2::new(500.0, 0.0));
        let mut r = rng();
        for t in 0..20 {
            assert!(a.steer(Millis(t), &mut r).is_none());
        }
        assert!(!a.seeker.is_sleeping());
        assert_ne!(a.steering.force(), Vec2::ZERO);
    }

    #[test]
    fn seek_target_overrides_final_destination() {
        let mut a = agent_at(0.0, 0.0);
        a.seeker.final_destination = Some(Vec2::new(500.0, 0.0));
        a.seeker.seek_target = Some(Vec2::new(0.0, 5.0));
        assert_eq!(a.seeker.target(), Some(Vec2::new(0.0, 5.0)));
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent {
    use super::*;
    use crate::{Positionable, Steerable};

    #[test]
    fn flee_override_pushes_until_deadline() {
        let mut a = agent_at(0.0, 0.0);
        a.flee_from(Vec2::new(10.0, 0.0), Millis(100), 5.0);
        assert!(a.is_fleeing(Millis(50)));
        let mut r = rng();
        a.steer(Millis(50), &mut r);
        // Max speed eased once (5 → 4.75) before the flee force is computed.
        assert!((a.body.max_speed() - 4.75).abs() < 1e-5);
        assert!((a.steering.force().x + 4.75).abs() < 1e-4);

        a.integrate();
        a.steer(Millis(100), &mut r);
        assert!(!a.is_fleeing(Millis(100)));
        assert_eq!(a.steering.force(), Vec2::ZERO);
    }

    #[test]
    fn update_moves_toward_target() {
        let mut a = agent_at(0.0, 0.0);
        a.seeker.seek_target = Some(Vec2::new(1_000.0, 0.0));
        let mut r = rng();
        for t in 0..100 {
            a.update(Millis(t), &mut r);
            assert!(a.body.velocity.length() <= a.body.max_speed() + 1e-5);
        }
        assert!(a.position().x > 0.0);
    }

    #[test]
    fn pursue_via_positionable() {
        let mut a = agent_at(0.0, 0.0);
        let b = agent_at(300.0, 0.0);
        a.pursue(&b);
        assert!(a.steering.force().x > 0.0);
        a.halt();
        assert_eq!(a.steering.force(), Vec2::ZERO);
        assert_eq!(a.velocity(), Vec2::ZERO);
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn scatter_inside_boundary_with_radius_range() {
        let b = Boundary::from_size(640.0, 480.0);
        let (agents, rngs) = AgentPoolBuilder::new(50, 9)
            .boundary(b)
            .scatter()
            .radius_range(10.0, 20.0)
            .build();
        assert_eq!(agents.len(), 50);
        assert_eq!(rngs.len(), 50);
        for (i, a) in agents.iter().enumerate() {
            assert_eq!(a.id(), AgentId(i as u32));
            assert!(b.contains(a.body.position));
            assert!((10.0..20.0).contains(&a.body.radius()));
            assert_eq!(a.body.boundary(), Some(b));
        }
    }

    #[test]
    fn scatter_keeps_whole_body_inside() {
        let b = Boundary::from_size(100.0, 100.0);
        let (agents, _) = AgentPoolBuilder::new(200, 3)
            .boundary(b)
            .scatter()
            .radius_range(10.0, 20.0)
            .build();
        for a in &agents {
            let r = a.body.radius() - 1e-3;
            let p = a.body.position;
            assert!(b.left + r <= p.x && p.x <= b.right - r, "x {} r {r}", p.x);
            assert!(b.top + r <= p.y && p.y <= b.bottom - r, "y {} r {r}", p.y);
        }
    }

    #[test]
    fn scatter_in_a_boundary_smaller_than_the_body_uses_center() {
        let b = Boundary::from_size(8.0, 8.0);
        let (agents, _) = AgentPoolBuilder::new(4, 3)
            .boundary(b)
            .scatter()
            .radius_range(10.0, 20.0)
            .build();
        assert!(agents.iter().all(|a| a.body.position == Vec2::new(4.0, 4.0)));
    }

    #[test]
    fn same_seed_same_pool() {
        let build = || {
            AgentPoolBuilder::new(10, 77)
                .boundary(Boundary::from_size(100.0, 100.0))
                .scatter()
                .build()
                .0
        };
        let a: Vec<Vec2> = build().iter().map(|a| a.body.position).collect();
        let b: Vec<Vec2> = build().iter().map(|a| a.body.position).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn unscattered_agents_start_at_center() {
        let (agents, _) = AgentPoolBuilder::new(3, 1)
            .boundary(Boundary::from_size(100.0, 50.0))
            .build();
        assert!(agents.iter().all(|a| a.body.position == Vec2::new(50.0, 25.0)));
    }
}
