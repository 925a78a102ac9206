//! Unit tests for mf-behavior.

use mf_agent::{Agent, AgentParams, Animatable};
use mf_core::{AgentId, AgentRng, ColorId, Millis, Rgb, Vec2};
use mf_steering::Neighbor;

use crate::{BehaviorModel, FrameContext, IdleBehavior, Intent};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn agents_at(points: &[(f32, f32)]) -> Vec<Agent> {
    points
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| Agent::new(AgentId(i as u32), Vec2::new(x, y), &AgentParams::default()))
        .collect()
}

fn snapshot(agents: &[Agent]) -> (Vec<Neighbor>, Vec<ColorId>) {
    (
        agents.iter().map(Agent::neighbor).collect(),
        agents.iter().map(Agent::color_id).collect(),
    )
}

// ── Intent ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod intent {
    use super::*;

    #[test]
    fn seek_constructors() {
        let t = Vec2::new(3.0, 4.0);
        match Intent::arrive_at(t) {
            Intent::Seek { target, arrive, arrive_distance } => {
                assert_eq!(target, t);
                assert!(arrive);
                assert_eq!(arrive_distance, 50.0);
            }
            other => panic!("wrong variant: {other:?}"),
        }
        assert!(matches!(Intent::seek(t), Intent::Seek { arrive: false, .. }));
    }

    #[test]
    fn flock_members_compare() {
        let a = Intent::Flock { members: vec![AgentId(1), AgentId(2)], anchor: None };
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, Intent::Halt);
    }
}

// ── FrameContext ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod context {
    use super::*;

    #[test]
    fn lookups_by_id() {
        let agents = agents_at(&[(0.0, 0.0), (10.0, 5.0)]);
        let (neighbors, colors) = snapshot(&agents);
        let ctx = FrameContext::new(Millis(7), None, &neighbors, &colors);

        assert_eq!(ctx.agent_count(), 2);
        assert_eq!(ctx.neighbor(AgentId(1)).map(|n| n.position), Some(Vec2::new(10.0, 5.0)));
        assert_eq!(ctx.color_of(AgentId(0)), Some(Rgb::WHITE.id()));
        assert!(ctx.neighbor(AgentId(2)).is_none());
        assert!(ctx.color_of(AgentId::INVALID).is_none());
    }

    #[test]
    fn in_sight_excludes_self_far_and_behind() {
        // Stationary agents face +x.
        let agents = agents_at(&[(0.0, 0.0), (100.0, 0.0), (300.0, 0.0), (-50.0, 0.0)]);
        let (neighbors, colors) = snapshot(&agents);
        let ctx = FrameContext::new(Millis(0), None, &neighbors, &colors);

        assert_eq!(ctx.in_sight_of(&agents[0]), vec![AgentId(1)]);
    }

    #[test]
    fn in_sight_respects_flock_groups() {
        let mut agents = agents_at(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0)]);
        agents[0].steering.set_flock_index(2);
        agents[1].steering.set_flock_index(3);
        agents[2].steering.set_flock_index(2);
        let (neighbors, colors) = snapshot(&agents);
        let ctx = FrameContext::new(Millis(0), None, &neighbors, &colors);

        assert_eq!(ctx.in_sight_of(&agents[0]), vec![AgentId(2)]);
    }

    #[test]
    fn same_color_uses_target_colors() {
        let red = Rgb::new(255.0, 0.0, 0.0);
        let mut agents = agents_at(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        agents[0].set_target_color(red);
        agents[2].set_target_color(red);
        let (neighbors, colors) = snapshot(&agents);
        let ctx = FrameContext::new(Millis(0), None, &neighbors, &colors);

        assert_eq!(ctx.same_color(&agents[0]), vec![AgentId(2)]);
        assert_eq!(ctx.same_color(&agents[1]), vec![AgentId(3)]);
    }
}

// ── Models ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod model {
    use super::*;
    use crate::{BehaviorError, BehaviorResult};

    struct Chase(AgentId);

    impl BehaviorModel for Chase {
        fn steer(&self, agent: &Agent, _ctx: &FrameContext<'_>, _rng: &mut AgentRng) -> Vec<Intent> {
            if agent.id() == self.0 { vec![] } else { vec![Intent::Pursue(self.0)] }
        }

        fn validate(&self) -> BehaviorResult<()> {
            if self.0 == AgentId::INVALID {
                return Err(BehaviorError::Config("no quarry".into()));
            }
            Ok(())
        }
    }

    #[test]
    fn idle_returns_nothing() {
        let agents = agents_at(&[(0.0, 0.0)]);
        let (neighbors, colors) = snapshot(&agents);
        let ctx = FrameContext::new(Millis(0), None, &neighbors, &colors);
        let mut rng = AgentRng::new(1, AgentId(0));
        assert!(IdleBehavior.steer(&agents[0], &ctx, &mut rng).is_empty());
        assert!(IdleBehavior.validate().is_ok());
    }

    #[test]
    fn custom_model_and_validation() {
        let agents = agents_at(&[(0.0, 0.0), (5.0, 5.0)]);
        let (neighbors, colors) = snapshot(&agents);
        let ctx = FrameContext::new(Millis(0), None, &neighbors, &colors);
        let mut rng = AgentRng::new(1, AgentId(1));

        let chase = Chase(AgentId(0));
        assert_eq!(chase.steer(&agents[1], &ctx, &mut rng), vec![Intent::Pursue(AgentId(0))]);
        assert!(chase.steer(&agents[0], &ctx, &mut rng).is_empty());
        assert!(chase.validate().is_ok());

        let err = Chase(AgentId::INVALID).validate().unwrap_err();
        assert!(err.to_string().contains("no quarry"));
    }
}
