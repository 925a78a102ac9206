//! Flat per-frame views for renderers.

use mf_agent::Agent;
use mf_core::{AgentId, ColorId, ExplosionId, Rgb};
use mf_effect::Explosion;

/// Everything a renderer needs to draw one agent.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:         AgentId,
    pub x:          f32,
    pub y:          f32,
    pub rotation:   f32,
    pub radius:     f32,
    /// 1 = circle, 0 = square, in between while morphing.
    pub shape_step: f32,
    /// Current (animated) color.
    pub color:      Rgb,
    pub scale:      f32,
    /// Grouping key of the *target* color.
    pub color_id:   ColorId,
}

impl AgentSnapshot {
    pub fn of(agent: &Agent) -> Self {
        let body = &agent.body;
        Self {
            id:         agent.id(),
            x:          body.position.x,
            y:          body.position.y,
            rotation:   body.rotation(),
            radius:     body.radius(),
            shape_step: agent.animator.shape_step(),
            color:      body.color,
            scale:      body.scale,
            color_id:   agent.color_id(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExplosionSnapshot {
    pub id:       ExplosionId,
    pub x:        f32,
    pub y:        f32,
    pub radius:   f32,
    /// Doubles as opacity.
    pub life:     f32,
    pub color:    Rgb,
    pub is_awake: bool,
}

impl ExplosionSnapshot {
    pub fn of(explosion: &Explosion) -> Self {
        Self {
            id:       explosion.id,
            x:        explosion.position.x,
            y:        explosion.position.y,
            radius:   explosion.radius(),
            life:     explosion.life(),
            color:    explosion.color,
            is_awake: explosion.is_awake(),
        }
    }
}
