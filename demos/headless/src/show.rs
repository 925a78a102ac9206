//! The show: three display modes cycled over time, driven through the
//! world's behavior model plus a few direct writes for the grid.

use mf_agent::{Agent, Shape};
use mf_behavior::{BehaviorModel, FrameContext, Intent};
use mf_core::{AgentId, AgentRng, Boundary, ColorId, Millis, Rgb, SimRng, Vec2};
use mf_sim::{SimResult, World};
use noise::{NoiseFn, OpenSimplex};
use rustc_hash::FxHashMap;

// ── Tuning ────────────────────────────────────────────────────────────────────

pub const GRID_COLS: usize = 12;

const MIN_SPEED:       f32 = 0.5;
const MAX_SPEED:       f32 = 1.0;
const MIN_FLOCK_SPEED: f32 = 3.0;
const MAX_FLOCK_SPEED: f32 = 5.0;
pub const MIN_RADIUS:  f32 = 10.0;
pub const MAX_RADIUS:  f32 = 20.0;

const PALETTE_SIZE: usize = 5;

/// Fraction of the remaining distance covered per frame while gliding into a
/// grid cell.
const GRID_EASE: f32 = 0.1;

/// Spatial and temporal frequency of the grid's noise field.
const NOISE_SCALE: f64 = 0.0005;

// ── Mode ──────────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Mode {
    Wander,
    Flock,
    Grid,
}

impl Mode {
    pub fn next(self) -> Mode {
        match self {
            Mode::Wander => Mode::Flock,
            Mode::Flock  => Mode::Grid,
            Mode::Grid   => Mode::Wander,
        }
    }
}

// ── Behavior model ────────────────────────────────────────────────────────────

/// Steering half of the show.  Agents fleeing an explosion are left alone.
pub struct Show {
    pub mode: Mode,
    /// Agents grouped by target color at the last change-up; the first id in
    /// each group leads it.
    flocks:   FxHashMap<ColorId, Vec<AgentId>>,
    /// Simplex field painting grid radius and color.
    field:    OpenSimplex,
}

impl Show {
    pub fn new(mode: Mode, seed: u32) -> Self {
        Self { mode, flocks: FxHashMap::default(), field: OpenSimplex::new(seed) }
    }

    /// Field value in about `[-1, 1]` at `(x, y)` and time `t`.
    fn noise(&self, x: f32, y: f32, t: f32) -> f32 {
        let at = [x as f64 * NOISE_SCALE, y as f64 * NOISE_SCALE, t as f64 * NOISE_SCALE];
        self.field.get(at) as f32
    }

    pub fn flock_count(&self) -> usize {
        self.flocks.len()
    }

    fn regroup(&mut self, members: Vec<(ColorId, AgentId)>) {
        self.flocks.clear();
        for (color, id) in members {
            self.flocks.entry(color).or_default().push(id);
        }
    }
}

impl BehaviorModel for Show {
    fn steer(&self, agent: &Agent, ctx: &FrameContext<'_>, _rng: &mut AgentRng) -> Vec<Intent> {
        if agent.is_fleeing(ctx.now) {
            return vec![];
        }
        match self.mode {
            Mode::Wander => vec![Intent::Wander { avoid_boundary: 0.0 }],
            Mode::Flock => {
                let Some(members) = self.flocks.get(&agent.color_id()) else {
                    return vec![Intent::Wander { avoid_boundary: 0.0 }];
                };
                match members.first() {
                    Some(&leader) if leader != agent.id() => {
                        let anchor = ctx.neighbor(leader).map(|n| n.position);
                        vec![Intent::Flock { members: members.clone(), anchor }]
                    }
                    _ => vec![Intent::Wander { avoid_boundary: 0.0 }],
                }
            }
            Mode::Grid => vec![Intent::Halt],
        }
    }
}

// ── Host orchestration ────────────────────────────────────────────────────────

/// New palette, then per-mode shape, radius and speed targets for everyone.
pub fn change_up(world: &mut World<Show>, rng: &mut SimRng) -> SimResult<()> {
    let palette = Rgb::palette(rng.inner(), PALETTE_SIZE);
    let mode = world.behavior.mode;

    for i in 0..world.agent_count() {
        let id = AgentId(i as u32);
        if let Some(&color) = rng.choose(&palette) {
            world.set_target_color(id, color)?;
        }
        match mode {
            Mode::Wander => {
                world.set_target_shape(id, Shape::Circle)?;
                world.set_target_radius(id, rng.range(MIN_RADIUS, MAX_RADIUS))?;
                world.set_target_max_speed(id, rng.range(MIN_SPEED, MAX_SPEED))?;
            }
            Mode::Flock => {
                world.set_target_shape(id, Shape::Circle)?;
                world.set_target_radius(id, MIN_RADIUS)?;
                world.set_target_max_speed(id, rng.range(MIN_FLOCK_SPEED, MAX_FLOCK_SPEED))?;
            }
            Mode::Grid => {
                world.set_target_max_speed(id, rng.range(MIN_FLOCK_SPEED, MAX_FLOCK_SPEED))?;
            }
        }
    }

    let members = world.agents().iter().map(|a| (a.color_id(), a.id())).collect();
    world.behavior.regroup(members);
    Ok(())
}

/// Grid mode's direct writes: glide each idle agent into its cell, square it
/// off once there, and paint radius and color from a moving simplex field.
pub fn arrange_grid(world: &mut World<Show>, now: Millis) -> SimResult<()> {
    let Some(boundary) = world.boundary() else {
        return Ok(());
    };
    let cell = MAX_RADIUS * 2.0 + 20.0;

    for i in 0..world.agent_count() {
        let id = AgentId(i as u32);
        let agent = world.agent(id)?;
        if agent.is_fleeing(now) {
            continue;
        }
        let here = agent.body.position;
        let slot = grid_slot(&boundary, i, cell);

        if here.distance_squared(slot) < 1.0 {
            world.set_position(id, slot)?;
            world.set_target_shape(id, Shape::Square)?;
        } else {
            world.set_position(id, here + (slot - here) * GRID_EASE)?;
        }

        let t = now.0 as f32;
        let radius_wave = world.behavior.noise(here.x * 5.0, here.y * 5.0, t * 0.5);
        let color_wave = world.behavior.noise(here.x * 3.0, here.y * 3.0, t);
        let radius =
            MIN_RADIUS * 0.5 + (radius_wave * 0.5 + 1.0) * (MAX_RADIUS - MIN_RADIUS * 0.75);
        let color = Rgb::from_noise(0.5 + color_wave * 0.5);

        world.set_target_radius(id, radius)?;
        world.set_radius(id, radius)?;
        world.set_target_color(id, color)?;
        world.set_color(id, color)?;
    }
    Ok(())
}

/// Center of grid cell `index`, with the grid centered in `boundary`.
fn grid_slot(boundary: &Boundary, index: usize, cell: f32) -> Vec2 {
    let span = cell * GRID_COLS as f32;
    let offset = Vec2::new(
        boundary.left + (boundary.width() - span) * 0.5,
        boundary.top + (boundary.height() - span) * 0.5,
    );
    let col = (index % GRID_COLS) as f32;
    let row = (index / GRID_COLS) as f32;
    offset + Vec2::new(cell * (col + 0.5), cell * (row + 0.5))
}
