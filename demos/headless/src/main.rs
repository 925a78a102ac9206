//! headless: runs the morphflock show without a renderer.
//!
//! 144 agents (a 12 × 12 grid's worth) and 20 explosion slots in a
//! 1280 × 720 play area.  Every 5 s the palette and per-mode targets change,
//! every 15 s the mode advances (wander → flock by color → grid), and a
//! detonation goes off at a random spot every few seconds.
//!
//! Pass a JSON file to override any of [`DemoConfig`]'s fields:
//!
//! ```text
//! cargo run --release -p morphflock-headless -- demo.json
//! RUST_LOG=mf_sim=debug cargo run -p morphflock-headless
//! ```

mod show;

use std::time::Instant;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use mf_core::{Boundary, FrameClock, Millis, Rgb, SimRng, Vec2};
use mf_sim::{AgentSnapshot, TickStats, WorldBuilder, WorldConfig, WorldObserver};

use show::{GRID_COLS, MAX_RADIUS, MIN_RADIUS, Mode, Show, arrange_grid, change_up};

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct DemoConfig {
    world:                WorldConfig,
    /// Simulated run length.
    seconds:              u64,
    frame_millis:         u64,
    change_up_every_ms:   u64,
    change_mode_every_ms: u64,
    detonate_every_ms:    u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                agent_count:     GRID_COLS * GRID_COLS,
                explosion_count: 20,
                seed:            42,
                boundary:        Some(Boundary::from_size(1280.0, 720.0)),
                ..WorldConfig::default()
            },
            seconds:              60,
            frame_millis:         16,
            change_up_every_ms:   5_000,
            change_mode_every_ms: 15_000,
            detonate_every_ms:    2_500,
        }
    }
}

fn load_config() -> Result<DemoConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct ShowStats {
    frames:          u64,
    arrivals:        u64,
    skipped:         u64,
    peak_explosions: usize,
}

impl WorldObserver for ShowStats {
    fn on_tick_end(&mut self, now: Millis, stats: &TickStats) {
        self.frames += 1;
        self.arrivals += stats.arrivals as u64;
        self.skipped += stats.skipped as u64;
        self.peak_explosions = self.peak_explosions.max(stats.explosions_awake);
        if self.frames.is_multiple_of(300) {
            debug!(%now, arrivals = self.arrivals, explosions = stats.explosions_awake, "progress");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let demo = load_config()?;
    let area = demo.world.boundary.unwrap_or(Boundary::from_size(1280.0, 720.0));

    println!("=== headless / morphflock ===");
    println!(
        "Agents: {}  |  Explosions: {}  |  Seed: {}  |  {} s at {} ms/frame",
        demo.world.agent_count,
        demo.world.explosion_count,
        demo.world.seed,
        demo.seconds,
        demo.frame_millis,
    );
    println!();

    // 1. Build the world.
    let show = Show::new(Mode::Wander, demo.world.seed as u32);
    let mut world = WorldBuilder::new(demo.world.clone(), show)
        .scatter()
        .radius_range(MIN_RADIUS, MAX_RADIUS)
        .build()?;

    // Host-side randomness, independent of the world's own streams.
    let mut rng = SimRng::new(demo.world.seed).child(1);
    change_up(&mut world, &mut rng)?;

    // 2. Run.
    let mut clock = FrameClock::new(Millis::ZERO, demo.frame_millis);
    let total_frames = clock.frames_for_millis(demo.seconds * 1_000);

    let mut next_change_up = Millis(demo.change_up_every_ms);
    let mut next_change_mode = Millis(demo.change_mode_every_ms);
    let mut next_detonation = Millis(demo.detonate_every_ms);
    let mut detonations = 0u32;
    let mut stats = ShowStats::default();

    let t0 = Instant::now();
    for _ in 0..total_frames {
        let now = clock.now();

        if world.behavior.mode == Mode::Grid {
            arrange_grid(&mut world, now)?;
        }
        world.tick_with(now, &mut stats);

        if now > next_detonation {
            next_detonation = now + demo.detonate_every_ms;
            let at = Vec2::new(rng.range(area.left, area.right), rng.range(area.top, area.bottom));
            let color = Rgb::random_vivid(rng.inner());
            if world.detonate(at, color, now).is_some() {
                detonations += 1;
                // A blast holds the current look for a full interval.
                next_change_up = now + demo.change_up_every_ms;
                next_change_mode = now + demo.change_mode_every_ms;
            }
        }

        if now > next_change_up {
            next_change_up = now + demo.change_up_every_ms;
            change_up(&mut world, &mut rng)?;
        }

        if now > next_change_mode {
            next_change_mode = now + demo.change_mode_every_ms;
            world.behavior.mode = world.behavior.mode.next();
            change_up(&mut world, &mut rng)?;
            info!(%now, mode = ?world.behavior.mode, flocks = world.behavior.flock_count(), "mode change");
        }

        clock.advance();
    }
    let elapsed = t0.elapsed();

    // 3. Summary.
    println!("Ran {} frames in {:.3} s", stats.frames, elapsed.as_secs_f64());
    println!("  detonations     : {detonations}");
    println!("  arrivals        : {}", stats.arrivals);
    println!("  skipped updates : {}", stats.skipped);
    println!("  peak explosions : {}", stats.peak_explosions);
    println!("  final mode      : {:?}", world.behavior.mode);
    println!();

    // 4. First few agents of the final frame.
    println!("{:<6} {:>8} {:>8} {:>7} {:>6} {:>8}", "Agent", "x", "y", "radius", "shape", "color");
    println!("{}", "-".repeat(48));
    for s in world.agent_snapshots().iter().take(10) {
        print_row(s);
    }
    println!();
    println!("{}", serde_json::to_string(&world.explosion_snapshots())?);

    Ok(())
}

fn print_row(s: &AgentSnapshot) {
    println!(
        "{:<6} {:>8.1} {:>8.1} {:>7.2} {:>6.2} {:>8}",
        s.id.0, s.x, s.y, s.radius, s.shape_step, s.color_id,
    );
}
