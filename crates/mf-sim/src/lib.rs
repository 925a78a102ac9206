//! `mf-sim` — the world: agent and explosion pools, frame loop and commands.
//!
//! # One frame
//!
//! ```text
//! World::tick(now):
//!   ① Snapshot  — copy every agent's position, velocity, flock group and
//!                 target color into a FrameContext.
//!   ② Steer     — per agent (parallel with the `parallel` feature):
//!                   BehaviorModel::steer → Intents → steering calls,
//!                   then animator, flee override, seeker.
//!   ③ Integrate — clamp and apply each agent's force, move the body,
//!                 wrap or bounce at the boundary.
//!   ④ Effects   — advance awake explosions.
//! ```
//!
//! Phase ② only writes the agent being processed and reads other agents
//! through the snapshot, so its results do not depend on iteration order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the steering phase on Rayon's thread pool.           |
//! | `serde`    | `WorldConfig`, snapshots and `TickStats` (de)serialize.   |
//!
//! # Quick-start
//!
//! ```rust
//! use mf_behavior::IdleBehavior;
//! use mf_core::{Boundary, FrameClock, Millis, Vec2};
//! use mf_sim::{NoopObserver, WorldBuilder, WorldConfig};
//!
//! let config = WorldConfig {
//!     agent_count: 4,
//!     boundary:    Some(Boundary::from_size(800.0, 600.0)),
//!     ..WorldConfig::default()
//! };
//! let mut world = WorldBuilder::new(config, IdleBehavior).scatter().build()?;
//! for i in 0..4u32 {
//!     world.set_final_destination(mf_core::AgentId(i), Some(Vec2::new(400.0, 300.0)))?;
//! }
//! let mut clock = FrameClock::new(Millis(0), 16);
//! world.run_frames(60, &mut clock, &mut NoopObserver);
//! # Ok::<(), mf_sim::SimError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod world;


pub use builder::WorldBuilder;
pub use config::WorldConfig;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TickStats, WorldObserver};
pub use snapshot::{AgentSnapshot, ExplosionSnapshot};
pub use world::World;
