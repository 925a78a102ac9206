//! `mf-core` — foundational types for the `morphflock` motion engine.
//!
//! This crate is a dependency of every other `mf-*` crate.  It has no `mf-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`vector`]      | `Vec2` — the 2D value type used everywhere            |
//! | [`ids`]         | `AgentId`, `ExplosionId`                              |
//! | [`time`]        | `Millis`, `FrameClock`                                |
//! | [`rng`]         | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`color`]       | `Rgb`, `ColorId`, palette helpers                     |
//! | [`boundary`]    | `Boundary`, `EdgeBehavior`                            |
//! | [`error`]       | `MfError`, `MfResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod boundary;
pub mod color;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use boundary::{Boundary, EdgeBehavior};
pub use color::{ColorId, Rgb};
pub use error::{MfError, MfResult};
pub use ids::{AgentId, ExplosionId};
pub use rng::{AgentRng, SimRng};
pub use time::{FrameClock, Millis};
pub use vector::Vec2;
