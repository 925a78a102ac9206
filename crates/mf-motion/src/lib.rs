//! `mf-motion` — the kinematic body every agent is built on.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`body`]   | `Kinematics` — position, velocity, radius, edges, rotation   |
//! | [`params`] | `BodyParams` — construction defaults                         |
//!
//! # Movement model
//!
//! One call to [`Kinematics::integrate`] is one frame:
//!
//! 1. A body at rest (velocity exactly zero) is left untouched.
//! 2. Velocity is clamped to `max_speed` (squared comparison).
//! 3. `position += velocity`.
//! 4. With an active boundary, the edge policy runs per axis:
//!    `Bounce` clamps to the radius-inset rectangle and reflects that axis'
//!    velocity; `Wrap` teleports past the `2·radius` outset to the opposite
//!    outset, keeping the overflow remainder.
//! 5. With auto-rotate on and a pre-clamp squared speed above 0.1, the
//!    rotation faces the velocity (`atan2(vy, vx) + π/2`).
//!
//! Steering forces live one layer up in `mf-steering`; this crate knows
//! nothing about them.

pub mod body;
pub mod params;


pub use body::Kinematics;
pub use params::BodyParams;
