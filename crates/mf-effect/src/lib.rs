//! `mf-effect` — short-lived radial pulses in a fixed pool.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`explosion`] | `Explosion`, `ExplosionParams` — one expanding pulse       |
//! | [`pool`]      | `ExplosionPool` — fixed slots, reuse of inert ones         |
//!
//! # Lifecycle
//!
//! ```text
//! inert ──trigger──▶ life = 1, radius = 0 ──each frame──▶ radius += speed
//!   ▲                                                    life   -= decay
//!   └──────────────────────── life reaches 0 ◀──────────────────┘
//! ```
//!
//! Slots are allocated once.  Triggering with every slot busy does nothing.

pub mod explosion;
pub mod pool;


pub use explosion::{Explosion, ExplosionParams};
pub use pool::ExplosionPool;
