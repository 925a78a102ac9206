//! `mf-agent` — the agent aggregate and its per-frame state machines.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`channel`]  | `Channel` — one eased scalar converging on a target            |
//! | [`animator`] | `Animator`, `Shape` — radius, shape step, color, max speed     |
//! | [`seeker`]   | `Seeker`, `Arrival` — sleep/wake target seeking                |
//! | [`agent`]    | `Agent`, `FleeOverride` — composition of all of the above      |
//! | [`traits`]   | `Positionable`, `Steerable`, `Animatable` capability traits    |
//! | [`params`]   | `AgentParams`, `AnimatorParams`, `SeekerParams`                |
//! | [`store`]    | `AgentRngs` — per-agent RNGs, kept apart for split borrows     |
//! | [`builder`]  | `AgentPoolBuilder` — agents + RNGs in one step                 |
//!
//! # One agent frame
//!
//! ```text
//! Agent::steer(now, rng)   — animator channels, max-speed easing,
//!                            flee override, seeker (wander/seek + sleep/wake)
//! Agent::integrate()       — clamp force, apply, integrate body
//! ```
//!
//! The world calls `steer` for every agent first, then `integrate` for every
//! agent, so nobody sees a neighbor's same-frame position.

pub mod agent;
pub mod animator;
pub mod builder;
pub mod channel;
pub mod params;
pub mod seeker;
pub mod store;
pub mod traits;

#[cfg(test)]
mod tests;

pub use agent::{Agent, FleeOverride};
pub use animator::{Animator, Shape};
pub use builder::AgentPoolBuilder;
pub use channel::Channel;
pub use params::{AgentParams, AnimatorParams, SeekerParams};
pub use seeker::{Arrival, Seeker, SleepState};
pub use store::AgentRngs;
pub use traits::{Animatable, Positionable, Steerable};
