//! `mf-steering` — Reynolds-style steering on top of a [`Kinematics`] body.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`params`]   | `SteeringParams` — force cap, arrival, wander, flock knobs  |
//! | [`steering`] | `Steering` — force accumulator, seek/flee/pursue/wander     |
//! | [`flock`]    | `Neighbor` snapshot, flocking and sight predicates          |
//!
//! # Force model
//!
//! Every behavior call *adds* to one accumulated force.  Once per frame
//! [`Steering::apply`] clamps the sum to `max_force`, divides by mass, adds it
//! to the body's velocity, clears the accumulator and integrates the body.
//!
//! Behaviors read the body (`&Kinematics`) but never write it, so any number
//! of them can be combined in any order within a frame.  Cross-agent reads go
//! through [`Neighbor`] values copied out before the frame started.
//!
//! [`Kinematics`]: mf_motion::Kinematics

pub mod flock;
pub mod params;
pub mod steering;

#[cfg(test)]
mod tests;

pub use flock::Neighbor;
pub use params::SteeringParams;
pub use steering::{DEFAULT_ARRIVE_DISTANCE, Steering, StepOutcome};
