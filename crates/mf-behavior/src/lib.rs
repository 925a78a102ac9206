//! `mf-behavior` — host-selected behavior, expressed as steering intents.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`Wander`, `Seek`, `Flee`, `Pursue`, `Flock`, `Halt`) |
//! | [`context`] | `FrameContext<'a>` — read-only frame snapshot shared by all agents |
//! | [`model`]   | `BehaviorModel` trait                                             |
//! | [`idle`]    | `IdleBehavior` — never produces intents                           |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                              |
//!
//! # Design notes
//!
//! mf-sim runs the steering phase of a frame as:
//!
//! 1. **Intents**: call `BehaviorModel::steer` with `&Agent` and the
//!    `&FrameContext`.  Reads only; cross-agent state comes from the
//!    neighbor snapshot taken before the frame.
//! 2. **Apply**: translate each intent into a steering call on that same
//!    agent (`Flock` members and `Pursue` targets are resolved against the
//!    snapshot), then run the agent's own animator, flee override and seeker.
//!
//! Both steps touch only the agent being processed, so the phase can run in
//! parallel and `BehaviorModel` only needs to be `Send + Sync`.

pub mod context;
pub mod error;
pub mod idle;
pub mod intent;
pub mod model;

#[cfg(test)]
mod tests;

pub use context::FrameContext;
pub use error::{BehaviorError, BehaviorResult};
pub use idle::IdleBehavior;
pub use intent::Intent;
pub use model::BehaviorModel;
