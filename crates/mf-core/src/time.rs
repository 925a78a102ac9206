//! Time model: millisecond timestamps and a fixed-step frame clock.
//!
//! # Design
//!
//! The engine is frame-stepped: every `World::tick` call advances one frame
//! and receives the host's current time `now`.  All deadlines (sleep/wake,
//! flee windows, host intervals) are absolute `Millis` compared against that
//! `now`, never durations decremented per frame, so a host that drops frames
//! still wakes agents on time.
//!
//! Hosts without a wall clock (tests, the headless demo) drive `now` from a
//! `FrameClock`:
//!
//!   now = start_millis + current_frame * frame_millis

use std::fmt;

// ── Millis ────────────────────────────────────────────────────────────────────

/// An absolute timestamp in milliseconds.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Millis = Millis(0);

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: u64) -> Millis {
        Millis(self.0.saturating_add(rhs))
    }
}

impl std::ops::AddAssign<u64> for Millis {
    #[inline]
    fn add_assign(&mut self, rhs: u64) {
        self.0 = self.0.saturating_add(rhs);
    }
}

impl std::ops::Sub for Millis {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Millis) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Converts frame counts into the `now` timestamps fed to the tick loop.
///
/// `FrameClock` is cheap to copy and holds no heap data.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Timestamp of frame 0.
    pub start_millis: Millis,
    /// Milliseconds per frame.  Default: 16 (≈ 60 fps).
    pub frame_millis: u64,
    /// The current frame, advanced by `FrameClock::advance()` each iteration.
    pub current_frame: u64,
}

impl FrameClock {
    pub fn new(start_millis: Millis, frame_millis: u64) -> Self {
        Self { start_millis, frame_millis, current_frame: 0 }
    }

    /// Advance the clock by one frame.
    #[inline]
    pub fn advance(&mut self) {
        self.current_frame += 1;
    }

    /// Timestamp of the current frame.
    #[inline]
    pub fn now(&self) -> Millis {
        self.start_millis + self.elapsed_millis()
    }

    #[inline]
    pub fn elapsed_millis(&self) -> u64 {
        self.current_frame * self.frame_millis
    }

    /// How many frames span `millis`? (rounds up)
    #[inline]
    pub fn frames_for_millis(&self, millis: u64) -> u64 {
        if self.frame_millis == 0 {
            return 0;
        }
        millis.div_ceil(self.frame_millis)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Millis::ZERO, 16)
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} ({})", self.current_frame, self.now())
    }
}
