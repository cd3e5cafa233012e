//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter, `Timestamp`.  The
//! coordinator never reads a wall clock: the driver passes `now` into every
//! tick, so tests can step time explicitly and agent timers stay exact
//! integer arithmetic.
//!
//! `SimClock` is a convenience for drivers that run at a fixed frame rate
//! (the interactive front-end ticks at ~30 frames per second):
//!
//!   now = frame * frame_ms

use std::fmt;

// ── Timestamp ─────────────────────────────────────────────────────────────────

/// Absolute simulation time in milliseconds since the start of the run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn after_ms(self, ms: u64) -> Timestamp {
        Timestamp(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Timestamp {
    type Output = Timestamp;
    #[inline]
    fn add(self, rhs: u64) -> Timestamp {
        Timestamp(self.0 + rhs)
    }
}

impl std::ops::Sub for Timestamp {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Timestamp) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Fixed-step frame clock for drivers.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Milliseconds per frame.
    pub frame_ms: u64,
    /// Frames advanced so far.
    pub frame: u64,
}

impl SimClock {
    pub fn new(frame_ms: u64) -> Self {
        Self { frame_ms, frame: 0 }
    }

    /// Current simulation time.
    #[inline]
    pub fn now(&self) -> Timestamp {
        Timestamp(self.frame * self.frame_ms)
    }

    /// Advance by one frame and return the new time.
    #[inline]
    pub fn advance(&mut self) -> Timestamp {
        self.frame += 1;
        self.now()
    }

    /// Frames needed to cover `ms` milliseconds (rounds up).
    #[inline]
    pub fn frames_for_ms(&self, ms: u64) -> u64 {
        ms.div_ceil(self.frame_ms.max(1))
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} ({})", self.frame, self.now())
    }
}
