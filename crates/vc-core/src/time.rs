//! Controller time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter at the host server's
//! resolution of 20 ticks per second (50 ms per tick).  Every delay the
//! controller uses is a whole number of ticks:
//!
//! | Delay                 | Ticks | Wall time |
//! |-----------------------|-------|-----------|
//! | settle (debounce)     | 20    | 1 s       |
//! | post-reload settle    | 10    | 0.5 s     |
//! | cooldown (default)    | 200   | 10 s      |
//!
//! Integer ticks keep all cooldown arithmetic exact.  The current tick comes
//! from a [`Clock`], which is injected so tests can drive time by hand.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Host server ticks per wall-clock second.
pub const TICKS_PER_SECOND: u64 = 20;

/// Wall-clock milliseconds per tick.
pub const TICK_MILLIS: u64 = 1_000 / TICKS_PER_SECOND;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute tick on the controller clock.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick `secs` seconds after tick 0.
    #[inline]
    pub fn from_secs(secs: u64) -> Tick {
        Tick(secs.saturating_mul(TICKS_PER_SECOND))
    }

    /// The tick containing millisecond `ms` (rounds down).
    #[inline]
    pub fn from_millis(ms: u64) -> Tick {
        Tick(ms / TICK_MILLIS)
    }

    /// Ticks elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Milliseconds since tick 0.
    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0 * TICK_MILLIS
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0.saturating_add(rhs))
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.since(rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── Clocks ────────────────────────────────────────────────────────────────────

/// Source of the current tick.
///
/// Implementations must never go backwards.
pub trait Clock {
    fn now(&self) -> Tick;
}

/// A clock that only moves when told to.
///
/// Clones share the same underlying counter, so a test can keep one handle
/// while the runtime owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    current: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start: Tick) -> Self {
        Self { current: Arc::new(AtomicU64::new(start.0)) }
    }

    /// Jump to `tick`.  Requests to move backwards are ignored.
    pub fn set(&self, tick: Tick) {
        self.current.fetch_max(tick.0, Ordering::SeqCst);
    }

    /// Advance by `n` ticks and return the new tick.
    pub fn advance(&self, n: u64) -> Tick {
        Tick(self.current.fetch_add(n, Ordering::SeqCst) + n)
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Tick {
        Tick(self.current.load(Ordering::SeqCst))
    }
}

/// Wall-clock ticks since construction, backed by [`Instant`].
#[derive(Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Tick {
        Tick::from_millis(self.origin.elapsed().as_millis() as u64)
    }
}
