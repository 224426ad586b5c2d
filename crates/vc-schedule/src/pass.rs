//! Kinds of evaluation pass.

use std::fmt;

/// Why an evaluation pass is running.  Every kind evaluates every zone the
/// same way; the kind only affects what gets scheduled afterwards and how
/// the pass is reported.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PassKind {
    /// Immediate pass when the runtime starts.
    Startup,
    /// Debounced pass after a burst of occupancy notifications.
    Settled,
    /// Re-check once the cooldown window of a vacated zone has elapsed.
    Cooldown,
    /// Applies reductions held back while a reload took effect.
    PostReload,
}

impl PassKind {
    pub const ALL: [PassKind; 4] = [
        PassKind::Startup,
        PassKind::Settled,
        PassKind::Cooldown,
        PassKind::PostReload,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PassKind::Startup    => "startup",
            PassKind::Settled    => "settled",
            PassKind::Cooldown   => "cooldown",
            PassKind::PostReload => "post-reload",
        }
    }
}

impl fmt::Display for PassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
