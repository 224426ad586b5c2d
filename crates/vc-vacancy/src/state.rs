//! Per-zone state.

use std::fmt;

use vc_core::Tick;

use crate::Transition;

/// Where a zone is in its vacancy cycle.
///
/// `vacated_at` is carried by both vacant states: while pending it is the
/// start of the cooldown window, and while reduced it is kept so that a
/// reduction undone by a global reload can be re-applied without waiting
/// for a fresh cooldown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ZoneState {
    #[default]
    Populated,
    PendingVacant { vacated_at: Tick },
    Reduced { vacated_at: Tick },
}

impl ZoneState {
    /// When the current vacancy episode began, if the zone is vacant.
    pub fn vacated_at(self) -> Option<Tick> {
        match self {
            ZoneState::Populated => None,
            ZoneState::PendingVacant { vacated_at } | ZoneState::Reduced { vacated_at } => {
                Some(vacated_at)
            }
        }
    }

    pub fn is_reduced(self) -> bool {
        matches!(self, ZoneState::Reduced { .. })
    }

    pub fn is_pending(self) -> bool {
        matches!(self, ZoneState::PendingVacant { .. })
    }
}

impl fmt::Display for ZoneState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneState::Populated => f.write_str("populated"),
            ZoneState::PendingVacant { vacated_at } => write!(f, "pending-vacant since {vacated_at}"),
            ZoneState::Reduced { vacated_at } => write!(f, "reduced (vacant since {vacated_at})"),
        }
    }
}

/// Everything the controller keeps about one configured zone.
///
/// Created for every configured zone at startup and never removed.  The
/// occupant count is not stored: it is always re-read from the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneRuntimeState {
    pub state:      ZoneState,
    /// Tick of the last committed transition.
    pub changed_at: Tick,
    /// Reduce command pairs issued for this zone since startup.
    pub reductions: u32,
    /// Times this zone was restored by a reload since startup.
    pub restores:   u32,
}

impl ZoneRuntimeState {
    pub fn vacated_at(&self) -> Option<Tick> {
        self.state.vacated_at()
    }

    pub fn reduced(&self) -> bool {
        self.state.is_reduced()
    }

    /// Move to `next`, updating counters for `transition`.
    pub fn apply(&mut self, next: ZoneState, transition: Option<Transition>, now: Tick) {
        self.state = next;
        match transition {
            Some(Transition::Reduced)  => self.reductions += 1,
            Some(Transition::Restored) => self.restores += 1,
            _ => {}
        }
        if transition.is_some() {
            self.changed_at = now;
        }
    }
}
