//! Zone state transitions.

use std::fmt;

/// A change of [`ZoneState`][crate::ZoneState] worth reacting to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// `Populated → PendingVacant`: the last occupant left.
    Vacated,

    /// `PendingVacant → Populated` before the cooldown elapsed.  Nothing was
    /// reduced, so nothing needs restoring.
    Repopulated,

    /// `PendingVacant → Reduced`: empty for the whole cooldown.  Triggers
    /// the zone's reduce commands.
    Reduced,

    /// `Reduced → Populated`: triggers one global reload.
    Restored,

    /// `Reduced → PendingVacant`, keeping the original vacancy time.
    ///
    /// Never produced by [`step`][crate::step]; the action coordinator
    /// applies it to zones that stay empty while a global reload undoes
    /// their reduction, so the reduction is re-applied after the reload.
    Reverted,
}

impl Transition {
    pub fn as_str(self) -> &'static str {
        match self {
            Transition::Vacated     => "vacated",
            Transition::Repopulated => "repopulated",
            Transition::Reduced     => "reduced",
            Transition::Restored    => "restored",
            Transition::Reverted    => "reverted",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
