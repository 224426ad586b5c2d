//! Occupancy-change notifications delivered by the host event boundary.

use std::fmt;

use vc_core::{EntityId, ZoneId};

/// Something happened that could have changed who is present in a zone.
///
/// The controller does not trust the event's payload for counting; it only
/// uses it to decide *when* to look.  Counts always come from the
/// [`OccupancySource`][crate::OccupancySource].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyEvent {
    /// An entity connected and spawned into `zone`.
    Joined {
        entity: EntityId,
        zone:   ZoneId,
    },

    /// An entity disconnected while in `zone`.
    Quit {
        entity: EntityId,
        zone:   ZoneId,
    },

    /// An entity finished moving from one zone to another (portal, respawn).
    ChangedZone {
        entity: EntityId,
        from:   ZoneId,
        to:     ZoneId,
    },

    /// An entity was teleported.  `from` and `to` may be the same zone.
    Teleported {
        entity: EntityId,
        from:   ZoneId,
        to:     ZoneId,
    },
}

impl OccupancyEvent {
    pub fn entity(&self) -> EntityId {
        match self {
            Self::Joined { entity, .. }
            | Self::Quit { entity, .. }
            | Self::ChangedZone { entity, .. }
            | Self::Teleported { entity, .. } => *entity,
        }
    }

    /// Zones whose occupancy this event may have altered, without duplicates.
    pub fn zones(&self) -> Vec<&ZoneId> {
        match self {
            Self::Joined { zone, .. } | Self::Quit { zone, .. } => vec![zone],
            Self::ChangedZone { from, to, .. } | Self::Teleported { from, to, .. } => {
                if from == to { vec![from] } else { vec![from, to] }
            }
        }
    }

    /// Stable lowercase name, matching the trace CSV `kind` column.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Joined { .. }      => "join",
            Self::Quit { .. }        => "quit",
            Self::ChangedZone { .. } => "change",
            Self::Teleported { .. }  => "teleport",
        }
    }
}

impl fmt::Display for OccupancyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Joined { entity, zone } | Self::Quit { entity, zone } => {
                write!(f, "{} {entity} {zone}", self.kind())
            }
            Self::ChangedZone { entity, from, to } | Self::Teleported { entity, from, to } => {
                write!(f, "{} {entity} {from} -> {to}", self.kind())
            }
        }
    }
}
