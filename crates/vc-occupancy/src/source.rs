//! The `OccupancySource` trait — the seam to the host's world registry.

use vc_core::{EntityId, ZoneId};

/// Live, authoritative occupancy of the host's zones.
///
/// Implementations answer from the host's current state on every call; the
/// controller relies on that to re-validate decisions after a delay.
///
/// # Example
///
/// ```rust,ignore
/// struct ServerWorlds<'a>(&'a Server);
///
/// impl OccupancySource for ServerWorlds<'_> {
///     fn list_occupants(&self, zone: &ZoneId) -> Option<Vec<EntityId>> {
///         let world = self.0.world(zone.as_str())?;
///         Some(world.players().map(|p| EntityId(p.id())).collect())
///     }
/// }
/// ```
pub trait OccupancySource {
    /// Entities currently in `zone`, or `None` if no such zone is loaded.
    fn list_occupants(&self, zone: &ZoneId) -> Option<Vec<EntityId>>;

    /// Number of entities currently in `zone`, or `None` if it is not loaded.
    ///
    /// Override when the host can count without building a list.
    fn occupant_count(&self, zone: &ZoneId) -> Option<usize> {
        self.list_occupants(zone).map(|occupants| occupants.len())
    }
}

impl<S: OccupancySource + ?Sized> OccupancySource for Box<S> {
    fn list_occupants(&self, zone: &ZoneId) -> Option<Vec<EntityId>> {
        (**self).list_occupants(zone)
    }

    fn occupant_count(&self, zone: &ZoneId) -> Option<usize> {
        (**self).occupant_count(zone)
    }
}
