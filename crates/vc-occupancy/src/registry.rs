//! `WorldRegistry` — an in-memory [`OccupancySource`].
//!
//! Stands in for the host's world list in tests and in the replay demo.
//! An entity is in at most one zone at a time; moving it removes it from
//! its previous zone first.
//!
//! ```rust
//! use vc_core::{EntityId, ZoneId};
//! use vc_occupancy::{OccupancyEvent, OccupancySource, WorldRegistry};
//!
//! let mut worlds = WorldRegistry::with_zones(["world", "world_nether"]);
//! worlds.apply(&OccupancyEvent::Joined { entity: EntityId(1), zone: "world".into() });
//! worlds.apply(&OccupancyEvent::ChangedZone {
//!     entity: EntityId(1),
//!     from:   "world".into(),
//!     to:     "world_nether".into(),
//! });
//!
//! assert_eq!(worlds.occupant_count(&ZoneId::from("world")), Some(0));
//! assert_eq!(worlds.occupant_count(&ZoneId::from("world_nether")), Some(1));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};

use vc_core::{EntityId, ZoneId};

use crate::{OccupancyEvent, OccupancySource};

#[derive(Clone, Debug, Default)]
pub struct WorldRegistry {
    zones:     BTreeMap<ZoneId, BTreeSet<EntityId>>,
    locations: HashMap<EntityId, ZoneId>,
}

impl WorldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every zone in `names` loaded and empty.
    pub fn with_zones<I, Z>(names: I) -> Self
    where
        I: IntoIterator<Item = Z>,
        Z: Into<ZoneId>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.load_zone(name);
        }
        registry
    }

    /// Load `zone` (no-op if already loaded).
    pub fn load_zone(&mut self, zone: impl Into<ZoneId>) {
        self.zones.entry(zone.into()).or_default();
    }

    /// Unload `zone`, evicting its occupants.  Returns how many were evicted.
    pub fn unload_zone(&mut self, zone: &str) -> usize {
        let Some(occupants) = self.zones.remove(zone) else {
            return 0;
        };
        for entity in &occupants {
            self.locations.remove(entity);
        }
        occupants.len()
    }

    pub fn is_loaded(&self, zone: &str) -> bool {
        self.zones.contains_key(zone)
    }

    /// Place `entity` in `zone`, removing it from wherever it was.
    ///
    /// Returns `false` (and leaves the entity nowhere) if `zone` is not loaded.
    pub fn place(&mut self, entity: EntityId, zone: &ZoneId) -> bool {
        self.remove(entity);
        match self.zones.get_mut(zone.as_str()) {
            Some(occupants) => {
                occupants.insert(entity);
                self.locations.insert(entity, zone.clone());
                true
            }
            None => {
                log::debug!("{entity} moved into unloaded zone {zone}; dropping");
                false
            }
        }
    }

    /// Remove `entity` from its zone.  Returns the zone it was in.
    pub fn remove(&mut self, entity: EntityId) -> Option<ZoneId> {
        let zone = self.locations.remove(&entity)?;
        if let Some(occupants) = self.zones.get_mut(zone.as_str()) {
            occupants.remove(&entity);
        }
        Some(zone)
    }

    /// Apply a host event to the registry.
    ///
    /// Joins, zone changes and teleports place the entity at the destination;
    /// quits remove it.  The `from` fields are informational: the registry's
    /// own record of where the entity was always wins.
    pub fn apply(&mut self, event: &OccupancyEvent) {
        match event {
            OccupancyEvent::Joined { entity, zone } => {
                self.place(*entity, zone);
            }
            OccupancyEvent::Quit { entity, .. } => {
                self.remove(*entity);
            }
            OccupancyEvent::ChangedZone { entity, to, .. }
            | OccupancyEvent::Teleported { entity, to, .. } => {
                self.place(*entity, to);
            }
        }
    }

    /// Zone `entity` is currently in.
    pub fn locate(&self, entity: EntityId) -> Option<&ZoneId> {
        self.locations.get(&entity)
    }

    /// Total entities across all loaded zones.
    pub fn population(&self) -> usize {
        self.locations.len()
    }
}

impl OccupancySource for WorldRegistry {
    fn list_occupants(&self, zone: &ZoneId) -> Option<Vec<EntityId>> {
        self.zones
            .get(zone.as_str())
            .map(|occupants| occupants.iter().copied().collect())
    }

    fn occupant_count(&self, zone: &ZoneId) -> Option<usize> {
        self.zones.get(zone.as_str()).map(BTreeSet::len)
    }
}
