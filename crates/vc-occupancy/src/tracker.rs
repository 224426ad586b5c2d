//! `OccupancyTracker` — notification bookkeeping plus live occupancy queries.

use std::collections::BTreeMap;

use vc_core::{Tick, ZoneId};

use crate::{OccupancyEvent, OccupancySource};

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// Result of one occupancy query.
///
/// `Absent` (zone not loaded or misconfigured) is deliberately distinct from
/// `Present(0)`: an absent zone is skipped, never treated as vacant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Occupancy {
    Absent,
    Present(usize),
}

impl Occupancy {
    #[inline]
    pub fn is_vacant(self) -> bool {
        self == Occupancy::Present(0)
    }

    #[inline]
    pub fn count(self) -> Option<usize> {
        match self {
            Occupancy::Absent     => None,
            Occupancy::Present(n) => Some(n),
        }
    }
}

// ── OccupancySnapshot ─────────────────────────────────────────────────────────

/// Occupancy of a set of zones, all sampled at the same tick.
#[derive(Clone, Debug, Default)]
pub struct OccupancySnapshot {
    pub taken_at: Tick,
    zones:        BTreeMap<ZoneId, Occupancy>,
}

impl OccupancySnapshot {
    pub fn new(taken_at: Tick) -> Self {
        Self { taken_at, zones: BTreeMap::new() }
    }

    pub fn insert(&mut self, zone: ZoneId, occupancy: Occupancy) {
        self.zones.insert(zone, occupancy);
    }

    /// Occupancy of `zone`; zones that were not sampled read as `Absent`.
    pub fn get(&self, zone: &str) -> Occupancy {
        self.zones.get(zone).copied().unwrap_or(Occupancy::Absent)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, Occupancy)> {
        self.zones.iter().map(|(zone, occ)| (zone, *occ))
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

// ── OccupancyTracker ──────────────────────────────────────────────────────────

/// Wraps the host's [`OccupancySource`].
///
/// Notifications only record the last-notified tick per zone; they never
/// change the counts the tracker reports.
pub struct OccupancyTracker<S: OccupancySource> {
    source:        S,
    last_notified: BTreeMap<ZoneId, Tick>,
}

impl<S: OccupancySource> OccupancyTracker<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            last_notified: BTreeMap::new(),
        }
    }

    /// Record that something may have altered who is present in `zone`.
    pub fn on_occupancy_changed(&mut self, zone: &ZoneId, now: Tick) {
        self.last_notified.insert(zone.clone(), now);
    }

    /// Record every zone touched by `event`.
    pub fn record(&mut self, event: &OccupancyEvent, now: Tick) {
        for zone in event.zones() {
            self.on_occupancy_changed(zone, now);
        }
    }

    /// Live occupant count of `zone`, straight from the source.
    pub fn current_occupant_count(&self, zone: &ZoneId) -> Occupancy {
        match self.source.occupant_count(zone) {
            Some(n) => Occupancy::Present(n),
            None    => Occupancy::Absent,
        }
    }

    /// Sample every zone in `zones` at `now`.
    pub fn snapshot<'a, I>(&self, zones: I, now: Tick) -> OccupancySnapshot
    where
        I: IntoIterator<Item = &'a ZoneId>,
    {
        let mut snapshot = OccupancySnapshot::new(now);
        for zone in zones {
            snapshot.insert(zone.clone(), self.current_occupant_count(zone));
        }
        snapshot
    }

    /// Tick of the most recent notification for `zone`.
    pub fn last_notified(&self, zone: &str) -> Option<Tick> {
        self.last_notified.get(zone).copied()
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access to the source, for hosts (and tests) that own it.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
