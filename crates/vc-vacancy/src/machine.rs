//! The transition function and the zone map it runs over.

use std::collections::BTreeMap;

use vc_core::{Tick, VacancyConfig, ZoneId};
use vc_occupancy::{Occupancy, OccupancySnapshot};

use crate::{Transition, ZoneRuntimeState, ZoneState};

// ── Pure transition function ──────────────────────────────────────────────────

/// Result of [`step`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub next:       ZoneState,
    pub transition: Option<Transition>,
}

/// Compute a zone's next state from a fresh occupancy sample.
///
/// An `Absent` sample leaves the state untouched: an unloaded zone is
/// neither vacant nor populated.  A `PendingVacant` zone is reduced once
/// `now - vacated_at >= cooldown_ticks`, and only if the sample taken now is
/// still empty.
pub fn step(prior: ZoneState, occupancy: Occupancy, now: Tick, cooldown_ticks: u64) -> Step {
    let unchanged = Step { next: prior, transition: None };
    let Some(count) = occupancy.count() else {
        return unchanged;
    };

    match (prior, count) {
        (ZoneState::Populated, 0) => Step {
            next:       ZoneState::PendingVacant { vacated_at: now },
            transition: Some(Transition::Vacated),
        },
        (ZoneState::Populated, _) => unchanged,

        (ZoneState::PendingVacant { vacated_at }, 0) => {
            if now.since(vacated_at) >= cooldown_ticks {
                Step {
                    next:       ZoneState::Reduced { vacated_at },
                    transition: Some(Transition::Reduced),
                }
            } else {
                unchanged
            }
        }
        (ZoneState::PendingVacant { .. }, _) => Step {
            next:       ZoneState::Populated,
            transition: Some(Transition::Repopulated),
        },

        (ZoneState::Reduced { .. }, 0) => unchanged,
        (ZoneState::Reduced { .. }, _) => Step {
            next:       ZoneState::Populated,
            transition: Some(Transition::Restored),
        },
    }
}

// ── Evaluation results ────────────────────────────────────────────────────────

/// One zone's outcome within an evaluation pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneStep {
    pub zone:       ZoneId,
    pub prior:      ZoneState,
    /// Occupant count sampled for this pass.
    pub occupants:  usize,
    pub next:       ZoneState,
    pub transition: Option<Transition>,
}

/// Outcome of evaluating every configured zone against one snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub at:      Tick,
    /// One entry per zone that was present in the snapshot, in zone order.
    pub steps:   Vec<ZoneStep>,
    /// Configured zones the host reported as absent.
    pub skipped: Vec<ZoneId>,
}

impl Evaluation {
    pub fn has(&self, transition: Transition) -> bool {
        self.steps.iter().any(|s| s.transition == Some(transition))
    }

    pub fn with(&self, transition: Transition) -> impl Iterator<Item = &ZoneStep> {
        self.steps.iter().filter(move |s| s.transition == Some(transition))
    }
}

// ── VacancyStateMachine ───────────────────────────────────────────────────────

/// Runtime state for every configured zone.
///
/// Owned by the sequencer; there is no shared or global state.
pub struct VacancyStateMachine {
    cooldown_ticks: u64,
    zones:          BTreeMap<ZoneId, ZoneRuntimeState>,
}

impl VacancyStateMachine {
    /// Every configured zone starts `Populated`; the first pass moves empty
    /// zones to `PendingVacant`.
    pub fn new(config: &VacancyConfig) -> Self {
        Self {
            cooldown_ticks: config.cooldown_ticks(),
            zones: config
                .zones
                .keys()
                .map(|zone| (zone.clone(), ZoneRuntimeState::default()))
                .collect(),
        }
    }

    /// Run [`step`] for every zone against `snapshot`.  Does not mutate.
    pub fn evaluate(&self, snapshot: &OccupancySnapshot, now: Tick) -> Evaluation {
        let mut evaluation = Evaluation { at: now, ..Evaluation::default() };

        for (zone, runtime) in &self.zones {
            match snapshot.get(zone.as_str()) {
                Occupancy::Absent => evaluation.skipped.push(zone.clone()),
                occupancy @ Occupancy::Present(occupants) => {
                    let Step { next, transition } =
                        step(runtime.state, occupancy, now, self.cooldown_ticks);
                    evaluation.steps.push(ZoneStep {
                        zone: zone.clone(),
                        prior: runtime.state,
                        occupants,
                        next,
                        transition,
                    });
                }
            }
        }
        evaluation
    }

    /// Move `zone` to `next`.  Unknown zones are ignored.
    pub fn commit(
        &mut self,
        zone:       &ZoneId,
        next:       ZoneState,
        transition: Option<Transition>,
        now:        Tick,
    ) {
        if let Some(runtime) = self.zones.get_mut(zone.as_str()) {
            runtime.apply(next, transition, now);
        }
    }

    pub fn state(&self, zone: &str) -> Option<&ZoneRuntimeState> {
        self.zones.get(zone)
    }

    pub fn zone_ids(&self) -> impl Iterator<Item = &ZoneId> {
        self.zones.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ZoneId, &ZoneRuntimeState)> {
        self.zones.iter()
    }

    /// Zones currently in `Reduced`.
    pub fn reduced_zones(&self) -> impl Iterator<Item = &ZoneId> {
        self.zones.iter().filter(|(_, z)| z.reduced()).map(|(id, _)| id)
    }

    pub fn cooldown_ticks(&self) -> u64 {
        self.cooldown_ticks
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
