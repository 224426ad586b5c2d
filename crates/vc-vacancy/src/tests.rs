//! Unit tests for vc-vacancy.

use vc_core::{Tick, VacancyConfig, ZoneId};
use vc_occupancy::{Occupancy, OccupancySnapshot};

use crate::{Step, Transition, VacancyStateMachine, ZoneState, step};

const COOLDOWN: u64 = 200;

fn pending(t: u64) -> ZoneState {
    ZoneState::PendingVacant { vacated_at: Tick(t) }
}

fn reduced(t: u64) -> ZoneState {
    ZoneState::Reduced { vacated_at: Tick(t) }
}

// ── step ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn populated_to_pending_when_empty() {
        let s = step(ZoneState::Populated, Occupancy::Present(0), Tick(20), COOLDOWN);
        assert_eq!(s, Step { next: pending(20), transition: Some(Transition::Vacated) });
    }

    #[test]
    fn populated_stays_populated() {
        let s = step(ZoneState::Populated, Occupancy::Present(3), Tick(20), COOLDOWN);
        assert_eq!(s, Step { next: ZoneState::Populated, transition: None });
    }

    #[test]
    fn pending_waits_for_cooldown() {
        let s = step(pending(20), Occupancy::Present(0), Tick(219), COOLDOWN);
        assert_eq!(s, Step { next: pending(20), transition: None });
    }

    #[test]
    fn pending_reduces_at_exact_cooldown() {
        let s = step(pending(20), Occupancy::Present(0), Tick(220), COOLDOWN);
        assert_eq!(s, Step { next: reduced(20), transition: Some(Transition::Reduced) });
    }

    #[test]
    fn pending_repopulates_without_action() {
        let s = step(pending(20), Occupancy::Present(1), Tick(120), COOLDOWN);
        assert_eq!(s, Step { next: ZoneState::Populated, transition: Some(Transition::Repopulated) });
    }

    #[test]
    fn repopulation_wins_even_after_cooldown() {
        // The re-sample at decision time decides, not the elapsed time alone.
        let s = step(pending(20), Occupancy::Present(1), Tick(500), COOLDOWN);
        assert_eq!(s.transition, Some(Transition::Repopulated));
    }

    #[test]
    fn reduced_restores_when_occupied() {
        let s = step(reduced(20), Occupancy::Present(2), Tick(1_000), COOLDOWN);
        assert_eq!(s, Step { next: ZoneState::Populated, transition: Some(Transition::Restored) });
    }

    #[test]
    fn reduced_stays_reduced_while_empty() {
        let s = step(reduced(20), Occupancy::Present(0), Tick(10_000), COOLDOWN);
        assert_eq!(s, Step { next: reduced(20), transition: None });
    }

    #[test]
    fn absent_never_changes_state() {
        for prior in [ZoneState::Populated, pending(0), reduced(0)] {
            let s = step(prior, Occupancy::Absent, Tick(10_000), COOLDOWN);
            assert_eq!(s, Step { next: prior, transition: None });
        }
    }

    #[test]
    fn vacated_at_accessor() {
        assert_eq!(ZoneState::Populated.vacated_at(), None);
        assert_eq!(pending(5).vacated_at(), Some(Tick(5)));
        assert_eq!(reduced(5).vacated_at(), Some(Tick(5)));
        assert!(reduced(5).is_reduced());
        assert!(pending(5).is_pending());
    }
}

// ── VacancyStateMachine ───────────────────────────────────────────────────────

#[cfg(test)]
mod machine {
    use super::*;

    fn config() -> VacancyConfig {
        VacancyConfig::new(10).with_zone("alpha", 4, 3).with_zone("beta", 6, 5)
    }

    fn snapshot(at: u64, zones: &[(&str, Occupancy)]) -> OccupancySnapshot {
        let mut snap = OccupancySnapshot::new(Tick(at));
        for (zone, occ) in zones {
            snap.insert(ZoneId::from(*zone), *occ);
        }
        snap
    }

    #[test]
    fn all_configured_zones_start_populated() {
        let machine = VacancyStateMachine::new(&config());
        assert_eq!(machine.len(), 2);
        assert_eq!(machine.cooldown_ticks(), 200);
        for (_, zone) in machine.iter() {
            assert_eq!(zone.state, ZoneState::Populated);
            assert_eq!(zone.vacated_at(), None);
        }
    }

    #[test]
    fn evaluate_does_not_mutate() {
        let machine = VacancyStateMachine::new(&config());
        let snap = snapshot(20, &[("alpha", Occupancy::Present(0)), ("beta", Occupancy::Present(1))]);
        let eval = machine.evaluate(&snap, Tick(20));

        assert_eq!(eval.steps.len(), 2);
        assert_eq!(eval.steps[0].zone.as_str(), "alpha");
        assert_eq!(eval.steps[0].transition, Some(Transition::Vacated));
        assert_eq!(eval.steps[1].transition, None);
        assert!(eval.has(Transition::Vacated));
        assert_eq!(machine.state("alpha").unwrap().state, ZoneState::Populated);
    }

    #[test]
    fn absent_zones_are_skipped() {
        let machine = VacancyStateMachine::new(&config());
        let snap = snapshot(20, &[("alpha", Occupancy::Present(0))]);
        let eval = machine.evaluate(&snap, Tick(20));
        assert_eq!(eval.steps.len(), 1);
        assert_eq!(eval.skipped, vec![ZoneId::from("beta")]);
    }

    #[test]
    fn commit_updates_state_and_counters() {
        let mut machine = VacancyStateMachine::new(&config());
        let alpha = ZoneId::from("alpha");
        machine.commit(&alpha, pending(20), Some(Transition::Vacated), Tick(20));
        machine.commit(&alpha, reduced(20), Some(Transition::Reduced), Tick(220));

        let state = machine.state("alpha").unwrap();
        assert!(state.reduced());
        assert_eq!(state.vacated_at(), Some(Tick(20)));
        assert_eq!(state.reductions, 1);
        assert_eq!(state.changed_at, Tick(220));
        assert_eq!(machine.reduced_zones().collect::<Vec<_>>(), vec![&alpha]);

        machine.commit(&alpha, ZoneState::Populated, Some(Transition::Restored), Tick(400));
        let state = machine.state("alpha").unwrap();
        assert_eq!(state.vacated_at(), None);
        assert_eq!(state.restores, 1);
    }

    #[test]
    fn commit_to_unknown_zone_is_ignored() {
        let mut machine = VacancyStateMachine::new(&config());
        machine.commit(&ZoneId::from("gamma"), pending(0), Some(Transition::Vacated), Tick(0));
        assert!(machine.state("gamma").is_none());
    }
}
