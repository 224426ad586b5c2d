//! Unit tests for vc-schedule.

use std::io::Cursor;

use vc_core::{EntityId, Tick, ZoneId};
use vc_occupancy::OccupancyEvent;

use crate::{DebounceScheduler, PassKind, ScheduleError, TaskQueue, load_trace_reader};

// ── TaskQueue ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod task_queue {
    use super::*;

    #[test]
    fn pops_in_due_order() {
        let mut queue = TaskQueue::new();
        queue.push(Tick(30), "c");
        queue.push(Tick(10), "a");
        queue.push(Tick(20), "b");

        let order: Vec<&str> =
            std::iter::from_fn(|| queue.pop_due(Tick(100)).map(|t| t.task)).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
        assert!(queue.is_empty());
    }

    #[test]
    fn same_tick_is_fifo() {
        let mut queue = TaskQueue::new();
        let first = queue.push(Tick(5), 1);
        let second = queue.push(Tick(5), 2);
        assert!(first < second);
        assert_eq!(queue.tick_count(), 1);

        let a = queue.pop_due(Tick(5)).unwrap();
        assert_eq!((a.id, a.due, a.task), (first, Tick(5), 1));
        assert_eq!(queue.pop_due(Tick(5)).unwrap().task, 2);
    }

    #[test]
    fn nothing_due_before_its_tick() {
        let mut queue = TaskQueue::new();
        queue.push(Tick(20), ());
        assert!(queue.pop_due(Tick(19)).is_none());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.next_tick(), Some(Tick(20)));
        assert!(queue.pop_due(Tick(20)).is_some());
        assert_eq!(queue.next_tick(), None);
    }

    #[test]
    fn contains_at_matches_exact_tick() {
        let mut queue = TaskQueue::new();
        queue.push(Tick(220), PassKind::Cooldown);
        assert!(queue.contains_at(Tick(220), |k| *k == PassKind::Cooldown));
        assert!(!queue.contains_at(Tick(220), |k| *k == PassKind::Settled));
        assert!(!queue.contains_at(Tick(221), |_| true));
    }
}

// ── DebounceScheduler ─────────────────────────────────────────────────────────

#[cfg(test)]
mod debounce {
    use super::*;

    #[test]
    fn burst_queues_one_settled_pass() {
        let mut sched = DebounceScheduler::new(20, 200);
        assert_eq!(sched.notify(Tick(0)), Some(Tick(20)));
        for t in 1..10 {
            assert_eq!(sched.notify(Tick(t)), None);
        }
        assert_eq!(sched.queued(PassKind::Settled), 1);
        assert_eq!(sched.pending_due(), Some(Tick(20)));
    }

    #[test]
    fn popping_settled_pass_reopens_window() {
        let mut sched = DebounceScheduler::new(20, 200);
        sched.notify(Tick(0));
        assert!(sched.pop_due(Tick(19)).is_none());

        let task = sched.pop_due(Tick(20)).unwrap();
        assert_eq!(task.task, PassKind::Settled);
        assert!(!sched.is_pending());

        assert_eq!(sched.notify(Tick(25)), Some(Tick(45)));
    }

    #[test]
    fn cooldown_is_independent_of_debounce() {
        let mut sched = DebounceScheduler::new(20, 200);
        sched.notify(Tick(0));
        assert!(sched.schedule_cooldown(Tick(20)).is_some());
        // A later burst does not touch the queued cooldown pass.
        sched.pop_due(Tick(20));
        sched.notify(Tick(50));
        assert_eq!(sched.queued(PassKind::Cooldown), 1);
        assert_eq!(sched.queued(PassKind::Settled), 1);
        assert_eq!(sched.next_due(), Some(Tick(70)));
    }

    #[test]
    fn duplicate_cooldown_for_same_tick_is_dropped() {
        let mut sched = DebounceScheduler::new(20, 200);
        assert!(sched.schedule_cooldown(Tick(20)).is_some());
        assert!(sched.schedule_cooldown(Tick(20)).is_none());
        assert!(sched.schedule_cooldown(Tick(21)).is_some());
        assert_eq!(sched.queued(PassKind::Cooldown), 2);
    }

    #[test]
    fn post_reload_pass_due_after_delay() {
        let mut sched = DebounceScheduler::new(20, 200);
        sched.schedule_post_reload(Tick(100), 10);
        assert!(sched.pop_due(Tick(109)).is_none());
        assert_eq!(sched.pop_due(Tick(110)).unwrap().task, PassKind::PostReload);
    }

    #[test]
    fn from_config_uses_configured_delays() {
        let sched = DebounceScheduler::from_config(&vc_core::VacancyConfig::new(3));
        assert_eq!(sched.settle_ticks(), 20);
        assert_eq!(sched.cooldown_ticks(), 60);
    }
}

// ── Trace loader ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Write;

    use super::*;

    const TRACE: &str = "\
at_ms,kind,entity,zone,to_zone\n\
1500,change,1,world,world_nether\n\
0,join,1,world,\n\
1500,teleport,2,world_nether,world_nether\n\
4000,quit,1,world_nether,\n\
";

    #[test]
    fn parses_and_sorts_by_tick() {
        let events = load_trace_reader(Cursor::new(TRACE)).unwrap();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].at, Tick(0));
        assert_eq!(
            events[0].event,
            OccupancyEvent::Joined { entity: EntityId(1), zone: ZoneId::from("world") }
        );
        // Same tick: file order preserved.
        assert_eq!(events[1].at, Tick(30));
        assert_eq!(events[1].event.kind(), "change");
        assert_eq!(events[2].event.kind(), "teleport");
        assert_eq!(events[3].at, Tick(80));
    }

    #[test]
    fn change_without_destination_is_rejected() {
        let err = load_trace_reader(Cursor::new("at_ms,kind,entity,zone,to_zone\n0,change,1,world,\n"))
            .unwrap_err();
        match err {
            ScheduleError::Parse(msg) => assert!(msg.contains("row 2"), "{msg}"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = load_trace_reader(Cursor::new("at_ms,kind,entity,zone,to_zone\n0,fly,1,world,\n"));
        assert!(matches!(result, Err(ScheduleError::Parse(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TRACE.as_bytes()).unwrap();
        let events = crate::load_trace_csv(file.path()).unwrap();
        assert_eq!(events.len(), 4);
    }
}
