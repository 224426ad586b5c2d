//! `TaskQueue` — deferred tasks keyed by the tick they become due.
//!
//! # Why this exists
//!
//! All waiting in the controller is expressed as "run this at tick T" rather
//! than as a sleep.  The queue is drained cooperatively by the single
//! sequencer: each poll pops whatever is due and runs it to completion.
//!
//! `BTreeMap` keeps the earliest due tick at the front; tasks sharing a tick
//! run in insertion order (a `VecDeque` per tick), so a queue drained at any
//! poll cadence replays the same order.

use std::collections::{BTreeMap, VecDeque};

use vc_core::{TaskId, Tick};

/// A task popped from the queue, with its bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduledTask<T> {
    pub id:   TaskId,
    pub due:  Tick,
    pub task: T,
}

/// Tasks waiting for their due tick.
pub struct TaskQueue<T> {
    inner:   BTreeMap<Tick, VecDeque<(TaskId, T)>>,
    next_id: u64,
    /// Cached total task count for O(1) `len()`.
    total:   usize,
}

impl<T> TaskQueue<T> {
    pub fn new() -> Self {
        Self {
            inner:   BTreeMap::new(),
            next_id: 0,
            total:   0,
        }
    }

    /// Schedule `task` to become due at `due`.
    pub fn push(&mut self, due: Tick, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.inner.entry(due).or_default().push_back((id, task));
        self.total += 1;
        id
    }

    /// Remove and return the earliest task due at or before `now`.
    ///
    /// Returns `None` when nothing is due yet.
    pub fn pop_due(&mut self, now: Tick) -> Option<ScheduledTask<T>> {
        let mut entry = self.inner.first_entry()?;
        let due = *entry.key();
        if due > now {
            return None;
        }
        let (id, task) = entry.get_mut().pop_front()?;
        if entry.get().is_empty() {
            entry.remove();
        }
        self.total -= 1;
        Some(ScheduledTask { id, due, task })
    }

    /// Whether a task matching `pred` is already queued for exactly `due`.
    pub fn contains_at(&self, due: Tick, pred: impl Fn(&T) -> bool) -> bool {
        self.inner
            .get(&due)
            .is_some_and(|tasks| tasks.iter().any(|(_, task)| pred(task)))
    }

    /// The earliest tick with at least one queued task, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued tasks across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct ticks that have at least one queued task.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }

    /// Every queued task in due order, without removing anything.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, &T)> {
        self.inner
            .iter()
            .flat_map(|(due, tasks)| tasks.iter().map(move |(_, task)| (*due, task)))
    }
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
