//! `DebounceScheduler` — turns a stream of notifications into passes.
//!
//! Rules:
//!
//! - At most one `Settled` pass is pending per scheduler.  A notification
//!   that arrives while one is pending is coalesced into it.
//! - The pending flag clears when the `Settled` pass is popped, so a
//!   notification that arrives during or after that pass queues a new one.
//! - `Cooldown` and `PostReload` passes are independent of debouncing; they
//!   are queued explicitly and never coalesced with `Settled` passes.

use vc_core::{TaskId, Tick, VacancyConfig};

use crate::{PassKind, ScheduledTask, TaskQueue};

pub struct DebounceScheduler {
    settle_ticks:   u64,
    cooldown_ticks: u64,
    queue:          TaskQueue<PassKind>,
    /// Due tick of the pending `Settled` pass, if any.
    pending:        Option<Tick>,
}

impl DebounceScheduler {
    pub fn new(settle_ticks: u64, cooldown_ticks: u64) -> Self {
        Self {
            settle_ticks,
            cooldown_ticks,
            queue:   TaskQueue::new(),
            pending: None,
        }
    }

    pub fn from_config(config: &VacancyConfig) -> Self {
        Self::new(config.settle_delay_ticks, config.cooldown_ticks())
    }

    /// An occupancy notification arrived at `now`.
    ///
    /// Returns the due tick of the `Settled` pass it queued, or `None` if it
    /// was folded into the pass already pending.
    pub fn notify(&mut self, now: Tick) -> Option<Tick> {
        if let Some(due) = self.pending {
            log::trace!("tick={now} notification coalesced into settled pass at {due}");
            return None;
        }
        let due = now + self.settle_ticks;
        self.queue.push(due, PassKind::Settled);
        self.pending = Some(due);
        log::debug!("tick={now} settled pass queued for {due}");
        Some(due)
    }

    /// Queue a `Cooldown` pass one cooldown window after `now`.
    ///
    /// Returns `None` if a cooldown pass is already queued for that tick.
    pub fn schedule_cooldown(&mut self, now: Tick) -> Option<TaskId> {
        let due = now + self.cooldown_ticks;
        if self.queue.contains_at(due, |kind| *kind == PassKind::Cooldown) {
            return None;
        }
        log::debug!("tick={now} cooldown pass queued for {due}");
        Some(self.queue.push(due, PassKind::Cooldown))
    }

    /// Queue a `PostReload` pass `delay` ticks after `now`.
    pub fn schedule_post_reload(&mut self, now: Tick, delay: u64) -> TaskId {
        let due = now + delay;
        log::debug!("tick={now} post-reload pass queued for {due}");
        self.queue.push(due, PassKind::PostReload)
    }

    /// Pop the next pass due at or before `now`.
    pub fn pop_due(&mut self, now: Tick) -> Option<ScheduledTask<PassKind>> {
        let task = self.queue.pop_due(now)?;
        if task.task == PassKind::Settled {
            self.pending = None;
        }
        Some(task)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Due tick of the pending `Settled` pass.
    pub fn pending_due(&self) -> Option<Tick> {
        self.pending
    }

    /// Earliest tick at which any queued pass becomes due.
    pub fn next_due(&self) -> Option<Tick> {
        self.queue.next_tick()
    }

    /// Number of queued passes of `kind`.
    pub fn queued(&self, kind: PassKind) -> usize {
        self.queue.iter().filter(|(_, k)| **k == kind).count()
    }

    pub fn settle_ticks(&self) -> u64 {
        self.settle_ticks
    }

    pub fn cooldown_ticks(&self) -> u64 {
        self.cooldown_ticks
    }
}
