//! The `Runtime` struct and its pass loop.

use vc_action::{ActionCoordinator, ActionPlan, CommandExecutor};
use vc_core::{Clock, Tick, VacancyConfig, ZoneId};
use vc_occupancy::{OccupancyEvent, OccupancySource, OccupancyTracker};
use vc_schedule::{DebounceScheduler, PassKind};
use vc_vacancy::{Transition, VacancyStateMachine};

use crate::RuntimeObserver;

// ── RuntimeStats ──────────────────────────────────────────────────────────────

/// Counters accumulated since the runtime was built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    /// Zone notifications received (an event touching two zones counts twice).
    pub notifications:      u64,
    /// Notifications folded into an already-pending settled pass.
    pub coalesced:          u64,
    pub startup_passes:     u64,
    pub settled_passes:     u64,
    pub cooldown_passes:    u64,
    pub post_reload_passes: u64,
    pub commands:           u64,
    pub reloads:            u64,
    pub reductions:         u64,
    /// Reductions found due but held back behind a reload.
    pub held:               u64,
}

impl RuntimeStats {
    pub fn passes(&self, kind: PassKind) -> u64 {
        match kind {
            PassKind::Startup    => self.startup_passes,
            PassKind::Settled    => self.settled_passes,
            PassKind::Cooldown   => self.cooldown_passes,
            PassKind::PostReload => self.post_reload_passes,
        }
    }

    pub fn total_passes(&self) -> u64 {
        PassKind::ALL.iter().map(|&kind| self.passes(kind)).sum()
    }

    fn record_pass(&mut self, kind: PassKind) {
        match kind {
            PassKind::Startup    => self.startup_passes += 1,
            PassKind::Settled    => self.settled_passes += 1,
            PassKind::Cooldown   => self.cooldown_passes += 1,
            PassKind::PostReload => self.post_reload_passes += 1,
        }
    }

    fn record_plan(&mut self, plan: &ActionPlan) {
        self.commands += plan.commands.len() as u64;
        self.reloads += u64::from(plan.reload);
        self.reductions += plan.reduced().count() as u64;
        self.held += plan.held.len() as u64;
    }
}

// ── Runtime ───────────────────────────────────────────────────────────────────

/// The vacancy controller.
///
/// `Runtime<S, E, C>` owns every piece of mutable state and is driven from a
/// single thread:
///
/// - [`notify`](Self::notify) for every host occupancy event,
/// - [`poll`](Self::poll) regularly (once per host tick is typical) to run
///   the passes that have come due.
///
/// Create via [`RuntimeBuilder`][crate::RuntimeBuilder].
pub struct Runtime<S: OccupancySource, E: CommandExecutor, C: Clock> {
    /// Validated configuration.
    pub config: VacancyConfig,

    /// Source of `now` for notifications and passes.
    pub clock: C,

    /// Live occupancy queries against the host's registry.
    pub tracker: OccupancyTracker<S>,

    /// Deferred passes: debounced, cooldown and post-reload.
    pub scheduler: DebounceScheduler,

    /// Per-zone vacancy state.
    pub machine: VacancyStateMachine,

    /// Reload / reduce ordering.
    pub coordinator: ActionCoordinator,

    /// Where commands go.
    pub executor: E,

    pub stats: RuntimeStats,
}

impl<S: OccupancySource, E: CommandExecutor, C: Clock> Runtime<S, E, C> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the startup pass so zones already empty at boot start their
    /// cooldown immediately.
    pub fn start<O: RuntimeObserver>(&mut self, observer: &mut O) -> ActionPlan {
        log::info!(
            "tick={} vacancy controller starting: {} zone(s), cooldown {}s",
            self.clock.now(),
            self.machine.len(),
            self.config.cooldown_secs,
        );
        self.run_pass(PassKind::Startup, observer)
    }

    /// Handle one host occupancy event.
    ///
    /// Returns the due tick of the settled pass this queued, or `None` if it
    /// was coalesced into one already pending.
    pub fn notify<O: RuntimeObserver>(
        &mut self,
        event:    &OccupancyEvent,
        observer: &mut O,
    ) -> Option<Tick> {
        let now = self.clock.now();
        log::trace!("tick={now} event {event}");
        for zone in event.zones() {
            self.record_notification(zone, now, observer);
        }
        self.debounce(now)
    }

    /// Handle a bare "occupancy of `zone` may have changed" notification.
    pub fn notify_zone<O: RuntimeObserver>(
        &mut self,
        zone:     &ZoneId,
        observer: &mut O,
    ) -> Option<Tick> {
        let now = self.clock.now();
        self.record_notification(zone, now, observer);
        self.debounce(now)
    }

    /// Run every pass due at or before `clock.now()`.  Returns how many ran.
    pub fn poll<O: RuntimeObserver>(&mut self, observer: &mut O) -> usize {
        let now = self.clock.now();
        let mut ran = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            if task.due < now {
                log::debug!("tick={now} {} pass due at {} is late", task.task, task.due);
            }
            // Only the queued post-reload pass releases the reductions its
            // reload is holding.
            if task.task == PassKind::PostReload {
                self.coordinator.begin_post_reload();
            }
            self.run_pass(task.task, observer);
            ran += 1;
        }
        ran
    }

    /// Run one pass of `kind` now, outside the queue.
    ///
    /// Every pass re-samples occupancy, so running one that is no longer
    /// needed is a no-op.  Reductions held for an outstanding reload stay
    /// held whatever `kind` is; they are released by the queued
    /// post-reload pass in [`Runtime::poll`].
    pub fn run_pass<O: RuntimeObserver>(&mut self, kind: PassKind, observer: &mut O) -> ActionPlan {
        let now = self.clock.now();
        self.stats.record_pass(kind);
        observer.on_pass_start(now, kind);
        log::debug!("tick={now} {kind} pass");

        // ── Sample and evaluate ───────────────────────────────────────────
        let snapshot = self.tracker.snapshot(self.machine.zone_ids(), now);
        let evaluation = self.machine.evaluate(&snapshot, now);
        for zone in &evaluation.skipped {
            log::warn!("tick={now} zone {zone} is not loaded; skipped");
            observer.on_zone_skipped(now, zone);
        }

        // ── Plan, commit, issue ───────────────────────────────────────────
        let plan = self.coordinator.plan(&evaluation);
        for commit in &plan.commits {
            self.machine.commit(&commit.zone, commit.next, Some(commit.transition), now);
            match commit.transition {
                Transition::Vacated => log::debug!("tick={now} {} is empty", commit.zone),
                Transition::Repopulated => {
                    log::info!("tick={now} {} repopulated before cooldown", commit.zone)
                }
                Transition::Restored => log::info!("tick={now} {} repopulated", commit.zone),
                Transition::Reverted => {
                    log::debug!("tick={now} {} reverted by reload; re-reducing", commit.zone)
                }
                Transition::Reduced => {}
            }
            observer.on_transition(now, &commit.zone, commit.transition, commit.next);
        }

        self.coordinator.issue(&plan, &mut self.executor);
        for command in &plan.commands {
            observer.on_command(now, command);
        }
        self.stats.record_plan(&plan);

        // ── Follow-up passes ──────────────────────────────────────────────
        if plan.commits(Transition::Vacated) {
            self.scheduler.schedule_cooldown(now);
        }
        if let Some(delay) = plan.post_reload_delay {
            self.scheduler.schedule_post_reload(now, delay);
        }

        observer.on_pass_end(now, kind, &plan);
        plan
    }

    /// Earliest tick at which a queued pass becomes due.
    pub fn next_due(&self) -> Option<Tick> {
        self.scheduler.next_due()
    }

    pub fn now(&self) -> Tick {
        self.clock.now()
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn record_notification<O: RuntimeObserver>(&mut self, zone: &ZoneId, now: Tick, observer: &mut O) {
        self.tracker.on_occupancy_changed(zone, now);
        self.stats.notifications += 1;
        observer.on_notify(now, zone);
    }

    fn debounce(&mut self, now: Tick) -> Option<Tick> {
        let due = self.scheduler.notify(now);
        if due.is_none() {
            self.stats.coalesced += 1;
        }
        due
    }
}
