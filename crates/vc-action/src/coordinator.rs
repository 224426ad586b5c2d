//! `ActionCoordinator` — decides what one evaluation pass does to the host.

use std::collections::BTreeMap;

use vc_core::{Tick, VacancyConfig, ZoneConfig, ZoneId};
use vc_vacancy::{Evaluation, Transition, ZoneState};

use crate::{Command, CommandExecutor};

// ── ActionPlan ────────────────────────────────────────────────────────────────

/// A state change the caller should commit to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    pub zone:       ZoneId,
    pub next:       ZoneState,
    pub transition: Transition,
}

/// Everything one pass decided, in the order it must happen.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionPlan {
    pub at:       Tick,
    /// Commands in issue order.  A `Reload` is always first.
    pub commands: Vec<Command>,
    /// State changes to commit.  Held reductions are not in here.
    pub commits:  Vec<Commit>,
    /// Zones whose reduction was found due but held back.
    pub held:     Vec<ZoneId>,
    pub reload:   bool,
    /// Request a `PostReload` pass this many ticks from now.
    pub post_reload_delay: Option<u64>,
}

impl ActionPlan {
    /// True if the pass changes nothing and issues nothing.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty() && self.commits.is_empty() && self.held.is_empty()
    }

    pub fn commits(&self, transition: Transition) -> bool {
        self.commits.iter().any(|c| c.transition == transition)
    }

    /// Zones reduced by this plan.
    pub fn reduced(&self) -> impl Iterator<Item = &ZoneId> {
        self.commits
            .iter()
            .filter(|c| c.transition == Transition::Reduced)
            .map(|c| &c.zone)
    }
}

// ── ActionCoordinator ─────────────────────────────────────────────────────────

/// Orders reload and reduce actions for each pass.
///
/// Keeps one piece of state across passes: the number of `PostReload`
/// passes requested but not yet started.  While that is non-zero any pass
/// holds its reductions, so a reduce can never be issued between a reload
/// and the pass that waits for it to settle.
pub struct ActionCoordinator {
    zones:               BTreeMap<ZoneId, ZoneConfig>,
    reload_settle_ticks: u64,
    outstanding:         u32,
}

impl ActionCoordinator {
    pub fn new(config: &VacancyConfig) -> Self {
        Self {
            zones:               config.zones.clone(),
            reload_settle_ticks: config.reload_settle_ticks,
            outstanding:         0,
        }
    }

    /// Decide commands and commits for `evaluation`.
    ///
    /// - `Vacated`, `Repopulated`, `Restored`: committed as computed.
    /// - `Reduced`: committed with its command pair, unless a reload is
    ///   issued by this pass or still settling, in which case the zone is
    ///   held in `PendingVacant` and re-examined by the `PostReload` pass.
    /// - When this pass issues a reload, every zone the evaluation left in
    ///   `Reduced` is committed back to `PendingVacant` (`Reverted`) with
    ///   its original `vacated_at`, since the reload undid its reduction.
    pub fn plan(&mut self, evaluation: &Evaluation) -> ActionPlan {
        let now = evaluation.at;
        let reload = evaluation.has(Transition::Restored);
        let hold = reload || self.outstanding > 0;

        let mut plan = ActionPlan { at: now, reload, ..ActionPlan::default() };
        if reload {
            plan.commands.push(Command::Reload);
        }

        for step in &evaluation.steps {
            match step.transition {
                Some(Transition::Reduced) if hold => {
                    log::debug!("tick={now} {}: reduction held until reload settles", step.zone);
                    plan.held.push(step.zone.clone());
                }
                Some(Transition::Reduced) => {
                    let Some(zone) = self.zones.get(step.zone.as_str()) else {
                        log::warn!("tick={now} {}: no distance targets configured", step.zone);
                        continue;
                    };
                    plan.commands.push(Command::SetViewDistance {
                        zone:     zone.name.clone(),
                        distance: zone.reduced_view_distance,
                    });
                    plan.commands.push(Command::SetSimulationDistance {
                        zone:     zone.name.clone(),
                        distance: zone.reduced_sim_distance,
                    });
                    plan.commits.push(Commit {
                        zone:       step.zone.clone(),
                        next:       step.next,
                        transition: Transition::Reduced,
                    });
                }
                Some(transition) => plan.commits.push(Commit {
                    zone: step.zone.clone(),
                    next: step.next,
                    transition,
                }),
                None => {
                    if let (true, ZoneState::Reduced { vacated_at }) = (reload, step.next) {
                        plan.commits.push(Commit {
                            zone:       step.zone.clone(),
                            next:       ZoneState::PendingVacant { vacated_at },
                            transition: Transition::Reverted,
                        });
                    }
                }
            }
        }

        if reload {
            self.outstanding += 1;
            plan.post_reload_delay = Some(self.reload_settle_ticks);
        }
        plan
    }

    /// Call at the start of every queued `PostReload` pass, before
    /// [`plan`](Self::plan).
    pub fn begin_post_reload(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    /// Hand `plan`'s commands to `executor` in order.
    pub fn issue<E: CommandExecutor + ?Sized>(&self, plan: &ActionPlan, executor: &mut E) {
        let now = plan.at;
        if plan.reload {
            log::info!("tick={now} zone restored, reloading all distances");
        }
        for zone in plan.reduced() {
            if let Some(cfg) = self.zones.get(zone.as_str()) {
                log::info!(
                    "tick={now} reducing {zone} to view={} sim={}",
                    cfg.reduced_view_distance,
                    cfg.reduced_sim_distance,
                );
            }
        }
        for command in &plan.commands {
            executor.execute(command);
        }
    }

    /// `PostReload` passes requested but not yet started.
    pub fn outstanding(&self) -> u32 {
        self.outstanding
    }

    pub fn reload_settle_ticks(&self) -> u64 {
        self.reload_settle_ticks
    }
}
