//! Fluent builder for constructing a [`Runtime`].

use vc_action::{ActionCoordinator, CommandExecutor};
use vc_core::{Clock, VacancyConfig, ZoneId};
use vc_occupancy::{OccupancySource, OccupancyTracker};
use vc_schedule::DebounceScheduler;
use vc_vacancy::VacancyStateMachine;

use crate::{Runtime, RuntimeResult, RuntimeStats};

/// Fluent builder for [`Runtime<S, E, C>`].
///
/// # Required inputs
///
/// - [`VacancyConfig`] — cooldown, delays, per-zone targets
/// - `S: OccupancySource` — the host's world registry
/// - `E: CommandExecutor` — where commands go
/// - `C: Clock` — e.g. [`vc_core::MonotonicClock`], or [`vc_core::ManualClock`] in tests
///
/// # Optional inputs
///
/// | Method                   | Effect                                  |
/// |--------------------------|-----------------------------------------|
/// | `.zone(name, view, sim)` | Add or replace a zone in the config     |
///
/// # Example
///
/// ```rust,ignore
/// let mut runtime = RuntimeBuilder::new(VacancyConfig::new(10), registry, executor, clock)
///     .zone("world", 4, 3)
///     .zone("world_nether", 2, 2)
///     .build()?;
/// runtime.start(&mut NoopObserver);
/// ```
pub struct RuntimeBuilder<S: OccupancySource, E: CommandExecutor, C: Clock> {
    config:   VacancyConfig,
    source:   S,
    executor: E,
    clock:    C,
}

impl<S: OccupancySource, E: CommandExecutor, C: Clock> RuntimeBuilder<S, E, C> {
    /// Create a builder with all required inputs.
    pub fn new(config: VacancyConfig, source: S, executor: E, clock: C) -> Self {
        Self { config, source, executor, clock }
    }

    pub fn zone(mut self, name: impl Into<ZoneId>, view: u32, sim: u32) -> Self {
        self.config = self.config.with_zone(name, view, sim);
        self
    }

    /// Validate the config and return a runtime that has not yet run its
    /// startup pass.
    pub fn build(self) -> RuntimeResult<Runtime<S, E, C>> {
        self.config.validate()?;

        if self.config.zones.is_empty() {
            log::warn!("no zones configured; the controller will never act");
        }
        for zone in self.config.zones.keys() {
            if self.source.occupant_count(zone).is_none() {
                log::warn!("zone {zone} is not loaded; it is skipped until it is");
            }
        }

        Ok(Runtime {
            tracker:     OccupancyTracker::new(self.source),
            scheduler:   DebounceScheduler::from_config(&self.config),
            machine:     VacancyStateMachine::new(&self.config),
            coordinator: ActionCoordinator::new(&self.config),
            executor:    self.executor,
            clock:       self.clock,
            config:      self.config,
            stats:       RuntimeStats::default(),
        })
    }
}
