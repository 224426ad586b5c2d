//! Runtime observer trait for tracing passes and commands.

use vc_action::{ActionPlan, Command};
use vc_core::{Tick, ZoneId};
use vc_schedule::PassKind;
use vc_vacancy::{Transition, ZoneState};

/// Callbacks invoked by the [`Runtime`][crate::Runtime] as it works.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — command printer
///
/// ```rust,ignore
/// struct Printer { prefix: String }
///
/// impl RuntimeObserver for Printer {
///     fn on_command(&mut self, now: Tick, command: &Command) {
///         println!("{now}  {}", command.render(&self.prefix));
///     }
/// }
/// ```
pub trait RuntimeObserver {
    /// A notification for `zone` was received.
    fn on_notify(&mut self, _now: Tick, _zone: &ZoneId) {}

    /// A pass is about to sample occupancy.
    fn on_pass_start(&mut self, _now: Tick, _kind: PassKind) {}

    /// A configured zone was absent from the host and left untouched.
    fn on_zone_skipped(&mut self, _now: Tick, _zone: &ZoneId) {}

    /// A state change was committed.
    fn on_transition(
        &mut self,
        _now:        Tick,
        _zone:       &ZoneId,
        _transition: Transition,
        _next:       ZoneState,
    ) {}

    /// A command was handed to the executor.
    fn on_command(&mut self, _now: Tick, _command: &Command) {}

    /// A pass finished.  `plan` is everything it decided.
    fn on_pass_end(&mut self, _now: Tick, _kind: PassKind, _plan: &ActionPlan) {}
}

/// A [`RuntimeObserver`] that does nothing.
pub struct NoopObserver;

impl RuntimeObserver for NoopObserver {}
