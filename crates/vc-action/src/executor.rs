//! The command execution seam.
//!
//! The host owns the real command bus; the controller only needs something
//! it can hand a [`Command`] to.  Execution is fire-and-forget: there is no
//! success or failure signal.

use vc_core::ZoneId;

use crate::Command;

/// Receives every command the coordinator issues, in issue order.
pub trait CommandExecutor {
    fn execute(&mut self, command: &Command);
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &mut E {
    fn execute(&mut self, command: &Command) {
        (**self).execute(command);
    }
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for Box<E> {
    fn execute(&mut self, command: &Command) {
        (**self).execute(command);
    }
}

// ── RecordingExecutor ─────────────────────────────────────────────────────────

/// Keeps every command in memory.  Used by tests and the replay demo.
#[derive(Clone, Debug, Default)]
pub struct RecordingExecutor {
    pub issued: Vec<Command>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reloads(&self) -> usize {
        self.issued.iter().filter(|c| c.is_reload()).count()
    }

    /// Number of `SetViewDistance` commands issued for `zone`.
    ///
    /// Each reduction issues exactly one, so this counts reduce pairs.
    pub fn reductions_for(&self, zone: &str) -> usize {
        self.issued
            .iter()
            .filter(|c| matches!(c, Command::SetViewDistance { zone: z, .. } if z.as_str() == zone))
            .count()
    }

    /// Zones reduced, in issue order, one entry per reduce pair.
    pub fn reduced_zones(&self) -> Vec<ZoneId> {
        self.issued
            .iter()
            .filter_map(|c| match c {
                Command::SetViewDistance { zone, .. } => Some(zone.clone()),
                _ => None,
            })
            .collect()
    }

    /// Every command rendered as a console line.
    pub fn rendered(&self, prefix: &str) -> Vec<String> {
        self.issued.iter().map(|c| c.render(prefix)).collect()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.issued)
    }
}

impl CommandExecutor for RecordingExecutor {
    fn execute(&mut self, command: &Command) {
        self.issued.push(command.clone());
    }
}

// ── LogExecutor ───────────────────────────────────────────────────────────────

/// Renders each command to console syntax and logs it at `info`.
///
/// For hosts without a command bus wired in.
#[derive(Clone, Debug)]
pub struct LogExecutor {
    prefix:   String,
    executed: u64,
}

impl LogExecutor {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), executed: 0 }
    }

    pub fn executed(&self) -> u64 {
        self.executed
    }
}

impl CommandExecutor for LogExecutor {
    fn execute(&mut self, command: &Command) {
        self.executed += 1;
        log::info!("dispatch: {}", command.render(&self.prefix));
    }
}
