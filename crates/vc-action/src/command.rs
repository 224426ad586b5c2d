//! Console commands sent to the host's distance plugin.

use std::fmt;

use vc_core::ZoneId;

/// One external action.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Restore every zone's distances from the host plugin's own config.
    Reload,
    SetViewDistance { zone: ZoneId, distance: u32 },
    SetSimulationDistance { zone: ZoneId, distance: u32 },
}

impl Command {
    /// Render as a console line, e.g. `"viewdistancetweaks viewdistance 4 world"`.
    pub fn render(&self, prefix: &str) -> String {
        match self {
            Command::Reload => format!("{prefix} reload"),
            Command::SetViewDistance { zone, distance } => {
                format!("{prefix} viewdistance {distance} {zone}")
            }
            Command::SetSimulationDistance { zone, distance } => {
                format!("{prefix} simulationdistance {distance} {zone}")
            }
        }
    }

    /// The zone this command targets; `None` for the global reload.
    pub fn zone(&self) -> Option<&ZoneId> {
        match self {
            Command::Reload => None,
            Command::SetViewDistance { zone, .. } | Command::SetSimulationDistance { zone, .. } => {
                Some(zone)
            }
        }
    }

    pub fn is_reload(&self) -> bool {
        matches!(self, Command::Reload)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Reload => f.write_str("reload"),
            Command::SetViewDistance { zone, distance } => {
                write!(f, "set-view-distance({zone}, {distance})")
            }
            Command::SetSimulationDistance { zone, distance } => {
                write!(f, "set-sim-distance({zone}, {distance})")
            }
        }
    }
}
