//! Controller configuration.
//!
//! # File format
//!
//! JSON, using the same keys as the host plugin's config file:
//!
//! ```json
//! {
//!   "cooldown-seconds": 10,
//!   "command-prefix": "viewdistancetweaks",
//!   "worlds": {
//!     "world":        { "view-distance": 4, "simulation-distance": 3 },
//!     "world_nether": { "view-distance": 2, "simulation-distance": 2 }
//!   }
//! }
//! ```
//!
//! Every key except the per-world distances is optional.  Values are read as
//! signed integers so that negative entries are reported as
//! [`CoreError::InvalidDistance`] instead of an opaque parse failure.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::{CoreError, CoreResult, ZoneId};

// ── ZoneConfig ────────────────────────────────────────────────────────────────

/// Reduced distance targets for one zone.  Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneConfig {
    pub name:                  ZoneId,
    pub reduced_view_distance: u32,
    pub reduced_sim_distance:  u32,
}

// ── VacancyConfig ─────────────────────────────────────────────────────────────

/// Top-level controller configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VacancyConfig {
    /// How long a zone must stay empty before it is reduced.
    pub cooldown_secs: u64,

    /// Debounce window between an occupancy notification and the pass it
    /// triggers.  Default: 20 ticks (1 s).
    pub settle_delay_ticks: u64,

    /// Wait between a reload and the reductions held back by it.
    /// Default: 10 ticks (0.5 s).
    pub reload_settle_ticks: u64,

    /// First word of every console command.
    pub command_prefix: String,

    /// Configured zones, ordered by name so passes are deterministic.
    pub zones: BTreeMap<ZoneId, ZoneConfig>,
}

impl VacancyConfig {
    pub const DEFAULT_COOLDOWN_SECS:       u64  = 10;
    pub const DEFAULT_SETTLE_DELAY_TICKS:  u64  = 20;
    pub const DEFAULT_RELOAD_SETTLE_TICKS: u64  = 10;
    pub const DEFAULT_COMMAND_PREFIX:      &str = "viewdistancetweaks";

    /// Upper bound on `cooldown-seconds`: one year.
    pub const MAX_COOLDOWN_SECS: u64 = 365 * 24 * 3_600;
    /// Upper bound on the settle and reload delays: one hour.
    pub const MAX_DELAY_TICKS:   u64 = 3_600 * crate::TICKS_PER_SECOND;

    /// A config with default delays and no zones.
    pub fn new(cooldown_secs: u64) -> Self {
        Self {
            cooldown_secs,
            settle_delay_ticks:  Self::DEFAULT_SETTLE_DELAY_TICKS,
            reload_settle_ticks: Self::DEFAULT_RELOAD_SETTLE_TICKS,
            command_prefix:      Self::DEFAULT_COMMAND_PREFIX.to_owned(),
            zones:               BTreeMap::new(),
        }
    }

    /// Add (or replace) a zone.
    pub fn with_zone(mut self, name: impl Into<ZoneId>, view: u32, sim: u32) -> Self {
        let name = name.into();
        self.zones.insert(
            name.clone(),
            ZoneConfig { name, reduced_view_distance: view, reduced_sim_distance: sim },
        );
        self
    }

    /// Cooldown expressed in ticks.
    #[inline]
    pub fn cooldown_ticks(&self) -> u64 {
        self.cooldown_secs.saturating_mul(crate::TICKS_PER_SECOND)
    }

    pub fn zone(&self, name: &str) -> Option<&ZoneConfig> {
        self.zones.get(name)
    }

    /// Load and validate a JSON config file.
    pub fn load_json(path: &Path) -> CoreResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        log::info!(
            "loaded {} zone(s) from {} (cooldown={}s)",
            config.zones.len(),
            path.display(),
            config.cooldown_secs,
        );
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(text: &str) -> CoreResult<Self> {
        let file: ConfigFile = serde_json::from_str(text)?;
        let config = file.into_config()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants a config built in code might violate.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cooldown_secs == 0 {
            return Err(CoreError::NonPositive { field: "cooldown-seconds", value: 0 });
        }
        if self.settle_delay_ticks == 0 {
            return Err(CoreError::NonPositive { field: "settle-delay-ticks", value: 0 });
        }
        if self.reload_settle_ticks == 0 {
            return Err(CoreError::NonPositive { field: "reload-settle-ticks", value: 0 });
        }
        for (field, value, max) in [
            ("cooldown-seconds", self.cooldown_secs, Self::MAX_COOLDOWN_SECS),
            ("settle-delay-ticks", self.settle_delay_ticks, Self::MAX_DELAY_TICKS),
            ("reload-settle-ticks", self.reload_settle_ticks, Self::MAX_DELAY_TICKS),
        ] {
            if value > max {
                return Err(CoreError::TooLarge { field, value, max });
            }
        }
        if self.command_prefix.trim().is_empty() {
            return Err(CoreError::Config("command-prefix must not be empty".into()));
        }
        for (key, zone) in &self.zones {
            if key.as_str().trim().is_empty() {
                return Err(CoreError::Config("zone names must not be empty".into()));
            }
            if *key != zone.name {
                return Err(CoreError::Config(format!(
                    "zone entry {key:?} is named {:?}",
                    zone.name.as_str()
                )));
            }
        }
        Ok(())
    }
}

impl Default for VacancyConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COOLDOWN_SECS)
    }
}

// ── On-disk representation ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ConfigFile {
    #[serde(default = "default_cooldown")]
    cooldown_seconds:    i64,
    #[serde(default)]
    command_prefix:      Option<String>,
    #[serde(default)]
    settle_delay_ticks:  Option<i64>,
    #[serde(default)]
    reload_settle_ticks: Option<i64>,
    #[serde(default)]
    worlds:              BTreeMap<String, WorldEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WorldEntry {
    view_distance:       i64,
    simulation_distance: i64,
}

fn default_cooldown() -> i64 {
    VacancyConfig::DEFAULT_COOLDOWN_SECS as i64
}

impl ConfigFile {
    fn into_config(self) -> CoreResult<VacancyConfig> {
        let mut config = VacancyConfig::new(positive("cooldown-seconds", self.cooldown_seconds)?);
        if let Some(ticks) = self.settle_delay_ticks {
            config.settle_delay_ticks = positive("settle-delay-ticks", ticks)?;
        }
        if let Some(ticks) = self.reload_settle_ticks {
            config.reload_settle_ticks = positive("reload-settle-ticks", ticks)?;
        }
        if let Some(prefix) = self.command_prefix {
            config.command_prefix = prefix;
        }

        for (name, entry) in self.worlds {
            let zone = ZoneId::new(name);
            let view = distance(&zone, "view-distance", entry.view_distance)?;
            let sim = distance(&zone, "simulation-distance", entry.simulation_distance)?;
            config = config.with_zone(zone, view, sim);
        }
        Ok(config)
    }
}

fn positive(field: &'static str, value: i64) -> CoreResult<u64> {
    if value <= 0 {
        return Err(CoreError::NonPositive { field, value });
    }
    Ok(value as u64)
}

fn distance(zone: &ZoneId, field: &'static str, value: i64) -> CoreResult<u32> {
    u32::try_from(value).map_err(|_| CoreError::InvalidDistance {
        zone: zone.clone(),
        field,
        value,
    })
}
