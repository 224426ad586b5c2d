//! `vc-core` — foundational types for the vacancy controller.
//!
//! This crate is a dependency of every other `vc-*` crate.  It has no `vc-*`
//! dependencies and only a handful of external ones (`thiserror`, `log`,
//! `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `ZoneId`, `EntityId`, `TaskId`                        |
//! | [`time`]        | `Tick`, `Clock`, `ManualClock`, `MonotonicClock`      |
//! | [`config`]      | `ZoneConfig`, `VacancyConfig` (JSON loading + checks) |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{VacancyConfig, ZoneConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{EntityId, TaskId, ZoneId};
pub use time::{Clock, ManualClock, MonotonicClock, TICKS_PER_SECOND, TICK_MILLIS, Tick};
