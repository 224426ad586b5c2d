//! `vc-action` — turns zone transitions into console commands.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                     |
//! |-----------------|--------------------------------------------------------------|
//! | [`command`]     | `Command` — reload / set-view-distance / set-sim-distance    |
//! | [`executor`]    | `CommandExecutor` trait, `RecordingExecutor`, `LogExecutor`  |
//! | [`coordinator`] | `ActionCoordinator`, `ActionPlan`, `Commit`                  |
//!
//! # Ordering rules
//!
//! A reload restores every zone on the host at once, so within one pass:
//!
//! 1. If any zone was restored, exactly one `Reload` is issued and every
//!    reduction found by the pass is held back.  A `PostReload` pass is
//!    requested after the reload settle delay to re-validate and apply them.
//! 2. Otherwise each newly reduced zone gets its two commands, view distance
//!    first, then simulation distance.
//!
//! Commands are fire-and-forget; nothing is acknowledged.

pub mod command;
pub mod coordinator;
pub mod executor;


pub use command::Command;
pub use coordinator::{ActionCoordinator, ActionPlan, Commit};
pub use executor::{CommandExecutor, LogExecutor, RecordingExecutor};
