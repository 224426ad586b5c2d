//! `vc-schedule` — when evaluation passes run.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`pass`]        | `PassKind` (`Startup`, `Settled`, `Cooldown`, `PostReload`) |
//! | [`task_queue`]  | `TaskQueue<T>` (`BTreeMap<Tick, VecDeque<T>>`)            |
//! | [`debounce`]    | `DebounceScheduler` — coalescing and delayed passes       |
//! | [`loader`]      | `load_trace_csv`, `load_trace_reader`                     |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Timeline of one vacancy episode (default delays)
//!
//! ```text
//! T0     last occupant quits        → notify → Settled pass queued at T20
//! T5     another event arrives      → coalesced, nothing queued
//! T20    Settled pass: zone empty   → PendingVacant(T20), Cooldown queued at T220
//! T220   Cooldown pass: still empty → reduce
//! ```
//!
//! Nothing is ever cancelled.  A pass that fires after conditions changed
//! re-samples occupancy and does nothing.

pub mod debounce;
pub mod error;
pub mod loader;
pub mod pass;
pub mod task_queue;

#[cfg(test)]
mod tests;

pub use debounce::DebounceScheduler;
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{TraceEvent, load_trace_csv, load_trace_reader};
pub use pass::PassKind;
pub use task_queue::{ScheduledTask, TaskQueue};
