//! `vc-vacancy` — the per-zone vacancy state machine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`state`]       | `ZoneState`, `ZoneRuntimeState`                            |
//! | [`transition`]  | `Transition` enum                                          |
//! | [`machine`]     | pure `step` function, `VacancyStateMachine`, `ZoneStep`    |
//!
//! # States
//!
//! ```text
//!              count == 0                     cooldown elapsed, count == 0
//! Populated ───────────────▶ PendingVacant ─────────────────────────────▶ Reduced
//!     ▲                          │                                          │
//!     │        count > 0         │                  count > 0               │
//!     ├──────────────────────────┘                  (reload)                │
//!     └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `step` is a pure function of (prior state, occupancy sample, now,
//! cooldown).  [`VacancyStateMachine::evaluate`] applies it to every zone
//! without mutating anything; the caller decides which results to
//! [`commit`](VacancyStateMachine::commit).

pub mod machine;
pub mod state;
pub mod transition;

#[cfg(test)]
mod tests;

pub use machine::{Evaluation, Step, VacancyStateMachine, ZoneStep, step};
pub use state::{ZoneRuntimeState, ZoneState};
pub use transition::Transition;
