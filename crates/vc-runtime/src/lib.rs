//! `vc-runtime` — the single logical sequencer.
//!
//! # Data flow
//!
//! ```text
//! notify(event)
//!   ① Tracker    — record which zones the event touched.
//!   ② Debounce   — queue one Settled pass (settle delay) unless one is pending.
//!
//! poll()  — for every pass due at or before clock.now(), in (due, FIFO) order:
//!   ③ Sample     — fresh occupancy for every configured zone.
//!   ④ Evaluate   — pure step per zone; absent zones are skipped.
//!   ⑤ Plan       — ActionCoordinator orders reload / reduce and holds
//!                  reductions while a reload settles.
//!   ⑥ Commit     — apply the planned state changes.
//!   ⑦ Issue      — hand commands to the executor (reload first).
//!   ⑧ Follow-up  — Cooldown pass if a zone was vacated, PostReload pass if
//!                  a reload was issued.
//! ```
//!
//! Everything runs on the caller's thread.  Delays are deferred tasks in the
//! scheduler's queue, never sleeps.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use vc_action::LogExecutor;
//! use vc_core::{MonotonicClock, VacancyConfig};
//! use vc_runtime::{NoopObserver, RuntimeBuilder};
//!
//! let config = VacancyConfig::load_json("vacancy.json".as_ref())?;
//! let executor = LogExecutor::new(&config.command_prefix);
//! let mut runtime = RuntimeBuilder::new(config, host_registry, executor, MonotonicClock::new())
//!     .build()?;
//! runtime.start(&mut NoopObserver);
//! loop {
//!     for event in host.drain_events() {
//!         runtime.notify(&event, &mut NoopObserver);
//!     }
//!     runtime.poll(&mut NoopObserver);
//! }
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod runtime;


pub use builder::RuntimeBuilder;
pub use error::{RuntimeError, RuntimeResult};
pub use observer::{NoopObserver, RuntimeObserver};
pub use runtime::{Runtime, RuntimeStats};
