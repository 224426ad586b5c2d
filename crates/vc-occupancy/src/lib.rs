//! `vc-occupancy` — who is in which zone, read live from the host.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`event`]     | `OccupancyEvent` (join, quit, zone change, teleport)        |
//! | [`source`]    | `OccupancySource` trait — the host's world registry seam    |
//! | [`tracker`]   | `OccupancyTracker`, `Occupancy`, `OccupancySnapshot`        |
//! | [`registry`]  | `WorldRegistry` — in-memory `OccupancySource`               |
//!
//! The tracker never caches counts: every query goes to the source so a pass
//! sees the true instantaneous occupancy, including entities that finished a
//! transfer after the notification that triggered the pass.

pub mod event;
pub mod registry;
pub mod source;
pub mod tracker;


pub use event::OccupancyEvent;
pub use registry::WorldRegistry;
pub use source::OccupancySource;
pub use tracker::{Occupancy, OccupancySnapshot, OccupancyTracker};
