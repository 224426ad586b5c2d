//! CSV occupancy-trace loader.
//!
//! # CSV format
//!
//! One row per host event, timestamped in milliseconds from the start of the
//! trace.  `to_zone` is only used by `change` and `teleport` rows.
//!
//! ```csv
//! at_ms,kind,entity,zone,to_zone
//! 0,join,1,world,
//! 1500,change,1,world,world_nether
//! 4000,quit,1,world_nether,
//! ```
//!
//! | `kind`     | Event                                         |
//! |------------|-----------------------------------------------|
//! | `join`     | `OccupancyEvent::Joined { zone }`             |
//! | `quit`     | `OccupancyEvent::Quit { zone }`               |
//! | `change`   | `OccupancyEvent::ChangedZone { zone → to_zone }` |
//! | `teleport` | `OccupancyEvent::Teleported { zone → to_zone }`  |
//!
//! Rows may appear in any order; the result is sorted by tick and keeps file
//! order for rows landing on the same tick.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use vc_core::{EntityId, Tick, ZoneId};
use vc_occupancy::OccupancyEvent;

use crate::ScheduleError;

/// One timestamped host event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEvent {
    pub at:    Tick,
    pub event: OccupancyEvent,
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct TraceRecord {
    at_ms:   u64,
    kind:    String,
    entity:  u64,
    zone:    String,
    to_zone: Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a trace from a CSV file.
pub fn load_trace_csv(path: &Path) -> Result<Vec<TraceEvent>, ScheduleError> {
    let file = std::fs::File::open(path).map_err(ScheduleError::Io)?;
    load_trace_reader(file)
}

/// Like [`load_trace_csv`] but accepts any `Read` source.
pub fn load_trace_reader<R: Read>(reader: R) -> Result<Vec<TraceEvent>, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut events = Vec::new();

    for (line, result) in csv_reader.deserialize::<TraceRecord>().enumerate() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        let event = parse_event(&row).map_err(|msg| {
            // +2: one for the header row, one for 1-based numbering.
            ScheduleError::Parse(format!("row {}: {msg}", line + 2))
        })?;
        events.push(TraceEvent { at: Tick::from_millis(row.at_ms), event });
    }

    // Stable sort keeps file order within a tick.
    events.sort_by_key(|e| e.at);
    Ok(events)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_event(row: &TraceRecord) -> Result<OccupancyEvent, String> {
    let entity = EntityId(row.entity);
    let zone = ZoneId::new(row.zone.trim());
    if zone.as_str().is_empty() {
        return Err("zone must not be empty".into());
    }

    let to_zone = || -> Result<ZoneId, String> {
        match row.to_zone.as_deref().map(str::trim) {
            Some(to) if !to.is_empty() => Ok(ZoneId::new(to)),
            _ => Err(format!("{:?} requires to_zone", row.kind.trim())),
        }
    };

    match row.kind.trim() {
        "join"     => Ok(OccupancyEvent::Joined { entity, zone }),
        "quit"     => Ok(OccupancyEvent::Quit { entity, zone }),
        "change"   => Ok(OccupancyEvent::ChangedZone { entity, from: zone, to: to_zone()? }),
        "teleport" => Ok(OccupancyEvent::Teleported { entity, from: zone, to: to_zone()? }),
        other => Err(format!(
            "invalid kind {other:?}: expected \"join\", \"quit\", \"change\", or \"teleport\""
        )),
    }
}
