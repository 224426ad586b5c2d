//! Seeded random occupancy traces.
//!
//! A small pool of entities wanders between the configured zones: joining,
//! moving, teleporting and quitting at random intervals.  The same seed
//! always produces the same trace.

use std::collections::HashMap;

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use vc_core::{EntityId, Tick, ZoneId};
use vc_occupancy::OccupancyEvent;
use vc_schedule::TraceEvent;

const ENTITY_POOL: u64 = 6;
/// Longest gap between two consecutive events.
const MAX_GAP_MS:  u64 = 15_000;

pub fn generate(zones: &[ZoneId], events: usize, seed: u64) -> Vec<TraceEvent> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut location: HashMap<EntityId, ZoneId> = HashMap::new();
    let mut at_ms = 0;
    let mut trace = Vec::with_capacity(events);

    if zones.is_empty() {
        return trace;
    }

    for _ in 0..events {
        // Bursts: a third of events land within the same second.
        at_ms += if rng.gen_bool(0.33) {
            rng.gen_range(0..1_000)
        } else {
            rng.gen_range(1_000..=MAX_GAP_MS)
        };

        let entity = EntityId(rng.gen_range(1..=ENTITY_POOL));
        let Some(to) = zones.choose(&mut rng).cloned() else {
            break;
        };

        let event = match location.get(&entity).cloned() {
            None => OccupancyEvent::Joined { entity, zone: to.clone() },
            Some(from) => match rng.gen_range(0..4) {
                0 => OccupancyEvent::Quit { entity, zone: from },
                1 => OccupancyEvent::Teleported { entity, from, to: to.clone() },
                _ => OccupancyEvent::ChangedZone { entity, from, to: to.clone() },
            },
        };

        match &event {
            OccupancyEvent::Quit { .. } => {
                location.remove(&entity);
            }
            _ => {
                location.insert(entity, to);
            }
        }
        trace.push(TraceEvent { at: Tick::from_millis(at_ms), event });
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> Vec<ZoneId> {
        vec![ZoneId::from("world"), ZoneId::from("world_nether")]
    }

    #[test]
    fn same_seed_same_trace() {
        assert_eq!(generate(&zones(), 50, 7), generate(&zones(), 50, 7));
    }

    #[test]
    fn trace_is_ordered_and_consistent() {
        let trace = generate(&zones(), 200, 42);
        assert_eq!(trace.len(), 200);
        assert!(trace.windows(2).all(|w| w[0].at <= w[1].at));

        // Nobody quits or moves before joining.
        let mut present = std::collections::HashSet::new();
        for t in &trace {
            match &t.event {
                OccupancyEvent::Joined { entity, .. } => assert!(present.insert(*entity)),
                OccupancyEvent::Quit { entity, .. } => assert!(present.remove(entity)),
                other => assert!(present.contains(&other.entity())),
            }
        }
    }

    #[test]
    fn no_zones_no_events() {
        assert!(generate(&[], 10, 1).is_empty());
    }
}
