//! replay — drive the vacancy controller with a recorded or synthetic trace.
//!
//! Replays host occupancy events against a `Runtime` on a manual clock, one
//! 50 ms tick at a time, and prints every command the controller issues.
//!
//! ```text
//! replay [--config <json>] [--trace <csv>] [--simulate <events> --seed <n>]
//! ```
//!
//! Without `--config` the embedded two-world config is used; without
//! `--trace` the embedded trace is replayed unless `--simulate` asks for a
//! seeded random one.  Set `RUST_LOG=debug` to see every pass.

mod synthetic;

use std::env;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use vc_action::{ActionPlan, Command, LogExecutor};
use vc_core::{Clock, ManualClock, Tick, VacancyConfig, ZoneId};
use vc_occupancy::WorldRegistry;
use vc_runtime::{RuntimeBuilder, RuntimeObserver};
use vc_schedule::{PassKind, TraceEvent, load_trace_csv, load_trace_reader};
use vc_vacancy::{Transition, ZoneState};

// ── Embedded inputs ───────────────────────────────────────────────────────────

const DEFAULT_CONFIG: &str = r#"{
  "cooldown-seconds": 10,
  "command-prefix": "viewdistancetweaks",
  "worlds": {
    "world":        { "view-distance": 4, "simulation-distance": 3 },
    "world_nether": { "view-distance": 2, "simulation-distance": 2 }
  }
}"#;

// Three players over one minute: the nether empties and is reduced, is
// repopulated (reload), then both worlds empty and are reduced in turn.
const DEFAULT_TRACE: &str = "\
at_ms,kind,entity,zone,to_zone\n\
0,join,1,world,\n\
0,join,2,world,\n\
500,join,3,world_nether,\n\
2000,change,3,world_nether,world\n\
6000,quit,2,world,\n\
9000,teleport,1,world,world\n\
16000,change,3,world,world_nether\n\
16050,join,2,world_nether,\n\
21000,quit,1,world,\n\
40000,quit,3,world_nether,\n\
40100,quit,2,world_nether,\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints commands and state changes as they happen.
struct Printer {
    prefix:      String,
    commands:    usize,
    transitions: usize,
    skipped:     usize,
}

impl Printer {
    fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_owned(), commands: 0, transitions: 0, skipped: 0 }
    }
}

fn stamp(now: Tick) -> String {
    format!("{:>7.2}s  {:<7}", now.as_millis() as f64 / 1_000.0, now.to_string())
}

impl RuntimeObserver for Printer {
    fn on_zone_skipped(&mut self, _now: Tick, _zone: &ZoneId) {
        self.skipped += 1;
    }

    fn on_transition(&mut self, now: Tick, zone: &ZoneId, transition: Transition, next: ZoneState) {
        self.transitions += 1;
        println!("{}  {:<14} {:<12} -> {next}", stamp(now), zone.as_str(), transition.as_str());
    }

    fn on_command(&mut self, now: Tick, command: &Command) {
        self.commands += 1;
        println!("{}  > {}", stamp(now), command.render(&self.prefix));
    }

    fn on_pass_end(&mut self, now: Tick, kind: PassKind, plan: &ActionPlan) {
        if !plan.held.is_empty() {
            let held: Vec<&str> = plan.held.iter().map(ZoneId::as_str).collect();
            println!("{}  ({kind} pass held {})", stamp(now), held.join(", "));
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let config_path = flag(&args, "--config");
    let trace_path = flag(&args, "--trace");
    let simulate = parse_arg(&args, "--simulate", 0usize);
    let seed = parse_arg(&args, "--seed", 42u64);

    // 1. Config.
    let config = match config_path {
        Some(path) => VacancyConfig::load_json(Path::new(path))?,
        None       => VacancyConfig::from_json_str(DEFAULT_CONFIG)?,
    };
    let zones: Vec<ZoneId> = config.zones.keys().cloned().collect();

    // 2. Trace.
    let (trace, source): (Vec<TraceEvent>, String) = match trace_path {
        Some(path) => (load_trace_csv(Path::new(path))?, path.to_owned()),
        None if simulate > 0 => (
            synthetic::generate(&zones, simulate, seed),
            format!("synthetic (seed {seed})"),
        ),
        None => (load_trace_reader(Cursor::new(DEFAULT_TRACE))?, "embedded".to_owned()),
    };

    println!("=== replay — vacancy controller ===");
    println!(
        "Zones: {}  |  Cooldown: {}s  |  Events: {} ({source})",
        zones.len(),
        config.cooldown_secs,
        trace.len()
    );
    println!();

    // 3. Runtime on a manual clock, over an in-memory world registry.
    let clock = ManualClock::new(Tick::ZERO);
    let registry = WorldRegistry::with_zones(zones.iter().cloned());
    let executor = LogExecutor::new(config.command_prefix.clone());
    let mut printer = Printer::new(&config.command_prefix);
    let mut runtime = RuntimeBuilder::new(config, registry, executor, clock.clone()).build()?;

    // 4. Replay tick by tick until the trace is consumed and no pass is queued.
    runtime.start(&mut printer);
    let mut events = trace.iter().peekable();
    loop {
        let now = clock.now();
        while let Some(next) = events.next_if(|e| e.at <= now) {
            log::debug!("tick={now} {}", next.event);
            runtime.tracker.source_mut().apply(&next.event);
            runtime.notify(&next.event, &mut printer);
        }
        runtime.poll(&mut printer);

        if events.peek().is_none() && runtime.next_due().is_none() {
            break;
        }
        clock.advance(1);
    }

    // 5. Summary.
    let stats = &runtime.stats;
    println!();
    println!("Replay finished at {} ({:.2} s)", clock.now(), clock.now().as_millis() as f64 / 1_000.0);
    println!(
        "  notifications : {} ({} coalesced)",
        stats.notifications, stats.coalesced
    );
    println!(
        "  passes        : {} (startup {}, settled {}, cooldown {}, post-reload {})",
        stats.total_passes(),
        stats.startup_passes,
        stats.settled_passes,
        stats.cooldown_passes,
        stats.post_reload_passes,
    );
    println!(
        "  commands      : {} ({} reloads, {} reductions, {} held)",
        stats.commands, stats.reloads, stats.reductions, stats.held
    );
    println!(
        "  observed      : {} transitions, {} skipped zones, {} commands",
        printer.transitions, printer.skipped, printer.commands
    );
    println!("  dispatched    : {}", runtime.executor.executed());
    println!();

    // 6. Final per-zone state table.
    println!(
        "{:<14} {:<10} {:<34} {:>7} {:>8}",
        "Zone", "Occupants", "State", "Reduced", "Restored"
    );
    println!("{}", "-".repeat(77));
    for (zone, state) in runtime.machine.iter() {
        let occupants = match runtime.tracker.current_occupant_count(zone).count() {
            Some(n) => n.to_string(),
            None    => "absent".to_owned(),
        };
        println!(
            "{:<14} {:<10} {:<34} {:>7} {:>8}",
            zone.as_str(),
            occupants,
            state.state.to_string(),
            state.reductions,
            state.restores,
        );
    }

    Ok(())
}

// ── Argument helpers ──────────────────────────────────────────────────────────

fn flag<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == name).map(|w| w[1].as_str())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], name: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == name)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
