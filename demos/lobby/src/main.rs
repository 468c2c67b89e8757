//! lobby - drives a building for a fixed number of ticks.
//!
//! Riders appear at random with a fixed probability each tick.  The building
//! comes from `BuildingConfig::default()`, or from a JSON file given as the
//! first argument (missing fields fall back to the defaults):
//!
//! ```text
//! cargo run -p lobby -- lobby.json
//! RUST_LOG=debug cargo run -p lobby
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_car::{Elevator, Rider};
use lift_core::{BuildingConfig, ElevatorId, RiderId, Tick};
use lift_dispatch::WaitingRiders;
use lift_output::{CsvWriter, SimOutputObserver};
use lift_sim::{BuildingBuilder, SimObserver, TickSummary};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:       u64 = 20_000;
const SPAWN_PROBABILITY: f64 = 0.02;
const OUTPUT_DIR:        &str = "output/lobby";
const SNAPSHOT_INTERVAL: u64 = 10;

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Wraps the CSV observer and tracks trip times.
struct TripObserver<O: SimObserver> {
    inner:      O,
    created_at: HashMap<RiderId, Tick>,
    trip_ticks: Vec<u64>,
    peak_queue: usize,
}

impl<O: SimObserver> TripObserver<O> {
    fn new(inner: O) -> Self {
        Self {
            inner,
            created_at: HashMap::new(),
            trip_ticks: Vec::new(),
            peak_queue: 0,
        }
    }
}

impl<O: SimObserver> SimObserver for TripObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_rider_created(&mut self, tick: Tick, rider: &Rider) {
        self.created_at.insert(rider.id, tick);
        self.inner.on_rider_created(tick, rider);
    }

    fn on_rider_boarded(&mut self, tick: Tick, rider: &Rider, elevator: ElevatorId) {
        self.inner.on_rider_boarded(tick, rider, elevator);
    }

    fn on_rider_alighted(&mut self, tick: Tick, rider: &Rider, elevator: ElevatorId) {
        if let Some(start) = self.created_at.remove(&rider.id) {
            self.trip_ticks.push(tick.since(start));
        }
        self.inner.on_rider_alighted(tick, rider, elevator);
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.peak_queue = self.peak_queue.max(summary.waiting);
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, elevators: &[Elevator], waiting: &WaitingRiders) {
        self.inner.on_snapshot(tick, elevators, waiting);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<BuildingConfig> {
    match std::env::args().nth(1) {
        None => Ok(BuildingConfig::default()),
        Some(path) => {
            let text = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    println!("=== lobby - rust_lift elevator simulation ===");
    println!(
        "Floors: {}  |  Cars: {} × {}  |  Policy: {}  |  Seed: {}",
        config.floor_count, config.elevator_count, config.capacity, config.policy, config.seed
    );
    println!();

    let mut building = BuildingBuilder::from_config(config)
        .snapshot_interval(SNAPSHOT_INTERVAL)
        .build()?;
    let mut spawner = building.rng().child(1);

    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TripObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    for _ in 0..TOTAL_TICKS {
        if spawner.gen_bool(SPAWN_PROBABILITY) {
            building.create_rider();
        }
        building.step(&mut obs);
    }
    obs.on_sim_end(building.tick());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    info!(ticks = TOTAL_TICKS, secs = elapsed.as_secs_f64(), "run complete");

    let trips = &obs.trip_ticks;
    let mean = if trips.is_empty() {
        0.0
    } else {
        trips.iter().sum::<u64>() as f64 / trips.len() as f64
    };
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  riders created   : {}", building.total_created());
    println!("  riders delivered : {}", building.total_delivered());
    println!("  still waiting    : {}", building.waiting().len());
    println!("  peak queue       : {}", obs.peak_queue);
    println!("  mean trip        : {mean:.1} ticks");
    println!();

    println!("{:<10} {:<8} {:<8} {:<9} {:<8}", "Car", "Height", "Floor", "Door", "Riders");
    println!("{}", "-".repeat(45));
    for car in building.elevators() {
        println!(
            "{:<10} {:<8.2} {:<8} {:<9} {:<8}",
            car.id().0,
            car.height(),
            car.floor().map_or_else(|| "-".to_string(), |f| f.to_string()),
            car.door_state(),
            car.rider_count(),
        );
    }

    Ok(())
}
