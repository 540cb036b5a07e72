//! chase — smallest end-to-end demo for the rust_steer engine.
//!
//! A predator pursues a wandering prey across a field scattered with
//! circular obstacles.  The prey wanders, evades the predator's predicted
//! path, and dodges obstacles; the predator leads its pursuit toward where
//! the prey is going to be.  Every frame is recorded to CSV for plotting.
//!
//! Run with `RUST_LOG=steer_sim=info` for progress logging.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use steer_agent::AgentStoreBuilder;
use steer_behavior::{Avoid, Evade, Pursuit, Wander};
use steer_core::{AgentId, Vec2};
use steer_motion::{MotionConfig, MotionManager};
use steer_sim::{SimBuilder, SimConfig, SimObserver};
use steer_space::{Obstacle, ObstacleSet};
use steer_trace::{CsvTraceWriter, TraceObserver, TraceWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const FRAMES: u64 = 1_800; // 30 seconds at 60 fps
const FRAME_DT: f32 = 1.0 / 60.0;
const SNAPSHOT_INTERVAL_FRAMES: u64 = 6; // 10 samples per second

const PREY: AgentId = AgentId(0);
const PREDATOR: AgentId = AgentId(1);

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: TraceWriter> {
    inner: TraceObserver<W>,
    sample_rows: usize,
    summary_rows: usize,
}

impl<W: TraceWriter> CountingObserver<W> {
    fn new(inner: TraceObserver<W>) -> Self {
        Self { inner, sample_rows: 0, summary_rows: 0 }
    }
}

impl<W: TraceWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: u64, sim_time_secs: f32, steered: usize) {
        self.summary_rows += 1;
        self.inner.on_frame_end(frame, sim_time_secs, steered);
    }

    fn on_snapshot(
        &mut self,
        frame: u64,
        sim_time_secs: f32,
        agents: &steer_agent::AgentStore,
        managers: &[Option<MotionManager>],
    ) {
        self.sample_rows += agents.count;
        self.inner.on_snapshot(frame, sim_time_secs, agents, managers);
    }

    fn on_sim_end(&mut self, final_frame: u64) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== chase — rust_steer demo ===");
    println!("Frames: {FRAMES} ({:.0} s)  |  Seed: {SEED}", FRAMES as f32 * FRAME_DT);
    println!();

    // 1. Two agents: the prey starts ahead of the predator.
    let (store, rngs) = AgentStoreBuilder::new(2, SEED)
        .position(PREY.index(), Vec2::new(12.0, 0.0))
        .position(PREDATOR.index(), Vec2::new(-12.0, 0.0))
        .build();

    // 2. A loose ring of obstacles around the middle of the field.
    let mut obstacles = ObstacleSet::new();
    for (x, y, r) in [
        (0.0, 4.0, 1.5),
        (0.0, -4.0, 1.5),
        (5.0, 0.0, 1.0),
        (-5.0, 1.0, 1.0),
        (3.0, 7.0, 2.0),
        (-3.0, -7.0, 2.0),
    ] {
        obstacles.insert(Obstacle::new(Vec2::new(x, y), r));
    }
    println!("Obstacles: {}", obstacles.len());

    // 3. The prey wanders, evades the predator, and dodges obstacles.  It is
    //    slightly faster, so escapes stay possible.
    let mut prey = MotionManager::new(MotionConfig { max_speed: 6.0, ..MotionConfig::default() });
    prey.attach(Box::new(Wander::new(2.0, 1.0)));
    prey.attach(Box::new(Evade::new(Some(PREDATOR))));
    prey.attach(Box::new(Avoid::new(3.0, 0.5)));

    // 4. The predator leads its pursuit toward the prey's predicted position.
    let mut predator = MotionManager::default();
    predator.attach(Box::new(Pursuit::new(Some(PREY))));
    predator.attach(Box::new(Avoid::new(3.0, 0.5)));

    // 5. Build the sim.
    let config = SimConfig {
        snapshot_interval_frames: SNAPSHOT_INTERVAL_FRAMES,
        ..SimConfig::default()
    };
    let mut sim = SimBuilder::new(config, store, rngs)
        .steer(PREY, prey)
        .steer(PREDATOR, predator)
        .obstacles(obstacles)
        .build()?;

    // 6. Set up the trace.
    std::fs::create_dir_all("output/chase")?;
    let writer = CsvTraceWriter::new(Path::new("output/chase"))?;
    let mut obs = CountingObserver::new(TraceObserver::new(writer));

    // 7. Run.
    let t0 = Instant::now();
    sim.run_frames(FRAMES, FRAME_DT, &mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("trace error: {e}");
    }

    // 8. Summary.
    let prey_pos = sim.agents.position[PREY.index()];
    let predator_pos = sim.agents.position[PREDATOR.index()];
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  prey     at ({:7.2}, {:7.2})", prey_pos.x, prey_pos.y);
    println!("  predator at ({:7.2}, {:7.2})", predator_pos.x, predator_pos.y);
    println!("  gap: {:.2} units", prey_pos.distance(predator_pos));
    println!("  agent_samples.csv   : {} rows", obs.sample_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!();
    println!("Trace written to output/chase/");

    Ok(())
}
