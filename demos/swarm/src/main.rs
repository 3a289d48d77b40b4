//! swarm - a flock chasing a rally point, written to CSV.
//!
//! ```text
//! swarm [config.json] [output_dir]
//! ```
//!
//! The optional JSON file may carry `params`, `config` and `target`
//! sections; anything missing falls back to the defaults below.  Halfway
//! through the run the flock switches from swarm to kite mode.  Set
//! `RUST_LOG=debug` (or `trace`) for per-event / per-tick logging.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flock_core::{SimConfig, Tick, Vec3};
use flock_output::{CsvWriter, FlockOutputObserver, OutputWriter};
use flock_sim::{EulerIntegrator, Flock, FlockMode, FlockObserver, FlockParams, SimBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:    usize = 64;
const DEFAULT_OUTPUT: &str  = "output/swarm";

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(default)]
struct DemoConfig {
    params: FlockParams,
    config: SimConfig,
    target: Vec3,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            params: FlockParams {
                flock_size: AGENT_COUNT,
                origin:     Vec3::new(-20.0, 0.0, 0.0),
                ..FlockParams::default()
            },
            config: SimConfig::default(),
            target: Vec3::new(20.0, 5.0, 0.0),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         FlockOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: FlockOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> FlockObserver for CountingObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, flock: &Flock) {
        self.summary_rows += 1;
        self.inner.on_tick_end(tick, flock);
    }

    fn on_snapshot(&mut self, tick: Tick, flock: &Flock) {
        self.snapshot_rows += flock.live_count();
        self.inner.on_snapshot(tick, flock);
    }

    fn on_sim_end(&mut self, final_tick: Tick, flock: &Flock) {
        self.inner.on_sim_end(final_tick, flock);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output_dir = args.next().map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from);

    let demo = load_config(config_path.as_deref())?;
    let flock_size = demo.params.flock_size;
    info!(
        agents = flock_size,
        ticks = demo.config.total_ticks,
        dt = demo.config.delta_secs,
        "swarm demo"
    );

    // 1. Build sim.
    let mut sim = SimBuilder::new(demo.config, demo.params, EulerIntegrator)
        .target(demo.target)
        .initial_agents(flock_size)
        .build()?;

    // 2. Set up output.
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CountingObserver::new(FlockOutputObserver::new(writer, &sim.config));

    // 3. Run: swarm for the first half, kite for the rest.
    let half = sim.config.total_ticks / 2;
    let t0 = Instant::now();
    sim.flock.apply_mode(FlockMode::Swarm);
    sim.run_ticks(half, &mut obs);
    sim.flock.apply_mode(FlockMode::Kite);
    sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let distance = sim.flock.average_position().distance(sim.flock.target);
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!("  output directory    : {}", output_dir.display());
    println!();
    println!("Final average position : {}", sim.flock.average_position());
    println!("Final average velocity : {}", sim.flock.average_velocity());
    println!("Distance to target     : {distance:.3}");

    Ok(())
}
