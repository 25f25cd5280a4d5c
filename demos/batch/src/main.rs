//! batch: headless runner for the warehouse pick simulator.
//!
//! Runs one fully recorded simulation (CSV output plus a JSON summary), then a
//! seed sweep with the same configuration and prints a throughput table.
//!
//! ```text
//! cargo run -p batch --release -- [config.json]
//! RUST_LOG=wh_agent=debug cargo run -p batch -- demo.json
//! ```
//!
//! The optional JSON file may set any subset of the fields of [`DemoConfig`];
//! everything else keeps its default.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use wh_core::SimConfig;
use wh_output::{CsvWriter, SimOutputObserver};
use wh_sim::{RunSummary, SimBuilder};
use wh_spatial::AStarRouter;

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_SEED:       u64   = 42;
const DEFAULT_SWEEP_RUNS: usize = 16;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    sim:            SimConfig,
    /// Runs in the seed sweep; 0 skips the sweep.
    sweep_runs:     usize,
    output_dir:     PathBuf,
    /// Agent snapshot interval in ticks.
    snapshot_every: u64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sim:            SimConfig { seed: Some(DEFAULT_SEED), ..SimConfig::default() },
            sweep_runs:     DEFAULT_SWEEP_RUNS,
            output_dir:     PathBuf::from("output/batch"),
            snapshot_every: 1,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(file).with_context(|| format!("parsing {}", path.display()))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let arg = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(arg.as_deref())?;
    let layout = &config.sim.layout;

    println!("=== batch: warehouse pick simulator ===");
    println!(
        "Grid: {}x{}  |  Quota: {} orders/agent  |  Max ticks: {}",
        layout.rows, layout.cols, config.sim.task.order_quota, config.sim.max_ticks
    );
    println!();

    // 1. Recorded run.
    let mut sim = SimBuilder::new(config.sim.clone(), AStarRouter).build()?;
    std::fs::create_dir_all(&config.output_dir)?;
    let writer = CsvWriter::new(&config.output_dir)?;
    let mut obs = SimOutputObserver::new(writer).snapshot_every(config.snapshot_every);

    let t0 = Instant::now();
    let summary = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    let json_path = config.output_dir.join("run_summary.json");
    serde_json::to_writer_pretty(File::create(&json_path)?, &summary)?;
    info!(path = %json_path.display(), "summary written");

    println!("Simulation complete in {:.3} s (seed {})", elapsed.as_secs_f64(), summary.seed);
    print_run(&summary);
    if let Some(cell) = summary.hottest_cell {
        let label = sim.grid.label(cell).unwrap_or("aisle");
        println!("Busiest conflict cell: {cell} ({label})");
    }
    println!();

    // 2. Seed sweep.
    if config.sweep_runs == 0 {
        return Ok(());
    }
    let t0 = Instant::now();
    let runs = wh_sim::sweep(&config.sim, config.sweep_runs)?;
    println!("Sweep of {} runs in {:.3} s", runs.len(), t0.elapsed().as_secs_f64());
    print_sweep(&runs);

    Ok(())
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn print_run(summary: &RunSummary) {
    println!(
        "  ticks: {}  |  completed: {}  |  conflicts: {}  |  throughput: {:.1} orders/h",
        summary.ticks, summary.completed, summary.conflicts, summary.throughput
    );
    println!();
    println!(
        "{:<8} {:>8} {:>7} {:>10} {:>9} {:>8} {:>8}",
        "Agent", "Orders", "Cells", "Work (h)", "Fatigue", "Exp.", "Blocked"
    );
    println!("{}", "-".repeat(64));
    for agent in &summary.agents {
        println!(
            "{:<8} {:>8} {:>7} {:>10.4} {:>9.4} {:>8.3} {:>8}",
            agent.id.to_string(),
            agent.orders_completed,
            agent.distance,
            agent.work_time_h,
            agent.fatigue,
            agent.experience,
            agent.blocked_count,
        );
    }
}

fn print_sweep(runs: &[RunSummary]) {
    println!(
        "{:<22} {:>7} {:>7} {:>10} {:>12}",
        "Seed", "Ticks", "Orders", "Conflicts", "Orders/h"
    );
    println!("{}", "-".repeat(62));
    for run in runs {
        println!(
            "{:<22} {:>7} {:>7} {:>10} {:>12.1}",
            run.seed, run.ticks, run.total_orders, run.conflicts, run.throughput
        );
    }
    if !runs.is_empty() {
        let mean = runs.iter().map(|r| r.throughput).sum::<f64>() / runs.len() as f64;
        let conflicts = runs.iter().map(|r| r.conflicts).sum::<u64>() as f64 / runs.len() as f64;
        println!("{}", "-".repeat(62));
        println!("{:<22} {:>7} {:>7} {:>10.1} {:>12.1}", "mean", "", "", conflicts, mean);
    }
}
