use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use log::{info, warn, debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;

use contagion_common::SimulationConfig;
use contagion_engine::model::Model;
use contagion_engine::output::{self, SnapshotFormat};

/// Command-line arguments for the engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config.toml file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the placement seed from the config
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialize the logger
    env_logger::init();
    let args = Args::parse();

    info!("Starting Contagion Engine...");

    // --- Load Configuration ---
    let mut config = SimulationConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.initial_conditions.seed = seed;
    }

    // --- Initialize Simulation ---
    let mut rng = StdRng::seed_from_u64(config.initial_conditions.seed);
    let mut model = Model::from_config(&config, &mut rng)?;
    info!(
        "Model initialized with {} cells (seed {}).",
        model.population().len(),
        config.initial_conditions.seed
    );
    debug!("Simulation Parameters: {:#?}", model.params());

    let record_interval = config.timing.record_interval_ticks;
    let include_cells = config.output.save_positions_in_snapshot;
    let mut snapshots = vec![model.snapshot(include_cells)];

    // --- Simulation Loop ---
    let start_time = Instant::now();
    while !model.is_complete() {
        if let Some(max_ticks) = config.timing.max_ticks {
            if model.time() >= max_ticks {
                warn!("Stopping at tick cap {} with infections still active.", max_ticks);
                break;
            }
        }

        model.step();

        if model.time() % record_interval == 0 {
            let snapshot = model.snapshot(include_cells);
            info!(
                "Tick {} | Susceptible: {} | Infected: {} | Immune: {} | Total: {}",
                snapshot.time, snapshot.susceptible, snapshot.infected, snapshot.immune, snapshot.total()
            );
            snapshots.push(snapshot);
        } else {
            trace!("Tick {} completed", model.time());
        }
    }

    // Always keep the final state.
    if snapshots.last().map(|s| s.time) != Some(model.time()) {
        snapshots.push(model.snapshot(include_cells));
    }

    let census = model.census();
    info!(
        "Simulation finished at tick {} in {:.3} seconds: {} susceptible, {} immune, {} infected.",
        model.time(),
        start_time.elapsed().as_secs_f64(),
        census.susceptible,
        census.immune,
        census.infected
    );

    // --- Save Recorded Data ---
    if config.output.save_stats {
        let format = SnapshotFormat::from_name(config.output.format.as_deref());
        output::save_snapshots(&config.output.base_filename, format, &snapshots)?;
    } else {
        info!("Skipping saving snapshots as per config (save_stats is false).");
    }

    if config.output.save_positions {
        let filename = format!("{}_final_positions.csv", config.output.base_filename);
        output::save_positions(&filename, model.population())?;
    } else {
        info!("Skipping saving final positions as per config.");
    }

    info!("Simulation Complete.");
    Ok(())
}
