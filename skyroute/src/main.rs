//! skyroute: plan a drone flight over random terrain with A* and greedy
//! best-first search, then compare the two.

mod cli;
mod compare;
mod config;
mod errors;

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use skyroute_core::{TerrainMap, TerrainView};
use skyroute_gen::TerrainGen;
use skyroute_paths::reachable_from;
use std::io::{self, Write};

use cli::Cli;
use compare::Comparison;
use config::Config;
use errors::CliError;

fn generate_terrain(config: &Config) -> Result<TerrainMap, CliError> {
    let seed = config
        .terrain
        .seed
        .unwrap_or_else(|| rand::rng().random::<u64>());
    info!("Generating terrain with seed {seed}");

    let mut tg = TerrainGen::new(
        config.terrain.width,
        config.terrain.height,
        StdRng::seed_from_u64(seed),
    );
    if tg.generate(&config.terrain.params).is_none() {
        return Err(CliError::Config {
            source: format!(
                "a {}x{} map with {} no-fly zones leaves no room for a start and a goal",
                config.terrain.width, config.terrain.height, config.terrain.params.no_fly_zones
            ),
        });
    }
    Ok(tg.into_terrain())
}

fn log_reachability(terrain: &TerrainMap) {
    let (Some(start), Some(goal)) = (terrain.start(), terrain.goal()) else {
        return;
    };
    let reachable = reachable_from(terrain, terrain.bounds(), start);
    info!(
        "{} of {} passable cells reachable from {start}; goal {goal} {}",
        reachable.len(),
        terrain.passable_count(),
        if reachable.contains(&goal) {
            "is reachable"
        } else {
            "is cut off"
        }
    );
}

fn main() -> Result<(), CliError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Cli::parse();
    let config = Config::from_cli(&args)?;
    info!("Parsed configuration: {:?}", config);

    let terrain = generate_terrain(&config)?;
    log_reachability(&terrain);

    let comparison = Comparison::run(&terrain, &config.strategies);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.json {
        serde_json::to_writer_pretty(&mut out, &comparison).map_err(|e| CliError::Io {
            source: e.to_string(),
            path: None,
        })?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Terrain map:")?;
    write!(out, "{}", TerrainView::new(&terrain))?;

    for outcome in &comparison.outcomes {
        writeln!(out)?;
        writeln!(out, "Searching for a flight path with {}...", outcome.strategy.name())?;
        outcome.write_result(&mut out, &terrain, config.show_visited)?;
    }

    if comparison.comparable() {
        writeln!(out)?;
        comparison.write_summary(&mut out)?;
    }
    Ok(())
}
