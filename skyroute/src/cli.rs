use clap::Parser;
use skyroute_paths::Strategy;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Map width in cells (overrides the config file)
    #[arg(long)]
    pub width: Option<i32>,

    /// Map height in cells (overrides the config file)
    #[arg(long)]
    pub height: Option<i32>,

    /// Highest elevation level (overrides the config file)
    #[arg(long)]
    pub max_elevation: Option<u32>,

    /// Number of no-fly zone drops (overrides the config file)
    #[arg(long)]
    pub no_fly_zones: Option<usize>,

    /// Random seed; a fresh one is drawn and logged if omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Strategy to run (astar or greedy); repeat to run several
    #[arg(long = "strategy", value_name = "NAME")]
    pub strategies: Vec<Strategy>,

    /// Do not mark explored cells on the rendered maps
    #[arg(long)]
    pub hide_visited: bool,

    /// Print the results as JSON instead of maps and tables
    #[arg(long)]
    pub json: bool,
}
