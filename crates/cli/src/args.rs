use allelic_sim::simulation::SimulationMode;
use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::defaults;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of parameter sets
    #[arg(short = 'n', long, default_value_t = defaults::SAMPLE_SIZE)]
    pub samples: usize,

    /// Random seed
    #[arg(long, default_value_t = defaults::GENERATOR_SEED)]
    pub seed: u64,

    /// Output CSV path
    #[arg(short, long, default_value = defaults::PARAMETERS_FILE)]
    pub output: PathBuf,
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Parameter table to simulate
    #[arg(short, long, default_value = defaults::PARAMETERS_FILE)]
    pub input: PathBuf,

    /// Result table to write
    #[arg(short, long, default_value = defaults::RESULTS_FILE)]
    pub output: PathBuf,

    /// Simulation mode (wright-fisher, hybrid, deterministic)
    ///
    /// Overrides the mode of --config. Defaults to wright-fisher.
    #[arg(short, long)]
    pub mode: Option<SimulationMode>,

    /// Monte Carlo replicates per parameter set
    ///
    /// Overrides --config. Defaults to 100.
    #[arg(short, long)]
    pub replicates: Option<usize>,

    /// Master random seed (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest replicate matrix a single simulation may allocate, in cells
    #[arg(long)]
    pub max_cells: Option<usize>,

    /// JSON run configuration; flags override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run everything on the current thread
    #[arg(long)]
    pub sequential: bool,

    /// Show progress bar
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    pub progress: bool,

    /// Exit with an error if any parameter set was rejected
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Result table to summarise
    #[arg(short, long, default_value = defaults::RESULTS_FILE)]
    pub input: PathBuf,

    /// Summary CSV path
    #[arg(short, long, default_value = defaults::SUMMARY_FILE)]
    pub output: PathBuf,
}
