mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use args::{GenerateArgs, RunArgs, SummarizeArgs};
use commands::{generate, run, summarize};

/// Allelic: an allele-frequency evolution simulator
///
/// This tool simulates how the frequency of an allele changes over
/// generations under genetic drift and symmetric mutation, using either a
/// deterministic recurrence or Wright-Fisher Monte Carlo replicates.
#[derive(Parser, Debug)]
#[command(name = "allelic")]
#[command(author, version, about = "Simulates allele-frequency evolution under drift and mutation", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v: info, -vv: debug)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random table of parameter sets.
    ///
    /// Population sizes are split into small, medium and large classes.
    Generate(GenerateArgs),

    /// Simulate every parameter set of a table.
    ///
    /// Writes one row per replicate trajectory.
    Run(Box<RunArgs>),

    /// Summarise a result table (final mean and standard deviation).
    Summarize(SummarizeArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Generate(args) => {
            generate::generate_parameters(&args)?;
        }
        Commands::Run(args) => {
            run::run_simulations(&args)?;
        }
        Commands::Summarize(args) => {
            summarize::summarize_results(&args)?;
        }
    }

    Ok(())
}
