use anyhow::{Context, Result, bail};
use allelic_sim::simulation::{RunConfig, SimulationRunner};
use allelic_sim::storage::{read_parameters, write_results};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::args::RunArgs;
use crate::defaults;
use crate::printing::{print_report, print_run_config};

/// Load the JSON config if given, then apply command-line overrides.
fn resolve_config(args: &RunArgs) -> Result<RunConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => RunConfig {
            replicates: defaults::REPLICATES,
            ..RunConfig::default()
        },
    };

    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    if let Some(replicates) = args.replicates {
        config.replicates = replicates;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(max_cells) = args.max_cells {
        config.max_cells = max_cells;
    }
    if args.sequential {
        config.parallel = false;
    }

    Ok(config)
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
            )
            .context("Invalid progress bar template")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

pub fn run_simulations(args: &RunArgs) -> Result<()> {
    println!("🧬 Allelic - Running Simulations");
    println!("============================================\n");

    let config = resolve_config(args)?;
    debug!(?config, "Resolved run configuration");

    let sets = read_parameters(&args.input)
        .with_context(|| format!("Failed to read parameter sets from {}", args.input.display()))?;
    print_run_config(&config, sets.len(), &args.input);

    let runner = SimulationRunner::new(config).context("Invalid run configuration")?;

    let pb = if args.progress {
        Some(progress_bar(sets.len())?)
    } else {
        None
    };
    let report = runner.run_all_with_progress(&sets, |_| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    });
    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    write_results(&args.output, &report.records)
        .with_context(|| format!("Failed to write results to {}", args.output.display()))?;

    print_report(&report);
    println!("  Output: {}", args.output.display());

    if args.strict && !report.failures.is_empty() {
        bail!(
            "{} of {} parameter sets were rejected",
            report.failures.len(),
            sets.len()
        );
    }

    println!("\n💡 Use 'allelic summarize -i {}' to summarise results", args.output.display());
    Ok(())
}
