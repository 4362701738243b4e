use allelic_analysis::SimulationSummary;
use allelic_sim::base::ParameterSet;
use allelic_sim::simulation::{RunConfig, RunReport};
use std::path::Path;

use crate::defaults::PREVIEW_ROWS;

pub fn print_run_config(config: &RunConfig, parameter_sets: usize, input: &Path) {
    println!("📋 Run Configuration");
    println!("  • Input: {} ({parameter_sets} parameter sets) [-i, --input]", input.display());
    println!("  • Mode: {} [-m, --mode]", config.mode);
    if config.mode.is_stochastic() {
        println!("  • Replicates: {} [-r, --replicates]", config.replicates);
    } else {
        println!("  • Replicates: 1 (deterministic)");
    }
    if let Some(seed) = config.seed {
        println!("  • Random Seed: {seed} [--seed]");
    } else {
        println!("  • Random Seed: Random [--seed]");
    }
    println!("  • Parallel: {} [--sequential]", config.parallel);
    println!("  • Cell Limit: {} per simulation [--max-cells]", config.max_cells);
    println!();
}

pub fn print_parameter_preview(sets: &[ParameterSet]) {
    println!(
        "  {:>6} {:>10} {:>8} {:>11} {:>10} {:>10}",
        "Row", "N", "p0", "Generations", "u", "s"
    );
    for (row, set) in sets.iter().take(PREVIEW_ROWS).enumerate() {
        let selection = set
            .selection_coefficient
            .map(|s| format!("{s:.4}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>6} {:>10} {:>8.4} {:>11} {:>10.2e} {:>10}",
            row, set.population_size, set.initial_frequency, set.generations, set.mutation_rate, selection
        );
    }
    if sets.len() > PREVIEW_ROWS {
        println!("  ... {} more", sets.len() - PREVIEW_ROWS);
    }
}

pub fn print_report(report: &RunReport) {
    println!("\n✓ Simulations complete!");
    println!("  Simulated: {}", report.records.len());
    println!("  Rows written: {}", report.total_rows());
    if report.cancelled {
        println!("  ⚠️  Run was cancelled before all parameter sets started");
    }
    if !report.failures.is_empty() {
        println!("\n⚠️  Rejected parameter sets: {}", report.failures.len());
        for failure in &report.failures {
            println!("  • #{}: {}", failure.simulation_id, failure.error);
        }
    }
}

pub fn print_summary_table(summaries: &[SimulationSummary]) {
    println!(
        "  {:>6} {:>10} {:>8} {:>11} {:>10} {:>10} {:>10}",
        "ID", "N", "p0", "Generations", "Replicates", "Mean", "Std"
    );
    for s in summaries.iter().take(PREVIEW_ROWS) {
        let std = s
            .final_std
            .map(|v| format!("{v:.4}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>6} {:>10} {:>8.4} {:>11} {:>10} {:>10.4} {:>10}",
            s.simulation_id, s.population_size, s.initial_frequency, s.generations, s.replicates, s.final_mean, std
        );
    }
    if summaries.len() > PREVIEW_ROWS {
        println!("  ... {} more", summaries.len() - PREVIEW_ROWS);
    }
}
