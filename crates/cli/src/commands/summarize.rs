use anyhow::{Context, Result};
use allelic_analysis::{summarize, write_summary};
use allelic_sim::storage::read_results;

use crate::args::SummarizeArgs;
use crate::printing::print_summary_table;

pub fn summarize_results(args: &SummarizeArgs) -> Result<()> {
    println!("🧬 Allelic - Summarising Results");
    println!("============================================\n");

    let stored = read_results(&args.input)
        .with_context(|| format!("Failed to read results from {}", args.input.display()))?;
    let summaries = summarize(&stored);

    write_summary(&args.output, &summaries)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_summary_table(&summaries);
    println!("\n✓ Wrote {} summaries to {}", summaries.len(), args.output.display());

    Ok(())
}
