use anyhow::{Context, Result};
use allelic_sim::simulation::{GeneratorConfig, ParameterGenerator};
use allelic_sim::storage::write_parameters;

use crate::args::GenerateArgs;
use crate::printing::print_parameter_preview;

pub fn generate_parameters(args: &GenerateArgs) -> Result<()> {
    println!("🧬 Allelic - Generating Parameter Sets");
    println!("============================================\n");

    let config = GeneratorConfig {
        sample_size: args.samples,
        seed: args.seed,
        ..GeneratorConfig::default()
    };
    let generator = ParameterGenerator::new(config).context("Invalid generator configuration")?;
    let sets = generator.generate_seeded();

    write_parameters(&args.output, &sets)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    print_parameter_preview(&sets);
    println!("\n✓ Wrote {} parameter sets to {}", sets.len(), args.output.display());
    println!("\n💡 Use 'allelic run -i {}' to simulate them", args.output.display());

    Ok(())
}
