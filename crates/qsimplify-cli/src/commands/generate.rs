//! Generate command implementation.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use qsimplify_gen::random_circuit_with_rng;

use super::common::{Format, write_circuit};

/// Execute the generate command.
pub fn execute(
    qubits: u32,
    templates: usize,
    seed: Option<u64>,
    format: Format,
    output: Option<&str>,
) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let circuit = random_circuit_with_rng(qubits, templates, &mut rng)?;

    write_circuit(&circuit, format, output)?;

    if let Some(path) = output {
        println!(
            "{} Generated {} qubits, depth {}, {} ops",
            style("✓").green().bold(),
            circuit.num_qubits(),
            circuit.len(),
            circuit.num_operations()
        );
        println!("  Output: {}", style(path).green());
    }

    Ok(())
}
