//! Rewrite command implementation.

use anyhow::Result;
use console::style;

use qsimplify_compile::PassId;

use super::common::{Format, load_circuit, write_circuit};

/// Execute the rewrite command: apply the named passes in order.
pub fn execute(
    input: &str,
    passes: &[String],
    format: Format,
    output: Option<&str>,
) -> Result<()> {
    let passes = passes
        .iter()
        .map(|name| name.parse::<PassId>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut circuit = load_circuit(input)?;
    eprintln!(
        "{} Rewriting {} ({} qubits, depth {})",
        style("→").cyan().bold(),
        style(input).green(),
        circuit.num_qubits(),
        circuit.len()
    );

    for id in passes {
        let before = circuit.len();
        circuit = id.run(&circuit)?;
        eprintln!(
            "  {:<52} depth {} → {}",
            style(id.name()).cyan(),
            before,
            circuit.len()
        );
    }

    eprintln!(
        "{} Result: depth {}, {} ops",
        style("✓").green().bold(),
        circuit.len(),
        circuit.num_operations()
    );

    write_circuit(&circuit, format, output)
}
