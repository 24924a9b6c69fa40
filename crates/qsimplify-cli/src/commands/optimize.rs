//! Optimize command implementation.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

use qsimplify_compile::{OptimizerBuilder, OptimizerConfig};
use qsimplify_gen::random_circuit_with_rng;
use qsimplify_ir::Circuit;

use super::common::{Format, load_circuit, load_config, write_circuit, write_json};

/// Where the circuit to optimize comes from.
#[derive(Debug, Clone)]
pub enum Source {
    /// A JSON circuit file.
    File(String),
    /// A fresh random circuit.
    Random { qubits: u32, templates: usize },
}

impl Source {
    /// Load or generate the circuit. A seed makes the generated circuit
    /// reproducible.
    fn load(&self, seed: Option<u64>) -> Result<(String, Circuit)> {
        match self {
            Source::File(path) => Ok((path.clone(), load_circuit(path)?)),
            Source::Random { qubits, templates } => {
                let mut rng = match seed {
                    Some(seed) => SmallRng::seed_from_u64(seed),
                    None => SmallRng::from_entropy(),
                };
                Ok((
                    format!("random circuit ({templates} templates)"),
                    random_circuit_with_rng(*qubits, *templates, &mut rng)?,
                ))
            }
        }
    }
}

/// Command-line overrides for the optimizer configuration.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub iterations: Option<usize>,
    pub restarts: Option<usize>,
    pub seed: Option<u64>,
    pub sequential: bool,
}

impl Overrides {
    fn apply(&self, mut config: OptimizerConfig) -> OptimizerConfig {
        if let Some(n_iter) = self.iterations {
            config.n_iter = n_iter;
        }
        if let Some(n_opt_circuits) = self.restarts {
            config.n_opt_circuits = n_opt_circuits;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.sequential {
            config.parallel = false;
        }
        config
    }
}

/// Execute the optimize command.
pub fn execute(
    source: &Source,
    config_path: Option<&str>,
    overrides: &Overrides,
    format: Format,
    output: Option<&str>,
    report_path: Option<&str>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config(path)?,
        None => OptimizerConfig::default(),
    };
    let config = overrides.apply(config);
    debug!(?config, "optimizer configuration");

    let (label, circuit) = source.load(config.seed)?;
    eprintln!(
        "{} Optimizing {} ({} qubits, depth {})",
        style("→").cyan().bold(),
        style(label).green(),
        circuit.num_qubits(),
        circuit.len()
    );
    eprintln!(
        "  {} trajectories × {} steps{}",
        config.n_opt_circuits,
        config.n_iter,
        config
            .seed
            .map(|s| format!(", seed {s}"))
            .unwrap_or_default()
    );

    let optimizer = OptimizerBuilder::new().with_config(config).build()?;
    let report = optimizer.run_with_report(&circuit)?;

    eprintln!("{} Optimization complete", style("✓").green().bold());
    eprintln!(
        "  Result: depth {} → {}, best trajectory {}",
        circuit.len(),
        report.circuit.len(),
        report.best_trajectory
    );

    if let Some(path) = report_path {
        write_json(&report, Some(path))?;
        eprintln!("  Report: {}", style(path).green());
    }
    write_circuit(&report.circuit, format, output)
}
