//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use qsimplify_compile::OptimizerConfig;
use qsimplify_ir::Circuit;

/// Load a circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;
    let circuit: Circuit =
        serde_json::from_str(&source).with_context(|| format!("Invalid circuit in {path}"))?;
    circuit
        .validate()
        .with_context(|| format!("Malformed circuit in {path}"))?;
    Ok(circuit)
}

/// Load optimizer settings from a YAML or JSON file.
pub fn load_config(path: &str) -> Result<OptimizerConfig> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("Config file not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");

    match ext.to_lowercase().as_str() {
        "json" => serde_json::from_str(&source)
            .with_context(|| format!("Invalid optimizer config in {path}")),
        _ => serde_yaml_ng::from_str(&source)
            .with_context(|| format!("Invalid optimizer config in {path}")),
    }
}

/// Output format for circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Format {
    /// Machine-readable JSON, accepted back as input.
    #[default]
    Json,
    /// One line per moment.
    Text,
}

/// Write a circuit to `path`, or to stdout when `path` is `None`.
pub fn write_circuit(circuit: &Circuit, format: Format, path: Option<&str>) -> Result<()> {
    match format {
        Format::Json => write_json(circuit, path),
        Format::Text => {
            let content = circuit.to_string();
            match path {
                Some(path) => fs::write(path, content)
                    .with_context(|| format!("Failed to write file: {path}")),
                None => {
                    print!("{content}");
                    Ok(())
                }
            }
        }
    }
}

/// Write a value as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&str>) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    match path {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
