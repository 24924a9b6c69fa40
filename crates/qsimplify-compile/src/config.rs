//! Optimizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{CompileError, CompileResult};
use crate::passes::{NUM_PASSES, PassId};

/// Square matrix of pass-to-pass transition weights.
///
/// Row `i` holds the weights for choosing the next pass after pass `i`,
/// indexed in [`PassId`] order.
pub type TransitionMatrix = [[f64; NUM_PASSES]; NUM_PASSES];

/// Number of off-diagonal entries in a [`TransitionMatrix`].
pub const NUM_TRANSITIONS: usize = NUM_PASSES * (NUM_PASSES - 1);

/// Default number of Markov steps per trajectory.
pub const DEFAULT_ITERATIONS: usize = 50;

/// Default number of independent trajectories.
pub const DEFAULT_RESTARTS: usize = 20;

/// Settings for the randomized optimizer.
///
/// Weights need not be normalized. A row only has to contain one positive
/// entry; every entry must be finite and non-negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Weights for the first pass of each trajectory.
    pub initial_probs: [f64; NUM_PASSES],
    /// Weights for the next pass given the previous one.
    pub transition_probs: TransitionMatrix,
    /// Markov steps after the first pass.
    pub n_iter: usize,
    /// Independent trajectories to run; the shortest result wins.
    pub n_opt_circuits: usize,
    /// Seed for reproducible runs. Fresh entropy when unset.
    pub seed: Option<u64>,
    /// Run trajectories on the rayon thread pool.
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            initial_probs: [1.0; NUM_PASSES],
            transition_probs: uniform_transitions(),
            n_iter: DEFAULT_ITERATIONS,
            n_opt_circuits: DEFAULT_RESTARTS,
            seed: None,
            parallel: true,
        }
    }
}

impl OptimizerConfig {
    /// Check weights and counts.
    pub fn validate(&self) -> CompileResult<()> {
        check_weights("initial_probs", &self.initial_probs)?;
        for (id, row) in PassId::ALL.iter().zip(&self.transition_probs) {
            check_weights(&format!("transition_probs[{id}]"), row)?;
        }
        if self.n_opt_circuits == 0 {
            return Err(CompileError::InvalidConfiguration(
                "n_opt_circuits must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Equal weight on every transition except a pass to itself.
pub fn uniform_transitions() -> TransitionMatrix {
    let mut matrix = [[1.0; NUM_PASSES]; NUM_PASSES];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    matrix
}

/// Expand the off-diagonal entries of a transition matrix.
///
/// `flat` holds [`NUM_TRANSITIONS`] values, row by row, skipping the
/// diagonal. The diagonal of the result is zero, so no pass is chosen twice
/// in a row.
pub fn flat_probs_to_matrix(flat: &[f64]) -> CompileResult<TransitionMatrix> {
    if flat.len() != NUM_TRANSITIONS {
        return Err(CompileError::InvalidConfiguration(format!(
            "expected {NUM_TRANSITIONS} transition weights, got {}",
            flat.len()
        )));
    }

    let mut matrix = [[0.0; NUM_PASSES]; NUM_PASSES];
    for (i, (row, values)) in matrix
        .iter_mut()
        .zip(flat.chunks_exact(NUM_PASSES - 1))
        .enumerate()
    {
        let mut values = values.iter().copied();
        for (j, cell) in row.iter_mut().enumerate() {
            if i != j {
                *cell = values.next().unwrap_or_default();
            }
        }
    }
    Ok(matrix)
}

fn check_weights(name: &str, weights: &[f64]) -> CompileResult<()> {
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(CompileError::InvalidConfiguration(format!(
            "{name} contains invalid weight {w}"
        )));
    }
    if weights.iter().sum::<f64>() <= 0.0 {
        return Err(CompileError::InvalidConfiguration(format!(
            "{name} has no positive weight"
        )));
    }
    Ok(())
}
