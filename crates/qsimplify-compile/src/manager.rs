//! Randomized pass-sequence optimizer.
//!
//! The optimizer treats the six rewrite passes as the states of a Markov
//! chain. A trajectory draws its first pass from the initial weights, then
//! draws each following pass from the transition row of the previous one,
//! applying every drawn pass to the running circuit. Several independent
//! trajectories are run and the one ending with the fewest moments wins.

use rand::distributions::{Distribution, Standard, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, instrument, trace};

use qsimplify_ir::Circuit;

use crate::config::{OptimizerConfig, TransitionMatrix, flat_probs_to_matrix};
use crate::error::{CompileError, CompileResult};
use crate::passes::{NUM_PASSES, PassId};

/// Outcome of an optimizer run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationReport {
    /// The shortest circuit found.
    pub circuit: Circuit,
    /// Index of the winning trajectory.
    pub best_trajectory: usize,
    /// Final moment count of every trajectory, in trajectory order.
    pub depths: Vec<usize>,
    /// Passes applied by the winning trajectory, in order.
    pub passes: Vec<PassId>,
}

/// One finished trajectory.
struct Trajectory {
    circuit: Circuit,
    passes: Vec<PassId>,
}

/// Runs random pass sequences and keeps the shortest result.
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: OptimizerConfig,
    initial: WeightedIndex<f64>,
    transitions: Vec<WeightedIndex<f64>>,
}

impl Optimizer {
    /// Create an optimizer, validating the configuration.
    pub fn new(config: OptimizerConfig) -> CompileResult<Self> {
        config.validate()?;
        let initial = weighted("initial_probs", &config.initial_probs)?;
        let transitions = config
            .transition_probs
            .iter()
            .zip(PassId::ALL)
            .map(|(row, id)| weighted(&format!("transition_probs[{id}]"), row))
            .collect::<CompileResult<Vec<_>>>()?;
        Ok(Self {
            config,
            initial,
            transitions,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimize `circuit`, returning the shortest circuit found.
    ///
    /// The input is never modified. With `n_iter == 0` each trajectory
    /// applies exactly one pass.
    pub fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        Ok(self.run_with_report(circuit)?.circuit)
    }

    /// Optimize `circuit` and report per-trajectory results.
    ///
    /// Ties on moment count go to the lowest trajectory index. With a fixed
    /// seed the result does not depend on `parallel`.
    #[instrument(skip(self, circuit), fields(
        restarts = self.config.n_opt_circuits,
        iterations = self.config.n_iter,
    ))]
    pub fn run_with_report(&self, circuit: &Circuit) -> CompileResult<OptimizationReport> {
        info!(
            "Optimizing circuit with {} qubits and {} moments",
            circuit.num_qubits(),
            circuit.len()
        );

        let outer_rng = match self.config.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_entropy(),
        };
        let seeds: Vec<u64> = outer_rng
            .sample_iter(&Standard)
            .take(self.config.n_opt_circuits)
            .collect();

        let trajectories: Vec<Trajectory> = if self.config.parallel && seeds.len() > 1 {
            seeds
                .into_par_iter()
                .map(|seed| self.trajectory(circuit, seed))
                .collect::<CompileResult<_>>()?
        } else {
            seeds
                .into_iter()
                .map(|seed| self.trajectory(circuit, seed))
                .collect::<CompileResult<_>>()?
        };

        let depths: Vec<usize> = trajectories.iter().map(|t| t.circuit.len()).collect();
        let best_trajectory = depths
            .iter()
            .enumerate()
            .min_by_key(|&(index, depth)| (*depth, index))
            .map(|(index, _)| index)
            .ok_or_else(|| {
                CompileError::InvalidConfiguration("no trajectories were run".into())
            })?;
        let Trajectory { circuit, passes } = trajectories
            .into_iter()
            .nth(best_trajectory)
            .ok_or_else(|| {
                CompileError::InvalidConfiguration("no trajectories were run".into())
            })?;

        info!(
            "Optimizer completed, best trajectory {} with {} moments",
            best_trajectory,
            circuit.len()
        );

        Ok(OptimizationReport {
            circuit,
            best_trajectory,
            depths,
            passes,
        })
    }

    /// Run one Markov trajectory from its own seed.
    fn trajectory(&self, circuit: &Circuit, seed: u64) -> CompileResult<Trajectory> {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let mut passes = Vec::with_capacity(self.config.n_iter + 1);

        let mut current = self.pick(&self.initial, &mut rng)?;
        let mut circuit = current.run(circuit)?;
        passes.push(current);

        for step in 0..self.config.n_iter {
            current = self.pick(&self.transitions[current.index()], &mut rng)?;
            circuit = current.run(&circuit)?;
            passes.push(current);
            trace!(step, pass = %current, moments = circuit.len(), "markov step");
        }

        debug!(seed, moments = circuit.len(), "trajectory finished");
        Ok(Trajectory { circuit, passes })
    }

    #[allow(clippy::unused_self)]
    fn pick<R: Rng>(&self, weights: &WeightedIndex<f64>, rng: &mut R) -> CompileResult<PassId> {
        let index = weights.sample(rng);
        PassId::from_index(index).ok_or_else(|| {
            CompileError::InvalidConfiguration(format!("sampled pass index {index} out of range"))
        })
    }
}

fn weighted(name: &str, weights: &[f64; NUM_PASSES]) -> CompileResult<WeightedIndex<f64>> {
    WeightedIndex::new(weights)
        .map_err(|e| CompileError::InvalidConfiguration(format!("{name}: {e}")))
}

/// Builder for [`Optimizer`].
#[derive(Debug, Clone, Default)]
pub struct OptimizerBuilder {
    config: OptimizerConfig,
    flat_transitions: Option<Vec<f64>>,
}

impl OptimizerBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    #[must_use]
    pub fn with_config(mut self, config: OptimizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the weights for the first pass.
    #[must_use]
    pub fn with_initial_probs(mut self, probs: [f64; NUM_PASSES]) -> Self {
        self.config.initial_probs = probs;
        self
    }

    /// Set the full transition matrix.
    #[must_use]
    pub fn with_transition_probs(mut self, probs: TransitionMatrix) -> Self {
        self.config.transition_probs = probs;
        self.flat_transitions = None;
        self
    }

    /// Set the transition matrix from its off-diagonal entries.
    ///
    /// See [`flat_probs_to_matrix`]. The length is checked by
    /// [`OptimizerBuilder::build`].
    #[must_use]
    pub fn with_flat_transition_probs(mut self, flat: impl Into<Vec<f64>>) -> Self {
        self.flat_transitions = Some(flat.into());
        self
    }

    /// Set the number of Markov steps per trajectory.
    #[must_use]
    pub fn with_iterations(mut self, n_iter: usize) -> Self {
        self.config.n_iter = n_iter;
        self
    }

    /// Set the number of trajectories.
    #[must_use]
    pub fn with_restarts(mut self, n_opt_circuits: usize) -> Self {
        self.config.n_opt_circuits = n_opt_circuits;
        self
    }

    /// Fix the seed for reproducible runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Enable or disable parallel trajectories.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the optimizer.
    pub fn build(mut self) -> CompileResult<Optimizer> {
        if let Some(flat) = self.flat_transitions.take() {
            self.config.transition_probs = flat_probs_to_matrix(&flat)?;
        }
        Optimizer::new(self.config)
    }
}

/// Run the optimizer once with fresh entropy.
///
/// `transition_probs[i]` weighs the pass chosen after pass `i`, both in
/// [`PassId`] order. A matrix given as its off-diagonal entries can be
/// expanded with [`flat_probs_to_matrix`].
pub fn optimize(
    circuit: &Circuit,
    initial_probs: [f64; NUM_PASSES],
    transition_probs: &TransitionMatrix,
    n_iter: usize,
    n_opt_circuits: usize,
) -> CompileResult<Circuit> {
    OptimizerBuilder::new()
        .with_initial_probs(initial_probs)
        .with_transition_probs(*transition_probs)
        .with_iterations(n_iter)
        .with_restarts(n_opt_circuits)
        .build()?
        .run(circuit)
}
