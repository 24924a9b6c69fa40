//! qsimplify Rewrite Passes and Optimizer
//!
//! This crate provides the rewrite engine: six passes that each apply one
//! circuit identity over a [`qsimplify_ir::Circuit`], and a randomized
//! optimizer that chains them to reduce circuit depth.
//!
//! # Overview
//!
//! A pass scans the timeline once, collects every non-overlapping match of
//! its pattern, then commits all edits with the IR's batch operations.
//! Passes take a circuit by reference and return a new one, so any prefix of
//! a pass sequence can be kept as a snapshot.
//!
//! The [`Optimizer`] treats the passes as states of a Markov chain. It runs
//! several independent random pass sequences and keeps the circuit with the
//! fewest moments.
//!
//! # Architecture
//!
//! ```text
//! Input Circuit
//!       │
//!       ▼
//! ┌───────────┐
//! │ Optimizer │ ◄── OptimizerConfig (weights, iterations, restarts, seed)
//! └───────────┘
//!       │  n_opt_circuits trajectories, each:
//!       │    initial_probs ─► pass ─► transition_probs[pass] ─► pass ─► ...
//!       │
//!       ├── remove_double_hadamards / remove_double_cnots
//!       ├── combine_cnots / combine_cnots_with_controls_surrounded_by_hadamards
//!       └── hadamards_and_cnot_to_cnot / cnot_to_hadamards_and_cnot
//!       │
//!       ▼
//! Shortest Circuit
//! ```
//!
//! # Example: Single Pass
//!
//! ```rust
//! use qsimplify_compile::passes::remove_double_hadamards;
//! use qsimplify_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(1);
//! circuit.h(QubitId(0)).unwrap().h(QubitId(0)).unwrap();
//!
//! let simplified = remove_double_hadamards(&circuit).unwrap();
//! assert!(simplified.is_empty());
//! ```
//!
//! # Example: Optimizer
//!
//! ```rust
//! use qsimplify_compile::OptimizerBuilder;
//! use qsimplify_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(3);
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.cx(QubitId(0), QubitId(2)).unwrap();
//!
//! let optimizer = OptimizerBuilder::new()
//!     .with_iterations(20)
//!     .with_restarts(4)
//!     .with_seed(7)
//!     .build()
//!     .unwrap();
//!
//! let optimized = optimizer.run(&circuit).unwrap();
//! println!("depth {} -> {}", circuit.len(), optimized.len());
//! ```

pub mod config;
pub mod error;
pub mod manager;
pub mod pass;
pub mod passes;
pub mod pattern;

pub use config::{OptimizerConfig, TransitionMatrix, flat_probs_to_matrix};
pub use error::{CompileError, CompileResult};
pub use manager::{OptimizationReport, Optimizer, OptimizerBuilder, optimize};
pub use pass::Pass;
pub use passes::{NUM_PASSES, PassId};
