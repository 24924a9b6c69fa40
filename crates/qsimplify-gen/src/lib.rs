//! Random circuit generator for qsimplify
//!
//! Produces test and benchmark inputs for the rewrite engine by appending
//! randomly placed [`Template`]s, each the left-hand side of one rewrite
//! identity, to an initially empty circuit.
//!
//! # Example
//!
//! ```rust
//! use qsimplify_gen::random_circuit;
//!
//! let circuit = random_circuit(4, 8).unwrap();
//! assert_eq!(circuit.num_qubits(), 5);
//! assert!(circuit.num_operations() >= 8);
//! ```

pub mod error;
pub mod random;
pub mod template;

pub use error::{GenError, GenResult};
pub use random::{random_circuit, random_circuit_with_rng};
pub use template::Template;
