//! Error types for the generator crate.

use thiserror::Error;

/// Errors produced while generating random circuits.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GenError {
    /// Circuit builder returned an error.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qsimplify_ir::IrError),

    /// A template needs more qubits than the circuit has.
    #[error("Template '{template}' needs {required} qubits, circuit has {available}")]
    TooFewQubits {
        /// Name of the template.
        template: &'static str,
        /// Qubits the template needs.
        required: usize,
        /// Qubits in the circuit.
        available: usize,
    },

    /// n_qubits must be at least 1 and leave room for the extra qubit.
    #[error("n_qubits must be between 1 and u32::MAX - 1, got {0}")]
    InvalidQubits(u32),
}

/// Result type for generator operations.
pub type GenResult<T> = Result<T, GenError>;
