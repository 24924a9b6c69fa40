//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },

    /// Two operations of the same moment act on one qubit.
    #[error("Qubit {qubit} is already used in {}", format_moment(.moment))]
    QubitConflict {
        /// The shared qubit.
        qubit: QubitId,
        /// Index of the moment, when the moment belongs to a circuit.
        moment: Option<usize>,
    },

    /// A multi-target CNOT was built without targets.
    #[error("Multi-target CNOT{} has no targets", format_control(.control))]
    EmptyTargets {
        /// The control qubit, if one was given.
        control: Option<QubitId>,
    },

    /// An operation expected at a moment is not there.
    #[error("Operation {operation} not found in moment {moment}")]
    OperationNotFound {
        /// Index of the moment that was searched.
        moment: usize,
        /// Rendering of the missing operation.
        operation: String,
    },

    /// Moment index past the end of the circuit.
    #[error("Moment index {index} out of range for circuit of length {len}")]
    MomentOutOfRange {
        /// The offending index.
        index: usize,
        /// Number of moments in the circuit.
        len: usize,
    },

    /// A replacement does not act on the same qubits as the operation it replaces.
    #[error("Replacing {old} with {new} changes the qubits of moment {moment}")]
    FootprintMismatch {
        /// Index of the moment.
        moment: usize,
        /// Rendering of the replaced operation.
        old: String,
        /// Rendering of the replacement.
        new: String,
    },
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

fn format_moment(moment: &Option<usize>) -> String {
    match moment {
        Some(index) => format!("moment {index}"),
        None => "the moment".to_string(),
    }
}

fn format_control(control: &Option<QubitId>) -> String {
    match control {
        Some(qubit) => format!(" on control {qubit}"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
