//! Error types for the compilation crate.

use thiserror::Error;

/// Errors that can occur while rewriting or optimizing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Error from the IR crate.
    ///
    /// Raised by a pass when a batch edit does not match the timeline it
    /// was computed from, which indicates a defect in match finding.
    #[error("IR error: {0}")]
    Ir(#[from] qsimplify_ir::IrError),

    /// Invalid optimizer configuration.
    #[error("Invalid optimizer configuration: {0}")]
    InvalidConfiguration(String),

    /// No rewrite pass with this name.
    #[error("Unknown pass '{0}'")]
    UnknownPass(String),
}

/// Result type for compilation operations.
pub type CompileResult<T> = Result<T, CompileError>;
