//! Pass trait for rewrite passes.

use qsimplify_ir::Circuit;

use crate::error::CompileResult;

/// A rewrite pass that maps a circuit to an equivalent circuit.
///
/// Passes never mutate their input: they build and return a new circuit,
/// so a caller holding the original keeps an unchanged snapshot. A pass
/// that finds nothing to rewrite returns a copy of its input.
pub trait Pass: Send + Sync {
    /// Get the name of this pass.
    fn name(&self) -> &str;

    /// Run the pass on the given circuit.
    ///
    /// Errors only surface batch edits that do not match the timeline they
    /// were computed from; they are not expected for well-formed input.
    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit>;
}
