//! Cancellation passes.

use tracing::debug;

use qsimplify_ir::Circuit;

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::pattern::{RemovalMarks, all_equal};

/// Hadamard cancellation pass.
///
/// Removes pairs of Hadamards on the same qubit with nothing between them.
/// H · H = I
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveDoubleHadamards;

impl RemoveDoubleHadamards {
    /// Create a new Hadamard cancellation pass.
    pub fn new() -> Self {
        Self
    }

    /// Find adjacent Hadamard pairs. Both members of every pair are marked.
    #[allow(clippy::unused_self)]
    fn find_cancellable_pairs(&self, circuit: &Circuit) -> RemovalMarks {
        let mut marks = RemovalMarks::new();
        let moments = circuit.moments();

        for index in 0..circuit.len().saturating_sub(1) {
            for op in &moments[index] {
                if !op.is_h() || marks.contains(index, op) {
                    continue;
                }
                let Some(next) = circuit.next_moment_touching(op.qubits(), index + 1) else {
                    continue;
                };
                if moments[next].contains(op) && !marks.contains(next, op) {
                    marks.mark(index, op.clone());
                    marks.mark(next, op.clone());
                }
            }
        }

        marks
    }
}

impl Pass for RemoveDoubleHadamards {
    fn name(&self) -> &'static str {
        "remove_double_hadamards"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let mut circuit = circuit.clone();
        // Each round removes at least one pair, so this terminates.
        loop {
            let marks = self.find_cancellable_pairs(&circuit);
            if marks.is_empty() {
                break;
            }
            debug!("{}: cancelling {} pairs", self.name(), marks.len() / 2);
            circuit.batch_remove(marks.into_removals())?;
            circuit.drop_empty_moments();
        }
        Ok(circuit)
    }
}

/// CNOT cancellation pass.
///
/// Removes pairs of identical CNOTs (plain or multi-target) with nothing
/// between them on any of their qubits.
/// CX · CX = I
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveDoubleCnots;

impl RemoveDoubleCnots {
    /// Create a new CNOT cancellation pass.
    pub fn new() -> Self {
        Self
    }

    /// Find adjacent identical CNOT pairs.
    ///
    /// A pair needs the next moment touching each qubit of the first CNOT
    /// to be one and the same moment, holding an identical CNOT.
    #[allow(clippy::unused_self)]
    fn find_cancellable_pairs(&self, circuit: &Circuit) -> RemovalMarks {
        let mut marks = RemovalMarks::new();
        let moments = circuit.moments();

        for index in 0..circuit.len().saturating_sub(1) {
            for op in &moments[index] {
                if !op.is_cnot_family() || marks.contains(index, op) {
                    continue;
                }
                let next = circuit.next_moment_per_qubit(op.qubits(), index + 1);
                let Some(&first) = next.first() else {
                    continue;
                };
                if first == circuit.len() || !all_equal(&next) {
                    continue;
                }
                if moments[first].contains(op) && !marks.contains(first, op) {
                    marks.mark(index, op.clone());
                    marks.mark(first, op.clone());
                }
            }
        }

        marks
    }
}

impl Pass for RemoveDoubleCnots {
    fn name(&self) -> &'static str {
        "remove_double_cnots"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let mut circuit = circuit.clone();
        // Removing an inner pair can make an outer pair adjacent, so keep
        // cancelling until no more pairs are found.
        loop {
            let marks = self.find_cancellable_pairs(&circuit);
            if marks.is_empty() {
                break;
            }
            debug!("{}: cancelling {} pairs", self.name(), marks.len() / 2);
            circuit.batch_remove(marks.into_removals())?;
            circuit.drop_empty_moments();
        }
        Ok(circuit)
    }
}
