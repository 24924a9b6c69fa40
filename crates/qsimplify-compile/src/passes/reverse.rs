//! CNOT direction reversal passes.
//!
//! Conjugating both qubits of a CNOT with Hadamards swaps control and
//! target: (H ⊗ H) · CX(c, t) · (H ⊗ H) = CX(t, c). The two passes apply
//! this identity in opposite directions.

use tracing::debug;

use qsimplify_ir::{Circuit, Moment, Operation};

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::pattern::RemovalMarks;

/// Expands every two-qubit CNOT into Hadamards around the reversed CNOT.
///
/// This pass never shortens a circuit. It exists to expose patterns the
/// other passes can then reduce.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnotToHadamardsAndCnot;

impl CnotToHadamardsAndCnot {
    /// Create a new CNOT expansion pass.
    pub fn new() -> Self {
        Self
    }
}

impl Pass for CnotToHadamardsAndCnot {
    fn name(&self) -> &'static str {
        "cnot_to_hadamards_and_cnot"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let mut out = Circuit::new(circuit.num_qubits() as u32);
        let mut expanded = 0usize;

        // Each moment becomes up to three: Hadamards plus the untouched
        // operations, the reversed CNOTs, then the closing Hadamards.
        for moment in circuit.moments() {
            let mut pre = Moment::new();
            let mut mid = Moment::new();
            let mut post = Moment::new();

            for op in moment {
                match op.reversed() {
                    Some(reversed) => {
                        let (c, t) = (op.qubits()[0], op.qubits()[1]);
                        pre.add(Operation::h(c))?;
                        pre.add(Operation::h(t))?;
                        mid.add(reversed)?;
                        post.add(Operation::h(c))?;
                        post.add(Operation::h(t))?;
                        expanded += 1;
                    }
                    None => pre.add(op.clone())?,
                }
            }

            out.push_moment(pre)?.push_moment(mid)?.push_moment(post)?;
        }

        debug!("{}: expanded {} CNOTs", self.name(), expanded);
        Ok(out)
    }
}

/// Collapses Hadamards around a CNOT into the reversed CNOT.
///
/// Matches `H(a) H(b)` immediately before and after `CX(a, b)` or
/// `CX(b, a)` on both of its qubits.
#[derive(Debug, Clone, Copy, Default)]
pub struct HadamardsAndCnotToCnot;

impl HadamardsAndCnotToCnot {
    /// Create a new Hadamard collapse pass.
    pub fn new() -> Self {
        Self
    }

    /// Find conjugated CNOTs. Returns the Hadamards to remove and the CNOTs
    /// to reverse in place.
    #[allow(clippy::unused_self)]
    fn find_conjugated(
        &self,
        circuit: &Circuit,
    ) -> (RemovalMarks, Vec<(usize, Operation, Operation)>) {
        let mut marks = RemovalMarks::new();
        let mut replacements = Vec::new();
        let moments = circuit.moments();

        for index in 0..circuit.len().saturating_sub(2) {
            for h1 in &moments[index] {
                if !h1.is_h() || marks.contains(index, h1) {
                    continue;
                }
                let q1 = h1.qubits()[0];

                let Some(at) = circuit.next_moment_touching(&[q1], index + 1) else {
                    continue;
                };
                let Some(cnot) = moments[at].operation_at(q1).filter(|op| op.is_cx()) else {
                    continue;
                };
                let Some(reversed) = cnot.reversed() else {
                    continue;
                };
                let Some(&q2) = cnot.qubits().iter().find(|&&q| q != q1) else {
                    continue;
                };
                let h2 = Operation::h(q2);

                let Some(before) = circuit.prev_moment_touching(&[q2], at) else {
                    continue;
                };
                if !moments[before].contains(&h2) || marks.contains(before, &h2) {
                    continue;
                }

                let after = circuit.next_moment_per_qubit(&[q1, q2], at + 1);
                let (after1, after2) = (after[0], after[1]);
                if after1 == circuit.len() || after2 == circuit.len() {
                    continue;
                }
                if !moments[after1].contains(h1)
                    || !moments[after2].contains(&h2)
                    || marks.contains(after1, h1)
                    || marks.contains(after2, &h2)
                {
                    continue;
                }

                marks.extend([
                    (index, h1.clone()),
                    (before, h2.clone()),
                    (after1, h1.clone()),
                    (after2, h2),
                ]);
                replacements.push((at, cnot.clone(), reversed));
            }
        }

        (marks, replacements)
    }
}

impl Pass for HadamardsAndCnotToCnot {
    fn name(&self) -> &'static str {
        "hadamards_and_cnot_to_cnot"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let (marks, replacements) = self.find_conjugated(circuit);
        debug!("{}: reversing {} CNOTs", self.name(), replacements.len());

        let mut circuit = circuit.clone();
        if !replacements.is_empty() {
            circuit.batch_replace(replacements)?;
            circuit.batch_remove(marks.into_removals())?;
            circuit.drop_empty_moments();
        }
        Ok(circuit)
    }
}
