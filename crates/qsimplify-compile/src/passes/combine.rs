//! CNOT combination passes.
//!
//! Both passes merge several two-qubit CNOTs into one multi-target CNOT.
//! Matched operations are removed first. The fan-out gate is then placed
//! at the earliest moment its qubits allow, no later than the first matched
//! CNOT, so that pass never lengthens a circuit. The fan-in replacement is
//! three moments long and is spliced in at the first matched CNOT.

use tracing::debug;

use qsimplify_ir::{Circuit, Insertion, Moment, Operation, QubitId};

use crate::error::CompileResult;
use crate::pass::Pass;
use crate::pattern::{RemovalMarks, make_multi_target_cnot, share_any};

/// CNOT fan-out combination pass.
///
/// A run of CNOTs sharing one control, with pairwise-disjoint targets, is
/// replaced by a single multi-target CNOT:
/// CX(c, t1) · CX(c, t2) = MCX(c; t1, t2)
///
/// A CNOT joins the run only if nothing touches its targets between the
/// start of the run and its own moment, so it can be moved up to the start.
#[derive(Debug, Clone, Copy, Default)]
pub struct CombineCnots;

impl CombineCnots {
    /// Create a new fan-out combination pass.
    pub fn new() -> Self {
        Self
    }

    /// Find combinable runs. Returns the operations to remove and one
    /// merged gate per run, keyed by the moment the run starts in.
    #[allow(clippy::unused_self)]
    fn find_runs(&self, circuit: &Circuit) -> CompileResult<(RemovalMarks, Vec<(usize, Insertion)>)> {
        let mut marks = RemovalMarks::new();
        let mut insertions = Vec::new();
        let moments = circuit.moments();

        'moments: for start in 0..circuit.len().saturating_sub(1) {
            for op in &moments[start] {
                if !op.is_cnot_family() || marks.contains(start, op) {
                    continue;
                }
                let Some(control) = op.control() else {
                    continue;
                };

                let mut run: Vec<(usize, Operation)> = vec![(start, op.clone())];
                let mut targets: Vec<QubitId> = op.targets().to_vec();
                let mut cursor = start;

                while let Some(next) = circuit.next_moment_touching(&[control], cursor + 1) {
                    let candidate = moments[next].operations().find(|cand| {
                        cand.is_cnot_family()
                            && cand.control() == Some(control)
                            && !marks.contains(next, cand)
                            && !share_any(cand.targets(), &targets)
                            && circuit
                                .prev_moment_touching(cand.targets(), next)
                                .is_none_or(|prev| prev < start)
                    });
                    let Some(candidate) = candidate else {
                        break;
                    };
                    targets.extend_from_slice(candidate.targets());
                    run.push((next, candidate.clone()));
                    cursor = next;
                }

                // A CNOT that starts no run ends the scan of its moment.
                if run.len() <= 1 {
                    continue 'moments;
                }

                let merged = make_multi_target_cnot(control, targets)?;
                marks.extend(run);
                insertions.push((start, Insertion::from(merged)));
            }
        }

        Ok((marks, insertions))
    }
}

impl Pass for CombineCnots {
    fn name(&self) -> &'static str {
        "combine_cnots"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let (marks, insertions) = self.find_runs(circuit)?;
        debug!(
            "{}: merging {} runs ({} CNOTs)",
            self.name(),
            insertions.len(),
            marks.len()
        );

        let mut circuit = circuit.clone();
        if !insertions.is_empty() {
            circuit.batch_remove(marks.into_removals())?;
            circuit.batch_insert(insertions)?;
            circuit.drop_empty_moments();
        }
        Ok(circuit)
    }
}

/// Hadamard-conjugated fan-in combination pass.
///
/// Several CNOTs into one target, each control wrapped in Hadamards, are
/// replaced by a multi-target CNOT with the roles swapped:
/// (H ⊗ H) · CX(c1, t) · CX(c2, t) · (H ⊗ H) = H(t) · MCX(t; c1, c2) · H(t)
#[derive(Debug, Clone, Copy, Default)]
pub struct CombineCnotsWithHadamardControls;

/// One CNOT of a fan-in together with the Hadamards around its control.
struct FanInMember {
    control: QubitId,
    before: usize,
    cnot: (usize, Operation),
    after: usize,
}

impl FanInMember {
    fn into_removals(self) -> [(usize, Operation); 3] {
        let h = Operation::h(self.control);
        [(self.before, h.clone()), self.cnot, (self.after, h)]
    }
}

impl CombineCnotsWithHadamardControls {
    /// Create a new fan-in combination pass.
    pub fn new() -> Self {
        Self
    }

    /// Locate the Hadamards immediately before and after moment `at` on
    /// `qubit`. Both must exist and be unclaimed.
    fn hadamard_neighbours(
        circuit: &Circuit,
        marks: &RemovalMarks,
        qubit: QubitId,
        at: usize,
    ) -> Option<(usize, usize)> {
        let h = Operation::h(qubit);
        let moments = circuit.moments();
        let before = circuit.prev_moment_touching(&[qubit], at)?;
        if !moments[before].contains(&h) || marks.contains(before, &h) {
            return None;
        }
        let after = circuit.next_moment_touching(&[qubit], at + 1)?;
        if !moments[after].contains(&h) || marks.contains(after, &h) {
            return None;
        }
        Some((before, after))
    }

    /// Find fan-ins of at least two CNOTs. Returns the operations to remove
    /// and the replacement sub-circuit per fan-in.
    #[allow(clippy::unused_self)]
    fn find_fan_ins(
        &self,
        circuit: &Circuit,
    ) -> CompileResult<(RemovalMarks, Vec<(usize, Insertion)>)> {
        let mut marks = RemovalMarks::new();
        let mut insertions = Vec::new();
        let moments = circuit.moments();

        for first in 1..circuit.len().saturating_sub(1) {
            for op in &moments[first] {
                if !op.is_cx() || marks.contains(first, op) {
                    continue;
                }
                let (control, target) = (op.qubits()[0], op.qubits()[1]);
                let Some((before, after)) =
                    Self::hadamard_neighbours(circuit, &marks, control, first)
                else {
                    continue;
                };

                let mut members = vec![FanInMember {
                    control,
                    before,
                    cnot: (first, op.clone()),
                    after,
                }];
                let mut cursor = first;

                while let Some(next) = circuit.next_moment_touching(&[target], cursor + 1) {
                    let found = moments[next].operations().find_map(|cand| {
                        if !cand.is_cx() || marks.contains(next, cand) {
                            return None;
                        }
                        let (c, t) = (cand.qubits()[0], cand.qubits()[1]);
                        if t != target || members.iter().any(|m| m.control == c) {
                            return None;
                        }
                        let (before, after) =
                            Self::hadamard_neighbours(circuit, &marks, c, next)?;
                        (before <= first).then(|| FanInMember {
                            control: c,
                            before,
                            cnot: (next, cand.clone()),
                            after,
                        })
                    });
                    let Some(member) = found else {
                        break;
                    };
                    members.push(member);
                    cursor = next;
                }

                if members.len() < 2 {
                    continue;
                }

                let controls: Vec<QubitId> = members.iter().map(|m| m.control).collect();
                let merged = make_multi_target_cnot(target, controls)?;
                let replacement = vec![
                    Moment::from_operations([Operation::h(target)])?,
                    Moment::from_operations([merged])?,
                    Moment::from_operations([Operation::h(target)])?,
                ];
                marks.extend(members.into_iter().flat_map(FanInMember::into_removals));
                insertions.push((first, Insertion::from(replacement)));
            }
        }

        Ok((marks, insertions))
    }
}

impl Pass for CombineCnotsWithHadamardControls {
    fn name(&self) -> &'static str {
        "combine_cnots_with_controls_surrounded_by_hadamards"
    }

    fn run(&self, circuit: &Circuit) -> CompileResult<Circuit> {
        let (marks, insertions) = self.find_fan_ins(circuit)?;
        debug!(
            "{}: merging {} fan-ins ({} operations removed)",
            self.name(),
            insertions.len(),
            marks.len()
        );

        let mut circuit = circuit.clone();
        if !insertions.is_empty() {
            circuit.batch_remove(marks.into_removals())?;
            circuit.batch_insert(insertions)?;
            circuit.drop_empty_moments();
        }
        Ok(circuit)
    }
}
