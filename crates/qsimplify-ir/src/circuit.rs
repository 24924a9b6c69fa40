//! The moment timeline.
//!
//! A [`Circuit`] is an ordered sequence of [`Moment`]s over a fixed set of
//! qubits. The per-qubit history (operations touching one qubit, in moment
//! order) is the only order with semantic meaning; moment indices of
//! operations that share no qubit are an artefact of the schedule.
//!
//! Rewrite passes read the timeline through the neighbour queries
//! ([`Circuit::next_moment_touching`], [`Circuit::prev_moment_touching`],
//! [`Circuit::next_moment_per_qubit`]) and then commit their matches with
//! the batch edits. Batch edits validate every entry before touching the
//! timeline, so a failing batch leaves the circuit unchanged.

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::moment::Moment;
use crate::operation::Operation;
use crate::qubit::QubitId;

/// Something to add to the timeline with [`Circuit::batch_insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion {
    /// A single operation, placed with [`Circuit::insert_earliest`].
    Operation(Operation),
    /// A small sub-circuit, spliced in as new moments.
    Moments(Vec<Moment>),
}

impl From<Operation> for Insertion {
    fn from(op: Operation) -> Self {
        Insertion::Operation(op)
    }
}

impl From<Vec<Moment>> for Insertion {
    fn from(moments: Vec<Moment>) -> Self {
        Insertion::Moments(moments)
    }
}

/// A quantum circuit laid out as a timeline of moments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircuitRepr", into = "CircuitRepr")]
pub struct Circuit {
    /// Qubits in the circuit, fixed at construction.
    qubits: Vec<QubitId>,
    /// The timeline.
    moments: Vec<Moment>,
}

#[derive(Clone, Serialize, Deserialize)]
struct CircuitRepr {
    num_qubits: u32,
    moments: Vec<Moment>,
}

impl TryFrom<CircuitRepr> for Circuit {
    type Error = IrError;

    fn try_from(repr: CircuitRepr) -> IrResult<Self> {
        Circuit::from_moments(repr.num_qubits, repr.moments)
    }
}

impl From<Circuit> for CircuitRepr {
    fn from(circuit: Circuit) -> Self {
        Self {
            num_qubits: circuit.qubits.len() as u32,
            moments: circuit.moments,
        }
    }
}

impl Circuit {
    /// Create an empty circuit over qubits `q0..q{num_qubits-1}`.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            qubits: QubitId::range(num_qubits),
            moments: vec![],
        }
    }

    /// Create a circuit from explicit moments. Empty moments are dropped.
    pub fn from_moments(
        num_qubits: u32,
        moments: impl IntoIterator<Item = Moment>,
    ) -> IrResult<Self> {
        let mut circuit = Self::new(num_qubits);
        for moment in moments {
            circuit.push_moment(moment)?;
        }
        Ok(circuit)
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Append an operation at the earliest moment that keeps every qubit's
    /// history intact: right after the last moment touching any of its
    /// qubits, or in a new trailing moment.
    pub fn append(&mut self, operation: Operation) -> IrResult<&mut Self> {
        self.insert_earliest(self.moments.len(), operation)?;
        Ok(self)
    }

    /// Place an operation so that it runs before everything from moment
    /// `index` on, as early as its qubits allow.
    ///
    /// When moment `index` leaves the operation's qubits free, it joins the
    /// moment right after the last one before `index` touching them (a new
    /// trailing moment if that is past the end). Otherwise a new moment is
    /// inserted at `index`. Returns the moment the operation landed in.
    pub fn insert_earliest(&mut self, index: usize, operation: Operation) -> IrResult<usize> {
        if index > self.moments.len() {
            return Err(IrError::MomentOutOfRange {
                index,
                len: self.moments.len(),
            });
        }
        self.check_qubits(&operation)?;
        operation.validate()?;

        let blocked = self
            .moments
            .get(index)
            .is_some_and(|m| m.operates_on(operation.qubits()));
        if blocked {
            self.moments
                .insert(index, Moment::from_operations([operation])?);
            return Ok(index);
        }

        let slot = self
            .prev_moment_touching(operation.qubits(), index)
            .map_or(0, |i| i + 1);
        if slot == self.moments.len() {
            self.moments.push(Moment::new());
        }
        self.moments[slot].add(operation)?;
        Ok(slot)
    }

    /// Append every operation in order.
    pub fn extend(&mut self, operations: impl IntoIterator<Item = Operation>) -> IrResult<&mut Self> {
        for op in operations {
            self.append(op)?;
        }
        Ok(self)
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.append(Operation::h(qubit))
    }

    /// Apply CNOT gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.append(Operation::cx(control, target))
    }

    /// Apply multi-target CNOT gate.
    pub fn mcx(
        &mut self,
        control: QubitId,
        targets: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.append(Operation::mcx(control, targets)?)
    }

    /// Append a whole moment after the current last one. Empty moments are
    /// ignored.
    pub fn push_moment(&mut self, moment: Moment) -> IrResult<&mut Self> {
        for op in &moment {
            self.check_qubits(op)?;
        }
        if !moment.is_empty() {
            self.moments.push(moment);
        }
        Ok(self)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }

    /// Get the qubits in the circuit.
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Number of moments.
    #[inline]
    pub fn len(&self) -> usize {
        self.moments.len()
    }

    /// Check if the circuit has no moments.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// Circuit depth. Equal to [`Circuit::len`] once empty moments are dropped.
    pub fn depth(&self) -> usize {
        self.moments.iter().filter(|m| !m.is_empty()).count()
    }

    /// The moments.
    pub fn moments(&self) -> &[Moment] {
        &self.moments
    }

    /// A single moment.
    pub fn moment(&self, index: usize) -> Option<&Moment> {
        self.moments.get(index)
    }

    /// Iterate over `(moment_index, operation)` pairs in timeline order.
    pub fn operations(&self) -> impl Iterator<Item = (usize, &Operation)> {
        self.moments
            .iter()
            .enumerate()
            .flat_map(|(i, m)| m.operations().map(move |op| (i, op)))
    }

    /// Total number of operations.
    pub fn num_operations(&self) -> usize {
        self.moments.iter().map(Moment::len).sum()
    }

    /// Number of operations of each gate kind.
    pub fn count_by_kind(&self) -> FxHashMap<GateKind, usize> {
        let mut counts = FxHashMap::default();
        for (_, op) in self.operations() {
            *counts.entry(op.kind()).or_insert(0) += 1;
        }
        counts
    }

    /// Operations touching `qubit`, in moment order.
    pub fn history(&self, qubit: QubitId) -> Vec<&Operation> {
        self.moments
            .iter()
            .filter_map(|m| m.operation_at(qubit))
            .collect()
    }

    // =========================================================================
    // Neighbour queries
    // =========================================================================

    /// Smallest moment index `>= from` with an operation touching any of
    /// `qubits`.
    pub fn next_moment_touching(&self, qubits: &[QubitId], from: usize) -> Option<usize> {
        (from..self.moments.len()).find(|&i| self.moments[i].operates_on(qubits))
    }

    /// Largest moment index `< before` with an operation touching any of
    /// `qubits`.
    pub fn prev_moment_touching(&self, qubits: &[QubitId], before: usize) -> Option<usize> {
        (0..before.min(self.moments.len()))
            .rev()
            .find(|&i| self.moments[i].operates_on(qubits))
    }

    /// For each qubit on its own, the smallest moment index `>= from`
    /// touching it, or `len()` when nothing does. Answers are in the order
    /// of `qubits`.
    pub fn next_moment_per_qubit(&self, qubits: &[QubitId], from: usize) -> Vec<usize> {
        qubits
            .iter()
            .map(|&q| {
                self.next_moment_touching(&[q], from)
                    .unwrap_or(self.moments.len())
            })
            .collect()
    }

    // =========================================================================
    // Batch edits
    // =========================================================================

    /// Remove each operation from its moment. Moments left empty stay in
    /// place until [`Circuit::drop_empty_moments`].
    pub fn batch_remove(
        &mut self,
        removals: impl IntoIterator<Item = (usize, Operation)>,
    ) -> IrResult<()> {
        let removals: Vec<(usize, Operation)> = removals.into_iter().collect();
        let mut seen: FxHashSet<(usize, &Operation)> = FxHashSet::default();
        for (index, op) in &removals {
            let moment = self.moment_checked(*index)?;
            if !moment.contains(op) || !seen.insert((*index, op)) {
                return Err(IrError::OperationNotFound {
                    moment: *index,
                    operation: op.to_string(),
                });
            }
        }
        for (index, op) in &removals {
            self.moments[*index].remove(op);
        }
        Ok(())
    }

    /// Apply several insertions at once.
    ///
    /// Indices refer to the timeline before any of the insertions. Entries
    /// are applied in ascending index order, several at one index in their
    /// given order; moments created along the way shift the later entries.
    /// Single operations are placed with [`Circuit::insert_earliest`], so
    /// they only add a moment when no existing one can take them.
    pub fn batch_insert(
        &mut self,
        insertions: impl IntoIterator<Item = (usize, Insertion)>,
    ) -> IrResult<()> {
        let mut pending: Vec<(usize, Insertion)> = insertions.into_iter().collect();
        for (index, insertion) in &pending {
            if *index > self.moments.len() {
                return Err(IrError::MomentOutOfRange {
                    index: *index,
                    len: self.moments.len(),
                });
            }
            match insertion {
                Insertion::Operation(op) => {
                    self.check_qubits(op)?;
                    op.validate()?;
                }
                Insertion::Moments(moments) => {
                    for op in moments.iter().flat_map(Moment::operations) {
                        self.check_qubits(op)?;
                    }
                }
            }
        }

        pending.sort_by_key(|&(index, _)| index);
        let mut shift = 0;
        for (index, insertion) in pending {
            let at = index + shift;
            match insertion {
                Insertion::Operation(op) => {
                    let len = self.moments.len();
                    self.insert_earliest(at, op)?;
                    shift += self.moments.len() - len;
                }
                Insertion::Moments(moments) => {
                    shift += moments.len();
                    self.moments.splice(at..at, moments);
                }
            }
        }
        Ok(())
    }

    /// Swap operations in place. Each replacement must act on exactly the
    /// qubits of the operation it replaces.
    pub fn batch_replace(
        &mut self,
        replacements: impl IntoIterator<Item = (usize, Operation, Operation)>,
    ) -> IrResult<()> {
        let replacements: Vec<(usize, Operation, Operation)> =
            replacements.into_iter().collect();
        for (index, old, new) in &replacements {
            let moment = self.moment_checked(*index)?;
            if !moment.contains(old) {
                return Err(IrError::OperationNotFound {
                    moment: *index,
                    operation: old.to_string(),
                });
            }
            let mut a = old.qubits().to_vec();
            let mut b = new.qubits().to_vec();
            a.sort_unstable();
            b.sort_unstable();
            if a != b {
                return Err(IrError::FootprintMismatch {
                    moment: *index,
                    old: old.to_string(),
                    new: new.to_string(),
                });
            }
        }
        for (index, old, new) in replacements {
            let moment = &mut self.moments[index];
            if !moment.remove(&old) {
                return Err(IrError::OperationNotFound {
                    moment: index,
                    operation: old.to_string(),
                });
            }
            moment.add(new).map_err(|e| match e {
                IrError::QubitConflict { qubit, .. } => IrError::QubitConflict {
                    qubit,
                    moment: Some(index),
                },
                other => other,
            })?;
        }
        Ok(())
    }

    /// Remove moments without operations, renumbering the rest.
    pub fn drop_empty_moments(&mut self) {
        self.moments.retain(|m| !m.is_empty());
    }

    // =========================================================================
    // Integrity
    // =========================================================================

    /// Verify the timeline invariants: every operation is well formed and
    /// uses known qubits, and no moment uses a qubit twice.
    pub fn validate(&self) -> IrResult<()> {
        for (index, moment) in self.moments.iter().enumerate() {
            let mut used: FxHashSet<QubitId> = FxHashSet::default();
            for op in moment {
                op.validate()?;
                self.check_qubits(op)?;
                for &qubit in op.qubits() {
                    if !used.insert(qubit) {
                        return Err(IrError::QubitConflict {
                            qubit,
                            moment: Some(index),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    fn moment_checked(&self, index: usize) -> IrResult<&Moment> {
        self.moments.get(index).ok_or(IrError::MomentOutOfRange {
            index,
            len: self.moments.len(),
        })
    }

    fn check_qubits(&self, op: &Operation) -> IrResult<()> {
        match op
            .qubits()
            .iter()
            .find(|q| q.index() >= self.qubits.len())
        {
            Some(&qubit) => Err(IrError::QubitNotFound {
                qubit,
                gate_name: Some(op.kind().name().to_string()),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, moment) in self.moments.iter().enumerate() {
            writeln!(f, "{i}: {moment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn q(i: u32) -> QubitId {
        QubitId(i)
    }

    #[test]
    fn test_new_circuit() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert!(circuit.is_empty());
        assert_eq!(circuit.len(), 0);
    }

    #[test]
    fn test_append_packs_earliest() {
        let mut circuit = Circuit::new(3);
        circuit
            .h(q(0))
            .unwrap()
            .h(q(1))
            .unwrap()
            .cx(q(0), q(1))
            .unwrap()
            .h(q(2))
            .unwrap();

        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.moments()[0].len(), 3);
        assert!(circuit.moments()[1].contains(&Operation::cx(q(0), q(1))));
    }

    #[test]
    fn test_append_unknown_qubit() {
        let mut circuit = Circuit::new(2);
        let err = circuit.h(q(5)).unwrap_err();
        assert!(matches!(err, IrError::QubitNotFound { qubit: QubitId(5), .. }));
    }

    #[test]
    fn test_append_repeated_qubit() {
        let mut circuit = Circuit::new(2);
        assert!(circuit.cx(q(1), q(1)).is_err());
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_neighbour_queries() {
        // 0: H(q0)  1: CX(q0, q1)  2: H(q2)  3: H(q1)
        let circuit = Circuit::from_moments(
            3,
            [
                Moment::from_operations([Operation::h(q(0))]).unwrap(),
                Moment::from_operations([Operation::cx(q(0), q(1))]).unwrap(),
                Moment::from_operations([Operation::h(q(2))]).unwrap(),
                Moment::from_operations([Operation::h(q(1))]).unwrap(),
            ],
        )
        .unwrap();

        assert_eq!(circuit.next_moment_touching(&[q(1)], 0), Some(1));
        assert_eq!(circuit.next_moment_touching(&[q(1)], 2), Some(3));
        assert_eq!(circuit.next_moment_touching(&[q(0)], 2), None);
        assert_eq!(circuit.next_moment_touching(&[q(0)], 10), None);

        assert_eq!(circuit.prev_moment_touching(&[q(0)], 1), Some(0));
        assert_eq!(circuit.prev_moment_touching(&[q(1), q(2)], 3), Some(2));
        assert_eq!(circuit.prev_moment_touching(&[q(2)], 2), None);
        assert_eq!(circuit.prev_moment_touching(&[q(1)], 99), Some(3));

        assert_eq!(
            circuit.next_moment_per_qubit(&[q(0), q(1), q(2)], 1),
            vec![1, 1, 2]
        );
        assert_eq!(circuit.next_moment_per_qubit(&[q(0), q(2)], 3), vec![4, 4]);
    }

    #[test]
    fn test_batch_remove_and_drop() {
        let mut circuit = Circuit::new(1);
        circuit.h(q(0)).unwrap().h(q(0)).unwrap();
        circuit
            .batch_remove([(0, Operation::h(q(0))), (1, Operation::h(q(0)))])
            .unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.depth(), 0);
        circuit.drop_empty_moments();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_batch_remove_is_atomic() {
        let mut circuit = Circuit::new(2);
        circuit.h(q(0)).unwrap().h(q(1)).unwrap();
        let before = circuit.clone();

        let err = circuit
            .batch_remove([(0, Operation::h(q(0))), (0, Operation::h(q(0)))])
            .unwrap_err();
        assert!(matches!(err, IrError::OperationNotFound { moment: 0, .. }));
        assert_eq!(circuit, before);

        let err = circuit
            .batch_remove([(0, Operation::h(q(1))), (3, Operation::h(q(0)))])
            .unwrap_err();
        assert!(matches!(err, IrError::MomentOutOfRange { index: 3, .. }));
        assert_eq!(circuit, before);
    }

    #[test]
    fn test_insert_earliest_moves_back() {
        let mut circuit = Circuit::new(2);
        circuit.h(q(0)).unwrap().h(q(0)).unwrap().h(q(0)).unwrap();

        assert_eq!(circuit.insert_earliest(2, Operation::h(q(1))).unwrap(), 0);
        assert_eq!(circuit.len(), 3);
        assert!(circuit.moments()[0].contains(&Operation::h(q(1))));
    }

    #[test]
    fn test_insert_earliest_blocked_adds_moment() {
        let mut circuit = Circuit::new(2);
        circuit.cx(q(0), q(1)).unwrap();

        assert_eq!(circuit.insert_earliest(0, Operation::h(q(0))).unwrap(), 0);
        assert_eq!(circuit.len(), 2);
        let history: Vec<String> = circuit.history(q(0)).iter().map(|op| op.to_string()).collect();
        assert_eq!(history, ["H(q0)", "CX(q0, q1)"]);
    }

    #[test]
    fn test_batch_insert_uses_original_indices() {
        let mut circuit = Circuit::new(2);
        circuit.h(q(0)).unwrap().h(q(0)).unwrap().h(q(0)).unwrap();

        circuit
            .batch_insert([
                (
                    2,
                    Insertion::from(vec![
                        Moment::from_operations([Operation::cx(q(0), q(1))]).unwrap(),
                        Moment::from_operations([Operation::cx(q(1), q(0))]).unwrap(),
                    ]),
                ),
                (0, Insertion::from(Operation::h(q(1)))),
            ])
            .unwrap();

        assert_eq!(circuit.len(), 5);
        assert!(circuit.moments()[0].contains(&Operation::h(q(1))));
        assert!(circuit.moments()[0].contains(&Operation::h(q(0))));
        assert!(circuit.moments()[1].contains(&Operation::h(q(0))));
        assert!(circuit.moments()[2].contains(&Operation::cx(q(0), q(1))));
        assert!(circuit.moments()[3].contains(&Operation::cx(q(1), q(0))));
        assert!(circuit.moments()[4].contains(&Operation::h(q(0))));
    }

    #[test]
    fn test_batch_insert_same_index_keeps_order() {
        let mut circuit = Circuit::new(2);
        circuit
            .batch_insert([
                (0, Insertion::from(Operation::h(q(0)))),
                (0, Insertion::from(Operation::cx(q(0), q(1)))),
            ])
            .unwrap();
        assert_eq!(circuit.len(), 2);
        let history: Vec<String> = circuit.history(q(0)).iter().map(|op| op.to_string()).collect();
        assert_eq!(history, ["H(q0)", "CX(q0, q1)"]);
    }

    #[test]
    fn test_batch_insert_out_of_range() {
        let mut circuit = Circuit::new(1);
        let err = circuit
            .batch_insert([(1, Insertion::from(Operation::h(q(0))))])
            .unwrap_err();
        assert!(matches!(err, IrError::MomentOutOfRange { index: 1, len: 0 }));
    }

    #[test]
    fn test_batch_replace_role_swap() {
        let mut circuit = Circuit::new(3);
        circuit.cx(q(0), q(1)).unwrap().h(q(2)).unwrap();
        circuit
            .batch_replace([(
                0,
                Operation::cx(q(0), q(1)),
                Operation::cx(q(1), q(0)),
            )])
            .unwrap();
        assert!(circuit.moments()[0].contains(&Operation::cx(q(1), q(0))));
        assert!(circuit.moments()[0].contains(&Operation::h(q(2))));

        let err = circuit
            .batch_replace([(0, Operation::h(q(2)), Operation::h(q(0)))])
            .unwrap_err();
        assert!(matches!(err, IrError::FootprintMismatch { .. }));
    }

    #[test]
    fn test_history_and_counts() {
        let mut circuit = Circuit::new(3);
        circuit
            .h(q(0))
            .unwrap()
            .cx(q(0), q(1))
            .unwrap()
            .mcx(q(1), [q(0), q(2)])
            .unwrap();

        let history: Vec<String> = circuit.history(q(0)).iter().map(|op| op.to_string()).collect();
        assert_eq!(history, ["H(q0)", "CX(q0, q1)", "MCX(q1; q0, q2)"]);
        let counts = circuit.count_by_kind();
        assert_eq!(counts[&GateKind::H], 1);
        assert_eq!(counts[&GateKind::Cx], 1);
        assert_eq!(counts[&GateKind::Mcx], 1);
        assert_eq!(circuit.num_operations(), 3);
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let mut circuit = Circuit::new(2);
        circuit.h(q(0)).unwrap().cx(q(0), q(1)).unwrap();
        let json = serde_json::to_string(&circuit).unwrap();
        let back: Circuit = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circuit);

        let bad = r#"{"num_qubits":1,"moments":[[{"kind":"cx","qubits":[0,1]}]]}"#;
        assert!(serde_json::from_str::<Circuit>(bad).is_err());
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit.h(q(0)).unwrap().h(q(1)).unwrap().cx(q(0), q(1)).unwrap();
        assert_eq!(circuit.to_string(), "0: H(q0) H(q1)\n1: CX(q0, q1)\n");
    }

    #[test]
    fn test_validate() {
        let mut circuit = Circuit::new(2);
        circuit.cx(q(0), q(1)).unwrap();
        assert!(circuit.validate().is_ok());
    }

    fn op_from(kind: u8, a: u32, b: u32, c: u32) -> Option<Operation> {
        match kind {
            0 => Some(Operation::h(q(a))),
            1 => (a != b).then(|| Operation::cx(q(a), q(b))),
            _ => Operation::mcx(q(a), [q(b), q(c)]).ok(),
        }
    }

    proptest! {
        #[test]
        fn appended_circuits_round_trip_and_keep_order(
            raw in prop::collection::vec((0_u8..3, 0_u32..5, 0_u32..5, 0_u32..5), 0..40),
        ) {
            let ops: Vec<Operation> = raw
                .into_iter()
                .filter_map(|(kind, a, b, c)| op_from(kind, a, b, c))
                .collect();
            let mut circuit = Circuit::new(5);
            circuit.extend(ops.iter().cloned()).unwrap();
            prop_assert!(circuit.validate().is_ok());
            prop_assert_eq!(circuit.num_operations(), ops.len());

            for qubit in QubitId::range(5) {
                let expected: Vec<&Operation> = ops.iter().filter(|op| op.touches(qubit)).collect();
                prop_assert_eq!(circuit.history(qubit), expected);
            }

            let json = serde_json::to_string(&circuit).unwrap();
            let back: Circuit = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, circuit);
        }
    }
}
