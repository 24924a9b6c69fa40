//! Small predicates and constructors shared by the rewrite passes.

use rustc_hash::FxHashSet;

use qsimplify_ir::{IrResult, Operation, QubitId};

/// True iff `op` is a multi-target CNOT.
#[inline]
pub fn is_multi_target_cnot(op: &Operation) -> bool {
    op.kind() == qsimplify_ir::GateKind::Mcx
}

/// Build a multi-target CNOT. Targets must be pairwise distinct and must
/// not contain the control.
pub fn make_multi_target_cnot(
    control: QubitId,
    targets: impl IntoIterator<Item = QubitId>,
) -> IrResult<Operation> {
    Operation::mcx(control, targets)
}

/// True iff `values` is empty or all its elements are equal.
pub fn all_equal<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    let mut iter = values.into_iter();
    match iter.next() {
        Some(first) => iter.all(|v| v == first),
        None => true,
    }
}

/// True iff the two qubit collections intersect.
pub fn share_any(a: &[QubitId], b: &[QubitId]) -> bool {
    a.iter().any(|q| b.contains(q))
}

/// Operations claimed by a match during one pass invocation.
///
/// Every pass records `(moment, operation)` pairs here while scanning and
/// only edits the circuit once the scan is complete. An operation marked
/// once is never matched again in the same invocation.
#[derive(Debug, Default)]
pub struct RemovalMarks {
    order: Vec<(usize, Operation)>,
    seen: FxHashSet<(usize, Operation)>,
}

impl RemovalMarks {
    /// Create an empty set of marks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the operation at `moment` has been claimed.
    pub fn contains(&self, moment: usize, op: &Operation) -> bool {
        self.seen.contains(&(moment, op.clone()))
    }

    /// Claim an operation. Returns false if it was already claimed.
    pub fn mark(&mut self, moment: usize, op: Operation) -> bool {
        if self.seen.insert((moment, op.clone())) {
            self.order.push((moment, op));
            true
        } else {
            false
        }
    }

    /// Claim several operations.
    pub fn extend(&mut self, ops: impl IntoIterator<Item = (usize, Operation)>) {
        for (moment, op) in ops {
            self.mark(moment, op);
        }
    }

    /// Number of claimed operations.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing has been claimed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The claimed operations, in the order they were marked.
    pub fn into_removals(self) -> Vec<(usize, Operation)> {
        self.order
    }
}
