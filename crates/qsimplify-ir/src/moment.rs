//! Moments: time-slices of operations acting on disjoint qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::operation::Operation;
use crate::qubit::QubitId;

/// A set of operations that act in parallel.
///
/// No qubit appears in two operations of the same moment. Operations are
/// stored ordered by their smallest qubit, so equality does not depend on
/// the order operations were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Operation>", into = "Vec<Operation>")]
pub struct Moment {
    operations: Vec<Operation>,
}

impl TryFrom<Vec<Operation>> for Moment {
    type Error = IrError;

    fn try_from(operations: Vec<Operation>) -> IrResult<Self> {
        Moment::from_operations(operations)
    }
}

impl From<Moment> for Vec<Operation> {
    fn from(moment: Moment) -> Self {
        moment.operations
    }
}

impl Moment {
    /// Create an empty moment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a moment from operations on pairwise-disjoint qubits.
    pub fn from_operations(operations: impl IntoIterator<Item = Operation>) -> IrResult<Self> {
        let mut moment = Self::new();
        for op in operations {
            moment.add(op)?;
        }
        Ok(moment)
    }

    /// Add an operation, rejecting it if one of its qubits is already in use.
    pub fn add(&mut self, operation: Operation) -> IrResult<()> {
        operation.validate()?;
        if let Some(qubit) = operation
            .qubits()
            .iter()
            .copied()
            .find(|q| self.operates_on(&[*q]))
        {
            return Err(IrError::QubitConflict {
                qubit,
                moment: None,
            });
        }
        let key = operation.leading_qubit();
        let pos = self
            .operations
            .partition_point(|op| op.leading_qubit() < key);
        self.operations.insert(pos, operation);
        Ok(())
    }

    /// Remove an operation, returning whether it was present.
    pub fn remove(&mut self, operation: &Operation) -> bool {
        match self.operations.iter().position(|op| op == operation) {
            Some(pos) => {
                self.operations.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Check whether the moment holds exactly this operation.
    #[inline]
    pub fn contains(&self, operation: &Operation) -> bool {
        self.operations.contains(operation)
    }

    /// Check whether any operation touches one of `qubits`.
    pub fn operates_on(&self, qubits: &[QubitId]) -> bool {
        self.operations.iter().any(|op| op.touches_any(qubits))
    }

    /// The operation acting on `qubit`, if any.
    pub fn operation_at(&self, qubit: QubitId) -> Option<&Operation> {
        self.operations.iter().find(|op| op.touches(qubit))
    }

    /// Iterate over the operations.
    pub fn operations(&self) -> std::slice::Iter<'_, Operation> {
        self.operations.iter()
    }

    /// Iterate over every qubit used in the moment.
    pub fn qubits(&self) -> impl Iterator<Item = QubitId> + '_ {
        self.operations.iter().flat_map(|op| op.qubits().iter().copied())
    }

    /// Number of operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the moment has no operations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}

impl<'a> IntoIterator for &'a Moment {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.operations.iter()
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.operations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{op}")?;
        }
        Ok(())
    }
}
