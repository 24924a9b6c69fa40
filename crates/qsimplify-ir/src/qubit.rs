//! Qubit identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
///
/// Qubits are plain indices: totally ordered, hashable and carry no
/// other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// Build the contiguous range `q0..q{n-1}`.
    pub fn range(n: u32) -> Vec<QubitId> {
        (0..n).map(QubitId).collect()
    }

    /// The index as a `usize`, for addressing per-qubit tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_display() {
        assert_eq!(format!("{}", QubitId(0)), "q0");
        assert_eq!(format!("{}", QubitId(12)), "q12");
    }

    #[test]
    fn test_qubit_range_is_ordered() {
        let qubits = QubitId::range(4);
        assert_eq!(qubits.len(), 4);
        assert!(qubits.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(qubits[3].index(), 3);
    }

    #[test]
    fn test_qubit_serializes_as_integer() {
        let json = serde_json::to_string(&QubitId(7)).unwrap();
        assert_eq!(json, "7");
    }
}
