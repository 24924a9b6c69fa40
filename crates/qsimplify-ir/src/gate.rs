//! Gate kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed gate vocabulary the rewrite engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    /// Hadamard gate. Self-inverse.
    H,
    /// Controlled-NOT with one control and one target.
    Cx,
    /// One control and a set of distinct targets, equal to single-target
    /// CNOTs sharing that control applied in any order.
    Mcx,
}

impl GateKind {
    /// Get the name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::Cx => "cx",
            GateKind::Mcx => "mcx",
        }
    }

    /// True for both CNOT kinds.
    #[inline]
    pub fn is_cnot_family(self) -> bool {
        matches!(self, GateKind::Cx | GateKind::Mcx)
    }

    /// Number of qubits, or `None` when the arity is variable.
    pub fn num_qubits(self) -> Option<usize> {
        match self {
            GateKind::H => Some(1),
            GateKind::Cx => Some(2),
            GateKind::Mcx => None,
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
