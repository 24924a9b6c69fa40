//! Gate operations: a gate kind applied to an ordered tuple of qubits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// A gate applied to specific qubits.
///
/// Qubits are ordered `(qubit)` for H and `(control, target...)` for the
/// CNOT kinds. Multi-target CNOT targets are kept sorted, so two operations
/// compare equal regardless of the order their targets were given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "OperationRepr")]
pub struct Operation {
    kind: GateKind,
    qubits: Vec<QubitId>,
}

#[derive(Deserialize)]
struct OperationRepr {
    kind: GateKind,
    qubits: Vec<QubitId>,
}

impl TryFrom<OperationRepr> for Operation {
    type Error = IrError;

    fn try_from(repr: OperationRepr) -> IrResult<Self> {
        Operation::new(repr.kind, repr.qubits)
    }
}

impl Operation {
    /// Create an operation from a kind and its operands, checking arity
    /// and that no qubit repeats.
    pub fn new(kind: GateKind, qubits: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let qubits: Vec<QubitId> = qubits.into_iter().collect();
        let op = match kind {
            GateKind::H | GateKind::Cx => {
                let expected = kind.num_qubits().unwrap_or_default();
                if qubits.len() != expected {
                    return Err(IrError::QubitCountMismatch {
                        gate_name: kind.name().to_string(),
                        expected,
                        got: qubits.len(),
                    });
                }
                Self { kind, qubits }
            }
            GateKind::Mcx => match qubits.split_first() {
                Some((&control, targets)) => return Self::mcx(control, targets.iter().copied()),
                None => {
                    return Err(IrError::EmptyTargets { control: None });
                }
            },
        };
        op.validate()?;
        Ok(op)
    }

    /// Hadamard on `qubit`.
    pub fn h(qubit: QubitId) -> Self {
        Self {
            kind: GateKind::H,
            qubits: vec![qubit],
        }
    }

    /// Single-target CNOT.
    pub fn cx(control: QubitId, target: QubitId) -> Self {
        Self {
            kind: GateKind::Cx,
            qubits: vec![control, target],
        }
    }

    /// Multi-target CNOT. Targets must be non-empty, pairwise distinct and
    /// must not contain the control.
    pub fn mcx(control: QubitId, targets: impl IntoIterator<Item = QubitId>) -> IrResult<Self> {
        let mut targets: Vec<QubitId> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(IrError::EmptyTargets {
                control: Some(control),
            });
        }
        targets.sort_unstable();
        let mut qubits = Vec::with_capacity(targets.len() + 1);
        qubits.push(control);
        qubits.extend(targets);
        let op = Self {
            kind: GateKind::Mcx,
            qubits,
        };
        op.validate()?;
        Ok(op)
    }

    /// Check that no qubit appears twice.
    pub fn validate(&self) -> IrResult<()> {
        for (i, q) in self.qubits.iter().enumerate() {
            if self.qubits[i + 1..].contains(q) {
                return Err(IrError::DuplicateQubit {
                    qubit: *q,
                    gate_name: Some(self.kind.name().to_string()),
                });
            }
        }
        Ok(())
    }

    /// The gate kind.
    #[inline]
    pub fn kind(&self) -> GateKind {
        self.kind
    }

    /// All qubits, control first for the CNOT kinds.
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// True for a Hadamard.
    #[inline]
    pub fn is_h(&self) -> bool {
        self.kind == GateKind::H
    }

    /// True for a single-target CNOT.
    #[inline]
    pub fn is_cx(&self) -> bool {
        self.kind == GateKind::Cx
    }

    /// True for either CNOT kind.
    #[inline]
    pub fn is_cnot_family(&self) -> bool {
        self.kind.is_cnot_family()
    }

    /// Control qubit of a CNOT-kind operation.
    pub fn control(&self) -> Option<QubitId> {
        if self.is_cnot_family() {
            self.qubits.first().copied()
        } else {
            None
        }
    }

    /// Target qubits of a CNOT-kind operation; empty for H.
    pub fn targets(&self) -> &[QubitId] {
        if self.is_cnot_family() {
            &self.qubits[1..]
        } else {
            &[]
        }
    }

    /// Check whether this operation acts on `qubit`.
    #[inline]
    pub fn touches(&self, qubit: QubitId) -> bool {
        self.qubits.contains(&qubit)
    }

    /// Check whether this operation acts on any of `qubits`.
    pub fn touches_any(&self, qubits: &[QubitId]) -> bool {
        self.qubits.iter().any(|q| qubits.contains(q))
    }

    /// The single-target CNOT with control and target swapped.
    pub fn reversed(&self) -> Option<Self> {
        match (self.kind, self.qubits.as_slice()) {
            (GateKind::Cx, &[control, target]) => Some(Self::cx(target, control)),
            _ => None,
        }
    }

    /// Smallest qubit index, used to order operations inside a moment.
    pub(crate) fn leading_qubit(&self) -> QubitId {
        self.qubits.iter().copied().min().unwrap_or(QubitId(0))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            GateKind::H => write!(f, "H({})", self.qubits[0]),
            GateKind::Cx => write!(f, "CX({}, {})", self.qubits[0], self.qubits[1]),
            GateKind::Mcx => {
                write!(f, "MCX({};", self.qubits[0])?;
                for (i, t) in self.qubits[1..].iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {t}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcx_targets_are_order_insensitive() {
        let a = Operation::mcx(QubitId(0), [QubitId(3), QubitId(1), QubitId(2)]).unwrap();
        let b = Operation::mcx(QubitId(0), [QubitId(1), QubitId(2), QubitId(3)]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.targets(), &[QubitId(1), QubitId(2), QubitId(3)]);
        assert_eq!(a.control(), Some(QubitId(0)));
    }

    #[test]
    fn test_mcx_rejects_bad_targets() {
        assert!(matches!(
            Operation::mcx(QubitId(0), []),
            Err(IrError::EmptyTargets {
                control: Some(QubitId(0))
            })
        ));
        let err = Operation::new(GateKind::Mcx, []).unwrap_err();
        assert!(matches!(err, IrError::EmptyTargets { control: None }));
        assert_eq!(err.to_string(), "Multi-target CNOT has no targets");
        assert!(matches!(
            Operation::mcx(QubitId(0), [QubitId(1), QubitId(1)]),
            Err(IrError::DuplicateQubit { .. })
        ));
        assert!(matches!(
            Operation::mcx(QubitId(0), [QubitId(0)]),
            Err(IrError::DuplicateQubit { .. })
        ));
    }

    #[test]
    fn test_cx_role_order_matters() {
        let cx = Operation::cx(QubitId(0), QubitId(1));
        assert_ne!(cx, Operation::cx(QubitId(1), QubitId(0)));
        assert_eq!(cx.reversed(), Some(Operation::cx(QubitId(1), QubitId(0))));
        assert_eq!(Operation::h(QubitId(0)).reversed(), None);
    }

    #[test]
    fn test_single_target_mcx_differs_from_cx() {
        let mcx = Operation::mcx(QubitId(0), [QubitId(1)]).unwrap();
        assert_ne!(mcx, Operation::cx(QubitId(0), QubitId(1)));
        assert!(mcx.is_cnot_family());
        assert!(mcx.reversed().is_none());
    }

    #[test]
    fn test_new_checks_arity() {
        assert!(Operation::new(GateKind::Cx, [QubitId(0)]).is_err());
        assert!(Operation::new(GateKind::Cx, [QubitId(2), QubitId(2)]).is_err());
        assert_eq!(
            Operation::new(GateKind::H, [QubitId(4)]).unwrap(),
            Operation::h(QubitId(4))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Operation::h(QubitId(2)).to_string(), "H(q2)");
        assert_eq!(
            Operation::cx(QubitId(0), QubitId(1)).to_string(),
            "CX(q0, q1)"
        );
        let mcx = Operation::mcx(QubitId(4), [QubitId(2), QubitId(0)]).unwrap();
        assert_eq!(mcx.to_string(), "MCX(q4; q0, q2)");
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Operation = serde_json::from_str(r#"{"kind":"mcx","qubits":[0,2,1]}"#).unwrap();
        assert_eq!(ok.targets(), &[QubitId(1), QubitId(2)]);
        let bad: Result<Operation, _> = serde_json::from_str(r#"{"kind":"cx","qubits":[1,1]}"#);
        assert!(bad.is_err());
    }
}
