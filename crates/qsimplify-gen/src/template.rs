//! Circuit templates.
//!
//! Each template is the left-hand side of one of the rewrite identities,
//! placed on randomly chosen qubits and appended to the end of a circuit.

use rand::Rng;
use rand::seq::index;

use qsimplify_ir::{Circuit, Operation, QubitId};

use crate::error::{GenError, GenResult};

/// The six template fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// `H(q) H(q)` on one qubit.
    TwoHadamards,
    /// One `CX(c, t)`.
    Cnot,
    /// `CX(c, t) CX(c, t)`.
    TwoCnots,
    /// `CX(c, t1) ... CX(c, tn)`: one control, several distinct targets.
    CnotFanOut,
    /// `H(c) H(t)  CX(c, t)  H(c) H(t)`.
    HadamardSandwich,
    /// `H(c1..cn)  CX(c1, t) ... CX(cn, t)  H(c1..cn)`: several controls
    /// into one target, each control conjugated by Hadamards.
    HadamardFanIn,
}

impl Template {
    /// Every template, in a fixed order.
    pub const ALL: [Template; 6] = [
        Template::TwoHadamards,
        Template::Cnot,
        Template::TwoCnots,
        Template::CnotFanOut,
        Template::HadamardSandwich,
        Template::HadamardFanIn,
    ];

    /// Get the name of this template.
    pub fn name(self) -> &'static str {
        match self {
            Template::TwoHadamards => "two_hadamards",
            Template::Cnot => "cnot",
            Template::TwoCnots => "two_cnots",
            Template::CnotFanOut => "cnot_fan_out",
            Template::HadamardSandwich => "hadamard_sandwich",
            Template::HadamardFanIn => "hadamard_fan_in",
        }
    }

    /// Smallest circuit width this template can be placed on.
    pub fn required_qubits(self) -> usize {
        match self {
            Template::TwoHadamards => 1,
            _ => 2,
        }
    }

    /// Pick a template uniformly at random.
    pub fn choose<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// Append this template to `circuit` on randomly chosen qubits.
    ///
    /// Every template except [`Template::TwoHadamards`] needs two qubits.
    pub fn apply<R: Rng + ?Sized>(self, mut circuit: Circuit, rng: &mut R) -> GenResult<Circuit> {
        let qubits = circuit.qubits().to_vec();
        if qubits.len() < self.required_qubits() {
            return Err(GenError::TooFewQubits {
                template: self.name(),
                required: self.required_qubits(),
                available: qubits.len(),
            });
        }
        match self {
            Template::TwoHadamards => {
                let q = qubits[rng.gen_range(0..qubits.len())];
                circuit.h(q)?.h(q)?;
            }
            Template::Cnot => {
                let (c, t) = pick_pair(&qubits, rng);
                circuit.cx(c, t)?;
            }
            Template::TwoCnots => {
                let (c, t) = pick_pair(&qubits, rng);
                circuit.cx(c, t)?.cx(c, t)?;
            }
            Template::CnotFanOut => {
                let sample = pick_group(&qubits, rng);
                let (control, targets) = (sample[0], &sample[1..]);
                circuit.extend(targets.iter().map(|&t| Operation::cx(control, t)))?;
            }
            Template::HadamardSandwich => {
                let (c, t) = pick_pair(&qubits, rng);
                circuit.h(c)?.h(t)?.cx(c, t)?.h(c)?.h(t)?;
            }
            Template::HadamardFanIn => {
                let sample = pick_group(&qubits, rng);
                let (target, controls) = (sample[0], &sample[1..]);
                circuit.extend(controls.iter().map(|&c| Operation::h(c)))?;
                circuit.extend(controls.iter().map(|&c| Operation::cx(c, target)))?;
                circuit.extend(controls.iter().map(|&c| Operation::h(c)))?;
            }
        }
        Ok(circuit)
    }
}

/// Two distinct qubits in random order.
fn pick_pair<R: Rng + ?Sized>(qubits: &[QubitId], rng: &mut R) -> (QubitId, QubitId) {
    let picked = index::sample(rng, qubits.len(), 2);
    (qubits[picked.index(0)], qubits[picked.index(1)])
}

/// One hub qubit followed by between 2 and `len - 1` distinct partners.
/// With only two qubits available the group shrinks to a single partner.
fn pick_group<R: Rng + ?Sized>(qubits: &[QubitId], rng: &mut R) -> Vec<QubitId> {
    let max_partners = qubits.len() - 1;
    let partners = if max_partners >= 2 {
        rng.gen_range(2..=max_partners)
    } else {
        1
    };
    index::sample(rng, qubits.len(), partners + 1)
        .into_iter()
        .map(|i| qubits[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qsimplify_ir::GateKind;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_too_few_qubits() {
        let mut rng = SmallRng::seed_from_u64(1);
        let err = Template::Cnot.apply(Circuit::new(1), &mut rng).unwrap_err();
        assert!(matches!(err, GenError::TooFewQubits { required: 2, .. }));
        assert!(Template::TwoHadamards.apply(Circuit::new(1), &mut rng).is_ok());
    }

    #[test]
    fn test_two_hadamards() {
        let mut rng = SmallRng::seed_from_u64(7);
        let circuit = Template::TwoHadamards.apply(Circuit::new(3), &mut rng).unwrap();
        assert_eq!(circuit.len(), 2);
        assert_eq!(circuit.count_by_kind()[&GateKind::H], 2);
    }

    #[test]
    fn test_two_cnots_share_roles() {
        let mut rng = SmallRng::seed_from_u64(11);
        let circuit = Template::TwoCnots.apply(Circuit::new(4), &mut rng).unwrap();
        assert_eq!(circuit.len(), 2);
        let ops: Vec<_> = circuit.operations().map(|(_, op)| op.clone()).collect();
        assert_eq!(ops[0], ops[1]);
        assert!(ops[0].is_cx());
    }

    #[test]
    fn test_fan_out_uses_one_control() {
        let mut rng = SmallRng::seed_from_u64(3);
        for _ in 0..20 {
            let circuit = Template::CnotFanOut.apply(Circuit::new(6), &mut rng).unwrap();
            let ops: Vec<_> = circuit.operations().map(|(_, op)| op.clone()).collect();
            assert!(ops.len() >= 2 && ops.len() <= 5);
            let control = ops[0].control();
            assert!(ops.iter().all(|op| op.control() == control));
        }
    }

    #[test]
    fn test_fan_out_on_two_qubits() {
        let mut rng = SmallRng::seed_from_u64(5);
        let circuit = Template::CnotFanOut.apply(Circuit::new(2), &mut rng).unwrap();
        assert_eq!(circuit.num_operations(), 1);
    }

    #[test]
    fn test_hadamard_sandwich_layout() {
        let mut rng = SmallRng::seed_from_u64(19);
        let circuit = Template::HadamardSandwich.apply(Circuit::new(2), &mut rng).unwrap();
        assert_eq!(circuit.len(), 3);
        assert_eq!(circuit.count_by_kind()[&GateKind::H], 4);
        assert_eq!(circuit.count_by_kind()[&GateKind::Cx], 1);
    }

    #[test]
    fn test_hadamard_fan_in_targets_one_qubit() {
        let mut rng = SmallRng::seed_from_u64(23);
        let circuit = Template::HadamardFanIn.apply(Circuit::new(5), &mut rng).unwrap();
        let cnots: Vec<_> = circuit
            .operations()
            .filter(|(_, op)| op.is_cx())
            .map(|(_, op)| op.targets()[0])
            .collect();
        assert!(cnots.len() >= 2);
        assert!(cnots.iter().all(|t| *t == cnots[0]));
        assert_eq!(circuit.count_by_kind()[&GateKind::H], 2 * cnots.len());
    }
}
