//! Property-based tests for the rewrite passes.
//!
//! Every pass must keep the circuit well formed and preserve its unitary.
//! Cancellation passes must be idempotent, and no pass may move the moment
//! count in the wrong direction.

mod common;

use proptest::prelude::*;
use qsimplify_compile::PassId;
use qsimplify_compile::passes::{
    cnot_to_hadamards_and_cnot, hadamards_and_cnot_to_cnot, remove_double_cnots,
    remove_double_hadamards,
};
use qsimplify_ir::{Circuit, QubitId};

use common::{equivalent, random_circuit};

/// A random template circuit: 2-5 qubits, up to 12 templates.
fn arb_template_circuit() -> impl Strategy<Value = Circuit> {
    (1_u32..=4, 0_usize..=12, any::<u64>())
        .prop_map(|(n_qubits, n_templates, seed)| random_circuit(n_qubits, n_templates, seed))
}

/// A circuit built only from two-qubit CNOTs.
fn arb_cnot_circuit() -> impl Strategy<Value = Circuit> {
    (2_u32..=5).prop_flat_map(|num_qubits| {
        prop::collection::vec(
            (0..num_qubits, 0..num_qubits).prop_filter("Control and target must differ", |(c, t)| {
                c != t
            }),
            0..=10,
        )
        .prop_map(move |pairs| {
            let mut circuit = Circuit::new(num_qubits);
            for (c, t) in pairs {
                circuit.cx(QubitId(c), QubitId(t)).unwrap();
            }
            circuit
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every pass preserves well-formedness and the circuit unitary.
    #[test]
    fn test_passes_preserve_semantics(circuit in arb_template_circuit()) {
        for id in PassId::ALL {
            let out = id.run(&circuit).unwrap();
            prop_assert!(out.validate().is_ok(), "{} broke the timeline", id);
            prop_assert_eq!(out.num_qubits(), circuit.num_qubits());
            prop_assert!(out.moments().iter().all(|m| !m.is_empty()), "{} left an empty moment", id);
            prop_assert!(equivalent(&circuit, &out), "{} changed the unitary", id);
        }
    }

    /// Chained passes stay equivalent to the input.
    #[test]
    fn test_pass_chains_preserve_semantics(
        circuit in arb_template_circuit(),
        chain in prop::collection::vec(0_usize..6, 1..8),
    ) {
        let mut current = circuit.clone();
        for index in chain {
            current = PassId::from_index(index).unwrap().run(&current).unwrap();
        }
        prop_assert!(equivalent(&circuit, &current));
    }

    /// Removing, merging and collapsing passes never add moments; the
    /// expansion pass never removes any.
    #[test]
    fn test_moment_count_monotonicity(circuit in arb_template_circuit()) {
        for id in [
            PassId::RemoveDoubleHadamards,
            PassId::RemoveDoubleCnots,
            PassId::CombineCnots,
            PassId::HadamardsAndCnotToCnot,
        ] {
            prop_assert!(id.run(&circuit).unwrap().len() <= circuit.len(), "{} grew the circuit", id);
        }
        prop_assert!(cnot_to_hadamards_and_cnot(&circuit).unwrap().len() >= circuit.len());
    }

    /// Combination passes never add operations.
    #[test]
    fn test_combination_reduces_operations(circuit in arb_template_circuit()) {
        for id in [
            PassId::CombineCnots,
            PassId::CombineCnotsWithControlsSurroundedByHadamards,
        ] {
            let out = id.run(&circuit).unwrap();
            prop_assert!(out.num_operations() <= circuit.num_operations(), "{} added operations", id);
        }
    }

    /// Cancellation passes reach a fixed point in one invocation.
    #[test]
    fn test_cancellation_is_idempotent(circuit in arb_template_circuit()) {
        let once = remove_double_hadamards(&circuit).unwrap();
        prop_assert_eq!(remove_double_hadamards(&once).unwrap(), once);

        let once = remove_double_cnots(&circuit).unwrap();
        prop_assert_eq!(remove_double_cnots(&once).unwrap(), once);
    }

    /// Expanding CNOTs and collapsing them again restores the circuit.
    #[test]
    fn test_expand_collapse_round_trip(circuit in arb_cnot_circuit()) {
        let expanded = cnot_to_hadamards_and_cnot(&circuit).unwrap();
        prop_assert_eq!(expanded.len(), 3 * circuit.len());
        let restored = hadamards_and_cnot_to_cnot(&expanded).unwrap();
        prop_assert_eq!(restored, circuit);
    }
}
