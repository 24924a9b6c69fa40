//! Shared helpers for integration tests.
//!
//! A dense state-vector simulator for the H / CX / MCX gate set, used to
//! check that rewrites preserve the circuit unitary.

#![allow(dead_code)]

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;
use qsimplify_gen::random_circuit_with_rng;
use qsimplify_ir::{Circuit, GateKind, Operation};
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Tolerance for amplitude comparisons.
pub const EPSILON: f64 = 1e-9;

fn apply(state: &mut [Complex64], op: &Operation) {
    match op.kind() {
        GateKind::H => {
            let bit = 1usize << op.qubits()[0].index();
            for i in 0..state.len() {
                if i & bit == 0 {
                    let (a, b) = (state[i], state[i | bit]);
                    state[i] = (a + b) * FRAC_1_SQRT_2;
                    state[i | bit] = (a - b) * FRAC_1_SQRT_2;
                }
            }
        }
        GateKind::Cx | GateKind::Mcx => {
            let control = 1usize << op.qubits()[0].index();
            let flip = op.targets().iter().fold(0usize, |m, t| m | (1 << t.index()));
            let old = state.to_vec();
            for (i, amp) in old.into_iter().enumerate() {
                let j = if i & control != 0 { i ^ flip } else { i };
                state[j] = amp;
            }
        }
    }
}

/// Run `circuit` on computational basis state `basis`.
pub fn simulate(circuit: &Circuit, basis: usize) -> Vec<Complex64> {
    let mut state = vec![Complex64::new(0.0, 0.0); 1 << circuit.num_qubits()];
    state[basis] = Complex64::new(1.0, 0.0);
    for (_, op) in circuit.operations() {
        apply(&mut state, op);
    }
    state
}

/// True iff both circuits act identically on every basis state.
pub fn equivalent(a: &Circuit, b: &Circuit) -> bool {
    assert_eq!(a.num_qubits(), b.num_qubits());
    (0..1usize << a.num_qubits()).all(|basis| {
        simulate(a, basis)
            .iter()
            .zip(simulate(b, basis))
            .all(|(x, y)| (x - y).norm() < EPSILON)
    })
}

/// A seeded random template circuit over `n_qubits + 1` qubits.
pub fn random_circuit(n_qubits: u32, n_templates: usize, seed: u64) -> Circuit {
    let mut rng = SmallRng::seed_from_u64(seed);
    random_circuit_with_rng(n_qubits, n_templates, &mut rng).unwrap()
}
