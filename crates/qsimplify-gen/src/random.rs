//! Random circuit generation from templates.

use rand::Rng;
use tracing::debug;

use qsimplify_ir::Circuit;

use crate::error::{GenError, GenResult};
use crate::template::Template;

/// Build a circuit over `n_qubits + 1` qubits by appending `n_templates`
/// uniformly chosen templates, using the given random number generator.
///
/// Seeding `rng` makes the circuit reproducible:
/// ```rust
/// use rand::SeedableRng;
/// use qsimplify_gen::random_circuit_with_rng;
///
/// let mut rng = rand::rngs::SmallRng::seed_from_u64(42);
/// let circuit = random_circuit_with_rng(4, 10, &mut rng).unwrap();
/// assert_eq!(circuit.num_qubits(), 5);
/// ```
pub fn random_circuit_with_rng<R: Rng + ?Sized>(
    n_qubits: u32,
    n_templates: usize,
    rng: &mut R,
) -> GenResult<Circuit> {
    if n_qubits == 0 {
        return Err(GenError::InvalidQubits(n_qubits));
    }
    let total = n_qubits
        .checked_add(1)
        .ok_or(GenError::InvalidQubits(n_qubits))?;

    let mut circuit = Circuit::new(total);
    for _ in 0..n_templates {
        let template = Template::choose(rng);
        circuit = template.apply(circuit, rng)?;
    }

    debug!(
        n_qubits = circuit.num_qubits(),
        n_templates,
        depth = circuit.len(),
        ops = circuit.num_operations(),
        "generated random circuit"
    );
    Ok(circuit)
}

/// Build a random circuit using the thread-local RNG.
pub fn random_circuit(n_qubits: u32, n_templates: usize) -> GenResult<Circuit> {
    random_circuit_with_rng(n_qubits, n_templates, &mut rand::thread_rng())
}
