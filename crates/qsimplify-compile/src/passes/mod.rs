//! Built-in rewrite passes.
//!
//! Each pass applies one circuit identity at every non-overlapping location
//! it finds in a single scan of the timeline:
//!
//! | Pass | Identity |
//! |------|----------|
//! | [`RemoveDoubleHadamards`] | `H · H = I` |
//! | [`CombineCnots`] | `CX(c, t1) · CX(c, t2) = MCX(c; t1, t2)` |
//! | [`RemoveDoubleCnots`] | `CX · CX = I` |
//! | [`HadamardsAndCnotToCnot`] | `(H ⊗ H) · CX(c, t) · (H ⊗ H) = CX(t, c)` |
//! | [`CnotToHadamardsAndCnot`] | `CX(c, t) = (H ⊗ H) · CX(t, c) · (H ⊗ H)` |
//! | [`CombineCnotsWithHadamardControls`] | Hadamard-wrapped fan-in to `H · MCX · H` |
//!
//! The cancellation passes repeat their scan until nothing is left to
//! cancel. The others run one scan per invocation.

mod cancel;
mod combine;
mod reverse;


use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use qsimplify_ir::Circuit;

use crate::error::{CompileError, CompileResult};
use crate::pass::Pass;

pub use cancel::{RemoveDoubleCnots, RemoveDoubleHadamards};
pub use combine::{CombineCnots, CombineCnotsWithHadamardControls};
pub use reverse::{CnotToHadamardsAndCnot, HadamardsAndCnotToCnot};

/// Number of built-in passes.
pub const NUM_PASSES: usize = 6;

/// Identifies one of the built-in passes.
///
/// The discriminant order is the row and column order of the optimizer's
/// transition matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PassId {
    RemoveDoubleHadamards,
    CombineCnots,
    RemoveDoubleCnots,
    HadamardsAndCnotToCnot,
    CnotToHadamardsAndCnot,
    CombineCnotsWithControlsSurroundedByHadamards,
}

impl PassId {
    /// Every pass, in transition-matrix order.
    pub const ALL: [PassId; NUM_PASSES] = [
        PassId::RemoveDoubleHadamards,
        PassId::CombineCnots,
        PassId::RemoveDoubleCnots,
        PassId::HadamardsAndCnotToCnot,
        PassId::CnotToHadamardsAndCnot,
        PassId::CombineCnotsWithControlsSurroundedByHadamards,
    ];

    /// Position of this pass in transition-matrix order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a pass by its position in transition-matrix order.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// The implementation of this pass.
    pub fn pass(self) -> &'static dyn Pass {
        match self {
            PassId::RemoveDoubleHadamards => &RemoveDoubleHadamards,
            PassId::CombineCnots => &CombineCnots,
            PassId::RemoveDoubleCnots => &RemoveDoubleCnots,
            PassId::HadamardsAndCnotToCnot => &HadamardsAndCnotToCnot,
            PassId::CnotToHadamardsAndCnot => &CnotToHadamardsAndCnot,
            PassId::CombineCnotsWithControlsSurroundedByHadamards => {
                &CombineCnotsWithHadamardControls
            }
        }
    }

    /// Get the name of this pass.
    pub fn name(self) -> &'static str {
        match self {
            PassId::RemoveDoubleHadamards => "remove_double_hadamards",
            PassId::CombineCnots => "combine_cnots",
            PassId::RemoveDoubleCnots => "remove_double_cnots",
            PassId::HadamardsAndCnotToCnot => "hadamards_and_cnot_to_cnot",
            PassId::CnotToHadamardsAndCnot => "cnot_to_hadamards_and_cnot",
            PassId::CombineCnotsWithControlsSurroundedByHadamards => {
                "combine_cnots_with_controls_surrounded_by_hadamards"
            }
        }
    }

    /// Run this pass on `circuit`.
    pub fn run(self, circuit: &Circuit) -> CompileResult<Circuit> {
        self.pass().run(circuit)
    }
}

impl fmt::Display for PassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PassId {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| CompileError::UnknownPass(s.to_string()))
    }
}

/// Remove adjacent Hadamard pairs.
pub fn remove_double_hadamards(circuit: &Circuit) -> CompileResult<Circuit> {
    RemoveDoubleHadamards.run(circuit)
}

/// Merge runs of same-control CNOTs into multi-target CNOTs.
pub fn combine_cnots(circuit: &Circuit) -> CompileResult<Circuit> {
    CombineCnots.run(circuit)
}

/// Remove adjacent identical CNOT pairs.
pub fn remove_double_cnots(circuit: &Circuit) -> CompileResult<Circuit> {
    RemoveDoubleCnots.run(circuit)
}

/// Collapse Hadamard-conjugated CNOTs into reversed CNOTs.
pub fn hadamards_and_cnot_to_cnot(circuit: &Circuit) -> CompileResult<Circuit> {
    HadamardsAndCnotToCnot.run(circuit)
}

/// Expand every CNOT into Hadamards around the reversed CNOT.
pub fn cnot_to_hadamards_and_cnot(circuit: &Circuit) -> CompileResult<Circuit> {
    CnotToHadamardsAndCnot.run(circuit)
}

/// Merge Hadamard-wrapped CNOT fan-ins into `H · MCX · H`.
pub fn combine_cnots_with_controls_surrounded_by_hadamards(
    circuit: &Circuit,
) -> CompileResult<Circuit> {
    CombineCnotsWithHadamardControls.run(circuit)
}
