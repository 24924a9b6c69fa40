//! Passes command implementation.

use console::style;

use qsimplify_compile::PassId;

/// The identity each pass applies.
fn identity(id: PassId) -> &'static str {
    match id {
        PassId::RemoveDoubleHadamards => "H · H = I",
        PassId::CombineCnots => "CX(c, t1) · CX(c, t2) = MCX(c; t1, t2)",
        PassId::RemoveDoubleCnots => "CX · CX = I",
        PassId::HadamardsAndCnotToCnot => "(H ⊗ H) · CX(c, t) · (H ⊗ H) = CX(t, c)",
        PassId::CnotToHadamardsAndCnot => "CX(c, t) = (H ⊗ H) · CX(t, c) · (H ⊗ H)",
        PassId::CombineCnotsWithControlsSurroundedByHadamards => {
            "H(ci) · CX(ci, t) · H(ci) for all i = H(t) · MCX(t; c1..cn) · H(t)"
        }
    }
}

/// Execute the passes command.
pub fn execute() {
    println!("{}", style("Rewrite passes (transition-matrix order):").bold());
    println!();
    for id in PassId::ALL {
        println!(
            "  {} {:<52} {}",
            style(id.index()).dim(),
            style(id.name()).cyan(),
            identity(id)
        );
    }
}
