//! qsimplify Circuit Intermediate Representation
//!
//! This crate provides the timeline representation the rewrite engine works
//! on. It forms the foundation of the qsimplify stack.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered sequence of [`Moment`]s. Each moment holds
//! [`Operation`]s acting on pairwise-disjoint qubits, so the operations of a
//! moment run in parallel and their relative order is immaterial. Only the
//! per-qubit history carries meaning.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`], a plain ordered index
//! - **Gates**: [`GateKind`], the closed vocabulary H / CX / multi-target CX
//! - **Operations**: [`Operation`], a gate applied to `(control, target...)`
//! - **Moments**: [`Moment`], one time-slice
//! - **Circuit**: [`Circuit`], the timeline with neighbour queries and batch edits
//!
//! # Example
//!
//! ```rust
//! use qsimplify_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//!
//! assert_eq!(circuit.len(), 3);
//! assert_eq!(circuit.next_moment_touching(&[QubitId(1)], 0), Some(2));
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate, self-inverse |
//! | `CX` | 2 | Controlled-NOT, `(control, target)` |
//! | `MCX` | 1 + n | One control, n ≥ 1 distinct targets |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod moment;
pub mod operation;
pub mod qubit;

pub use circuit::{Circuit, Insertion};
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use moment::Moment;
pub use operation::Operation;
pub use qubit::QubitId;
