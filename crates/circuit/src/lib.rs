//! Gate-level description of reversible quantum circuits.
//!
//! A [`Circuit`] is a list of named [`QuantumRegister`]s and an ordered list of [`Gate`]s. Circuits
//! can be composed onto each other and controlled gate-by-gate, which is how the arithmetic
//! circuits are assembled from smaller blocks.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![warn(missing_docs)]

mod circuit;
mod error;
mod gate;
mod register;
mod report;

pub use circuit::*;
pub use error::*;
pub use gate::*;
pub use register::*;
pub use report::*;
