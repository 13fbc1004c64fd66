//! Reversible arithmetic circuits: ripple-carry adders and a restoring divider built from them.
//!
//! Every circuit here is a permutation of computational basis states made only of X, CX, CCX and
//! MCX gates, so it can be simulated exactly and controlled gate-by-gate.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![warn(missing_docs)]

mod adder;
mod divider;
mod error;
#[cfg(test)]
mod test_utils;

pub use adder::*;
pub use divider::*;
pub use error::*;
