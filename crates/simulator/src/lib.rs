//! Dense state-vector simulation for qdiv circuits.
//!
//! Evolution is exact: the full vector of `2^n` amplitudes is kept and every gate is applied
//! analytically, so probabilities are computed rather than sampled.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![warn(missing_docs)]

mod error;
mod operator;
mod statevector;

pub use error::*;
pub use operator::*;
pub use statevector::*;
