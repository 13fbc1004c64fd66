//! Exhaustive verification of quantum division circuits.
//!
//! For a divider of an `n`-bit dividend by an `m`-bit divisor every pair of a dividend in
//! `[0, 2^n)` and a non-zero divisor in `[1, 2^m)` is prepared as a computational basis state and
//! evolved through the circuit. The quotient and remainder are read back as the most probable
//! value of their fields' marginal distributions. Each pair is compared against integer division
//! and every failing pair is reported.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![warn(missing_docs)]

mod error;
mod layout;
mod opts;
mod pipeline;
mod report;
pub mod utils;
mod verifier;

pub use error::*;
pub use layout::*;
pub use opts::*;
pub use pipeline::*;
pub use report::*;
pub use verifier::*;
