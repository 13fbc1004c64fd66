//! The three stages every checked pair goes through, as pure functions on values.

use std::ops::Range;

use qdiv_simulator::{Operator, Statevector};

use crate::{RegisterLayout, VerifierError};

/// A field value read back from a state, with the marginal probability it was read with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoded {
    /// The most probable value of the field.
    pub value: u64,
    /// The marginal probability of `value`.
    pub probability: f64,
}

/// Prepare the basis state encoding `dividend` and `divisor`, every other qubit zero.
pub fn prepare(
    layout: &RegisterLayout,
    dividend: u64,
    divisor: u64,
) -> Result<Statevector, VerifierError> {
    let label = layout.label(dividend, divisor)?;
    Ok(Statevector::from_label(&label)?)
}

/// Evolve a prepared state through the operator under test.
pub fn evolve<O: Operator + ?Sized>(
    state: Statevector,
    operator: &O,
) -> Result<Statevector, VerifierError> {
    if operator.num_qubits() != state.num_qubits() {
        return Err(VerifierError::DimensionMismatch {
            expected: state.num_qubits(),
            found: operator.num_qubits(),
        });
    }
    Ok(state.evolve(operator)?)
}

/// Read a field as the argmax of its marginal distribution.
///
/// Ties go to the smallest value.
pub fn decode(state: &Statevector, field: &Range<usize>) -> Result<Decoded, VerifierError> {
    let qubits = field.clone().collect::<Vec<_>>();
    let marginal = state.marginal_probabilities(&qubits)?;
    let (value, probability) =
        marginal.into_iter().enumerate().fold((0, f64::NEG_INFINITY), |best, (value, p)| {
            if p > best.1 {
                (value, p)
            } else {
                best
            }
        });
    Ok(Decoded { value: value as u64, probability })
}
