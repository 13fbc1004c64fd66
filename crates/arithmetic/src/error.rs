use qdiv_circuit::CircuitError;
use thiserror::Error;

/// Errors raised while building an arithmetic circuit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// Every operand needs at least one qubit.
    #[error("arithmetic circuits need at least one qubit per operand")]
    ZeroWidth,

    /// The divider only handles divisors no wider than the dividend.
    #[error("divisor of {divisor_width} qubits is wider than the dividend of {dividend_width}")]
    DivisorTooWide {
        /// The dividend width.
        dividend_width: usize,
        /// The divisor width.
        divisor_width: usize,
    },

    /// Composing the circuit failed.
    #[error("circuit construction failed: {0}")]
    Circuit(#[from] CircuitError),
}
