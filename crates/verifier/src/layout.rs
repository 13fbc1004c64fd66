use std::ops::Range;

use qdiv_arithmetic::{DIVIDEND, DIVISOR, QUOTIENT};
use qdiv_circuit::Circuit;

use crate::VerifierError;

/// The widest operand the verifier will sweep.
pub const MAX_OPERAND_WIDTH: usize = 16;

/// Where the operands go in and where the results come out of a division circuit's state.
///
/// Each field is a range of qubit indices; qubit `start + k` carries bit `k` of the field's value.
/// Qubits that belong to no input field are prepared as zero, which is what makes up the
/// zero-padding prefix of the basis label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterLayout {
    num_qubits: usize,
    dividend: Range<usize>,
    divisor: Range<usize>,
    remainder: Range<usize>,
    quotient: Range<usize>,
}

impl RegisterLayout {
    /// Create a layout.
    ///
    /// Both operands must be between 1 and [`MAX_OPERAND_WIDTH`] qubits wide. The quotient field
    /// must be at least as wide as the dividend and the remainder at least as wide as the divisor,
    /// so that every correct answer fits. Every field lies inside the state, and neither the
    /// inputs nor the outputs overlap each other.
    pub fn new(
        num_qubits: usize,
        dividend: Range<usize>,
        divisor: Range<usize>,
        remainder: Range<usize>,
        quotient: Range<usize>,
    ) -> Result<Self, VerifierError> {
        for (field, range) in [("dividend", &dividend), ("divisor", &divisor)] {
            if range.is_empty() || range.len() > MAX_OPERAND_WIDTH {
                return Err(VerifierError::OperandWidth { field, width: range.len() });
            }
        }
        for (field, range, min) in
            [("remainder", &remainder, divisor.len()), ("quotient", &quotient, dividend.len())]
        {
            if range.len() < min {
                return Err(VerifierError::FieldWidth { field, min, found: range.len() });
            }
        }
        for (field, range) in [
            ("dividend", &dividend),
            ("divisor", &divisor),
            ("remainder", &remainder),
            ("quotient", &quotient),
        ] {
            if range.end > num_qubits {
                return Err(VerifierError::FieldOutOfRange { field, end: range.end, num_qubits });
            }
        }
        if overlaps(&dividend, &divisor) {
            return Err(VerifierError::OverlappingFields("dividend", "divisor"));
        }
        if overlaps(&remainder, &quotient) {
            return Err(VerifierError::OverlappingFields("remainder", "quotient"));
        }
        Ok(Self { num_qubits, dividend, divisor, remainder, quotient })
    }

    /// Derive the layout from a divider's named registers.
    ///
    /// The divider works in place: the remainder is read back from the whole dividend register,
    /// so bits a narrower divisor leaves behind above the remainder count against it.
    pub fn from_circuit(circuit: &Circuit) -> Result<Self, VerifierError> {
        let register = |name: &'static str| {
            circuit.register(name).ok_or(VerifierError::MissingRegister(name))
        };
        let dividend = register(DIVIDEND)?;
        let divisor = register(DIVISOR)?;
        let quotient = register(QUOTIENT)?;
        Self::new(
            circuit.num_qubits(),
            dividend.qubits(),
            divisor.qubits(),
            dividend.qubits(),
            quotient.qubits(),
        )
    }

    /// The total number of qubits of the state.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Input: the dividend.
    #[must_use]
    pub fn dividend(&self) -> &Range<usize> {
        &self.dividend
    }

    /// Input: the divisor.
    #[must_use]
    pub fn divisor(&self) -> &Range<usize> {
        &self.divisor
    }

    /// Output: the remainder.
    #[must_use]
    pub fn remainder(&self) -> &Range<usize> {
        &self.remainder
    }

    /// Output: the quotient.
    #[must_use]
    pub fn quotient(&self) -> &Range<usize> {
        &self.quotient
    }

    /// The dividend width `n`.
    #[must_use]
    pub fn dividend_width(&self) -> usize {
        self.dividend.len()
    }

    /// The divisor width `m`.
    #[must_use]
    pub fn divisor_width(&self) -> usize {
        self.divisor.len()
    }

    /// The number of dividends, `2^n`.
    #[must_use]
    pub fn dividend_domain(&self) -> u64 {
        1 << self.dividend_width()
    }

    /// The number of divisors including zero, `2^m`.
    #[must_use]
    pub fn divisor_domain(&self) -> u64 {
        1 << self.divisor_width()
    }

    /// The basis label preparing `dividend` and `divisor`, most significant qubit first.
    ///
    /// With the fields stacked as dividend, divisor, then work qubits, this reads as the
    /// zero-padding prefix followed by the divisor's and the dividend's binary digits.
    pub fn label(&self, dividend: u64, divisor: u64) -> Result<String, VerifierError> {
        for (value, domain, width) in [
            (dividend, self.dividend_domain(), self.dividend_width()),
            (divisor, self.divisor_domain(), self.divisor_width()),
        ] {
            if value >= domain {
                return Err(VerifierError::OperandOutOfRange { value, width });
            }
        }
        let mut bits = vec!['0'; self.num_qubits];
        for (field, value) in [(&self.dividend, dividend), (&self.divisor, divisor)] {
            for (k, qubit) in field.clone().enumerate() {
                if (value >> k) & 1 == 1 {
                    bits[qubit] = '1';
                }
            }
        }
        Ok(bits.into_iter().rev().collect())
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}
