use std::iter::once;

use qdiv_circuit::{Circuit, Gate};
use tracing::debug;

use crate::{ripple_carry_adder, ripple_carry_subtractor, AdderKind, ArithmeticError};

/// Holds the dividend on input and the remainder on output.
pub const DIVIDEND: &str = "dividend";
/// Holds the divisor, unchanged by the circuit.
pub const DIVISOR: &str = "divisor";
/// Starts at zero and holds the quotient on output.
pub const QUOTIENT: &str = "quotient";
/// Carry ancilla shared by every adder; starts and ends at zero.
pub const CARRY: &str = "carry";

/// A restoring divider for an unsigned `dividend_width`-bit dividend and a `divisor_width`-bit
/// divisor, with `divisor_width <= dividend_width`.
///
/// Registers, from qubit 0 upward: `dividend` (n), `divisor` (m), `quotient` (n), `carry` (1).
/// The dividend register followed by the low `m` quotient qubits forms an `n + m`-qubit working
/// register. Quotient bit `i`, from the most significant down, is produced by:
///
/// 1. subtracting the divisor from the `m + 1`-qubit window starting at working qubit `i`, which
///    holds twice the previous partial remainder plus dividend bit `i`,
/// 2. adding the divisor back to the window's low `m` qubits, controlled on the window's top qubit
///    (set exactly when the subtraction went negative),
/// 3. flipping the top qubit, which is then quotient bit `i`.
///
/// Quotient bit `i` is left on working qubit `i + m`, so when the divisor is narrower a final
/// round of swaps moves the quotient into its register. The remainder is left in the low `m`
/// qubits of the dividend register with the rest of it cleared.
///
/// With equal widths a zero divisor never borrows, so it yields an all-ones quotient and leaves
/// the dividend as the remainder. With a narrower divisor the output for a zero divisor is not
/// meaningful.
pub fn restoring_divider(
    dividend_width: usize,
    divisor_width: usize,
) -> Result<Circuit, ArithmeticError> {
    let (n, m) = (dividend_width, divisor_width);
    if n == 0 || m == 0 {
        return Err(ArithmeticError::ZeroWidth);
    }
    if m > n {
        return Err(ArithmeticError::DivisorTooWide { dividend_width, divisor_width });
    }
    let subtractor = ripple_carry_subtractor(m)?;
    let adder = ripple_carry_adder(m, AdderKind::Fixed)?;

    let name = if m == n {
        format!("restoring_divider_{n}")
    } else {
        format!("restoring_divider_{n}_by_{m}")
    };
    let mut circuit = Circuit::new(name);
    let dividend = circuit.add_register(DIVIDEND, n)?;
    let divisor = circuit.add_register(DIVISOR, m)?;
    let quotient = circuit.add_register(QUOTIENT, n)?;
    let carry = circuit.add_register(CARRY, 1)?.qubit(0);

    let work = dividend.qubits().chain(quotient.qubits().take(m)).collect::<Vec<_>>();
    for i in (0..n).rev() {
        let low = &work[i..i + m];
        let sign = work[i + m];

        // Adder operands are laid out as cin, a, b[, cout].
        let operands = || once(carry).chain(divisor.qubits()).chain(low.iter().copied());
        circuit.append(&subtractor, &operands().chain(once(sign)).collect::<Vec<_>>())?;
        circuit.append_controlled(&adder, &operands().collect::<Vec<_>>(), sign)?;
        circuit.x(sign)?;
    }

    // Shift the top quotient bits up within the register, then pull the low ones out of the
    // dividend register. Every destination is empty by the time it is written.
    let shift = n - m;
    for k in (shift..n).rev() {
        circuit.push(Gate::SWAP(quotient.qubit(k - shift), quotient.qubit(k)))?;
    }
    for k in (0..shift).rev() {
        circuit.push(Gate::SWAP(dividend.qubit(k + m), quotient.qubit(k)))?;
    }

    debug!(
        dividend_width,
        divisor_width,
        num_qubits = circuit.num_qubits(),
        gates = circuit.len(),
        "built restoring divider"
    );
    Ok(circuit)
}
