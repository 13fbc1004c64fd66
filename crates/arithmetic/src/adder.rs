use qdiv_circuit::Circuit;

use crate::ArithmeticError;

/// Whether a ripple-carry adder exposes its carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdderKind {
    /// Registers `cin`, `a`, `b`, `cout`. The carry out is XORed into `cout`.
    Full,
    /// Registers `cin`, `a`, `b`. The sum is taken modulo `2^n`.
    Fixed,
}

/// Majority: leaves `a` holding the carry into the next position.
fn maj(circuit: &mut Circuit, c: usize, b: usize, a: usize) -> Result<(), ArithmeticError> {
    circuit.cx(a, b)?;
    circuit.cx(a, c)?;
    circuit.ccx(c, b, a)?;
    Ok(())
}

/// UnMajority and Add: undoes [`maj`] and writes the sum bit into `b`.
fn uma(circuit: &mut Circuit, c: usize, b: usize, a: usize) -> Result<(), ArithmeticError> {
    circuit.ccx(c, b, a)?;
    circuit.cx(a, c)?;
    circuit.cx(c, b)?;
    Ok(())
}

/// A Cuccaro-style ripple-carry adder computing `|a⟩|b⟩ → |a⟩|a + b⟩` on `n`-qubit
/// operands.
///
/// The carry ripples up through the `a` register, seeded by the `cin` ancilla, and is undone on
/// the way back down, so `a` and `cin` are returned unchanged.
pub fn ripple_carry_adder(n: usize, kind: AdderKind) -> Result<Circuit, ArithmeticError> {
    if n == 0 {
        return Err(ArithmeticError::ZeroWidth);
    }
    let mut circuit = Circuit::new(match kind {
        AdderKind::Full => format!("rc_adder_full_{n}"),
        AdderKind::Fixed => format!("rc_adder_fixed_{n}"),
    });
    let cin = circuit.add_register("cin", 1)?.qubit(0);
    let a = circuit.add_register("a", n)?;
    let b = circuit.add_register("b", n)?;
    let cout = match kind {
        AdderKind::Full => Some(circuit.add_register("cout", 1)?.qubit(0)),
        AdderKind::Fixed => None,
    };

    maj(&mut circuit, cin, b.qubit(0), a.qubit(0))?;
    for i in 1..n {
        maj(&mut circuit, a.qubit(i - 1), b.qubit(i), a.qubit(i))?;
    }
    if let Some(cout) = cout {
        circuit.cx(a.qubit(n - 1), cout)?;
    }
    for i in (1..n).rev() {
        uma(&mut circuit, a.qubit(i - 1), b.qubit(i), a.qubit(i))?;
    }
    uma(&mut circuit, cin, b.qubit(0), a.qubit(0))?;

    Ok(circuit)
}

/// Subtract `a` from the `n + 1`-bit value held in `b` (low bits) and `cout` (top bit).
///
/// Uses `b - a = ¬(¬b + a)`: complement the minuend, add with a full adder, complement again.
/// The result is modulo `2^(n+1)`, so when `a` exceeds the minuend the top qubit is left set.
pub fn ripple_carry_subtractor(n: usize) -> Result<Circuit, ArithmeticError> {
    let adder = ripple_carry_adder(n, AdderKind::Full)?;
    let mut circuit = Circuit::new(format!("rc_subtractor_{n}"));
    for register in adder.registers() {
        circuit.add_register(register.name(), register.len())?;
    }
    let minuend = circuit
        .register("b")
        .into_iter()
        .chain(circuit.register("cout"))
        .flat_map(|r| r.qubits())
        .collect::<Vec<_>>();

    for &q in &minuend {
        circuit.x(q)?;
    }
    circuit.append(&adder, &(0..adder.num_qubits()).collect::<Vec<_>>())?;
    for &q in &minuend {
        circuit.x(q)?;
    }
    Ok(circuit)
}
