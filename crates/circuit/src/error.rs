use thiserror::Error;

use crate::GateKind;

/// Errors raised while building a [`Circuit`](crate::Circuit).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    /// A gate names a qubit the circuit does not have.
    #[error("qubit {index} is out of range for a circuit of {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        index: usize,
        /// The circuit width.
        num_qubits: usize,
    },

    /// A gate names the same qubit twice.
    #[error("{kind} gate uses qubit {qubit} more than once")]
    DuplicateQubit {
        /// The kind of the offending gate.
        kind: GateKind,
        /// The repeated qubit.
        qubit: usize,
    },

    /// Only the controlled-X family can take an extra control.
    #[error("{0} gates cannot take an extra control")]
    Uncontrollable(GateKind),

    /// The extra control is also mapped to one of the sub-circuit's qubits.
    #[error("control qubit {0} is also an operand of the controlled circuit")]
    ControlInOperands(usize),

    /// A qubit map does not cover the sub-circuit exactly.
    #[error("qubit map has {found} entries but the circuit has {expected} qubits")]
    QubitMapMismatch {
        /// The sub-circuit width.
        expected: usize,
        /// The length of the map.
        found: usize,
    },

    /// Register names are unique within a circuit.
    #[error("register {0} is already defined")]
    DuplicateRegister(String),

    /// Registers hold at least one qubit.
    #[error("register {0} must hold at least one qubit")]
    EmptyRegister(String),

    /// A deserialized register does not sit directly above the previous one.
    #[error("register {name} starts at qubit {start}, expected {expected}")]
    MisplacedRegister {
        /// The register name.
        name: String,
        /// The first qubit the input claims.
        start: usize,
        /// The first qubit it gets when registers are stacked in order.
        expected: usize,
    },
}
