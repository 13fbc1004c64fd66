use thiserror::Error;

/// Errors raised while preparing, evolving or measuring a [`Statevector`](crate::Statevector).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulatorError {
    /// The state would not fit under [`MAX_QUBITS`](crate::MAX_QUBITS).
    #[error("{num_qubits} qubits exceed the simulator limit of {max}")]
    TooManyQubits {
        /// The requested width.
        num_qubits: usize,
        /// The simulator limit.
        max: usize,
    },

    /// A basis label names at least one qubit.
    #[error("basis state labels must not be empty")]
    EmptyLabel,

    /// Basis labels are made of `0` and `1` only.
    #[error("invalid character {ch:?} at position {position} of basis state label")]
    InvalidLabel {
        /// The offending character.
        ch: char,
        /// Its position in the label, counted from the left.
        position: usize,
    },

    /// A basis index at or above `2^n`.
    #[error("basis index {index} is out of range for a state of dimension {dim}")]
    BasisIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The state dimension.
        dim: usize,
    },

    /// A gate or marginal names a qubit the state does not have.
    #[error("qubit {qubit} is out of range for a state of {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: usize,
        /// The state width.
        num_qubits: usize,
    },

    /// A marginal lists the same qubit twice.
    #[error("qubit {0} is listed more than once")]
    DuplicateQubit(usize),

    /// The operator and the state disagree on the number of qubits.
    #[error("operator acts on {expected} qubits but the state has {found}")]
    DimensionMismatch {
        /// The operator width.
        expected: usize,
        /// The state width.
        found: usize,
    },
}
