use qdiv_simulator::SimulatorError;
use thiserror::Error;

use crate::MAX_OPERAND_WIDTH;

/// Fatal errors of the verification sweep. Wrong answers from the circuit are not errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifierError {
    /// An operand field is empty or wider than [`MAX_OPERAND_WIDTH`].
    #[error("{field} width {width} is outside 1..={max}", max = MAX_OPERAND_WIDTH)]
    OperandWidth {
        /// The operand field.
        field: &'static str,
        /// Its width in qubits.
        width: usize,
    },
    /// The circuit lacks one of the divider's named registers.
    #[error("circuit has no {0} register")]
    MissingRegister(&'static str),
    /// An output field is too narrow to hold every correct answer.
    #[error("{field} field holds {found} qubits, needs at least {min}")]
    FieldWidth {
        /// The output field.
        field: &'static str,
        /// The smallest width that fits every answer.
        min: usize,
        /// Its actual width.
        found: usize,
    },
    /// A field reaches past the last qubit of the state.
    #[error("{field} field ends at qubit {end} but the state has {num_qubits} qubits")]
    FieldOutOfRange {
        /// The field.
        field: &'static str,
        /// The exclusive end of its range.
        end: usize,
        /// The number of qubits of the state.
        num_qubits: usize,
    },
    /// Two input fields or two output fields share a qubit.
    #[error("{0} and {1} fields overlap")]
    OverlappingFields(&'static str, &'static str),
    /// An operand does not fit its field.
    #[error("operand {value} does not fit in {width} bits")]
    OperandOutOfRange {
        /// The operand.
        value: u64,
        /// The width of its field.
        width: usize,
    },
    /// The operator and the layout disagree on the number of qubits.
    #[error("operator acts on {found} qubits but the layout needs {expected}")]
    DimensionMismatch {
        /// The layout's number of qubits.
        expected: usize,
        /// The operator's number of qubits.
        found: usize,
    },
    /// The simulator rejected a state or a gate.
    #[error("simulation failed: {0}")]
    Simulator(#[from] SimulatorError),
}
