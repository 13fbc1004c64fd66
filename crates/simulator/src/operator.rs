use qdiv_circuit::Circuit;
use tracing::trace;

use crate::{SimulatorError, Statevector};

/// A unitary that can evolve a [`Statevector`].
///
/// Callers only rely on the operator's width and on it returning a state of the same width.
pub trait Operator {
    /// The number of qubits the operator acts on.
    fn num_qubits(&self) -> usize;

    /// Apply the operator to `state`.
    fn evolve(&self, state: Statevector) -> Result<Statevector, SimulatorError>;
}

impl Operator for Circuit {
    fn num_qubits(&self) -> usize {
        Circuit::num_qubits(self)
    }

    fn evolve(&self, mut state: Statevector) -> Result<Statevector, SimulatorError> {
        if state.num_qubits() != Circuit::num_qubits(self) {
            return Err(SimulatorError::DimensionMismatch {
                expected: Circuit::num_qubits(self),
                found: state.num_qubits(),
            });
        }
        trace!(circuit = %self.name, gates = self.len(), "evolving state");
        for gate in self.gates() {
            state.apply_gate(gate)?;
        }
        Ok(state)
    }
}

impl<O: Operator + ?Sized> Operator for &O {
    fn num_qubits(&self) -> usize {
        (**self).num_qubits()
    }

    fn evolve(&self, state: Statevector) -> Result<Statevector, SimulatorError> {
        (**self).evolve(state)
    }
}
