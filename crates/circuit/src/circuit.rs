use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{CircuitError, Gate, GateReport, QuantumRegister};

/// A reversible quantum circuit.
///
/// Contains the named registers that partition the circuit's qubits and the ordered list of gates
/// to apply. Registers are laid out contiguously in the order they are added, so the first
/// register owns qubit 0. Every gate is validated against the qubits that exist when it is pushed,
/// and a deserialized circuit is rebuilt through the same checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CircuitData")]
pub struct Circuit {
    /// The name of the circuit.
    pub name: String,
    registers: Vec<QuantumRegister>,
    gates: Vec<Gate>,
    num_qubits: usize,
}

/// The serialized form of a [`Circuit`], before validation.
#[derive(Deserialize)]
struct CircuitData {
    name: String,
    registers: Vec<QuantumRegister>,
    gates: Vec<Gate>,
}

impl TryFrom<CircuitData> for Circuit {
    type Error = CircuitError;

    fn try_from(data: CircuitData) -> Result<Self, Self::Error> {
        let mut circuit = Circuit::new(data.name);
        for register in &data.registers {
            let added = circuit.add_register(register.name(), register.len())?;
            if added.start() != register.start() {
                return Err(CircuitError::MisplacedRegister {
                    name: added.name().to_string(),
                    start: register.start(),
                    expected: added.start(),
                });
            }
        }
        for gate in data.gates {
            circuit.push(gate)?;
        }
        Ok(circuit)
    }
}

impl Circuit {
    /// Create a new, empty [Circuit].
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Append a register of `size` qubits above the existing ones.
    pub fn add_register(
        &mut self,
        name: &str,
        size: usize,
    ) -> Result<QuantumRegister, CircuitError> {
        if size == 0 {
            return Err(CircuitError::EmptyRegister(name.to_string()));
        }
        if self.register(name).is_some() {
            return Err(CircuitError::DuplicateRegister(name.to_string()));
        }
        let register = QuantumRegister::new(name.to_string(), self.num_qubits, size);
        self.num_qubits += size;
        self.registers.push(register.clone());
        Ok(register)
    }

    /// The registers, in qubit order.
    #[must_use]
    pub fn registers(&self) -> &[QuantumRegister] {
        &self.registers
    }

    /// Look up a register by name.
    #[must_use]
    pub fn register(&self, name: &str) -> Option<&QuantumRegister> {
        self.registers.iter().find(|r| r.name() == name)
    }

    /// The total number of qubits.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The gates, in application order.
    #[must_use]
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// The number of gates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Whether the circuit has no gates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    fn validate(&self, gate: &Gate) -> Result<(), CircuitError> {
        let qubits = gate.qubits();
        if let Some(&index) = qubits.iter().find(|&&q| q >= self.num_qubits) {
            return Err(CircuitError::QubitOutOfRange { index, num_qubits: self.num_qubits });
        }
        if let Some(qubit) = qubits.into_iter().duplicates().next() {
            return Err(CircuitError::DuplicateQubit { kind: gate.kind(), qubit });
        }
        Ok(())
    }

    /// Append a gate.
    pub fn push(&mut self, gate: Gate) -> Result<(), CircuitError> {
        self.validate(&gate)?;
        self.gates.push(gate);
        Ok(())
    }

    /// Append a Pauli X.
    pub fn x(&mut self, qubit: usize) -> Result<(), CircuitError> {
        self.push(Gate::X(qubit))
    }

    /// Append a Hadamard.
    pub fn h(&mut self, qubit: usize) -> Result<(), CircuitError> {
        self.push(Gate::H(qubit))
    }

    /// Append a controlled X.
    pub fn cx(&mut self, control: usize, target: usize) -> Result<(), CircuitError> {
        self.push(Gate::CX { control, target })
    }

    /// Append a Toffoli.
    pub fn ccx(
        &mut self,
        control0: usize,
        control1: usize,
        target: usize,
    ) -> Result<(), CircuitError> {
        self.push(Gate::CCX { controls: [control0, control1], target })
    }

    /// Compose `other` onto this circuit, sending qubit `q` of `other` to `qubits[q]`.
    ///
    /// Nothing is appended if any mapped gate is invalid.
    pub fn append(&mut self, other: &Circuit, qubits: &[usize]) -> Result<(), CircuitError> {
        self.check_qubit_map(other, qubits)?;
        let gates = other
            .gates
            .iter()
            .map(|gate| {
                let gate = gate.map_qubits(|q| qubits[q]);
                self.validate(&gate).map(|()| gate)
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.gates.extend(gates);
        Ok(())
    }

    /// Like [`Circuit::append`], with `control` added as an extra control to every gate.
    ///
    /// Only circuits built from the controlled-X family can be controlled.
    pub fn append_controlled(
        &mut self,
        other: &Circuit,
        qubits: &[usize],
        control: usize,
    ) -> Result<(), CircuitError> {
        self.check_qubit_map(other, qubits)?;
        if qubits.contains(&control) {
            return Err(CircuitError::ControlInOperands(control));
        }
        let gates = other
            .gates
            .iter()
            .map(|gate| {
                let gate = gate
                    .map_qubits(|q| qubits[q])
                    .controlled(control)
                    .ok_or(CircuitError::Uncontrollable(gate.kind()))?;
                self.validate(&gate).map(|()| gate)
            })
            .collect::<Result<Vec<_>, _>>()?;
        self.gates.extend(gates);
        Ok(())
    }

    fn check_qubit_map(&self, other: &Circuit, qubits: &[usize]) -> Result<(), CircuitError> {
        if qubits.len() != other.num_qubits {
            return Err(CircuitError::QubitMapMismatch {
                expected: other.num_qubits,
                found: qubits.len(),
            });
        }
        Ok(())
    }

    /// The adjoint circuit: the gates reversed and each replaced by its inverse.
    #[must_use]
    pub fn inverse(&self) -> Circuit {
        Circuit {
            name: format!("{}_dg", self.name),
            registers: self.registers.clone(),
            gates: self.gates.iter().rev().map(Gate::inverse).collect(),
            num_qubits: self.num_qubits,
        }
    }

    /// Count the gates by kind.
    #[must_use]
    pub fn report(&self) -> GateReport {
        let mut report = GateReport::default();
        for gate in &self.gates {
            report.gate_counts[gate.kind()] += 1;
        }
        report
    }
}
