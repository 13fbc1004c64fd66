use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A named, contiguous run of qubits inside a [`Circuit`](crate::Circuit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantumRegister {
    name: String,
    start: usize,
    size: usize,
}

impl QuantumRegister {
    pub(crate) fn new(name: String, start: usize, size: usize) -> Self {
        Self { name, start, size }
    }

    /// The register name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The circuit-wide index of the register's first qubit.
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The number of qubits in the register.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Registers always hold at least one qubit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The circuit-wide index of the register's `k`-th qubit. Qubit 0 is the least significant.
    #[must_use]
    pub fn qubit(&self, k: usize) -> usize {
        assert!(
            k < self.size,
            "qubit {k} out of range for register {} of width {}",
            self.name,
            self.size
        );
        self.start + k
    }

    /// The circuit-wide indices of the register's qubits.
    #[must_use]
    pub fn qubits(&self) -> Range<usize> {
        self.start..self.start + self.size
    }
}
