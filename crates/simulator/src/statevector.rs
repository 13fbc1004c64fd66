use std::f64::consts::FRAC_1_SQRT_2;

use itertools::Itertools;
use num::complex::Complex64;
use qdiv_circuit::Gate;

use crate::{Operator, SimulatorError};

/// The largest number of qubits a [`Statevector`] may hold.
pub const MAX_QUBITS: usize = 24;

/// The pure state of a register of qubits, stored as `2^n` complex amplitudes.
///
/// Amplitude `k` belongs to the computational basis state whose binary expansion is `k`, with
/// qubit 0 as the least significant bit.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl Statevector {
    /// The computational basis state `|index⟩` over `num_qubits` qubits.
    pub fn basis(num_qubits: usize, index: usize) -> Result<Self, SimulatorError> {
        if num_qubits > MAX_QUBITS {
            return Err(SimulatorError::TooManyQubits { num_qubits, max: MAX_QUBITS });
        }
        let dim = 1 << num_qubits;
        if index >= dim {
            return Err(SimulatorError::BasisIndexOutOfRange { index, dim });
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dim];
        amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(Self { num_qubits, amplitudes })
    }

    /// The basis state named by a binary label such as `"0101"`.
    ///
    /// The first character is the most significant qubit, so the label's length is the number of
    /// qubits and its last character is qubit 0.
    pub fn from_label(label: &str) -> Result<Self, SimulatorError> {
        if label.is_empty() {
            return Err(SimulatorError::EmptyLabel);
        }
        let num_qubits = label.chars().count();
        if num_qubits > MAX_QUBITS {
            return Err(SimulatorError::TooManyQubits { num_qubits, max: MAX_QUBITS });
        }
        let mut index = 0usize;
        for (position, ch) in label.chars().enumerate() {
            let bit = match ch {
                '0' => 0,
                '1' => 1,
                _ => return Err(SimulatorError::InvalidLabel { ch, position }),
            };
            index = (index << 1) | bit;
        }
        Self::basis(num_qubits, index)
    }

    /// The number of qubits.
    #[must_use]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The dimension of the state, `2^num_qubits`.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// The amplitudes, indexed by basis state.
    #[must_use]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// The squared norm. Unitary evolution keeps it at 1.
    #[must_use]
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// The probability of every basis state.
    #[must_use]
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// The marginal distribution over `qubits`, summing out every other qubit.
    ///
    /// Outcome `k` of the result sets `qubits[b]` exactly when bit `b` of `k` is set, so the
    /// first listed qubit is the least significant bit of the outcome.
    pub fn marginal_probabilities(&self, qubits: &[usize]) -> Result<Vec<f64>, SimulatorError> {
        if let Some(&qubit) = qubits.iter().find(|&&q| q >= self.num_qubits) {
            return Err(SimulatorError::QubitOutOfRange { qubit, num_qubits: self.num_qubits });
        }
        if let Some(qubit) = qubits.iter().copied().duplicates().next() {
            return Err(SimulatorError::DuplicateQubit(qubit));
        }
        let mut marginal = vec![0.0; 1 << qubits.len()];
        for (index, amplitude) in self.amplitudes.iter().enumerate() {
            let outcome = qubits
                .iter()
                .enumerate()
                .fold(0usize, |acc, (bit, &q)| acc | (((index >> q) & 1) << bit));
            marginal[outcome] += amplitude.norm_sqr();
        }
        Ok(marginal)
    }

    /// Apply a single gate.
    pub fn apply_gate(&mut self, gate: &Gate) -> Result<(), SimulatorError> {
        if let Some(qubit) = gate.qubits().into_iter().find(|&q| q >= self.num_qubits) {
            return Err(SimulatorError::QubitOutOfRange { qubit, num_qubits: self.num_qubits });
        }
        self.apply(gate);
        Ok(())
    }

    /// Evolve the state through an operator, consuming it.
    pub fn evolve<O: Operator + ?Sized>(self, operator: &O) -> Result<Self, SimulatorError> {
        operator.evolve(self)
    }

    /// Apply a gate whose qubits are known to be in range.
    fn apply(&mut self, gate: &Gate) {
        match gate {
            Gate::X(target) => self.controlled_x(0, *target),
            Gate::CX { control, target } => self.controlled_x(1 << control, *target),
            Gate::CCX { controls, target } => {
                self.controlled_x((1 << controls[0]) | (1 << controls[1]), *target);
            }
            Gate::MCX { controls, target } => {
                let mask = controls.iter().fold(0usize, |mask, c| mask | (1 << c));
                self.controlled_x(mask, *target);
            }
            Gate::SWAP(a, b) => self.swap(*a, *b),
            Gate::H(q) => self.hadamard(*q),
            Gate::Z(q) => self.phase(*q, Complex64::new(-1.0, 0.0)),
            Gate::S(q) => self.phase(*q, Complex64::new(0.0, 1.0)),
            Gate::Sdg(q) => self.phase(*q, Complex64::new(0.0, -1.0)),
            Gate::T(q) => self.phase(*q, Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)),
            Gate::Tdg(q) => self.phase(*q, Complex64::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2)),
        }
    }

    /// Flip `target` on every basis state where all bits of `control_mask` are set.
    fn controlled_x(&mut self, control_mask: usize, target: usize) {
        let target_bit = 1 << target;
        for index in 0..self.amplitudes.len() {
            if index & target_bit == 0 && index & control_mask == control_mask {
                self.amplitudes.swap(index, index | target_bit);
            }
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (a_bit, b_bit) = (1 << a, 1 << b);
        for index in 0..self.amplitudes.len() {
            if index & a_bit != 0 && index & b_bit == 0 {
                self.amplitudes.swap(index, index ^ a_bit ^ b_bit);
            }
        }
    }

    fn hadamard(&mut self, q: usize) {
        let bit = 1 << q;
        for index in 0..self.amplitudes.len() {
            if index & bit == 0 {
                let zero = self.amplitudes[index];
                let one = self.amplitudes[index | bit];
                self.amplitudes[index] = (zero + one) * FRAC_1_SQRT_2;
                self.amplitudes[index | bit] = (zero - one) * FRAC_1_SQRT_2;
            }
        }
    }

    fn phase(&mut self, q: usize, factor: Complex64) {
        let bit = 1 << q;
        for (index, amplitude) in self.amplitudes.iter_mut().enumerate() {
            if index & bit != 0 {
                *amplitude *= factor;
            }
        }
    }
}
