//! Gates for reversible quantum circuits.

use std::fmt::Display;

use enum_map::Enum;
use serde::{Deserialize, Serialize};

/// The kind of a [`Gate`], independent of the qubits it acts on.
///
/// Kinds are what the [`GateReport`](crate::GateReport) counts. The controlled-X family (`X`, `CX`,
/// `CCX`, `MCX`) is the part of the gate set that classical reversible arithmetic is built from;
/// the single-qubit phase and Hadamard gates exist so that non-classical operators can be
/// expressed and simulated as well.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord, Enum,
)]
pub enum GateKind {
    /// |x⟩ → |x ⊕ 1⟩
    X,
    /// Hadamard.
    H,
    /// |1⟩ → -|1⟩
    Z,
    /// |1⟩ → i|1⟩
    S,
    /// |1⟩ → -i|1⟩
    Sdg,
    /// |1⟩ → e^{iπ/4}|1⟩
    T,
    /// |1⟩ → e^{-iπ/4}|1⟩
    Tdg,
    /// |c, t⟩ → |c, t ⊕ c⟩
    CX,
    /// |c0, c1, t⟩ → |c0, c1, t ⊕ c0·c1⟩ (Toffoli)
    CCX,
    /// X on the target when every control is set.
    MCX,
    /// |a, b⟩ → |b, a⟩
    SWAP,
}

impl GateKind {
    /// Get the mnemonic for the gate kind.
    #[must_use]
    pub const fn mnemonic(&self) -> &'static str {
        match self {
            GateKind::X => "x",
            GateKind::H => "h",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::CX => "cx",
            GateKind::CCX => "ccx",
            GateKind::MCX => "mcx",
            GateKind::SWAP => "swap",
        }
    }

    /// Whether gates of this kind permute computational basis states.
    #[must_use]
    pub const fn is_classical(&self) -> bool {
        matches!(self, GateKind::X | GateKind::CX | GateKind::CCX | GateKind::MCX | GateKind::SWAP)
    }
}

impl Display for GateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

/// A gate applied to specific qubits of a circuit.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Pauli X on a qubit.
    X(usize),
    /// Hadamard on a qubit.
    H(usize),
    /// Pauli Z on a qubit.
    Z(usize),
    /// Phase gate on a qubit.
    S(usize),
    /// Adjoint phase gate on a qubit.
    Sdg(usize),
    /// π/8 gate on a qubit.
    T(usize),
    /// Adjoint π/8 gate on a qubit.
    Tdg(usize),
    /// Controlled X.
    CX {
        /// The control qubit.
        control: usize,
        /// The target qubit.
        target: usize,
    },
    /// Doubly controlled X.
    CCX {
        /// The control qubits.
        controls: [usize; 2],
        /// The target qubit.
        target: usize,
    },
    /// Multi-controlled X.
    MCX {
        /// The control qubits.
        controls: Vec<usize>,
        /// The target qubit.
        target: usize,
    },
    /// Exchange of two qubits.
    SWAP(usize, usize),
}

impl Gate {
    /// The kind of this gate.
    #[must_use]
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::X(_) => GateKind::X,
            Gate::H(_) => GateKind::H,
            Gate::Z(_) => GateKind::Z,
            Gate::S(_) => GateKind::S,
            Gate::Sdg(_) => GateKind::Sdg,
            Gate::T(_) => GateKind::T,
            Gate::Tdg(_) => GateKind::Tdg,
            Gate::CX { .. } => GateKind::CX,
            Gate::CCX { .. } => GateKind::CCX,
            Gate::MCX { .. } => GateKind::MCX,
            Gate::SWAP(..) => GateKind::SWAP,
        }
    }

    /// Every qubit the gate touches, controls first.
    #[must_use]
    pub fn qubits(&self) -> Vec<usize> {
        match self {
            Gate::X(q) | Gate::H(q) | Gate::Z(q) | Gate::S(q) | Gate::Sdg(q) | Gate::T(q)
            | Gate::Tdg(q) => vec![*q],
            Gate::CX { control, target } => vec![*control, *target],
            Gate::CCX { controls, target } => vec![controls[0], controls[1], *target],
            Gate::MCX { controls, target } => {
                controls.iter().copied().chain(std::iter::once(*target)).collect()
            }
            Gate::SWAP(a, b) => vec![*a, *b],
        }
    }

    /// The adjoint of the gate.
    #[must_use]
    pub fn inverse(&self) -> Gate {
        match self {
            Gate::S(q) => Gate::Sdg(*q),
            Gate::Sdg(q) => Gate::S(*q),
            Gate::T(q) => Gate::Tdg(*q),
            Gate::Tdg(q) => Gate::T(*q),
            other => other.clone(),
        }
    }

    /// The gate with one more control qubit, if the gate belongs to the controlled-X family.
    #[must_use]
    pub fn controlled(&self, control: usize) -> Option<Gate> {
        match self {
            Gate::X(target) => Some(Gate::CX { control, target: *target }),
            Gate::CX { control: c, target } => {
                Some(Gate::CCX { controls: [*c, control], target: *target })
            }
            Gate::CCX { controls, target } => Some(Gate::MCX {
                controls: vec![controls[0], controls[1], control],
                target: *target,
            }),
            Gate::MCX { controls, target } => {
                let mut controls = controls.clone();
                controls.push(control);
                Some(Gate::MCX { controls, target: *target })
            }
            _ => None,
        }
    }

    /// The same gate acting on `map(q)` for every qubit `q`.
    #[must_use]
    pub fn map_qubits(&self, map: impl Fn(usize) -> usize) -> Gate {
        match self {
            Gate::X(q) => Gate::X(map(*q)),
            Gate::H(q) => Gate::H(map(*q)),
            Gate::Z(q) => Gate::Z(map(*q)),
            Gate::S(q) => Gate::S(map(*q)),
            Gate::Sdg(q) => Gate::Sdg(map(*q)),
            Gate::T(q) => Gate::T(map(*q)),
            Gate::Tdg(q) => Gate::Tdg(map(*q)),
            Gate::CX { control, target } => {
                Gate::CX { control: map(*control), target: map(*target) }
            }
            Gate::CCX { controls, target } => {
                Gate::CCX { controls: [map(controls[0]), map(controls[1])], target: map(*target) }
            }
            Gate::MCX { controls, target } => Gate::MCX {
                controls: controls.iter().map(|&c| map(c)).collect(),
                target: map(*target),
            },
            Gate::SWAP(a, b) => Gate::SWAP(map(*a), map(*b)),
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let qubits = self.qubits().iter().map(|q| format!("q{q}")).collect::<Vec<_>>().join(", ");
        write!(f, "{} {}", self.kind(), qubits)
    }
}
