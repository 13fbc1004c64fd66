use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    ops::{Add, AddAssign},
};

use enum_map::EnumMap;

use crate::GateKind;

/// Gate counts of a circuit.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct GateReport {
    /// The gate counts, by kind.
    pub gate_counts: EnumMap<GateKind, u64>,
}

impl GateReport {
    /// Compute the total number of gates.
    #[must_use]
    pub fn total_gate_count(&self) -> u64 {
        self.gate_counts.values().sum()
    }

    /// The number of gates that are not basis-state permutations.
    #[must_use]
    pub fn non_classical_gate_count(&self) -> u64 {
        self.gate_counts.iter().filter(|(kind, _)| !kind.is_classical()).map(|(_, ct)| ct).sum()
    }
}

impl AddAssign for GateReport {
    fn add_assign(&mut self, rhs: Self) {
        for (kind, ct) in rhs.gate_counts {
            self.gate_counts[kind] += ct;
        }
    }
}

impl Add for GateReport {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

/// Format the non-zero counts as aligned table lines, largest count first.
#[must_use]
pub fn sorted_table_lines(counts: &EnumMap<GateKind, u64>) -> Vec<String> {
    let mut entries = counts.iter().filter(|(_, ct)| **ct != 0).collect::<Vec<_>>();
    entries.sort_by(|(ka, ca), (kb, cb)| cb.cmp(ca).then_with(|| ka.cmp(kb)));
    let width = entries.iter().map(|(_, ct)| ct.to_string().len()).max().unwrap_or(0);
    entries.into_iter().map(|(kind, ct)| format!("{ct:>width$} {kind}")).collect()
}

impl Display for GateReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "gate counts ({} total gates):", self.total_gate_count())?;
        for line in sorted_table_lines(&self.gate_counts) {
            writeln!(f, "  {line}")?;
        }
        Ok(())
    }
}
