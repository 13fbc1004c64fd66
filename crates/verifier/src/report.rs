use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::PairOutcome;

/// Why a pair failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The most probable quotient or remainder is wrong.
    Mismatch,
    /// Both values are right, but with less probability than the concentration threshold.
    Diffuse,
}

/// A pair that failed verification.
#[derive(Debug, Clone, PartialEq)]
pub struct Failure {
    /// The kind of failure.
    pub kind: FailureKind,
    /// Everything that was observed for the pair.
    pub outcome: PairOutcome,
}

impl Display for Failure {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let PairOutcome { dividend_width, divisor_width, dividend, divisor, .. } = self.outcome;
        let (quotient, remainder) = (self.outcome.quotient, self.outcome.remainder);
        match self.kind {
            FailureKind::Mismatch => write!(
                f,
                "{dividend} // {divisor} = {}, {dividend} % {divisor} = {} but observed \
                 quotient {} and remainder {} (dividend {dividend:0dividend_width$b}, divisor \
                 {divisor:0divisor_width$b})",
                self.outcome.expected_quotient,
                self.outcome.expected_remainder,
                quotient.value,
                remainder.value,
            ),
            FailureKind::Diffuse => write!(
                f,
                "{dividend} // {divisor} = {}, {dividend} % {divisor} = {} observed with \
                 probabilities {:.6} and {:.6} (dividend {dividend:0dividend_width$b}, divisor \
                 {divisor:0divisor_width$b})",
                quotient.value, remainder.value, quotient.probability, remainder.probability,
            ),
        }
    }
}

/// The result of an exhaustive sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct VerificationReport {
    /// The dividend width that was swept.
    pub dividend_width: usize,
    /// The divisor width that was swept.
    pub divisor_width: usize,
    /// The number of pairs evolved and compared.
    pub checked: usize,
    /// Every failing pair, in sweep order.
    pub failures: Vec<Failure>,
}

impl VerificationReport {
    /// Whether every checked pair passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failures of one kind.
    pub fn failures_of(&self, kind: FailureKind) -> impl Iterator<Item = &Failure> {
        self.failures.iter().filter(move |failure| failure.kind == kind)
    }
}

/// One line per failure; nothing at all when the sweep passed.
impl Display for VerificationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for failure in &self.failures {
            writeln!(f, "{failure}")?;
        }
        Ok(())
    }
}
