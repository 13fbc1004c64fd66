use itertools::iproduct;
use qdiv_simulator::Operator;
use rayon::prelude::*;
use tracing::{debug, error, info, instrument};

use crate::{
    decode, evolve, prepare, Decoded, Failure, FailureKind, RegisterLayout, VerificationReport,
    VerifierError, VerifierOpts,
};

/// Everything observed when checking one (dividend, divisor) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairOutcome {
    /// The dividend width of the layout the pair was checked against.
    pub dividend_width: usize,
    /// The divisor width of the layout the pair was checked against.
    pub divisor_width: usize,
    /// The dividend.
    pub dividend: u64,
    /// The divisor, never zero.
    pub divisor: u64,
    /// `dividend / divisor`.
    pub expected_quotient: u64,
    /// `dividend % divisor`.
    pub expected_remainder: u64,
    /// The decoded quotient field.
    pub quotient: Decoded,
    /// The decoded remainder field.
    pub remainder: Decoded,
}

impl PairOutcome {
    /// Whether the decoded values equal the reference arithmetic.
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.quotient.value == self.expected_quotient
            && self.remainder.value == self.expected_remainder
    }

    /// The smaller of the two argmax probabilities.
    #[must_use]
    pub fn concentration(&self) -> f64 {
        self.quotient.probability.min(self.remainder.probability)
    }

    /// Classify the outcome against a concentration threshold.
    #[must_use]
    pub fn failure(&self, concentration_threshold: f64) -> Option<Failure> {
        let kind = if !self.is_match() {
            FailureKind::Mismatch
        } else if self.concentration() <= concentration_threshold {
            FailureKind::Diffuse
        } else {
            return None;
        };
        Some(Failure { kind, outcome: *self })
    }
}

/// Unsigned floor division and remainder; `None` for a zero divisor.
#[must_use]
pub fn reference_division(dividend: u64, divisor: u64) -> Option<(u64, u64)> {
    Some((dividend.checked_div(divisor)?, dividend.checked_rem(divisor)?))
}

/// Every pair of the sweep over a layout: all dividends, all non-zero divisors.
///
/// Pairs come dividend-major, so `(0, 1), (0, 2), ..., (1, 1), ...`. The layout bounds both
/// operand widths by [`MAX_OPERAND_WIDTH`](crate::MAX_OPERAND_WIDTH).
pub fn pairs(layout: &RegisterLayout) -> impl Iterator<Item = (u64, u64)> + Clone {
    iproduct!(0..layout.dividend_domain(), 1..layout.divisor_domain())
}

/// Prepare, evolve and decode one pair.
///
/// Returns `Ok(None)` without touching the operator when the divisor is zero.
pub fn verify_pair<O: Operator + ?Sized>(
    operator: &O,
    layout: &RegisterLayout,
    dividend: u64,
    divisor: u64,
) -> Result<Option<PairOutcome>, VerifierError> {
    let Some((expected_quotient, expected_remainder)) = reference_division(dividend, divisor)
    else {
        return Ok(None);
    };
    let state = evolve(prepare(layout, dividend, divisor)?, operator)?;
    let remainder = decode(&state, layout.remainder())?;
    let quotient = decode(&state, layout.quotient())?;
    Ok(Some(PairOutcome {
        dividend_width: layout.dividend_width(),
        divisor_width: layout.divisor_width(),
        dividend,
        divisor,
        expected_quotient,
        expected_remainder,
        quotient,
        remainder,
    }))
}

/// Runs a division operator over its whole input domain and collects every failing pair.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveVerifier {
    /// The options of the sweep.
    pub opts: VerifierOpts,
}

impl ExhaustiveVerifier {
    /// Create a new [`ExhaustiveVerifier`].
    #[must_use]
    pub fn new(opts: VerifierOpts) -> Self {
        Self { opts }
    }

    /// Check every pair of [`pairs`] for the layout's operand widths.
    ///
    /// Failing pairs are logged and collected without stopping the sweep. Errors (an operator of
    /// the wrong width, a malformed layout) abort it.
    #[instrument(
        name = "exhaustive sweep",
        level = "info",
        skip_all,
        fields(dividend_width = layout.dividend_width(), divisor_width = layout.divisor_width())
    )]
    pub fn run<O: Operator + Sync + ?Sized>(
        &self,
        operator: &O,
        layout: &RegisterLayout,
    ) -> Result<VerificationReport, VerifierError> {
        if operator.num_qubits() != layout.num_qubits() {
            return Err(VerifierError::DimensionMismatch {
                expected: layout.num_qubits(),
                found: operator.num_qubits(),
            });
        }

        let check =
            |(dividend, divisor): (u64, u64)| verify_pair(operator, layout, dividend, divisor);
        let domain = pairs(layout);
        let outcomes = if self.opts.parallel {
            debug!(threads = rayon::current_num_threads(), "checking pairs in parallel");
            domain.collect::<Vec<_>>().into_par_iter().map(check).collect::<Result<Vec<_>, _>>()?
        } else {
            domain.map(check).collect::<Result<Vec<_>, _>>()?
        };

        let mut checked = 0;
        let mut failures = Vec::new();
        for outcome in outcomes.into_iter().flatten() {
            checked += 1;
            if let Some(failure) = outcome.failure(self.opts.concentration_threshold) {
                error!("{failure}");
                failures.push(failure);
            }
        }
        info!(checked, failures = failures.len(), "sweep finished");

        Ok(VerificationReport {
            dividend_width: layout.dividend_width(),
            divisor_width: layout.divisor_width(),
            checked,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Mutex};

    use qdiv_arithmetic::{restoring_divider, QUOTIENT};
    use qdiv_circuit::{Circuit, Gate};
    use qdiv_simulator::{SimulatorError, Statevector};
    use rstest::rstest;

    use super::*;
    use crate::utils::env::DEFAULT_CONCENTRATION_THRESHOLD;

    fn divider(n: usize) -> (Circuit, RegisterLayout) {
        divider_by(n, n)
    }

    fn divider_by(n: usize, m: usize) -> (Circuit, RegisterLayout) {
        let circuit = restoring_divider(n, m).unwrap();
        let layout = RegisterLayout::from_circuit(&circuit).unwrap();
        (circuit, layout)
    }

    fn verifier(parallel: bool) -> ExhaustiveVerifier {
        ExhaustiveVerifier::new(VerifierOpts {
            parallel,
            concentration_threshold: DEFAULT_CONCENTRATION_THRESHOLD,
        })
    }

    fn sequential() -> ExhaustiveVerifier {
        verifier(false)
    }

    /// Records the operands of every state it is asked to evolve.
    struct Recording<'a> {
        inner: &'a Circuit,
        layout: &'a RegisterLayout,
        seen: Mutex<Vec<(u64, u64)>>,
    }

    impl Operator for Recording<'_> {
        fn num_qubits(&self) -> usize {
            self.inner.num_qubits()
        }

        fn evolve(&self, state: Statevector) -> Result<Statevector, SimulatorError> {
            let dividend = decode(&state, self.layout.dividend()).unwrap().value;
            let divisor = decode(&state, self.layout.divisor()).unwrap().value;
            self.seen.lock().unwrap().push((dividend, divisor));
            self.inner.evolve(state)
        }
    }

    #[rstest]
    #[case(0, 1, 0, 0)]
    #[case(9, 2, 4, 1)]
    #[case(15, 15, 1, 0)]
    #[case(7, 8, 0, 7)]
    fn divides_four_bit_operands(
        #[case] dividend: u64,
        #[case] divisor: u64,
        #[case] quotient: u64,
        #[case] remainder: u64,
    ) {
        let (circuit, layout) = divider(4);
        let outcome = verify_pair(&circuit, &layout, dividend, divisor).unwrap().unwrap();
        assert_eq!(outcome.quotient.value, quotient);
        assert_eq!(outcome.remainder.value, remainder);
        assert!(outcome.is_match());
        assert!(outcome.concentration() > 0.999);
        assert_eq!(outcome.failure(0.999), None);
    }

    #[test]
    fn zero_divisor_is_never_submitted() {
        let (circuit, layout) = divider(4);
        let recording = Recording { inner: &circuit, layout: &layout, seen: Mutex::default() };

        assert_eq!(verify_pair(&recording, &layout, 5, 0).unwrap(), None);
        assert!(recording.seen.lock().unwrap().is_empty());

        let report = sequential().run(&recording, &layout).unwrap();
        assert!(report.is_success(), "{report}");
        let seen = recording.seen.into_inner().unwrap();
        assert_eq!(seen.len(), 240);
        assert_eq!(report.checked, 240);
        assert!(seen.iter().all(|&(_, divisor)| divisor != 0));
        assert!(!seen.contains(&(5, 0)));
        assert_eq!(seen, pairs(&layout).collect::<Vec<_>>());
    }

    #[rstest]
    #[case(1, 1)]
    #[case(2, 2)]
    #[case(4, 4)]
    #[case(4, 2)]
    #[case(3, 1)]
    fn pairs_cover_the_domain_once(#[case] n: usize, #[case] m: usize) {
        let (_, layout) = divider_by(n, m);
        let (dividends, divisors) = (1u64 << n, 1u64 << m);
        let all = pairs(&layout).collect::<Vec<_>>();
        assert_eq!(all.len() as u64, dividends * (divisors - 1));
        assert_eq!(all.iter().collect::<HashSet<_>>().len(), all.len());
        assert!(all.iter().all(|&(i, j)| i < dividends && (1..divisors).contains(&j)));
    }

    #[test]
    fn pairs_stop_at_the_widest_layout() {
        let width = crate::MAX_OPERAND_WIDTH;
        let (dividend, divisor, quotient) = (0..width, width..2 * width, 2 * width..3 * width);
        let layout =
            RegisterLayout::new(3 * width, dividend.clone(), divisor, dividend, quotient).unwrap();
        let size = 1usize << width;
        let all = pairs(&layout);
        assert_eq!(all.size_hint(), (size * (size - 1), Some(size * (size - 1))));
        assert_eq!(all.take(2).collect::<Vec<_>>(), [(0, 1), (0, 2)]);
    }

    #[test]
    fn reference_division_skips_zero() {
        assert_eq!(reference_division(9, 2), Some((4, 1)));
        assert_eq!(reference_division(7, 8), Some((0, 7)));
        assert_eq!(reference_division(5, 0), None);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn accepts_the_restoring_divider(#[case] parallel: bool) {
        let (circuit, layout) = divider(3);
        let report = verifier(parallel).run(&circuit, &layout).unwrap();
        assert!(report.is_success(), "{report}");
        assert_eq!(report.checked, 56);
        assert_eq!((report.dividend_width, report.divisor_width), (3, 3));
        assert_eq!(report.to_string(), "");
    }

    #[rstest]
    #[case(3, 2, 24)]
    #[case(4, 1, 16)]
    #[case(4, 3, 112)]
    fn accepts_a_narrower_divisor(#[case] n: usize, #[case] m: usize, #[case] checked: usize) {
        let (circuit, layout) = divider_by(n, m);
        let report = sequential().run(&circuit, &layout).unwrap();
        assert!(report.is_success(), "{report}");
        assert_eq!(report.checked, checked);
        assert_eq!((report.dividend_width, report.divisor_width), (n, m));
    }

    #[test]
    fn failures_print_each_operand_at_its_own_width() {
        let (mut circuit, layout) = divider_by(3, 2);
        let quotient_lsb = circuit.register(QUOTIENT).unwrap().qubit(0);
        circuit.x(quotient_lsb).unwrap();

        let report = sequential().run(&circuit, &layout).unwrap();
        assert_eq!(report.failures.len(), 24);
        assert_eq!(
            report.failures[0].to_string(),
            "0 // 1 = 0, 0 % 1 = 0 but observed quotient 1 and remainder 0 \
             (dividend 000, divisor 01)"
        );
    }

    #[test]
    fn keeps_going_after_mismatches() {
        let (mut circuit, layout) = divider(3);
        let quotient_lsb = circuit.register(QUOTIENT).unwrap().qubit(0);
        circuit.x(quotient_lsb).unwrap();

        let report = sequential().run(&circuit, &layout).unwrap();
        assert_eq!(report.checked, 56);
        assert_eq!(report.failures.len(), 56);
        assert_eq!(report.failures_of(FailureKind::Mismatch).count(), 56);
        assert_eq!(report.to_string().lines().count(), 56);

        let first = &report.failures[0];
        assert_eq!((first.outcome.dividend, first.outcome.divisor), (0, 1));
        assert_eq!(first.outcome.quotient.value, 1);
        assert_eq!(
            first.to_string(),
            "0 // 1 = 0, 0 % 1 = 0 but observed quotient 1 and remainder 0 \
             (dividend 000, divisor 001)"
        );
    }

    #[test]
    fn flags_leaked_amplitude() {
        let (mut circuit, layout) = divider(3);
        let quotient_lsb = circuit.register(QUOTIENT).unwrap().qubit(0);
        circuit.push(Gate::H(quotient_lsb)).unwrap();

        let report = sequential().run(&circuit, &layout).unwrap();
        assert_eq!(report.failures.len(), 56);
        // The tie between q and q ^ 1 resolves to the even one.
        let diffuse = pairs(&layout).filter(|&(i, j)| (i / j) % 2 == 0).count();
        assert_eq!(report.failures_of(FailureKind::Diffuse).count(), diffuse);
        assert_eq!(report.failures_of(FailureKind::Mismatch).count(), 56 - diffuse);
        for failure in report.failures_of(FailureKind::Diffuse) {
            assert!((failure.outcome.quotient.probability - 0.5).abs() < 1e-9);
            assert!((failure.outcome.remainder.probability - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn is_deterministic() {
        let (circuit, layout) = divider(3);
        let mut leaky = circuit.clone();
        leaky.push(Gate::H(layout.remainder().start)).unwrap();
        let verifier = sequential();
        assert_eq!(verifier.run(&leaky, &layout).unwrap(), verifier.run(&leaky, &layout).unwrap());
        let parallel = ExhaustiveVerifier::new(VerifierOpts { parallel: true, ..verifier.opts });
        assert_eq!(verifier.run(&leaky, &layout).unwrap(), parallel.run(&leaky, &layout).unwrap());
    }

    #[test]
    fn explicit_opts_ignore_the_environment() {
        std::env::set_var("QDIV_CONCENTRATION_THRESHOLD", "0.4");
        std::env::set_var("QDIV_PARALLEL", "false");
        let from_env = VerifierOpts::default();

        let (mut circuit, layout) = divider(3);
        let quotient_lsb = circuit.register(QUOTIENT).unwrap().qubit(0);
        circuit.push(Gate::H(quotient_lsb)).unwrap();
        let explicit = verifier(true).run(&circuit, &layout).unwrap();
        let lenient = ExhaustiveVerifier::new(from_env).run(&circuit, &layout).unwrap();
        std::env::remove_var("QDIV_CONCENTRATION_THRESHOLD");
        std::env::remove_var("QDIV_PARALLEL");

        assert_eq!(from_env, VerifierOpts { parallel: false, concentration_threshold: 0.4 });
        assert_eq!(explicit.failures.len(), 56);
        assert_eq!(lenient.failures_of(FailureKind::Diffuse).count(), 0);
        let odd = pairs(&layout).filter(|&(i, j)| (i / j) % 2 == 1).count();
        assert_eq!(lenient.failures_of(FailureKind::Mismatch).count(), odd);
        assert_eq!(lenient.failures.len(), odd);
    }

    #[test]
    fn rejects_an_operator_of_the_wrong_width() {
        let (circuit, _) = divider(3);
        let (_, layout) = divider(4);
        assert_eq!(
            sequential().run(&circuit, &layout),
            Err(VerifierError::DimensionMismatch { expected: 13, found: 10 })
        );
    }
}
