use qdiv_arithmetic::{restoring_divider, DIVIDEND, DIVISOR};
use qdiv_circuit::{Circuit, GateKind};
use qdiv_verifier::{
    pairs,
    utils::{env::DEFAULT_CONCENTRATION_THRESHOLD, setup_logger},
    verify_pair, ExhaustiveVerifier, FailureKind, RegisterLayout, VerifierError, VerifierOpts,
};

fn divider(dividend_width: usize, divisor_width: usize) -> (Circuit, RegisterLayout) {
    let circuit = restoring_divider(dividend_width, divisor_width).unwrap();
    let layout = RegisterLayout::from_circuit(&circuit).unwrap();
    (circuit, layout)
}

fn four_bit_divider() -> (Circuit, RegisterLayout) {
    divider(4, 4)
}

fn verifier(parallel: bool) -> ExhaustiveVerifier {
    ExhaustiveVerifier::new(VerifierOpts {
        parallel,
        concentration_threshold: DEFAULT_CONCENTRATION_THRESHOLD,
    })
}

#[test]
fn four_bit_divider_passes_the_full_sweep() {
    setup_logger();
    let (circuit, layout) = four_bit_divider();
    let report = verifier(true).run(&circuit, &layout).unwrap();

    assert!(report.is_success(), "{report}");
    assert_eq!((report.dividend_width, report.divisor_width), (4, 4));
    assert_eq!(report.checked, 240);
    assert_eq!(report.checked, pairs(&layout).count());
    assert!(report.to_string().is_empty());
}

#[test]
fn four_by_two_bit_divider_passes_the_full_sweep() {
    setup_logger();
    let (circuit, layout) = divider(4, 2);
    let report = verifier(false).run(&circuit, &layout).unwrap();

    assert!(report.is_success(), "{report}");
    assert_eq!((report.dividend_width, report.divisor_width), (4, 2));
    assert_eq!(report.checked, 16 * 3);
    for (dividend, divisor) in pairs(&layout) {
        let outcome = verify_pair(&circuit, &layout, dividend, divisor).unwrap().unwrap();
        assert_eq!(outcome.quotient.value, dividend / divisor, "{dividend} // {divisor}");
        assert_eq!(outcome.remainder.value, dividend % divisor, "{dividend} % {divisor}");
    }
}

#[test]
fn every_pair_concentrates_on_the_right_answer() {
    let (circuit, layout) = four_bit_divider();
    for (dividend, divisor) in pairs(&layout) {
        let outcome = verify_pair(&circuit, &layout, dividend, divisor).unwrap().unwrap();
        assert_eq!(outcome.quotient.value, dividend / divisor, "{dividend} // {divisor}");
        assert_eq!(outcome.remainder.value, dividend % divisor, "{dividend} % {divisor}");
        assert!(outcome.concentration() > 0.999);
    }
}

#[test]
fn swapped_operands_are_caught() {
    setup_logger();
    let (divider, layout) = four_bit_divider();
    let mut circuit = Circuit::new("swapped");
    let dividend = circuit.add_register(DIVIDEND, 4).unwrap();
    let divisor = circuit.add_register(DIVISOR, 4).unwrap();
    circuit.add_register("work", divider.num_qubits() - 8).unwrap();
    for k in 0..4 {
        circuit.push(qdiv_circuit::Gate::SWAP(dividend.qubit(k), divisor.qubit(k))).unwrap();
    }
    circuit.append(&divider, &(0..divider.num_qubits()).collect::<Vec<_>>()).unwrap();
    assert_eq!(circuit.report().gate_counts[GateKind::SWAP], 4);

    let report = verifier(true).run(&circuit, &layout).unwrap();

    // Only pairs whose quotient and remainder survive the swap pass.
    let expected = pairs(&layout)
        .filter(|&(i, j)| {
            let (q, r) = if i == 0 { (15, j) } else { (j / i, j % i) };
            (q, r) != (i / j, i % j)
        })
        .count();
    assert_eq!(report.checked, 240);
    assert_eq!(report.failures.len(), expected);
    assert_eq!(report.failures_of(FailureKind::Diffuse).count(), 0);
    assert_eq!(report.to_string().lines().count(), expected);
}

#[test]
fn wrong_width_aborts_the_sweep() {
    let (_, layout) = four_bit_divider();
    let narrow = restoring_divider(2, 2).unwrap();
    let err = verifier(false).run(&narrow, &layout).unwrap_err();
    assert_eq!(err, VerifierError::DimensionMismatch { expected: 13, found: 7 });
    assert_eq!(err.to_string(), "operator acts on 7 qubits but the layout needs 13");
}
