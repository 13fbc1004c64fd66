use qdiv_circuit::Circuit;
use qdiv_simulator::Statevector;

/// The basis index holding `value` in each named register and zero elsewhere.
pub fn encode(circuit: &Circuit, values: &[(&str, usize)]) -> usize {
    values.iter().fold(0, |index, &(name, value)| {
        let register = circuit.register(name).unwrap();
        assert!(value < 1 << register.len(), "{value} does not fit in {name}");
        index | (value << register.start())
    })
}

/// The value held by a named register in basis state `index`.
pub fn read(circuit: &Circuit, index: usize, name: &str) -> usize {
    let register = circuit.register(name).unwrap();
    (index >> register.start()) & ((1 << register.len()) - 1)
}

/// Evolve a basis state and return the basis state it maps to.
pub fn run(circuit: &Circuit, index: usize) -> usize {
    let state = Statevector::basis(circuit.num_qubits(), index).unwrap().evolve(circuit).unwrap();
    let probabilities = state.probabilities();
    let output = probabilities.iter().position(|&p| p > 0.5).unwrap();
    assert!((probabilities[output] - 1.0).abs() < 1e-12);
    output
}
