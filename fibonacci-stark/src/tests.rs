use arithmetization::{arithmetize, ArithmetizationError, Statement};
use field::Fp;
use transcript::Transcript;

use crate::statement::{compute_trace, FibonacciStatement};

#[test]
fn compute_trace_matches_the_worked_example() {
    let trace = compute_trace(Fp::from(1u64), Fp::from(3141592u64), 1022);

    assert_eq!(trace.len(), 1023);
    assert_eq!(trace[0], Fp::from(1u64));
    assert_eq!(*trace.last().unwrap(), Fp::from(2338775057u64));
}

#[test]
fn arithmetization_succeeds_at_the_maximum_trace_length() {
    let statement = FibonacciStatement::new(Fp::from(3141592u64), domain::TRACE_DOMAIN_SIZE - 1);
    let mut transcript = Transcript::new();

    let result = arithmetize(&statement, &mut transcript);
    assert!(result.is_ok());
}

#[test]
fn arithmetization_rejects_a_trace_length_at_the_domain_size() {
    let statement = FibonacciStatement::new(Fp::from(3141592u64), domain::TRACE_DOMAIN_SIZE);
    let mut transcript = Transcript::new();

    let err = arithmetize(&statement, &mut transcript).unwrap_err();
    assert_eq!(
        err,
        ArithmetizationError::TraceTooLong(domain::TRACE_DOMAIN_SIZE, domain::TRACE_DOMAIN_SIZE)
    );
}

#[test]
fn full_proof_for_the_canonical_witness_has_eleven_layers_of_equal_final_elements() {
    let statement = FibonacciStatement::new(Fp::from(3141592u64), 1022);
    let mut transcript = Transcript::new();

    let arith = arithmetize(&statement, &mut transcript).expect("arithmetization succeeds");
    let layers = fri::prove(arith.composition_poly, arith.fri_domain, &mut transcript)
        .expect("FRI prover succeeds");

    assert_eq!(layers.len(), 11);
    let last = layers.last().unwrap();
    assert_eq!(last.codeword.len(), 8);
    let c = last.codeword[0];
    assert!(last.codeword.iter().all(|&v| v == c));
}

#[test]
fn proving_twice_with_the_same_witness_is_deterministic() {
    let run = || {
        let statement = FibonacciStatement::new(Fp::from(3141592u64), 1022);
        let mut transcript = Transcript::new();
        let arith = arithmetize(&statement, &mut transcript).unwrap();
        fri::prove(arith.composition_poly, arith.fri_domain, &mut transcript).unwrap();
        transcript.into_proof_log()
    };

    assert_eq!(run(), run());
}
