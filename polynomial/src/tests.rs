use field::Fp;
use proptest::prelude::*;

use crate::Polynomial;

fn arb_fp() -> impl Strategy<Value = Fp> {
    (0..field::MODULUS).prop_map(Fp::new)
}

fn arb_poly(max_degree: usize) -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(arb_fp(), 1..=max_degree + 1).prop_map(Polynomial::new)
}

#[test]
fn evaluate_constant() {
    let p = Polynomial::new(vec![Fp::from(7u64)]);
    assert_eq!(p.evaluate(Fp::from(100u64)), Fp::from(7u64));
}

#[test]
fn trailing_zeros_are_canonicalized() {
    let p = Polynomial::new(vec![Fp::from(1u64), Fp::from(2u64), Fp::zero(), Fp::zero()]);
    assert_eq!(p.degree(), Some(1));
}

#[test]
fn zero_polynomial_has_no_degree() {
    assert_eq!(Polynomial::zero().degree(), None);
    assert_eq!(
        Polynomial::new(vec![Fp::zero(), Fp::zero()]).degree(),
        None
    );
}

#[test]
fn divide_by_linear_matches_synthetic_division_identity() {
    // P(X) = X^2 - 1, divided by (X - 1): quotient should be X + 1.
    let p = Polynomial::new(vec![-Fp::one(), Fp::zero(), Fp::one()]);
    let q = p.divide_by_linear(Fp::one()).unwrap();
    assert_eq!(q.coeffs(), &[Fp::one(), Fp::one()]);
}

#[test]
fn divide_by_linear_rejects_nonzero_remainder() {
    let p = Polynomial::new(vec![Fp::one(), Fp::one()]); // X + 1
    assert!(p.divide_by_linear(Fp::from(5u64)).is_err());
}

#[test]
fn interpolate_empty_is_an_error() {
    assert!(Polynomial::interpolate(&[], &[]).is_err());
}

proptest! {
    #[test]
    fn interpolation_round_trips(
        xs in proptest::collection::hash_set(0u64..1000, 1..8)
            .prop_map(|s| s.into_iter().map(Fp::from).collect::<Vec<_>>()),
        seed in arb_fp(),
    ) {
        // Derive distinct y-values deterministically from the seed.
        let ys: Vec<Fp> = (0..xs.len() as u64).map(|i| seed * Fp::from(i + 1) + Fp::from(i)).collect();
        let poly = Polynomial::interpolate(&xs, &ys).unwrap();
        for (x, y) in xs.iter().zip(ys.iter()) {
            prop_assert_eq!(poly.evaluate(*x), *y);
        }
    }

    #[test]
    fn sub_then_divide_by_linear_at_root_gives_zero_remainder(p in arb_poly(12), a in arb_fp()) {
        let pa = p.evaluate(a);
        let shifted = p.sub(&Polynomial::new(vec![pa]));
        let q = shifted.divide_by_linear(a).unwrap();
        // reconstruct: q*(X-a) + P(a) == P
        let reconstructed = q.mul(&Polynomial::new(vec![-a, Fp::one()])).add(&Polynomial::new(vec![pa]));
        prop_assert_eq!(reconstructed, p);
    }

    #[test]
    fn compose_scale_matches_direct_evaluation(p in arb_poly(8), alpha in arb_fp(), x in arb_fp()) {
        let composed = p.compose_scale(alpha);
        prop_assert_eq!(composed.evaluate(x), p.evaluate(alpha * x));
    }
}

#[test]
fn vanishing_at_roots_is_actually_zero_there() {
    let roots = [Fp::from(1u64), Fp::from(2u64), Fp::from(3u64)];
    let z = Polynomial::vanishing_at(&roots);
    for r in roots {
        assert_eq!(z.evaluate(r), Fp::zero());
    }
}

#[test]
fn x_pow_n_minus_one_divided_by_complement_gives_prefix_vanishing() {
    // Domain of size 8, prefix {0..=4} (5 points), complement {5,6,7}.
    let g = Fp::generator().pow((Fp::MODULUS - 1) / 8);
    let domain: Vec<Fp> = (0..8u64).map(|i| g.pow(i)).collect();
    let complement = Polynomial::vanishing_at(&domain[5..]);
    let full = Polynomial::x_pow_n_minus_one(8);
    let prefix_via_identity = full.divide_exact(&complement).unwrap();
    let prefix_direct = Polynomial::vanishing_at(&domain[..5]);
    assert_eq!(prefix_via_identity, prefix_direct);
}
