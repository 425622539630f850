//! The square-Fibonacci recurrence statement: "I know x1 such that
//! iterating x_{i+2} = x_i^2 + x_{i+1}^2 for `trace_length` steps yields
//! public value y." The one concrete `Statement` this repo ships; further
//! recurrences would plug in the same way (§9 design notes).

use arithmetization::{ArithmetizationError, Statement};
use field::Fp;
use polynomial::Polynomial;
use transcript::Transcript;

/// The trace always starts at `x0 = 1`, the boundary constraint `p0`
/// fixes it, so it isn't a tunable.
pub const TRACE_START: u64 = 1;

/// Computes `[x0, x1, x0^2+x1^2, ...]` for `trace_length+1` elements,
/// i.e. the square-Fibonacci trace generated from the secret witness `x1`.
pub fn compute_trace(x0: Fp, x1: Fp, trace_length: usize) -> Vec<Fp> {
    let mut trace = Vec::with_capacity(trace_length + 1);
    trace.push(x0);
    trace.push(x1);
    for i in 0..trace_length.saturating_sub(1) {
        let next = trace[i] * trace[i] + trace[i + 1] * trace[i + 1];
        trace.push(next);
    }
    trace
}

pub struct FibonacciStatement {
    trace_length: usize,
    trace: Vec<Fp>,
}

impl FibonacciStatement {
    /// Builds the statement from the secret witness `x1` and the public
    /// `trace_length`. The trace is computed eagerly since both
    /// `trace_length()` and `trace()` need it and recomputing would be
    /// wasteful.
    pub fn new(witness_x1: Fp, trace_length: usize) -> Self {
        let trace = compute_trace(Fp::from(TRACE_START), witness_x1, trace_length);
        FibonacciStatement {
            trace_length,
            trace,
        }
    }
}

impl Statement for FibonacciStatement {
    fn trace_length(&self) -> usize {
        self.trace_length
    }

    fn trace(&self) -> Vec<Fp> {
        self.trace.clone()
    }

    fn public_output(&self) -> Fp {
        *self.trace.last().expect("trace always has at least x0, x1")
    }

    /// Builds the two boundary constraints and the transition constraint
    /// from §4.5 points 2-4. The transition denominator Z(X) = ∏_{i=0}^{T-2}
    /// (X - G[i]) is built as (X^|G| - 1) / ∏_{i=T-1}^{|G|-1}(X - G[i]),
    /// the complement-product identity from §4.1.
    fn build_constraints(
        &self,
        trace_poly: &Polynomial,
        trace_domain: &[Fp],
        _transcript: &mut Transcript,
    ) -> Result<[Polynomial; 3], ArithmetizationError> {
        let t = self.trace_length;
        let y = self.public_output();

        let p0 = trace_poly
            .sub(&Polynomial::new(vec![Fp::from(TRACE_START)]))
            .divide_by_linear(trace_domain[0])?;

        let p1 = trace_poly
            .sub(&Polynomial::new(vec![y]))
            .divide_by_linear(trace_domain[t])?;

        let complement = Polynomial::vanishing_at(&trace_domain[t - 1..]);
        let z = Polynomial::x_pow_n_minus_one(trace_domain.len()).divide_exact(&complement)?;

        let f_g2x = trace_poly.compose_scale(trace_domain[2]);
        let f_g1x = trace_poly.compose_scale(trace_domain[1]);
        let numerator = f_g2x.sub(&f_g1x.mul(&f_g1x)).sub(&trace_poly.mul(trace_poly));
        let p2 = numerator.divide_exact(&z)?;

        Ok([p0, p1, p2])
    }
}
