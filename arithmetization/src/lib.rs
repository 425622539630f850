//! Turns a [`Statement`]'s execution trace into a composition polynomial:
//! trace interpolation, boundary/transition constraint quotients, and a
//! random linear combination of them (§4.5).

pub mod error;
#[cfg(test)]
mod tests;

use domain::TRACE_DOMAIN_SIZE;
use field::Fp;
use polynomial::Polynomial;
use transcript::Transcript;

pub use error::ArithmetizationError;

/// The contract between the statement-agnostic prover core and a concrete
/// instance (e.g. the square-Fibonacci recurrence). Mirrors the capability
/// set from the design notes: trace length, the trace itself, its public
/// output, and a constraint builder. A narrow trait, not an inheritance
/// hierarchy: new recurrences plug in by implementing this.
pub trait Statement {
    /// `T`, with `T < TRACE_DOMAIN_SIZE`.
    fn trace_length(&self) -> usize;

    /// The trace `[x_0, ..., x_T]`, length `trace_length() + 1`.
    fn trace(&self) -> Vec<Fp>;

    /// `x_T`, the claimed public output.
    fn public_output(&self) -> Fp;

    /// Builds the boundary and transition constraint quotient polynomials
    /// for this statement, given the interpolated trace polynomial and the
    /// trace domain. `transcript` is threaded through for statements whose
    /// constraints need their own challenges; the square-Fibonacci instance
    /// in this repo doesn't use it.
    fn build_constraints(
        &self,
        trace_poly: &Polynomial,
        trace_domain: &[Fp],
        transcript: &mut Transcript,
    ) -> Result<[Polynomial; 3], ArithmetizationError>;
}

/// Everything produced by arithmetizing a statement: the trace polynomial,
/// the composition polynomial, and its evaluation (codeword) on the FRI
/// domain, ready to be handed to the FRI prover.
pub struct Arithmetization {
    pub trace_poly: Polynomial,
    pub trace_domain: Vec<Fp>,
    pub composition_poly: Polynomial,
    pub fri_domain: Vec<Fp>,
    pub composition_codeword: Vec<Fp>,
}

/// Runs the full arithmetization pipeline for `statement`, drawing the
/// composition challenges `α0, α1, α2` from `transcript` in order, before
/// any FRI interaction (§4.5 point 5).
pub fn arithmetize(
    statement: &dyn Statement,
    transcript: &mut Transcript,
) -> Result<Arithmetization, ArithmetizationError> {
    let trace_length = statement.trace_length();
    if trace_length >= TRACE_DOMAIN_SIZE {
        return Err(ArithmetizationError::TraceTooLong(
            trace_length,
            TRACE_DOMAIN_SIZE,
        ));
    }

    let trace = statement.trace();
    let trace_domain = domain::trace_domain()?;

    let xs = &trace_domain[..trace.len()];
    let trace_poly = Polynomial::interpolate(xs, &trace)?;

    let [p0, p1, p2] = statement.build_constraints(&trace_poly, &trace_domain, transcript)?;

    let alpha0 = transcript.get_random_scalar();
    let alpha1 = transcript.get_random_scalar();
    let alpha2 = transcript.get_random_scalar();

    let composition_poly = p0
        .scale(alpha0)
        .add(&p1.scale(alpha1))
        .add(&p2.scale(alpha2));

    let fri_domain = domain::fri_domain()?;
    let composition_codeword = composition_poly.evaluate_many(&fri_domain);

    Ok(Arithmetization {
        trace_poly,
        trace_domain,
        composition_poly,
        fri_domain,
        composition_codeword,
    })
}
