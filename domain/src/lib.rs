//! Cyclic multiplicative subgroups and cosets over [`field::Fp`].

pub mod error;

use field::Fp;

pub use error::DomainError;

/// Blowup factor between the trace domain and the FRI evaluation domain.
/// Must be at least 4; larger values trade proof size for soundness.
pub const BLOWUP_FACTOR: usize = 8;

/// Size of the execution-trace evaluation domain.
pub const TRACE_DOMAIN_SIZE: usize = 1024;

/// Size of the FRI evaluation domain, `BLOWUP_FACTOR * TRACE_DOMAIN_SIZE`.
pub const FRI_DOMAIN_SIZE: usize = BLOWUP_FACTOR * TRACE_DOMAIN_SIZE;

/// An element of order exactly `l`, where `l | p-1`.
///
/// `q = (p-1)/l`; the returned element is `w^q` for the field's fixed
/// primitive root `w`.
pub fn find_generator(l: u64) -> Result<Fp, DomainError> {
    let order = Fp::MODULUS - 1;
    if order % l != 0 {
        return Err(DomainError::OrderDoesNotDivideFieldOrder(l));
    }
    let q = order / l;
    Ok(Fp::generator().pow(q))
}

/// Returns `[g^0, g^1, ..., g^(n-1)]` for `g` of order `n`.
fn powers_of(generator: Fp, n: usize) -> Vec<Fp> {
    let mut out = Vec::with_capacity(n);
    let mut cur = Fp::one();
    for _ in 0..n {
        out.push(cur);
        cur = cur * generator;
    }
    out
}

/// The trace domain `⟨g_trace⟩` of order [`TRACE_DOMAIN_SIZE`], listed in
/// successive-power order.
pub fn trace_domain() -> Result<Vec<Fp>, DomainError> {
    if !TRACE_DOMAIN_SIZE.is_power_of_two() {
        return Err(DomainError::SizeNotPowerOfTwo(TRACE_DOMAIN_SIZE));
    }
    let g = find_generator(TRACE_DOMAIN_SIZE as u64)?;
    Ok(powers_of(g, TRACE_DOMAIN_SIZE))
}

/// The FRI domain, the coset `w·⟨g_fri⟩` of size [`FRI_DOMAIN_SIZE`]. `w` is
/// the field's fixed primitive root, used as the coset offset; this is the
/// same generator used to derive every subgroup generator via
/// [`find_generator`], which is what keeps this coset disjoint from
/// [`trace_domain`] (§8 invariant).
pub fn fri_domain() -> Result<Vec<Fp>, DomainError> {
    if !FRI_DOMAIN_SIZE.is_power_of_two() {
        return Err(DomainError::SizeNotPowerOfTwo(FRI_DOMAIN_SIZE));
    }
    let g = find_generator(FRI_DOMAIN_SIZE as u64)?;
    let w = Fp::generator();
    Ok(powers_of(g, FRI_DOMAIN_SIZE)
        .into_iter()
        .map(|h| w * h)
        .collect())
}
