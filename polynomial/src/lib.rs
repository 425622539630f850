//! Dense univariate polynomials over [`field::Fp`].

pub mod error;
#[cfg(test)]
mod tests;

use std::ops::{Add, Mul, Neg, Sub};

use field::Fp;

pub use error::PolynomialError;

/// A dense polynomial, coefficients stored low-degree first.
///
/// Canonical form strips trailing zero coefficients; the zero polynomial is
/// represented by an empty coefficient vector and has no degree (`degree()`
/// returns `None`, standing in for the spec's "-infinity").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<Fp>,
}

impl Polynomial {
    /// Builds a polynomial from coefficients, low-degree first, and
    /// canonicalizes it (strips trailing zeros).
    pub fn new(coeffs: Vec<Fp>) -> Self {
        let mut poly = Polynomial { coeffs };
        poly.trim();
        poly
    }

    fn trim(&mut self) {
        while matches!(self.coeffs.last(), Some(c) if c.is_zero()) {
            self.coeffs.pop();
        }
    }

    pub fn zero() -> Self {
        Polynomial { coeffs: vec![] }
    }

    pub fn one() -> Self {
        Polynomial { coeffs: vec![Fp::one()] }
    }

    /// `c * X^degree`.
    pub fn monomial(degree: usize, coeff: Fp) -> Self {
        if coeff.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![Fp::zero(); degree + 1];
        coeffs[degree] = coeff;
        Polynomial::new(coeffs)
    }

    /// `X^n - 1`.
    pub fn x_pow_n_minus_one(n: usize) -> Self {
        let mut coeffs = vec![Fp::zero(); n + 1];
        coeffs[0] = -Fp::one();
        coeffs[n] = Fp::one();
        Polynomial::new(coeffs)
    }

    /// `∏ (X - a)` over the given roots. Used for small zerofiers: the
    /// boundary denominators and the short complement product in the
    /// transition zerofier identity (§4.1, §4.5).
    pub fn vanishing_at(roots: &[Fp]) -> Self {
        roots.iter().fold(Polynomial::one(), |acc, &a| {
            acc.mul(&Polynomial::new(vec![-a, Fp::one()]))
        })
    }

    pub fn degree(&self) -> Option<usize> {
        if self.coeffs.is_empty() {
            None
        } else {
            Some(self.coeffs.len() - 1)
        }
    }

    pub fn coeffs(&self) -> &[Fp] {
        &self.coeffs
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Evaluates the polynomial at `x` via Horner's method.
    pub fn evaluate(&self, x: Fp) -> Fp {
        self.coeffs
            .iter()
            .rev()
            .fold(Fp::zero(), |acc, &c| acc * x + c)
    }

    pub fn evaluate_many(&self, xs: &[Fp]) -> Vec<Fp> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }

    pub fn add(&self, other: &Polynomial) -> Polynomial {
        let n = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..n)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or(Fp::zero());
                let b = other.coeffs.get(i).copied().unwrap_or(Fp::zero());
                a + b
            })
            .collect();
        Polynomial::new(coeffs)
    }

    pub fn neg(&self) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|&c| -c).collect())
    }

    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        self.add(&other.neg())
    }

    pub fn scale(&self, c: Fp) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|&coeff| coeff * c).collect())
    }

    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![Fp::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j] + a * b;
            }
        }
        Polynomial::new(coeffs)
    }

    /// `P(alpha * X)`, needed for shifted evaluations like `f(g·X)`.
    pub fn compose_scale(&self, alpha: Fp) -> Polynomial {
        let mut power = Fp::one();
        let coeffs = self
            .coeffs
            .iter()
            .map(|&c| {
                let scaled = c * power;
                power = power * alpha;
                scaled
            })
            .collect();
        Polynomial::new(coeffs)
    }

    /// Exact synthetic division by `(X - a)`. Returns the quotient `Q` such
    /// that `P(X) = Q(X)*(X-a) + P(a)`; fails with
    /// [`PolynomialError::NotDivisible`] unless `P(a) = 0`.
    pub fn divide_by_linear(&self, a: Fp) -> Result<Polynomial, PolynomialError> {
        if self.is_zero() {
            return Ok(Polynomial::zero());
        }
        let c = &self.coeffs;
        let n = c.len();
        if n == 1 {
            return if c[0].is_zero() {
                Ok(Polynomial::zero())
            } else {
                Err(PolynomialError::NotDivisible)
            };
        }
        let mut b = vec![Fp::zero(); n - 1];
        b[n - 2] = c[n - 1];
        for i in (1..n - 1).rev() {
            b[i - 1] = c[i] + b[i] * a;
        }
        let remainder = c[0] + b[0] * a;
        if !remainder.is_zero() {
            return Err(PolynomialError::NotDivisible);
        }
        Ok(Polynomial::new(b))
    }

    /// Schoolbook long division by an arbitrary non-zero divisor, returning
    /// `(quotient, remainder)`.
    fn divide_with_remainder(
        &self,
        divisor: &Polynomial,
    ) -> Result<(Polynomial, Polynomial), PolynomialError> {
        if divisor.is_zero() {
            return Err(PolynomialError::NotDivisible);
        }
        let divisor_deg = divisor.degree().unwrap();
        let leading_inv = divisor.coeffs[divisor_deg]
            .inv()
            .expect("non-zero leading coefficient");

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![Fp::zero(); remainder.len().saturating_sub(divisor_deg)];

        while remainder.len() > divisor_deg && !remainder.iter().all(|c| c.is_zero()) {
            let cur_deg = remainder.len() - 1;
            let lead = remainder[cur_deg];
            if lead.is_zero() {
                remainder.pop();
                continue;
            }
            let factor = lead * leading_inv;
            let shift = cur_deg - divisor_deg;
            quotient[shift] = factor;
            for (i, &dc) in divisor.coeffs.iter().enumerate() {
                remainder[shift + i] = remainder[shift + i] - dc * factor;
            }
            remainder.pop();
        }

        Ok((Polynomial::new(quotient), Polynomial::new(remainder)))
    }

    /// Exact division by a monic (or any non-zero) polynomial, asserting the
    /// remainder vanishes. Used for the transition-constraint denominator
    /// (§4.1, §4.5); the caller is expected to have arranged the identity
    /// `(X^n-1) / complement = Z(X)` so this division is cheap in practice.
    pub fn divide_exact(&self, divisor: &Polynomial) -> Result<Polynomial, PolynomialError> {
        let (quotient, remainder) = self.divide_with_remainder(divisor)?;
        if !remainder.is_zero() {
            return Err(PolynomialError::NotDivisible);
        }
        Ok(quotient)
    }

    /// Lagrange interpolation: the unique polynomial of degree < n passing
    /// through the given `n` distinct point/value pairs.
    pub fn interpolate(xs: &[Fp], ys: &[Fp]) -> Result<Polynomial, PolynomialError> {
        if xs.is_empty() || ys.is_empty() {
            return Err(PolynomialError::EmptyInput);
        }
        if xs.len() != ys.len() {
            return Err(PolynomialError::MismatchedInterpolationInput);
        }

        let mut result = Polynomial::zero();
        for i in 0..xs.len() {
            let mut term = Polynomial::new(vec![ys[i]]);
            let mut denom = Fp::one();
            for j in 0..xs.len() {
                if i == j {
                    continue;
                }
                term = term.mul(&Polynomial::new(vec![-xs[j], Fp::one()]));
                denom = denom * (xs[i] - xs[j]);
            }
            let denom_inv = denom
                .inv()
                .expect("interpolation points are required to be distinct");
            result = result.add(&term.scale(denom_inv));
        }
        Ok(result)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: Polynomial) -> Polynomial {
        Polynomial::add(&self, &rhs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;
    fn add(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: Polynomial) -> Polynomial {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;
    fn sub(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Polynomial) -> Polynomial {
        Polynomial::mul(&self, &rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        Polynomial::mul(self, rhs)
    }
}

impl Mul<Fp> for &Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Fp) -> Polynomial {
        self.scale(rhs)
    }
}

impl Mul<Fp> for Polynomial {
    type Output = Polynomial;
    fn mul(self, rhs: Fp) -> Polynomial {
        self.scale(rhs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;
    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}
