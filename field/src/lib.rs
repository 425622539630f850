//! Prime field GF(p) for p = 3*2^30 + 1.
//!
//! Every `Fp` value is kept reduced into `[0, MODULUS)`. The field carries a
//! fixed, documented primitive root of `Fp*` (`GENERATOR`) rather than
//! searching for one at runtime, so every proof produced by this crate uses
//! the same generator and is reproducible.

pub mod error;

use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use rand::Rng;

pub use error::FieldError;

/// p = 3*2^30 + 1.
pub const MODULUS: u64 = 3 * (1u64 << 30) + 1;

/// A primitive element of `Fp*`, of multiplicative order `MODULUS - 1`.
///
/// This is the generator used throughout the STARK101-style toy prover this
/// crate is descended from; it is not derived, it is a documented constant.
pub const GENERATOR: u64 = 5;

/// An element of GF(p), always stored reduced modulo [`MODULUS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fp(u64);

impl Fp {
    pub const MODULUS: u64 = MODULUS;

    /// Reduces `value` into `[0, MODULUS)`.
    pub fn new(value: u64) -> Self {
        Fp(value % MODULUS)
    }

    pub fn zero() -> Self {
        Fp(0)
    }

    pub fn one() -> Self {
        Fp(1)
    }

    /// The fixed primitive root of `Fp*`.
    pub fn generator() -> Self {
        Fp(GENERATOR)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn neg(&self) -> Fp {
        if self.0 == 0 {
            Fp(0)
        } else {
            Fp(MODULUS - self.0)
        }
    }

    pub fn add(&self, other: &Fp) -> Fp {
        Fp((self.0 + other.0) % MODULUS)
    }

    pub fn sub(&self, other: &Fp) -> Fp {
        Fp((self.0 + MODULUS - other.0) % MODULUS)
    }

    pub fn mul(&self, other: &Fp) -> Fp {
        Fp(((self.0 as u128 * other.0 as u128) % MODULUS as u128) as u64)
    }

    /// Exponentiation by a non-negative integer, via square-and-multiply.
    pub fn pow(&self, mut exponent: u64) -> Fp {
        let mut base = *self;
        let mut result = Fp::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exponent >>= 1;
        }
        result
    }

    /// Multiplicative inverse via Fermat's little theorem: a^(p-2) = a^-1.
    ///
    /// Fails on zero, which has no inverse (`FieldError::InverseOfZero`, §7).
    pub fn inv(&self) -> Result<Fp, FieldError> {
        if self.is_zero() {
            return Err(FieldError::InverseOfZero);
        }
        Ok(self.pow(MODULUS - 2))
    }

    pub fn div(&self, other: &Fp) -> Result<Fp, FieldError> {
        Ok(self.mul(&other.inv()?))
    }

    /// Samples a uniformly random element of the field. Kept independent of
    /// the deterministic Fiat-Shamir scalar stream produced by `transcript`.
    pub fn random_element<R: Rng + ?Sized>(rng: &mut R) -> Fp {
        Fp(rng.gen_range(0..MODULUS))
    }

    pub fn to_decimal_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_decimal_string(s: &str) -> Option<Fp> {
        s.parse::<u64>().ok().map(Fp::new)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Fp {
    fn from(value: u64) -> Self {
        Fp::new(value)
    }
}

impl From<i64> for Fp {
    fn from(value: i64) -> Self {
        if value >= 0 {
            Fp::new(value as u64)
        } else {
            Fp::new(value.unsigned_abs() % MODULUS).neg()
        }
    }
}

macro_rules! impl_bin_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait for Fp {
            type Output = Fp;
            fn $method(self, rhs: Fp) -> Fp {
                Fp::$inner(&self, &rhs)
            }
        }
        impl $trait for &Fp {
            type Output = Fp;
            fn $method(self, rhs: &Fp) -> Fp {
                Fp::$inner(self, rhs)
            }
        }
        impl $trait<Fp> for &Fp {
            type Output = Fp;
            fn $method(self, rhs: Fp) -> Fp {
                Fp::$inner(self, &rhs)
            }
        }
        impl $trait<&Fp> for Fp {
            type Output = Fp;
            fn $method(self, rhs: &Fp) -> Fp {
                Fp::$inner(&self, rhs)
            }
        }
    };
}

impl_bin_op!(Add, add, add);
impl_bin_op!(Sub, sub, sub);
impl_bin_op!(Mul, mul, mul);

impl Div for Fp {
    type Output = Fp;
    fn div(self, rhs: Fp) -> Fp {
        Fp::div(&self, &rhs).expect("division by zero field element")
    }
}

impl Neg for Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp::neg(&self)
    }
}

impl Neg for &Fp {
    type Output = Fp;
    fn neg(self) -> Fp {
        Fp::neg(self)
    }
}

impl Sum for Fp {
    fn sum<I: Iterator<Item = Fp>>(iter: I) -> Self {
        iter.fold(Fp::zero(), |a, b| a + b)
    }
}

impl Product for Fp {
    fn product<I: Iterator<Item = Fp>>(iter: I) -> Self {
        iter.fold(Fp::one(), |a, b| a * b)
    }
}
