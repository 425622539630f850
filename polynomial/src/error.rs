use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum PolynomialError {
    #[error("exact division left a non-zero remainder: the trace violates a constraint")]
    NotDivisible,
    #[error("cannot interpolate from an empty set of points")]
    EmptyInput,
    #[error("interpolation points must have matching, non-empty x and y vectors")]
    MismatchedInterpolationInput,
}
