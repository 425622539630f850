use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ArithmetizationError {
    #[error("trace length {0} must be strictly less than the trace domain size {1}")]
    TraceTooLong(usize, usize),
    #[error(transparent)]
    Domain(#[from] domain::DomainError),
    #[error(transparent)]
    Polynomial(#[from] polynomial::PolynomialError),
}
