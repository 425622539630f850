use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum DomainError {
    #[error("requested subgroup order {0} does not divide p-1")]
    OrderDoesNotDivideFieldOrder(u64),
    #[error("domain size {0} is not a power of two")]
    SizeNotPowerOfTwo(usize),
}
