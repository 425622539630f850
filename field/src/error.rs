use thiserror::Error;

/// Errors that can arise from field-element operations.
///
/// All of these indicate a programming error or an invalid statement
/// instance, there is nothing recoverable about them at this layer.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum FieldError {
    #[error("attempted to invert zero")]
    InverseOfZero,
}
