use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Arithmetization(#[from] arithmetization::ArithmetizationError),
    #[error(transparent)]
    Fri(#[from] fri::FriError),
    #[error("failed to write proof to {path}: {source}")]
    ProofWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
