use thiserror::Error;

#[derive(Debug, Error)]
pub enum FriError {
    #[error(transparent)]
    Merkle(#[from] merkle_tree::MerkleError),
    #[error("FRI domain of size {0} is too small to hold a trace opening at offset 2*BLOWUP_FACTOR")]
    DomainTooSmall(usize),
}
