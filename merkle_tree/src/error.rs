use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum MerkleError {
    #[error("cannot build a Merkle tree over zero elements")]
    EmptyInput,
    #[error("leaf index {0} is out of range")]
    IndexOutOfRange(usize),
}
