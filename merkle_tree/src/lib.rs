//! Binary Merkle tree over a padded vector of field elements, SHA-256 hashed.

pub mod error;

use std::collections::HashMap;

use field::Fp;
use sha2::{Digest, Sha256};

pub use error::MerkleError;

/// What a given node hash expands to: either a leaf's field element or the
/// pair of child hashes that produced it. Kept around so a verifier (not
/// implemented in this prover-only crate) would have enough data to replay
/// the tree, per §4.3 point 6.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Leaf(Fp),
    Internal(String, String),
}

/// A binary Merkle tree over `leaves`, zero-padded to the next power of two.
pub struct MerkleTree {
    /// Number of real (unpadded) leaves.
    leaf_count: usize,
    /// Padded leaf count, a power of two.
    padded_len: usize,
    /// 1-indexed array: `tree[1]` is the root, `tree[i]`'s children are
    /// `tree[2i]`, `tree[2i+1]`; leaves live at `[padded_len, 2*padded_len)`.
    tree: Vec<String>,
    /// hash -> what produced it, for verifier replay.
    node_data: HashMap<String, NodeData>,
}

fn leaf_hash(value: Fp) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.to_decimal_string().as_bytes());
    hex::encode(hasher.finalize())
}

fn internal_hash(left: &str, right: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    hex::encode(hasher.finalize())
}

impl MerkleTree {
    /// Builds a tree over `leaves`. Fails on an empty input
    /// ([`MerkleError::EmptyInput`]).
    pub fn build(leaves: &[Fp]) -> Result<MerkleTree, MerkleError> {
        if leaves.is_empty() {
            return Err(MerkleError::EmptyInput);
        }
        let leaf_count = leaves.len();
        let padded_len = leaf_count.next_power_of_two();

        let mut tree = vec![String::new(); 2 * padded_len];
        let mut node_data = HashMap::with_capacity(2 * padded_len);

        for i in 0..padded_len {
            let value = leaves.get(i).copied().unwrap_or_else(Fp::zero);
            let hash = leaf_hash(value);
            node_data.insert(hash.clone(), NodeData::Leaf(value));
            tree[padded_len + i] = hash;
        }

        for i in (1..padded_len).rev() {
            let left = tree[2 * i].clone();
            let right = tree[2 * i + 1].clone();
            let hash = internal_hash(&left, &right);
            node_data.insert(hash.clone(), NodeData::Internal(left, right));
            tree[i] = hash;
        }

        Ok(MerkleTree {
            leaf_count,
            padded_len,
            tree,
            node_data,
        })
    }

    /// The root digest, lowercase hex.
    pub fn root(&self) -> &str {
        &self.tree[1]
    }

    pub fn node_data(&self, hash: &str) -> Option<&NodeData> {
        self.node_data.get(hash)
    }

    /// The sibling hashes on the path from `leaf_id` up to (but not
    /// including) the root, ordered from the top of the tree down to the
    /// leaf's parent.
    pub fn authentication_path(&self, leaf_id: usize) -> Result<Vec<String>, MerkleError> {
        if leaf_id >= self.leaf_count {
            return Err(MerkleError::IndexOutOfRange(leaf_id));
        }
        let mut idx = self.padded_len + leaf_id;
        let mut path = Vec::new();
        while idx > 1 {
            path.push(self.tree[idx ^ 1].clone());
            idx /= 2;
        }
        path.reverse();
        Ok(path)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }
}

/// Serializes an authentication path as a comma-separated list of hex
/// digests, the wire encoding specified in §6.
pub fn encode_path(path: &[String]) -> String {
    path.join(",")
}

/// Replays a leaf value and its authentication path against a known root,
/// the verifier-side check this prover-only crate doesn't otherwise need but
/// which makes the authentication-path invariant in §8 directly testable.
pub fn verify_path(root: &str, leaf_id: usize, padded_len: usize, leaf: Fp, path: &[String]) -> bool {
    let mut idx = padded_len + leaf_id;
    let mut current = leaf_hash(leaf);
    let mut directions = Vec::new();
    while idx > 1 {
        directions.push(idx % 2);
        idx /= 2;
    }
    for (sibling, direction) in path.iter().rev().zip(directions.iter()) {
        current = if *direction == 0 {
            internal_hash(&current, sibling)
        } else {
            internal_hash(sibling, &current)
        };
    }
    current == root
}
