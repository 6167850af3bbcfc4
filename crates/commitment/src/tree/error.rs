//! Errors raised while building trees and extracting proofs

use thiserror::Error;

/// Result type for tree operations
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors specific to Merkle tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Requested leaf index is outside `[0, leaf_count)`
    #[error("Leaf index {index} out of range for {leaf_count} leaves")]
    IndexOutOfRange {
        /// The rejected index, wide enough for any `usize` or negative `i64` request
        index: i128,
        /// Number of leaves in the tree
        leaf_count: usize,
    },

    /// A tree needs at least one leaf
    #[error("Cannot build a Merkle tree without leaves")]
    EmptyLeaves,
}

impl TreeError {
    /// Out-of-range error for `index`
    pub fn index_out_of_range(index: impl TryInto<i128>, leaf_count: usize) -> Self {
        Self::IndexOutOfRange {
            // usize and i64 always fit
            index: index.try_into().unwrap_or(i128::MAX),
            leaf_count,
        }
    }
}
