//! Binary Merkle tree over segment digests.
//!
//! This module builds the tree that commits to a blob and extracts
//! sibling-path proofs of inclusion for single leaves.

pub mod error;
pub mod hasher;
pub mod merkle;
pub mod proof;

pub use error::{Result, TreeError};
pub use hasher::{Hasher, NodeDigest};
pub use merkle::{MerkleTree, OddNodePolicy};
pub use proof::{Proof, ProofStep, Side};
