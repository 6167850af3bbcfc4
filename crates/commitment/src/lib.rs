//! Merkle commitments over segmented blobs
//!
//! This crate commits to an arbitrary byte blob with a single 32-byte root
//! digest and produces sibling-path proofs that one segment belongs to the
//! committed blob, without re-hashing the whole blob on the verifier side.
//!
//! ## Key Components
//!
//! - **Segments**: 32-byte slices of the blob ([`segment::segments`])
//! - **Leaves**: SHA-256 of each segment, in blob order ([`Hasher`])
//! - **Merkle Tree**: pairwise `H(left || right)` up to the root ([`MerkleTree`])
//! - **Proofs**: sibling digests with their sides ([`Proof`], [`HexProof`])
//!
//! The last node of an odd-sized level is promoted unchanged by default. See
//! [`OddNodePolicy`] for the alternative.
//!
//! ## Usage Examples
//!
//! ```
//! use blob_commitment::{compute_proof, compute_root, verify_hex_proof};
//!
//! let blob = [0u8; 64];
//! let root = compute_root(&blob).unwrap();
//!
//! let proof = compute_proof(&blob, 0).unwrap();
//! assert_eq!(proof.proof, vec![proof.leaf_digest.clone()]);
//! assert!(verify_hex_proof(&proof, &root).unwrap());
//! ```

mod commitment;
pub mod committer;
pub mod encoding;
pub mod error;
pub mod segment;
pub mod tree;

// Re-export core constants
pub use segment::SEGMENT_SIZE;

// Re-export core types
pub use commitment::Commitment;
pub use error::{CommitmentError, Result};

// Core tree functionality
pub use tree::{Hasher, MerkleTree, NodeDigest, OddNodePolicy, Proof, ProofStep, Side, TreeError};

// Entry points
pub use committer::{
    Committer, CommitterBuilder, Prover, compute_proof, compute_root, verify_hex_proof,
};
pub use encoding::HexProof;
pub use segment::SegmentError;
