//! Computing commitments and proofs for whole blobs
//!
//! A [`Committer`] fixes the digest and the odd-node policy. Each call
//! derives the leaves from the blob, builds a fresh tree and drops it once
//! the root or proof has been extracted, so a committer can be shared
//! freely between threads.
//!
//! ```
//! use blob_commitment::{Committer, OddNodePolicy, Prover};
//!
//! let blob = vec![0x5A; 5 * 32];
//! let committer = Committer::builder()
//!     .odd_node_policy(OddNodePolicy::Promote)
//!     .build();
//!
//! let root = committer.root(&blob).unwrap();
//! let proof = committer.generate_proof(&blob, 4).unwrap();
//! assert!(committer.verify_proof(&proof, &root));
//! ```

use std::fmt;
use std::marker::PhantomData;

use alloy_primitives::B256;
use sha2::Sha256;

use crate::Commitment;
use crate::encoding::HexProof;
use crate::error::Result;
use crate::tree::{Hasher, MerkleTree, NodeDigest, OddNodePolicy, Proof, TreeError};

/// Builds Merkle commitments over segmented blobs
pub struct Committer<D = Sha256> {
    policy: OddNodePolicy,
    hasher: Hasher<D>,
}

impl<D> Clone for Committer<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Committer<D> {}

impl<D> fmt::Debug for Committer<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Committer")
            .field("policy", &self.policy)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<D> Default for Committer<D> {
    fn default() -> Self {
        Self::with_policy(OddNodePolicy::default())
    }
}

impl Committer {
    /// Create a SHA-256 committer with the default odd-node policy
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start configuring a committer
    #[inline]
    pub fn builder() -> CommitterBuilder {
        CommitterBuilder::new()
    }
}

impl<D> Committer<D> {
    /// Create a committer with the given odd-node policy
    #[inline]
    pub const fn with_policy(policy: OddNodePolicy) -> Self {
        Self {
            policy,
            hasher: Hasher::new(),
        }
    }

    /// The odd-node policy applied to every tree
    #[inline]
    pub const fn policy(&self) -> OddNodePolicy {
        self.policy
    }
}

impl<D: NodeDigest> Committer<D> {
    /// Ordered leaf digests of `blob`
    pub fn leaves(&self, blob: &[u8]) -> Result<Vec<B256>> {
        self.hasher.leaves(blob)
    }

    /// Build the full tree for `blob`
    pub fn tree(&self, blob: &[u8]) -> Result<MerkleTree<D>> {
        let leaves = self.leaves(blob)?;
        let leaf_count = leaves.len();
        let tree = MerkleTree::new(leaves, self.policy)?;
        tracing::debug!(
            blob_len = blob.len(),
            leaf_count,
            depth = tree.depth(),
            policy = ?self.policy,
            "built merkle tree"
        );
        Ok(tree)
    }

    /// Commitment (root digest) for `blob`
    pub fn root(&self, blob: &[u8]) -> Result<Commitment> {
        let root = self.tree(blob)?.root();
        tracing::debug!(root = %root, "computed commitment");
        Ok(root.into())
    }
}

/// Proof generation and verification against a commitment
pub trait Prover {
    /// Generate an inclusion proof for the segment at `index`
    fn generate_proof(&self, blob: &[u8], index: usize) -> Result<Proof>;

    /// Check that `proof` reproduces `root`
    fn verify_proof(&self, proof: &Proof, root: &Commitment) -> bool;
}

impl<D: NodeDigest> Prover for Committer<D> {
    fn generate_proof(&self, blob: &[u8], index: usize) -> Result<Proof> {
        let proof = self.tree(blob)?.proof(index)?;
        tracing::debug!(index, steps = proof.steps.len(), "generated inclusion proof");
        Ok(proof)
    }

    fn verify_proof(&self, proof: &Proof, root: &Commitment) -> bool {
        proof.verify_with::<D>(root)
    }
}

/// Builder for [`Committer`]
pub struct CommitterBuilder<D = Sha256> {
    policy: OddNodePolicy,
    _digest: PhantomData<fn() -> D>,
}

impl<D> fmt::Debug for CommitterBuilder<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommitterBuilder")
            .field("policy", &self.policy)
            .field("digest", &std::any::type_name::<D>())
            .finish()
    }
}

impl Default for CommitterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitterBuilder {
    /// Start from SHA-256 and the default odd-node policy
    pub const fn new() -> Self {
        Self {
            policy: OddNodePolicy::Promote,
            _digest: PhantomData,
        }
    }
}

impl<D> CommitterBuilder<D> {
    /// Set the rule for unpaired nodes
    pub fn odd_node_policy(mut self, policy: OddNodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Switch the digest used for leaves and internal nodes
    pub fn digest<E: NodeDigest>(self) -> CommitterBuilder<E> {
        CommitterBuilder {
            policy: self.policy,
            _digest: PhantomData,
        }
    }

    /// Finish configuration
    pub fn build(self) -> Committer<D> {
        Committer::with_policy(self.policy)
    }
}

/// Hex-encoded SHA-256 commitment for `blob`
///
/// ```
/// let root = blob_commitment::compute_root(&[0u8; 32]).unwrap();
/// assert_eq!(root, "0x66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925");
/// ```
pub fn compute_root(blob: &[u8]) -> Result<String> {
    Ok(Committer::new().root(blob)?.to_hex())
}

/// Hex-encoded inclusion proof for the segment at `index`
///
/// Negative indices are rejected as out of range. Blob length is checked
/// before the index.
pub fn compute_proof(blob: &[u8], index: i64) -> Result<HexProof> {
    let tree = Committer::new().tree(blob)?;
    let index = usize::try_from(index)
        .map_err(|_| TreeError::index_out_of_range(index, tree.leaf_count()))?;
    let proof = tree.proof(index)?;
    tracing::debug!(index, steps = proof.steps.len(), "generated inclusion proof");
    Ok(HexProof::from(&proof))
}

/// Verify a hex-encoded proof against a hex-encoded SHA-256 root
pub fn verify_hex_proof(proof: &HexProof, root: &str) -> Result<bool> {
    proof.verify(root)
}
