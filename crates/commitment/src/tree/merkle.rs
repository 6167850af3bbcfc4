//! Bottom-up construction of a binary Merkle tree over leaf digests.

use std::fmt;

use alloy_primitives::B256;
use sha2::Sha256;

use super::error::{Result, TreeError};
use super::proof::{Proof, ProofStep, Side};
use super::{Hasher, NodeDigest};

/// Rule applied to the last node of a level with an odd node count
///
/// Roots and proofs are only comparable when built under the same policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OddNodePolicy {
    /// Carry the node to the next level unchanged. It gets no proof step
    /// at that level.
    #[default]
    Promote,
    /// Pair the node with itself, `H(node || node)`. The proof records the
    /// node as its own right-hand sibling.
    Duplicate,
}

/// A binary Merkle tree holding every level from the leaves to the root
///
/// Built once from a non-empty leaf sequence and never mutated.
pub struct MerkleTree<D = Sha256> {
    levels: Vec<Vec<B256>>,
    root: B256,
    policy: OddNodePolicy,
    hasher: Hasher<D>,
}

impl<D> Clone for MerkleTree<D> {
    fn clone(&self) -> Self {
        Self {
            levels: self.levels.clone(),
            root: self.root,
            policy: self.policy,
            hasher: self.hasher,
        }
    }
}

impl<D> fmt::Debug for MerkleTree<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("root", &self.root)
            .field("leaf_count", &self.leaf_count())
            .field("depth", &self.depth())
            .field("policy", &self.policy)
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<D: NodeDigest> MerkleTree<D> {
    /// Build a tree over `leaves` using the given odd-node policy
    pub fn new(leaves: Vec<B256>, policy: OddNodePolicy) -> Result<Self> {
        if leaves.is_empty() {
            return Err(TreeError::EmptyLeaves);
        }

        let hasher = Hasher::<D>::new();
        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = Self::next_level(&hasher, level, policy);
            tracing::trace!(
                height = levels.len(),
                nodes = next.len(),
                "built tree level"
            );
            levels.push(next);
        }

        let root = levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .ok_or(TreeError::EmptyLeaves)?;

        Ok(Self {
            levels,
            root,
            policy,
            hasher,
        })
    }

    fn next_level(hasher: &Hasher<D>, level: &[B256], policy: OddNodePolicy) -> Vec<B256> {
        let pairs = level.chunks_exact(2);
        let odd = pairs.remainder().first();

        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        next.extend(pairs.map(|pair| hasher.hash_pair(&pair[0], &pair[1])));

        if let Some(last) = odd {
            next.push(match policy {
                OddNodePolicy::Promote => *last,
                OddNodePolicy::Duplicate => hasher.hash_pair(last, last),
            });
        }

        next
    }

    /// Generate an inclusion proof for the leaf at `index`
    pub fn proof(&self, index: usize) -> Result<Proof> {
        let leaf = *self
            .leaves()
            .get(index)
            .ok_or_else(|| TreeError::index_out_of_range(index, self.leaf_count()))?;

        let mut steps = Vec::with_capacity(self.depth());
        let mut position = index;

        // Every level below the root contributes at most one step
        for level in &self.levels[..self.depth()] {
            if let Some(sibling) = level.get(position ^ 1) {
                steps.push(ProofStep::new(*sibling, Side::of_sibling(position)));
            } else if self.policy == OddNodePolicy::Duplicate {
                steps.push(ProofStep::new(level[position], Side::Right));
            }
            position /= 2;
        }

        Ok(Proof::new(index, leaf, steps))
    }

    /// Recompute the root implied by `proof` and compare it with this tree's root
    pub fn verify(&self, proof: &Proof) -> bool {
        proof.verify_with::<D>(&self.root)
    }
}

impl<D> MerkleTree<D> {
    /// The root digest
    #[inline]
    pub const fn root(&self) -> B256 {
        self.root
    }

    /// The leaf digests in order
    #[inline]
    pub fn leaves(&self) -> &[B256] {
        &self.levels[0]
    }

    /// Leaf digest at `index`, if any
    #[inline]
    pub fn leaf(&self, index: usize) -> Option<&B256> {
        self.leaves().get(index)
    }

    /// Number of leaves
    #[inline]
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of levels above the leaves (zero for a single leaf)
    #[inline]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Odd-node policy this tree was built with
    #[inline]
    pub const fn policy(&self) -> OddNodePolicy {
        self.policy
    }

    /// Node digests at `height` (0 is the leaf level)
    pub fn level(&self, height: usize) -> Option<&[B256]> {
        self.levels.get(height).map(Vec::as_slice)
    }
}
