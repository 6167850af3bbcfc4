//! Inclusion proofs for a single leaf.

use alloy_primitives::B256;
use sha2::Sha256;

use crate::tree::{Hasher, NodeDigest};

/// Which side of the running hash a sibling sits on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Side {
    /// Sibling is the left child: `H(sibling || current)`
    Left,
    /// Sibling is the right child: `H(current || sibling)`
    Right,
}

impl Side {
    /// Side of the sibling for a node at `position` within its level
    #[inline]
    pub const fn of_sibling(position: usize) -> Self {
        if position % 2 == 0 { Self::Right } else { Self::Left }
    }
}

/// One level of an inclusion proof
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProofStep {
    /// Digest of the sibling node
    pub sibling: B256,
    /// Where the sibling is placed when combining
    pub side: Side,
}

impl ProofStep {
    /// Create a new proof step
    pub const fn new(sibling: B256, side: Side) -> Self {
        Self { sibling, side }
    }
}

/// Inclusion proof for one leaf of a Merkle tree
///
/// `steps` runs from the leaf level upward and excludes the root. Levels at
/// which the proven node was promoted without a sibling contribute no step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Proof {
    /// Index of the proven leaf; informational, verification follows each step's `side`
    pub index: usize,
    /// Digest of the proven leaf
    pub leaf: B256,
    /// Sibling digests from the leaf level up to just below the root
    pub steps: Vec<ProofStep>,
}

impl Proof {
    /// Create a new proof
    pub const fn new(index: usize, leaf: B256, steps: Vec<ProofStep>) -> Self {
        Self { index, leaf, steps }
    }

    /// Sibling digests in proof order
    pub fn siblings(&self) -> impl ExactSizeIterator<Item = &B256> + '_ {
        self.steps.iter().map(|step| &step.sibling)
    }

    /// Recompute the root implied by this proof using digest `D`
    pub fn compute_root<D: NodeDigest>(&self) -> B256 {
        let hasher = Hasher::<D>::new();
        self.steps
            .iter()
            .fold(self.leaf, |current, step| match step.side {
                Side::Left => hasher.hash_pair(&step.sibling, &current),
                Side::Right => hasher.hash_pair(&current, &step.sibling),
            })
    }

    /// Verify this proof against a SHA-256 root
    pub fn verify(&self, root: &B256) -> bool {
        self.verify_with::<Sha256>(root)
    }

    /// Verify this proof against a root built with digest `D`
    pub fn verify_with<D: NodeDigest>(&self, root: &B256) -> bool {
        let computed = self.compute_root::<D>();
        if &computed != root {
            tracing::debug!(
                index = self.index,
                expected = %root,
                computed = %computed,
                "proof does not reproduce root"
            );
            return false;
        }
        true
    }
}
