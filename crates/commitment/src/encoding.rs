//! Hex encoding of inclusion proofs
//!
//! Digests are lowercase and `0x`-prefixed. `proof[k]` is the sibling at
//! height `k` above the proven leaf's level (skipping promoted levels) and
//! `positions[k]` says on which side it is combined.

use std::str::FromStr;

use alloy_primitives::{B256, hex};

use crate::error::{CommitmentError, Result};
use crate::tree::{Proof, ProofStep, Side};

/// Inclusion proof with hex-encoded digests
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HexProof {
    /// Index of the proven leaf
    ///
    /// Informational only: verification places siblings by `positions` and
    /// never consults this field.
    pub index: usize,
    /// Digest of the proven leaf
    pub leaf_digest: String,
    /// Sibling digests from the leaf level upward
    pub proof: Vec<String>,
    /// Side of each sibling in `proof`
    pub positions: Vec<Side>,
}

impl HexProof {
    /// Verify against a hex-encoded SHA-256 root
    pub fn verify(&self, root: &str) -> Result<bool> {
        let root = B256::from_str(root)?;
        Ok(Proof::try_from(self)?.verify(&root))
    }
}

impl From<&Proof> for HexProof {
    fn from(proof: &Proof) -> Self {
        Self {
            index: proof.index,
            leaf_digest: hex::encode_prefixed(proof.leaf),
            proof: proof.siblings().map(hex::encode_prefixed).collect(),
            positions: proof.steps.iter().map(|step| step.side).collect(),
        }
    }
}

impl From<Proof> for HexProof {
    fn from(proof: Proof) -> Self {
        Self::from(&proof)
    }
}

impl TryFrom<&HexProof> for Proof {
    type Error = CommitmentError;

    fn try_from(hex_proof: &HexProof) -> Result<Self> {
        if hex_proof.proof.len() != hex_proof.positions.len() {
            return Err(CommitmentError::malformed_proof(format!(
                "{} siblings but {} positions",
                hex_proof.proof.len(),
                hex_proof.positions.len()
            )));
        }

        let leaf = B256::from_str(&hex_proof.leaf_digest)?;
        let steps = hex_proof
            .proof
            .iter()
            .zip(&hex_proof.positions)
            .map(|(sibling, side)| Ok(ProofStep::new(B256::from_str(sibling)?, *side)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(hex_proof.index, leaf, steps))
    }
}
