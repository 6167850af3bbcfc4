//! Error types for the blob-commitment crate
//!
//! The crate uses a two-level error hierarchy:
//!
//! - `CommitmentError`: the top-level error returned by every entry point
//! - Component errors: `SegmentError` from blob splitting and `TreeError`
//!   from tree construction and proof extraction
//!
//! Every error is a caller contract violation. Retrying with the same input
//! fails the same way.
//!
//! ```
//! use blob_commitment::compute_root;
//!
//! let err = compute_root(&[0u8; 33]).unwrap_err();
//! assert!(err.is_invalid_length());
//! ```

use thiserror::Error;

use crate::segment::SegmentError;
use crate::tree::TreeError;

/// Result type for operations in the blob-commitment crate
pub type Result<T> = std::result::Result<T, CommitmentError>;

/// Main error type for the blob-commitment crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    /// Errors from splitting the blob into segments
    #[error(transparent)]
    Segment(#[from] SegmentError),

    /// Errors from tree construction or proof extraction
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// A digest in a hex-encoded proof or root could not be decoded
    #[error("Invalid hex digest: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),

    /// A hex-encoded proof is structurally inconsistent
    #[error("Malformed proof: {0}")]
    MalformedProof(String),
}

impl CommitmentError {
    pub(crate) fn malformed_proof<S: Into<String>>(msg: S) -> Self {
        Self::MalformedProof(msg.into())
    }

    /// Whether the blob length was zero or not segment-aligned
    pub const fn is_invalid_length(&self) -> bool {
        matches!(self, Self::Segment(SegmentError::InvalidLength { .. }))
    }

    /// Whether a requested leaf index was outside the leaf range
    pub const fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::Tree(TreeError::IndexOutOfRange { .. }))
    }
}
