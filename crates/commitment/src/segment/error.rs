//! Errors raised while splitting blobs into segments

use thiserror::Error;

/// Result type for segmentation
pub(crate) type Result<T> = std::result::Result<T, SegmentError>;

/// Errors raised while splitting a blob into segments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SegmentError {
    /// Blob length is zero or not a multiple of the segment size
    #[error("Invalid blob length: {actual} bytes is not a non-zero multiple of {segment_size}")]
    InvalidLength {
        /// Length of the rejected blob
        actual: usize,
        /// Required alignment
        segment_size: usize,
    },
}

impl SegmentError {
    pub(crate) const fn invalid_length(actual: usize, segment_size: usize) -> Self {
        Self::InvalidLength {
            actual,
            segment_size,
        }
    }
}
