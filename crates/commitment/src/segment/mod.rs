//! Splitting blobs into fixed-size segments.
//!
//! A blob is committed to segment by segment: segment `i` covers bytes
//! `[32 * i, 32 * i + 32)`. Blobs whose length is not an exact, non-zero
//! multiple of [`SEGMENT_SIZE`] are rejected before anything is hashed.

pub mod error;

use std::iter::FusedIterator;
use std::slice::ChunksExact;

pub use error::SegmentError;
use error::Result;

/// Size of a segment in bytes (same as the digest size)
pub const SEGMENT_SIZE: usize = 32;

/// A single fixed-size segment of a blob
pub type Segment = [u8; SEGMENT_SIZE];

/// Number of segments in a blob of `len` bytes.
///
/// Fails with [`SegmentError::InvalidLength`] when `len` is zero or not
/// aligned to [`SEGMENT_SIZE`].
#[inline]
pub const fn segment_count(len: usize) -> Result<usize> {
    if len == 0 || len % SEGMENT_SIZE != 0 {
        return Err(SegmentError::invalid_length(len, SEGMENT_SIZE));
    }
    Ok(len / SEGMENT_SIZE)
}

/// Split `blob` into ordered segments.
///
/// ```
/// use blob_commitment::segment::{segments, SEGMENT_SIZE};
///
/// let blob = [7u8; 3 * SEGMENT_SIZE];
/// assert_eq!(segments(&blob).unwrap().len(), 3);
/// assert!(segments(&blob[..40]).is_err());
/// ```
pub fn segments(blob: &[u8]) -> Result<Segments<'_>> {
    segment_count(blob.len())?;
    Ok(Segments {
        inner: blob.chunks_exact(SEGMENT_SIZE),
    })
}

/// Iterator over the segments of a validated blob
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    inner: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a Segment;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        // chunks_exact only yields SEGMENT_SIZE slices, so the conversion cannot fail
        self.inner.next().and_then(|chunk| chunk.try_into().ok())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}

impl FusedIterator for Segments<'_> {}

impl DoubleEndedIterator for Segments<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(|chunk| chunk.try_into().ok())
    }
}
