//! Leaf and node hashing
//!
//! Leaves are the plain digest of a segment's 32 bytes and internal nodes
//! the digest of `left || right`. There is no domain separation or length
//! prefix, so the same function serves both layers.

use std::fmt;
use std::marker::PhantomData;

use alloy_primitives::B256;
use digest::{Digest, OutputSizeUser};
use generic_array::typenum::U32;
use sha2::Sha256;

use crate::segment::{Segment, segments};

/// A fixed-length digest usable for building Merkle trees.
///
/// Implemented for every [`Digest`] producing 32 bytes, such as
/// [`sha2::Sha256`] (the default) or [`sha2::Sha512_256`].
pub trait NodeDigest: Digest + OutputSizeUser<OutputSize = U32> {}

impl<D> NodeDigest for D where D: Digest + OutputSizeUser<OutputSize = U32> {}

/// Stateless hasher for leaves and internal nodes
pub struct Hasher<D = Sha256> {
    _digest: PhantomData<fn() -> D>,
}

impl<D> fmt::Debug for Hasher<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hasher")
            .field("digest", &std::any::type_name::<D>())
            .finish()
    }
}

impl<D> Clone for Hasher<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Hasher<D> {}

impl<D> Default for Hasher<D> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Hasher<D> {
    /// Create a new hasher
    #[inline]
    pub const fn new() -> Self {
        Self {
            _digest: PhantomData,
        }
    }
}

impl<D: NodeDigest> Hasher<D> {
    /// Hash a single segment into a leaf
    #[inline]
    pub fn hash_leaf(&self, segment: &Segment) -> B256 {
        B256::from_slice(D::digest(segment).as_slice())
    }

    /// Hash two child nodes into their parent, left then right
    #[inline]
    pub fn hash_pair(&self, left: &B256, right: &B256) -> B256 {
        let mut hasher = D::new();
        Digest::update(&mut hasher, left.as_slice());
        Digest::update(&mut hasher, right.as_slice());
        B256::from_slice(hasher.finalize().as_slice())
    }

    /// Derive the ordered leaf sequence of `blob`
    ///
    /// Fails if the blob is empty or not segment-aligned.
    pub fn leaves(&self, blob: &[u8]) -> crate::Result<Vec<B256>> {
        let segments = segments(blob)?;

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            let segments: Vec<&Segment> = segments.collect();
            Ok(segments
                .into_par_iter()
                .map(|segment| self.hash_leaf(segment))
                .collect())
        }

        #[cfg(not(feature = "parallel"))]
        {
            Ok(segments.map(|segment| self.hash_leaf(segment)).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::SEGMENT_SIZE;
    use alloy_primitives::hex;
    use sha2::Sha512_256;

    #[test]
    fn test_leaf_is_plain_sha256() {
        let segment = [0u8; SEGMENT_SIZE];
        let leaf = Hasher::<Sha256>::new().hash_leaf(&segment);

        // sha256 of 32 zero bytes
        assert_eq!(
            hex::encode(leaf),
            "66687aadf862bd776c8fc18b8e9f8e20089714856ee233b3902a591d0d5f2925"
        );
    }

    #[test]
    fn test_pair_order_matters() {
        let hasher = Hasher::<Sha256>::new();
        let a = B256::repeat_byte(0x01);
        let b = B256::repeat_byte(0x02);

        assert_ne!(hasher.hash_pair(&a, &b), hasher.hash_pair(&b, &a));

        let mut joined = [0u8; 64];
        joined[..32].copy_from_slice(a.as_slice());
        joined[32..].copy_from_slice(b.as_slice());
        assert_eq!(
            hasher.hash_pair(&a, &b).as_slice(),
            Sha256::digest(joined).as_slice()
        );
    }

    #[test]
    fn test_leaves_preserve_segment_order() {
        let hasher = Hasher::<Sha256>::new();
        let mut blob = vec![0u8; 3 * SEGMENT_SIZE];
        blob[SEGMENT_SIZE..2 * SEGMENT_SIZE].fill(0x11);
        blob[2 * SEGMENT_SIZE..].fill(0x22);

        let leaves = hasher.leaves(&blob).unwrap();
        assert_eq!(
            leaves,
            vec![
                hasher.hash_leaf(&[0x00; SEGMENT_SIZE]),
                hasher.hash_leaf(&[0x11; SEGMENT_SIZE]),
                hasher.hash_leaf(&[0x22; SEGMENT_SIZE]),
            ]
        );
    }

    #[test]
    fn test_alternative_digest() {
        let segment = [0x42u8; SEGMENT_SIZE];
        let sha256 = Hasher::<Sha256>::new().hash_leaf(&segment);
        let sha512_256 = Hasher::<Sha512_256>::new().hash_leaf(&segment);

        assert_ne!(sha256, sha512_256);
        assert_eq!(sha512_256.as_slice(), Sha512_256::digest(segment).as_slice());
    }

    #[test]
    fn test_leaves_reject_misaligned_blob() {
        let hasher = Hasher::<Sha256>::new();
        assert!(hasher.leaves(&[0u8; 33]).is_err());
    }

    #[cfg(feature = "parallel")]
    mod parallel {
        use super::*;
        use proptest::prelude::*;

        fn many_segments() -> impl Strategy<Value = Vec<u8>> {
            (64usize..512).prop_flat_map(|count| {
                prop::collection::vec(any::<u8>(), count * SEGMENT_SIZE..=count * SEGMENT_SIZE)
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn test_parallel_leaves_match_sequential(blob in many_segments()) {
                let hasher = Hasher::<Sha256>::new();
                let sequential: Vec<B256> = segments(&blob)
                    .unwrap()
                    .map(|segment| hasher.hash_leaf(segment))
                    .collect();

                prop_assert_eq!(hasher.leaves(&blob).unwrap(), sequential);
            }
        }
    }
}
