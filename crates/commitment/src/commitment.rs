//! The root digest as a typed commitment value
//!
//! ```
//! use blob_commitment::{Commitment, Committer};
//!
//! let root = Committer::new().root(&[0u8; 64]).unwrap();
//! let parsed: Commitment = root.to_string().parse().unwrap();
//! assert_eq!(root, parsed);
//! ```

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use alloy_primitives::{B256, hex};

/// Root digest committing to a whole blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Commitment(pub B256);

impl Commitment {
    /// Creates a new commitment from raw bytes
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(B256::from(bytes))
    }

    /// Returns the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Lowercase `0x`-prefixed hex encoding
    pub fn to_hex(&self) -> String {
        hex::encode_prefixed(self.0)
    }
}

impl Deref for Commitment {
    type Target = B256;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<B256> for Commitment {
    fn from(value: B256) -> Self {
        Self(value)
    }
}

impl From<Commitment> for B256 {
    fn from(value: Commitment) -> Self {
        value.0
    }
}

impl FromStr for Commitment {
    type Err = hex::FromHexError;

    /// Parses `0x`-prefixed or bare hex
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        B256::from_str(s).map(Self)
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_prefixed_lowercase() {
        let commitment = Commitment::new([0xAB; 32]);
        let text = commitment.to_string();
        assert_eq!(text, format!("0x{}", "ab".repeat(32)));
    }

    #[test]
    fn test_parse_accepts_bare_hex() {
        let bare = "cd".repeat(32);
        let commitment: Commitment = bare.parse().unwrap();
        assert_eq!(commitment, Commitment::new([0xCD; 32]));
    }

    #[test]
    fn test_parse_rejects_short_hex() {
        assert!("0x1234".parse::<Commitment>().is_err());
    }
}
