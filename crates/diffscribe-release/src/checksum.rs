// Copyright 2026 Oxide Computer Company

//! Artifact checksum types.

use crate::ChecksumParseError;
use std::{fmt, str::FromStr};

/// A SHA-256 checksum for a release artifact.
///
/// This type guarantees the contained value is 32 bytes, displayed as 64
/// lowercase hex characters.
///
/// # Parsing
///
/// Parse from a hex string using [`FromStr`]:
///
/// ```
/// use diffscribe_release::Checksum;
///
/// let checksum: Checksum =
///     "3d321df3ced0015e060cee650cf4f314a3222f037640e8bf3470857170d3080f"
///         .parse()
///         .unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checksum([u8; 32]);

impl Checksum {
    /// Returns the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for Checksum {
    type Err = ChecksumParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.len();
        if len != 64 {
            return Err(ChecksumParseError::InvalidLength(len));
        }
        let mut bytes = [0; 32];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(ChecksumParseError::InvalidHex)?;
        Ok(Checksum(bytes))
    }
}

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        hex::encode(self.0).fmt(f)
    }
}
