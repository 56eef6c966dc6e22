//! Fixed-width proposal names.
//!
//! A name occupies exactly 32 bytes. Shorter inputs are right-padded with
//! zero bytes, so `"Proposal 1"` and `0x50726f706f73616c2031` name the same
//! proposal.

use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// 32-byte proposal name.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ProposalName([u8; 32]);

impl ProposalName {
    pub const LEN: usize = 32;

    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Build from UTF-8 text, right-padded with zeros.
    pub fn from_text(text: &str) -> Result<Self, TypesError> {
        Self::from_slice(text.as_bytes())
    }

    /// Build from a hex string, with or without the `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, TypesError> {
        let stripped = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        let bytes = hex::decode(stripped)?;
        Self::from_slice(&bytes)
    }

    /// Build from at most 32 bytes, right-padded with zeros.
    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        if slice.len() > Self::LEN {
            return Err(TypesError::ProposalNameTooLong {
                max: Self::LEN,
                actual: slice.len(),
            });
        }
        let mut bytes = [0u8; 32];
        bytes[..slice.len()].copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Significant bytes, i.e. without the zero padding.
    pub fn trimmed(&self) -> &[u8] {
        let end = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        &self.0[..end]
    }

    /// Name as text. Invalid UTF-8 is replaced lossily.
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(self.trimmed()).into_owned()
    }

    /// Full 32 bytes as `0x`-prefixed hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Display for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}

impl fmt::Debug for ProposalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProposalName({:?})", self.to_text())
    }
}

/// `0x`-prefixed input is hex; anything else is taken as text.
impl FromStr for ProposalName {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.starts_with("0x") || s.starts_with("0X") {
            Self::from_hex(s)
        } else {
            Self::from_text(s)
        }
    }
}

impl AsRef<[u8]> for ProposalName {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq<str> for ProposalName {
    fn eq(&self, other: &str) -> bool {
        self.trimmed() == other.as_bytes()
    }
}

impl PartialEq<&str> for ProposalName {
    fn eq(&self, other: &&str) -> bool {
        self.trimmed() == other.as_bytes()
    }
}
