//! Serde implementations for ballot-types.
//!
//! Both types serialize as strings so they can be used as JSON map keys.

use crate::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// Address
impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Address::from_str(&s).map_err(serde::de::Error::custom)
    }
}

// ProposalName - full 32 bytes as hex, lossless
impl Serialize for ProposalName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_hex().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProposalName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProposalName::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_address_serde_json() {
        let original = Address::from_bytes([1u8; 20]);
        let json = serde_json::to_string(&original).unwrap();
        assert!(json.contains("vote1"));
        let deserialized: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_address_as_map_key() {
        let mut map = HashMap::new();
        map.insert(Address::from_bytes([7u8; 20]), 3u64);
        let json = serde_json::to_string(&map).unwrap();
        let back: HashMap<Address, u64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }

    #[test]
    fn test_proposal_name_accepts_text() {
        let name: ProposalName = serde_json::from_str("\"Proposal 2\"").unwrap();
        assert_eq!(name, "Proposal 2");
        let json = serde_json::to_string(&name).unwrap();
        assert!(json.starts_with("\"0x50726f706f73616c2032"));
    }
}
