use thiserror::Error;

/// Errors that can occur when building or parsing ballot value types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypesError {
    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Invalid address length: expected 20, got {0}")]
    InvalidAddressLength(usize),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Bech32 error: {0}")]
    Bech32Error(String),

    #[error("Proposal name too long: max {max} bytes, got {actual}")]
    ProposalNameTooLong { max: usize, actual: usize },
}

impl From<hex::FromHexError> for TypesError {
    fn from(e: hex::FromHexError) -> Self {
        TypesError::InvalidHex(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_too_long_display() {
        let err = TypesError::ProposalNameTooLong { max: 32, actual: 40 };
        assert!(err.to_string().contains("32"));
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_from_hex_error() {
        let err: TypesError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, TypesError::InvalidHex(_)));
    }
}
