//! Deployment configuration.
//!
//! Loads the ballot parameters (chairperson and proposal names) and logging
//! settings from a TOML file.

use serde::{Deserialize, Serialize};
use std::path::Path;
use ballot_core::Ballot;
use ballot_types::{Address, ProposalName};
use crate::error::HarnessError;

/// Harness configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Chairperson address (hex or bech32m)
    pub chairperson: String,
    /// Proposal names, text or 0x-prefixed bytes32 hex
    pub proposals: Vec<String>,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HarnessConfig {
    /// Load configuration from file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: HarnessConfig = toml::from_str(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        Ok(config)
    }

    /// Save configuration to file.
    pub fn to_file(&self, path: &Path) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|e| anyhow::anyhow!("Failed to write config file '{}': {}", path.display(), e))?;
        Ok(())
    }

    /// Validate configuration.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.proposals.is_empty() {
            anyhow::bail!("At least one proposal is required");
        }

        let chairperson = self.chairperson_address()?;
        if chairperson.is_zero() {
            anyhow::bail!("Chairperson cannot be the zero address");
        }

        self.proposal_names()?;
        Ok(())
    }

    /// Parsed chairperson.
    pub fn chairperson_address(&self) -> Result<Address, HarnessError> {
        self.chairperson
            .parse::<Address>()
            .map_err(|source| HarnessError::InvalidAddress {
                field: "chairperson".to_string(),
                source,
            })
    }

    /// Parsed proposal names, in order.
    pub fn proposal_names(&self) -> Result<Vec<ProposalName>, HarnessError> {
        self.proposals
            .iter()
            .map(|name| {
                name.parse::<ProposalName>().map_err(|source| HarnessError::InvalidProposalName {
                    name: name.clone(),
                    source,
                })
            })
            .collect()
    }

    /// Construct the ballot described by this config.
    pub fn build_ballot(&self) -> Result<Ballot, HarnessError> {
        Ok(Ballot::new(self.chairperson_address()?, self.proposal_names()?)?)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level or filter directive
    pub level: String,
    /// JSON output instead of pretty
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}
