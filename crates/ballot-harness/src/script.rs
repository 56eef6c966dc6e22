//! Operation scripts.
//!
//! A script is an ordered list of `[[step]]` tables replayed against a
//! ballot. Each step names the caller; a step without an identifiable caller
//! is rejected before it reaches the ballot.
//!
//! ```toml
//! [[step]]
//! op = "grant"
//! caller = "0x…"
//! target = "0x…"
//!
//! [[step]]
//! op = "vote"
//! caller = "0x…"
//! proposal = 0
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};
use ballot_core::SharedBallot;
use ballot_types::Address;
use crate::error::HarnessError;

/// Ballot operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Grant,
    Delegate,
    Vote,
}

/// Raw script entry, as written in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub op: Op,
    pub caller: Option<String>,
    pub target: Option<String>,
    /// Proposal index for `vote`; a negative value rejects the step
    pub proposal: Option<i64>,
}

/// Step with its caller and arguments resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Grant { caller: Address, target: Address },
    Delegate { caller: Address, target: Address },
    Vote { caller: Address, proposal: usize },
}

impl Step {
    /// Map the step's strings onto principals.
    pub fn resolve(&self, step: usize) -> Result<Call, HarnessError> {
        let caller = match self.caller.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => parse_address(s, "caller", step)?,
            _ => return Err(HarnessError::MissingCaller { step }),
        };

        match self.op {
            Op::Grant => Ok(Call::Grant {
                caller,
                target: self.target_address(step)?,
            }),
            Op::Delegate => Ok(Call::Delegate {
                caller,
                target: self.target_address(step)?,
            }),
            Op::Vote => {
                let value = self
                    .proposal
                    .ok_or(HarnessError::MissingField { step, field: "proposal" })?;
                let proposal = usize::try_from(value)
                    .map_err(|_| HarnessError::NegativeProposal { step, value })?;
                Ok(Call::Vote { caller, proposal })
            }
        }
    }

    fn target_address(&self, step: usize) -> Result<Address, HarnessError> {
        let target = self
            .target
            .as_deref()
            .ok_or(HarnessError::MissingField { step, field: "target" })?;
        parse_address(target.trim(), "target", step)
    }
}

fn parse_address(s: &str, field: &str, step: usize) -> Result<Address, HarnessError> {
    s.parse::<Address>().map_err(|source| HarnessError::InvalidAddress {
        field: format!("step {} {}", step, field),
        source,
    })
}

impl Call {
    /// Apply the call to the ballot.
    pub fn apply(&self, ballot: &SharedBallot) -> Result<(), HarnessError> {
        match *self {
            Call::Grant { caller, target } => ballot.grant_right(caller, target)?,
            Call::Delegate { caller, target } => ballot.delegate(caller, target)?,
            Call::Vote { caller, proposal } => ballot.vote(caller, proposal)?,
        }
        Ok(())
    }
}

/// Ordered list of steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default, rename = "step")]
    pub steps: Vec<Step>,
}

impl Script {
    /// Load a script from file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read script '{}': {}", path.display(), e))?;
        Self::parse(&contents)
            .map_err(|e| anyhow::anyhow!("Failed to parse script '{}': {}", path.display(), e))
    }

    /// Parse a script from TOML text.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Replay every step in order. Rejected steps are logged and skipped.
    pub fn run(&self, ballot: &SharedBallot) -> RunReport {
        let mut report = RunReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            let step_no = index + 1;
            let result = step.resolve(step_no).and_then(|call| call.apply(ballot));

            match result {
                Ok(()) => {
                    info!("Step {} ({:?}) applied", step_no, step.op);
                    report.applied += 1;
                }
                Err(e) => {
                    warn!("Step {} ({:?}) rejected: {}", step_no, step.op, e);
                    report.rejected.push((step_no, e));
                }
            }
        }

        report
    }
}

/// Outcome of a script run.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Number of steps the ballot accepted
    pub applied: usize,
    /// Rejected steps (1-based step number, reason)
    pub rejected: Vec<(usize, HarnessError)>,
}
