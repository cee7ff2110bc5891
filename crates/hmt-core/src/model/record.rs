use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The contract this tooling exists for.
pub const TRACKER_CONTRACT: &str = "EncryptedHabitMoodTracker";

/// The immutable summary of one contract deployment run.
/// Written once per (network, contract) pair; the only mutation path is
/// `hmt verify` replacing the stored file with `with_verified(true)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub address: String,
    pub deployer_address: String,
    pub network_name: String,
    /// Gas consumed by the creation transaction, as a decimal string.
    /// Absent when the node's receipt omitted it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<String>,
    pub transaction_hash: String,
    pub created_at: DateTime<Utc>,
    /// Whether source verification on a public explorer succeeded.
    /// `false` covers both "skipped on a local network" and "attempted
    /// and failed" — deployment success is independent of this flag.
    pub verified: bool,
}

impl DeploymentRecord {
    /// Copy of this record with the `verified` flag replaced.
    pub fn with_verified(&self, verified: bool) -> Self {
        Self {
            verified,
            ..self.clone()
        }
    }
}

/// Compiled contract artifact in the solc/hardhat shape: the contract
/// name plus its creation bytecode. Only the fields the deployer needs
/// are modeled; the rest of the artifact JSON is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    pub bytecode: String,
}

impl ContractArtifact {
    /// Creation bytecode with the `0x` prefix the JSON-RPC layer expects.
    pub fn creation_bytecode(&self) -> String {
        if self.bytecode.starts_with("0x") {
            self.bytecode.clone()
        } else {
            format!("0x{}", self.bytecode)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> DeploymentRecord {
        DeploymentRecord {
            contract_name: "EncryptedHabitMoodTracker".into(),
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
            deployer_address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".into(),
            network_name: "localhost".into(),
            gas_used: Some("1482044".into()),
            transaction_hash: "0xabc123".into(),
            created_at: Utc::now(),
            verified: false,
        }
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: DeploymentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_gas_used_omitted_when_none() {
        let mut record = sample_record();
        record.gas_used = None;
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("gas_used"));
    }

    #[test]
    fn test_with_verified_flips_only_the_flag() {
        let record = sample_record();
        let verified = record.with_verified(true);
        assert!(verified.verified);
        assert_eq!(verified.address, record.address);
        assert_eq!(verified.created_at, record.created_at);
        assert!(!record.verified);
    }

    #[test]
    fn test_creation_bytecode_prefixing() {
        let with_prefix = ContractArtifact {
            contract_name: "EncryptedHabitMoodTracker".into(),
            bytecode: "0x6080604052".into(),
        };
        assert_eq!(with_prefix.creation_bytecode(), "0x6080604052");

        let bare = ContractArtifact {
            contract_name: "EncryptedHabitMoodTracker".into(),
            bytecode: "6080604052".into(),
        };
        assert_eq!(bare.creation_bytecode(), "0x6080604052");
    }

    #[test]
    fn test_artifact_accepts_hardhat_field_names() {
        let json = r#"{"contractName":"EncryptedHabitMoodTracker","bytecode":"0x6080"}"#;
        let artifact: ContractArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.contract_name, "EncryptedHabitMoodTracker");
    }
}
