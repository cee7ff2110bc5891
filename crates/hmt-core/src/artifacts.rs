//! On-disk deployment artifact store, one JSON file per
//! (network, contract) pair: `<root>/<network>/<Contract>.json`.
//! The deploy workflow consults it for run-once-per-network
//! idempotency and writes the record of every successful run.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::model::{ContractArtifact, DeploymentRecord};

pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open a store rooted at the given deployments directory. The
    /// directory is created lazily on first save.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, network: &str, contract: &str) -> PathBuf {
        self.root.join(network).join(format!("{contract}.json"))
    }

    /// Whether a deployment record already exists for this pair.
    pub fn has_record(&self, network: &str, contract: &str) -> bool {
        self.record_path(network, contract).is_file()
    }

    pub fn load_record(
        &self,
        network: &str,
        contract: &str,
    ) -> Result<DeploymentRecord, CoreError> {
        let path = self.record_path(network, contract);
        if !path.is_file() {
            return Err(CoreError::RecordNotFound {
                network: network.to_string(),
                contract: contract.to_string(),
            });
        }
        let data = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Persist a record, replacing any previous one for the same pair.
    /// Returns the path written.
    pub fn save_record(&self, record: &DeploymentRecord) -> Result<PathBuf, CoreError> {
        let path = self.record_path(&record.network_name, &record.contract_name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        tracing::debug!("Saved deployment record to {}", path.display());
        Ok(path)
    }

    /// Load a compiled contract artifact (solc/hardhat JSON) from an
    /// arbitrary path. Rejects artifacts with empty bytecode early so
    /// the failure names the file rather than surfacing later as an
    /// RPC error.
    pub fn load_contract_artifact(path: &Path) -> Result<ContractArtifact, CoreError> {
        let data = fs::read_to_string(path)?;
        let artifact: ContractArtifact =
            serde_json::from_str(&data).map_err(|e| CoreError::InvalidArtifact {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        let code = artifact.bytecode.trim_start_matches("0x");
        if code.is_empty() {
            return Err(CoreError::InvalidArtifact {
                path: path.display().to_string(),
                reason: "empty bytecode (is this an interface or abstract contract?)".into(),
            });
        }
        if !code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CoreError::InvalidArtifact {
                path: path.display().to_string(),
                reason: "bytecode is not a hex string".into(),
            });
        }
        Ok(artifact)
    }
}
