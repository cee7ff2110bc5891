//! The deployment run itself: one confirmed contract instance per
//! invocation, strictly ordered — submit, wait for confirmation,
//! verify on public networks, persist, report. A failure before the
//! contract is confirmed aborts the run; a verification failure only
//! downgrades the record's `verified` flag.

use chrono::Utc;

use hmt_core::artifacts::ArtifactStore;
use hmt_core::model::{ContractArtifact, DeploymentRecord, NetworkContext};

use crate::chain::ChainClient;
use crate::error::DeployError;
use crate::verify::{VerificationOutcome, Verifier};

/// Options for a deployment run.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Funded account the node signs the creation transaction for.
    pub deployer_address: String,
    /// Confirmation depth to wait for (minimum 1).
    pub confirmations: u32,
    /// Redeploy even when a record for this (network, contract) pair
    /// already exists in the artifact store.
    pub force: bool,
}

impl DeployOptions {
    pub fn new(deployer_address: impl Into<String>) -> Self {
        Self {
            deployer_address: deployer_address.into(),
            confirmations: 1,
            force: false,
        }
    }
}

/// Deploy the contract and produce its deployment record.
///
/// Skips straight to the stored record when the artifact store already
/// has one for this (network, contract) pair and `force` is not set.
/// Verification is attempted only on non-local networks, and its
/// failure never fails the run.
pub fn deploy(
    chain: &dyn ChainClient,
    verifier: &dyn Verifier,
    store: &ArtifactStore,
    artifact: &ContractArtifact,
    network: &NetworkContext,
    opts: &DeployOptions,
) -> Result<DeploymentRecord, DeployError> {
    if !opts.force && store.has_record(&network.name, &artifact.contract_name) {
        let existing = store.load_record(&network.name, &artifact.contract_name)?;
        tracing::info!(
            "Reusing existing deployment of {} on '{}' at {} (use --force to redeploy)",
            existing.contract_name,
            existing.network_name,
            existing.address
        );
        return Ok(existing);
    }

    tracing::info!(
        "Deploying {} to '{}' from {}",
        artifact.contract_name,
        network.name,
        opts.deployer_address
    );

    let tx_hash =
        chain.send_contract_creation(&opts.deployer_address, &artifact.creation_bytecode())?;
    tracing::info!("Creation transaction submitted: {tx_hash}");

    let receipt = chain.wait_for_receipt(&tx_hash, opts.confirmations)?;
    tracing::info!(
        "{} deployed to {}",
        artifact.contract_name,
        receipt.contract_address
    );

    let verified = if network.is_local() {
        tracing::debug!("Local network '{}', skipping source verification", network.name);
        false
    } else {
        match verifier.verify(&receipt.contract_address, network) {
            VerificationOutcome::Succeeded => {
                tracing::info!("Contract source verified on '{}'", network.name);
                true
            }
            VerificationOutcome::Failed(reason) => {
                tracing::warn!("Contract verification failed: {reason}");
                false
            }
        }
    };

    let record = DeploymentRecord {
        contract_name: artifact.contract_name.clone(),
        address: receipt.contract_address,
        deployer_address: opts.deployer_address.clone(),
        network_name: network.name.clone(),
        gas_used: receipt.gas_used,
        transaction_hash: tx_hash,
        created_at: Utc::now(),
        verified,
    };
    store.save_record(&record)?;

    Ok(record)
}

/// Human-readable summary of a deployment record. Pure projection; the
/// CLI decides where it goes.
pub fn summarize(record: &DeploymentRecord) -> String {
    let mut out = String::new();
    out.push_str("Deployment Summary:\n");
    out.push_str(&format!("- Contract: {}\n", record.contract_name));
    out.push_str(&format!("- Contract Address: {}\n", record.address));
    out.push_str(&format!("- Deployer: {}\n", record.deployer_address));
    out.push_str(&format!("- Network: {}\n", record.network_name));
    out.push_str(&format!(
        "- Gas Used: {}\n",
        record.gas_used.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!(
        "- Verified: {}\n",
        if record.verified { "yes" } else { "no" }
    ));
    out
}
