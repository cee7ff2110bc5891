use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hmt_core::model::TRACKER_CONTRACT;
use hmt_core::{ArtifactStore, NetworkContext};
use hmt_deploy::{EtherscanVerifier, VerificationOutcome, Verifier};

#[derive(Args)]
pub struct VerifyArgs {
    /// Network the contract was deployed to
    #[arg(long)]
    pub network: String,

    /// Contract name within the deployments directory
    #[arg(long, default_value = TRACKER_CONTRACT)]
    pub contract: String,

    /// Directory holding deployment records
    #[arg(long, default_value = "deployments")]
    pub deployments_dir: PathBuf,

    /// Flattened Solidity source to submit
    #[arg(long)]
    pub source: PathBuf,

    /// Compiler version string for the explorer
    #[arg(long, default_value = "v0.8.24+commit.e11b9ed9")]
    pub compiler_version: String,

    /// Explorer verification API endpoint
    #[arg(long, env = "ETHERSCAN_API_URL")]
    pub etherscan_api_url: String,

    /// Explorer API key
    #[arg(long, env = "ETHERSCAN_API_KEY")]
    pub etherscan_api_key: Option<String>,
}

pub fn run(args: &VerifyArgs) -> Result<()> {
    let store = ArtifactStore::open(&args.deployments_dir);
    let record = store
        .load_record(&args.network, &args.contract)
        .context("No deployment to verify")?;

    let network = NetworkContext::new(&args.network, "")
        .with_explorer(&args.etherscan_api_url, args.etherscan_api_key.clone());
    if network.is_local() {
        anyhow::bail!(
            "Network '{}' is a local node; there is nothing to verify",
            args.network
        );
    }

    let source = std::fs::read_to_string(&args.source)
        .with_context(|| format!("Failed to read source file {}", args.source.display()))?;
    let verifier = EtherscanVerifier::new(&record.contract_name, source, &args.compiler_version);

    eprintln!("Verifying {} at {}...", record.contract_name, record.address);
    match verifier.verify(&record.address, &network) {
        VerificationOutcome::Succeeded => {
            store.save_record(&record.with_verified(true))?;
            println!("Contract verified successfully");
            Ok(())
        }
        VerificationOutcome::Failed(reason) => {
            anyhow::bail!("Contract verification failed: {reason}")
        }
    }
}
