use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hmt_core::{ArtifactStore, NetworkContext};
use hmt_deploy::{deploy, summarize, DeployOptions, EtherscanVerifier, JsonRpcClient};

use crate::output::format::format_record;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct DeployArgs {
    /// Target network name (hardhat/localhost skip verification)
    #[arg(long)]
    pub network: String,

    /// Node JSON-RPC endpoint
    #[arg(long, env = "HMT_RPC_URL", default_value = "http://127.0.0.1:8545")]
    pub rpc_url: String,

    /// Funded deployer account (must be unlocked on the node)
    #[arg(long, env = "HMT_DEPLOYER")]
    pub deployer: String,

    /// Compiled contract artifact JSON (contractName + bytecode)
    #[arg(long)]
    pub artifact: PathBuf,

    /// Directory holding deployment records
    #[arg(long, default_value = "deployments")]
    pub deployments_dir: PathBuf,

    /// Confirmation depth to wait for
    #[arg(long, default_value_t = 1)]
    pub confirmations: u32,

    /// Redeploy even if a record already exists for this network
    #[arg(long)]
    pub force: bool,

    /// Flattened Solidity source, required for verification on public networks
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Compiler version string for the explorer (e.g. v0.8.24+commit.e11b9ed9)
    #[arg(long, default_value = "v0.8.24+commit.e11b9ed9")]
    pub compiler_version: String,

    /// Explorer verification API endpoint
    #[arg(long, env = "ETHERSCAN_API_URL")]
    pub etherscan_api_url: Option<String>,

    /// Explorer API key
    #[arg(long, env = "ETHERSCAN_API_KEY")]
    pub etherscan_api_key: Option<String>,
}

pub fn run(args: &DeployArgs, format: OutputFormat) -> Result<()> {
    let artifact = ArtifactStore::load_contract_artifact(&args.artifact)
        .with_context(|| format!("Failed to load artifact {}", args.artifact.display()))?;

    let mut network = NetworkContext::new(&args.network, &args.rpc_url);
    if let Some(api_url) = &args.etherscan_api_url {
        network = network.with_explorer(api_url, args.etherscan_api_key.clone());
    }

    let source = match &args.source {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read source file {}", path.display()))?,
        None => String::new(),
    };

    let chain = JsonRpcClient::new(&args.rpc_url);
    let verifier = EtherscanVerifier::new(&artifact.contract_name, source, &args.compiler_version);
    let store = ArtifactStore::open(&args.deployments_dir);

    let mut opts = DeployOptions::new(&args.deployer);
    opts.confirmations = args.confirmations;
    opts.force = args.force;

    eprintln!("Deploying {}...", artifact.contract_name);
    eprintln!("Deployer address: {}", args.deployer);

    let record = deploy(&chain, &verifier, &store, &artifact, &network, &opts)
        .context("Deployment failed")?;

    eprintln!("{} deployed to: {}", record.contract_name, record.address);
    if !record.verified && !network.is_local() {
        eprintln!("Warning: contract source is not verified (deployment still succeeded)");
    }
    eprintln!();

    match format {
        OutputFormat::Text => print!("{}", summarize(&record)),
        OutputFormat::Json => println!("{}", format_record(&record, format)),
    }
    Ok(())
}
