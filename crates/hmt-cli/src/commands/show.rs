use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hmt_core::model::TRACKER_CONTRACT;
use hmt_core::ArtifactStore;

use crate::output::format::format_record;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct ShowArgs {
    /// Network the contract was deployed to
    #[arg(long)]
    pub network: String,

    /// Contract name within the deployments directory
    #[arg(long, default_value = TRACKER_CONTRACT)]
    pub contract: String,

    /// Directory holding deployment records
    #[arg(long, default_value = "deployments")]
    pub deployments_dir: PathBuf,
}

pub fn run(args: &ShowArgs, format: OutputFormat) -> Result<()> {
    let store = ArtifactStore::open(&args.deployments_dir);
    let record = store
        .load_record(&args.network, &args.contract)
        .with_context(|| format!("Failed to load deployment record for '{}'", args.network))?;

    print!("{}", format_record(&record, format));
    if matches!(format, OutputFormat::Json) {
        println!();
    }
    Ok(())
}
