pub mod deploy;
pub mod show;
pub mod verify;
pub mod version;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy the contract to a network and record the result
    Deploy(deploy::DeployArgs),
    /// Re-attempt source verification for a stored deployment
    Verify(verify::VerifyArgs),
    /// Show the stored deployment record for a network
    Show(show::ShowArgs),
    /// Print version information
    Version,
}
