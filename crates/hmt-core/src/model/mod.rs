pub mod network;
pub mod record;

pub use network::NetworkContext;
pub use record::{ContractArtifact, DeploymentRecord, TRACKER_CONTRACT};
