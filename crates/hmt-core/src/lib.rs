//! Core types for the EncryptedHabitMoodTracker deployment tooling.
//!
//! Three concerns live here:
//! - the deployment data model ([`model::DeploymentRecord`],
//!   [`model::NetworkContext`], [`model::ContractArtifact`]),
//! - the input guard ([`guard`]) — the range predicates and the
//!   truncating display formatter that gate values before they reach
//!   the encryption layer,
//! - the on-disk deployment artifact store ([`ArtifactStore`]).

pub mod artifacts;
pub mod error;
pub mod guard;
pub mod model;

pub use artifacts::ArtifactStore;
pub use error::CoreError;
pub use model::{ContractArtifact, DeploymentRecord, NetworkContext};
