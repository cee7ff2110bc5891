//! The deployment workflow: submit the contract-creation transaction,
//! wait for confirmation, attempt source verification on public
//! networks, persist and report the deployment record.
//!
//! The chain and the explorer are reached through the [`ChainClient`]
//! and [`Verifier`] capabilities so tests can substitute fakes;
//! [`JsonRpcClient`] and [`EtherscanVerifier`] are the real
//! implementations.

pub mod chain;
pub mod error;
pub mod orchestrator;
pub mod verify;

pub use chain::{ChainClient, JsonRpcClient, TxReceipt};
pub use error::{ChainError, DeployError};
pub use orchestrator::{deploy, summarize, DeployOptions};
pub use verify::{EtherscanVerifier, VerificationOutcome, Verifier};
