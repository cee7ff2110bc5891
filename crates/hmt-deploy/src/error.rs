use hmt_core::error::CoreError;

/// Failures talking to the node. All of these are fatal for a
/// deployment run; there is no retry at this layer.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Node unreachable: {0}")]
    Transport(String),

    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Unexpected RPC response: {0}")]
    InvalidResponse(String),

    #[error("Timed out waiting for transaction {tx_hash}")]
    ConfirmationTimeout { tx_hash: String },

    #[error("Contract creation transaction {tx_hash} reverted")]
    CreationReverted { tx_hash: String },
}

#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
