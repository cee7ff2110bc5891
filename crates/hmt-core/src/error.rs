use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No deployment record for {contract} on network '{network}' (run `hmt deploy` first)")]
    RecordNotFound { network: String, contract: String },

    #[error("Invalid contract artifact {path}: {reason}")]
    InvalidArtifact { path: String, reason: String },
}
