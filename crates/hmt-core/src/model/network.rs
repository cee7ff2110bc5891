use serde::{Deserialize, Serialize};

/// Network names that refer to a local development node. Deployments to
/// these skip source verification entirely.
const LOCAL_NETWORK_NAMES: [&str; 2] = ["hardhat", "localhost"];

/// Everything the deployment workflow needs to know about a target
/// network: its name, how to reach a node, and explorer credentials
/// for source verification on public networks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkContext {
    pub name: String,
    pub rpc_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_api_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explorer_api_key: Option<String>,
}

impl NetworkContext {
    pub fn new(name: impl Into<String>, rpc_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rpc_url: rpc_url.into(),
            explorer_api_url: None,
            explorer_api_key: None,
        }
    }

    pub fn with_explorer(mut self, api_url: impl Into<String>, api_key: Option<String>) -> Self {
        self.explorer_api_url = Some(api_url.into());
        self.explorer_api_key = api_key;
        self
    }

    /// True for the in-process test network and the local dev node.
    pub fn is_local(&self) -> bool {
        LOCAL_NETWORK_NAMES.contains(&self.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_networks() {
        assert!(NetworkContext::new("hardhat", "http://127.0.0.1:8545").is_local());
        assert!(NetworkContext::new("localhost", "http://127.0.0.1:8545").is_local());
    }

    #[test]
    fn test_public_networks_are_not_local() {
        assert!(!NetworkContext::new("sepolia", "https://rpc.sepolia.org").is_local());
        assert!(!NetworkContext::new("mainnet", "https://eth.example").is_local());
        // Name matching is exact, not prefix-based.
        assert!(!NetworkContext::new("localhost2", "http://127.0.0.1:8545").is_local());
    }
}
