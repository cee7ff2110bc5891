//! Source verification on a public explorer. Best-effort by contract:
//! every failure mode, including transport errors and missing explorer
//! configuration, folds into [`VerificationOutcome::Failed`] — nothing
//! here can abort a deployment.

use serde_json::Value;

use hmt_core::model::NetworkContext;

#[derive(Debug, Clone, PartialEq)]
pub enum VerificationOutcome {
    Succeeded,
    Failed(String),
}

impl VerificationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Capability for publishing contract source to an explorer so third
/// parties can check the deployed bytecode against it.
pub trait Verifier {
    fn verify(&self, address: &str, network: &NetworkContext) -> VerificationOutcome;
}

/// `Verifier` against an Etherscan-compatible API. Submits the
/// flattened source for the deployed address; an accepted submission
/// counts as success (the explorer finishes compilation
/// asynchronously on its side).
pub struct EtherscanVerifier {
    agent: ureq::Agent,
    contract_name: String,
    source: String,
    compiler_version: String,
}

impl EtherscanVerifier {
    pub fn new(
        contract_name: impl Into<String>,
        source: impl Into<String>,
        compiler_version: impl Into<String>,
    ) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout(std::time::Duration::from_secs(30))
                .build(),
            contract_name: contract_name.into(),
            source: source.into(),
            compiler_version: compiler_version.into(),
        }
    }

    fn submit(&self, address: &str, api_url: &str, api_key: &str) -> Result<(), String> {
        let response = self
            .agent
            .post(api_url)
            .send_form(&[
                ("apikey", api_key),
                ("module", "contract"),
                ("action", "verifysourcecode"),
                ("contractaddress", address),
                ("contractname", self.contract_name.as_str()),
                ("sourceCode", self.source.as_str()),
                ("compilerversion", self.compiler_version.as_str()),
                ("codeformat", "solidity-single-file"),
                // The tracker contract takes no constructor arguments.
                ("constructorArguements", ""),
            ])
            .map_err(|e| e.to_string())?;

        let body: Value = response.into_json().map_err(|e| e.to_string())?;
        let status = body.get("status").and_then(Value::as_str);
        if status == Some("1") {
            Ok(())
        } else {
            let message = body
                .get("result")
                .and_then(Value::as_str)
                .unwrap_or("explorer rejected the submission");
            Err(message.to_string())
        }
    }
}

impl Verifier for EtherscanVerifier {
    fn verify(&self, address: &str, network: &NetworkContext) -> VerificationOutcome {
        let Some(api_url) = network.explorer_api_url.as_deref() else {
            return VerificationOutcome::Failed(format!(
                "no explorer API configured for network '{}'",
                network.name
            ));
        };
        let api_key = network.explorer_api_key.as_deref().unwrap_or("");

        match self.submit(address, api_url, api_key) {
            Ok(()) => VerificationOutcome::Succeeded,
            Err(reason) => VerificationOutcome::Failed(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_explorer_config_is_a_failed_outcome_not_an_error() {
        let verifier = EtherscanVerifier::new("EncryptedHabitMoodTracker", "", "v0.8.24");
        let network = NetworkContext::new("sepolia", "https://rpc.sepolia.org");
        let outcome = verifier.verify("0x5FbDB2315678afecb367f032d93F642f64180aa3", &network);
        assert!(matches!(outcome, VerificationOutcome::Failed(_)));
    }

    #[test]
    fn test_outcome_predicates() {
        assert!(VerificationOutcome::Succeeded.is_success());
        assert!(!VerificationOutcome::Failed("nope".into()).is_success());
    }
}
