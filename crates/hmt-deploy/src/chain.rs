//! JSON-RPC access to an EVM node. Blocking and sequential: the
//! deployment run has exactly one suspension point, the receipt/
//! confirmation wait, and that is a plain polling loop here.

use std::time::Duration;

use serde_json::{json, Value};

use crate::error::ChainError;

/// What the orchestrator needs from a creation-transaction receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct TxReceipt {
    pub contract_address: String,
    /// Decimal string, absent when the node omitted gasUsed.
    pub gas_used: Option<String>,
    pub block_number: u64,
}

/// Capability for submitting the creation transaction and waiting for
/// it to be confirmed. Tests substitute a fake; [`JsonRpcClient`] is
/// the real thing.
pub trait ChainClient {
    /// Submit a contract-creation transaction from `from` (an account
    /// the node can sign for) carrying `bytecode` as calldata. Returns
    /// the transaction hash.
    fn send_contract_creation(&self, from: &str, bytecode: &str) -> Result<String, ChainError>;

    /// Block until the transaction is mined and buried under at least
    /// `confirmations` blocks (a mined transaction counts as one).
    fn wait_for_receipt(&self, tx_hash: &str, confirmations: u32) -> Result<TxReceipt, ChainError>;
}

/// `ChainClient` over plain HTTP JSON-RPC. Uses `eth_sendTransaction`,
/// so the deployer account must be unlocked on the node — the normal
/// state of affairs on hardhat/anvil dev nodes.
pub struct JsonRpcClient {
    agent: ureq::Agent,
    url: String,
    poll_interval: Duration,
    max_polls: u32,
}

impl JsonRpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        let timeout = Duration::from_secs(30);
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .build();
        Self {
            agent,
            url: url.into(),
            poll_interval: Duration::from_secs(2),
            max_polls: 150,
        }
    }

    /// Override the receipt polling cadence (interval between polls and
    /// total number of polls before giving up).
    pub fn with_polling(mut self, interval: Duration, max_polls: u32) -> Self {
        self.poll_interval = interval;
        self.max_polls = max_polls;
        self
    }

    fn call(&self, method: &str, params: Value) -> Result<Value, ChainError> {
        let payload = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        tracing::trace!("RPC call {method}");

        let response = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(payload)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => ChainError::Transport(format!("HTTP {code}")),
                ureq::Error::Transport(t) => ChainError::Transport(t.to_string()),
            })?;

        let body: Value = response
            .into_json()
            .map_err(|e| ChainError::InvalidResponse(e.to_string()))?;

        if let Some(err) = body.get("error") {
            return Err(ChainError::Rpc {
                code: err.get("code").and_then(Value::as_i64).unwrap_or(0),
                message: err
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
            });
        }

        body.get("result")
            .cloned()
            .ok_or_else(|| ChainError::InvalidResponse("missing result field".into()))
    }

    fn block_number(&self) -> Result<u64, ChainError> {
        let result = self.call("eth_blockNumber", json!([]))?;
        result
            .as_str()
            .and_then(parse_hex_u64)
            .ok_or_else(|| ChainError::InvalidResponse(format!("bad block number: {result}")))
    }

    fn receipt_once(&self, tx_hash: &str) -> Result<Option<TxReceipt>, ChainError> {
        let result = self.call("eth_getTransactionReceipt", json!([tx_hash]))?;
        if result.is_null() {
            return Ok(None);
        }

        let status = result.get("status").and_then(Value::as_str);
        if status == Some("0x0") {
            return Err(ChainError::CreationReverted {
                tx_hash: tx_hash.to_string(),
            });
        }

        let contract_address = result
            .get("contractAddress")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ChainError::InvalidResponse("receipt has no contractAddress".into())
            })?
            .to_string();

        let block_number = result
            .get("blockNumber")
            .and_then(Value::as_str)
            .and_then(parse_hex_u64)
            .ok_or_else(|| ChainError::InvalidResponse("receipt has no blockNumber".into()))?;

        let gas_used = result
            .get("gasUsed")
            .and_then(Value::as_str)
            .and_then(parse_hex_u64)
            .map(|g| g.to_string());

        Ok(Some(TxReceipt {
            contract_address,
            gas_used,
            block_number,
        }))
    }
}

impl ChainClient for JsonRpcClient {
    fn send_contract_creation(&self, from: &str, bytecode: &str) -> Result<String, ChainError> {
        let result = self.call(
            "eth_sendTransaction",
            json!([{ "from": from, "data": bytecode }]),
        )?;
        result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ChainError::InvalidResponse(format!("bad transaction hash: {result}")))
    }

    fn wait_for_receipt(&self, tx_hash: &str, confirmations: u32) -> Result<TxReceipt, ChainError> {
        let confirmations = confirmations.max(1);

        for _ in 0..self.max_polls {
            if let Some(receipt) = self.receipt_once(tx_hash)? {
                let depth = self
                    .block_number()?
                    .saturating_sub(receipt.block_number)
                    .saturating_add(1);
                if depth >= u64::from(confirmations) {
                    return Ok(receipt);
                }
                tracing::debug!(
                    "Transaction {tx_hash} at {depth}/{confirmations} confirmations"
                );
            } else {
                tracing::debug!("Transaction {tx_hash} not yet mined");
            }
            std::thread::sleep(self.poll_interval);
        }

        Err(ChainError::ConfirmationTimeout {
            tx_hash: tx_hash.to_string(),
        })
    }
}

/// Parse a `0x`-prefixed hex quantity.
fn parse_hex_u64(s: &str) -> Option<u64> {
    u64::from_str_radix(s.strip_prefix("0x")?, 16).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_u64() {
        assert_eq!(parse_hex_u64("0x0"), Some(0));
        assert_eq!(parse_hex_u64("0x169d3c"), Some(1482044));
        assert_eq!(parse_hex_u64("12"), None);
        assert_eq!(parse_hex_u64("0xzz"), None);
    }
}
