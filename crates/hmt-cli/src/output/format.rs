use hmt_core::model::DeploymentRecord;
use hmt_deploy::summarize;

use super::OutputFormat;

pub fn format_record(record: &DeploymentRecord, fmt: OutputFormat) -> String {
    match fmt {
        OutputFormat::Json => serde_json::to_string_pretty(record).unwrap_or_default(),
        OutputFormat::Text => summarize(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_record() -> DeploymentRecord {
        DeploymentRecord {
            contract_name: "EncryptedHabitMoodTracker".into(),
            address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".into(),
            deployer_address: "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266".into(),
            network_name: "localhost".into(),
            gas_used: Some("1482044".into()),
            transaction_hash: "0xdeadbeef".into(),
            created_at: Utc::now(),
            verified: false,
        }
    }

    #[test]
    fn test_text_format_is_the_summary() {
        let out = format_record(&sample_record(), OutputFormat::Text);
        assert!(out.starts_with("Deployment Summary:"));
        assert!(out.contains("- Network: localhost"));
    }

    #[test]
    fn test_json_format_round_trips() {
        let record = sample_record();
        let out = format_record(&record, OutputFormat::Json);
        let parsed: DeploymentRecord = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, record);
    }
}
