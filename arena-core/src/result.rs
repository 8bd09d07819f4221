//! Per-agent result slots and the comparison that groups them.

use crate::{AgentConfig, ArenaError, ErrorKind, Result};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// Display format used for timestamps in the summary table.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// What happened when one agent was invoked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Success { response: String },
    Failure { kind: ErrorKind, error: String },
}

impl Outcome {
    pub fn from_error(err: &ArenaError) -> Self {
        Self::Failure { kind: err.kind(), error: err.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResult {
    pub model: String,
    pub agent_id: String,
    pub alias_id: String,
    pub prompt: String,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub timestamp: DateTime<Utc>,
    pub latency_ms: u64,
}

impl InvocationResult {
    pub fn new(agent: &AgentConfig, prompt: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            model: agent.name.clone(),
            agent_id: agent.agent_id.clone(),
            alias_id: agent.alias_id.clone(),
            prompt: prompt.into(),
            outcome,
            timestamp: Utc::now(),
            latency_ms: 0,
        }
    }

    #[must_use]
    pub fn with_latency_ms(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }

    pub fn response(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { response } => Some(response),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Success { .. } => None,
            Outcome::Failure { error, .. } => Some(error),
        }
    }

    pub fn local_timestamp(&self) -> String {
        self.timestamp.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string()
    }
}

/// One row of the comparison summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub model: String,
    pub status: String,
    /// Character count of the response, `None` when the agent failed.
    pub response_length: Option<usize>,
    pub timestamp: String,
}

impl From<&InvocationResult> for SummaryRow {
    fn from(result: &InvocationResult) -> Self {
        Self {
            model: result.model.clone(),
            status: if result.is_success() { "Success" } else { "Failed" }.to_string(),
            response_length: result.response().map(|r| r.chars().count()),
            timestamp: result.local_timestamp(),
        }
    }
}

/// A single prompt fanned out to every configured agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub id: String,
    pub prompt: String,
    pub region: String,
    pub started_at: DateTime<Utc>,
    /// One slot per agent, in configuration order.
    pub results: Vec<InvocationResult>,
}

impl Comparison {
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.results.iter().map(SummaryRow::from).collect()
    }

    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn to_export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn export_file_name(&self) -> String {
        format!(
            "bedrock_comparison_{}.json",
            self.started_at.with_timezone(&Local).format("%Y%m%d_%H%M%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn agent(name: &str) -> AgentConfig {
        AgentConfig::new(name, "X1").with_defaults(0)
    }

    fn comparison() -> Comparison {
        Comparison {
            id: "cmp-1".to_string(),
            prompt: "Summarize this text".to_string(),
            region: "us-west-2".to_string(),
            started_at: Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap(),
            results: vec![
                InvocationResult::new(
                    &agent("Model-A"),
                    "Summarize this text",
                    Outcome::Success { response: "héllo".to_string() },
                ),
                InvocationResult::new(
                    &agent("Model-B"),
                    "Summarize this text",
                    Outcome::from_error(&ArenaError::Throttled("rate exceeded".into())),
                ),
            ],
        }
    }

    #[test]
    fn test_outcome_accessors() {
        let cmp = comparison();
        assert!(cmp.results[0].is_success());
        assert_eq!(cmp.results[0].response(), Some("héllo"));
        assert_eq!(cmp.results[0].error(), None);
        assert!(!cmp.results[1].is_success());
        assert_eq!(cmp.results[1].error(), Some("Throttled: rate exceeded"));
        assert_eq!(cmp.success_count(), 1);
    }

    #[test]
    fn test_summary_counts_characters() {
        let rows = comparison().summary();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].model, "Model-A");
        assert_eq!(rows[0].status, "Success");
        assert_eq!(rows[0].response_length, Some(5));
        assert_eq!(rows[1].status, "Failed");
        assert_eq!(rows[1].response_length, None);
        assert_eq!(rows[0].timestamp.len(), "2026-03-04 05:06:07".len());
    }

    #[test]
    fn test_result_serializes_flat_outcome() {
        let cmp = comparison();
        let value = serde_json::to_value(&cmp.results[1]).unwrap();
        assert_eq!(value["model"], "Model-B");
        assert_eq!(value["status"], "failure");
        assert_eq!(value["kind"], "throttled");
        assert!(value.get("response").is_none());

        let back: InvocationResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, cmp.results[1]);
    }

    #[test]
    fn test_export_json_and_file_name() {
        let cmp = comparison();
        let json = cmp.to_export_json().unwrap();
        assert!(json.contains("\"prompt\": \"Summarize this text\""));

        let name = cmp.export_file_name();
        assert!(name.starts_with("bedrock_comparison_"));
        assert!(name.ends_with(".json"));
        assert_eq!(name.len(), "bedrock_comparison_20260304_050607.json".len());
    }
}
