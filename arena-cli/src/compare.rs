use crate::config::ArenaConfig;
use anyhow::{Result, bail};
use arena_bedrock::{BedrockAgentConfig, BedrockInvokerLoader};
use arena_core::{Comparator, Comparison, ComparisonRequest, InvokerLoader, Outcome};
use std::sync::Arc;

/// Run one comparison and return the report to print.
pub async fn run_compare(
    file: &ArenaConfig,
    loader: Arc<dyn InvokerLoader>,
    region: String,
    prompt: String,
    json: bool,
) -> Result<String> {
    if file.agents.is_empty() {
        bail!("no agents configured; add [[agents]] entries to the config file");
    }

    let request = ComparisonRequest::new(prompt, file.agents()).with_region(region);
    let comparison = Comparator::new(loader).compare(request).await?;

    if json { Ok(comparison.to_export_json()?) } else { Ok(render_report(&comparison)) }
}

pub fn bedrock_loader(file: &ArenaConfig, region: &str) -> Arc<dyn InvokerLoader> {
    let mut config = BedrockAgentConfig::new(region);
    if let Some(url) = &file.endpoint_url {
        config = config.with_endpoint_url(url);
    }
    Arc::new(BedrockInvokerLoader::new(config))
}

/// Plain-text report: one block per agent, then the summary table.
pub fn render_report(comparison: &Comparison) -> String {
    let mut out = format!("Prompt: {}\nRegion: {}\n", comparison.prompt, comparison.region);

    for result in &comparison.results {
        let (status, text) = match &result.outcome {
            Outcome::Success { response } => ("Response received", response),
            Outcome::Failure { error, .. } => ("Error occurred", error),
        };
        out.push_str(&format!(
            "\n=== {} ===\n{status}\n{text}\nTimestamp: {} ({} ms)\n",
            result.model,
            result.local_timestamp(),
            result.latency_ms
        ));
    }

    let rows = comparison.summary();
    let width = rows.iter().map(|r| r.model.chars().count()).max().unwrap_or(0).max("Model".len());
    out.push_str("\nComparison Summary\n");
    out.push_str(&format!(
        "{:<width$}  {:<7}  {:>15}  Timestamp\n",
        "Model", "Status", "Response Length"
    ));
    for row in rows {
        let length = row.response_length.map_or_else(|| "N/A".to_string(), |n| n.to_string());
        out.push_str(&format!(
            "{:<width$}  {:<7}  {:>15}  {}\n",
            row.model, row.status, length, row.timestamp
        ));
    }
    out
}
