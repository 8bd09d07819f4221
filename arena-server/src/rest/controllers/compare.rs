use super::ApiError;
use crate::{ResultStore, ServerConfig};
use arena_core::{AgentConfig, Comparator, Comparison, ComparisonRequest, SummaryRow};
use arena_telemetry::info;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct CompareController {
    comparator: Comparator,
    store: ResultStore,
    default_region: String,
    expose_error_details: bool,
}

impl CompareController {
    pub fn new(config: &ServerConfig, store: ResultStore) -> Self {
        Self {
            comparator: Comparator::new(config.invoker_loader.clone()),
            store,
            default_region: config.default_region.clone(),
            expose_error_details: config.security.expose_error_details,
        }
    }
}

/// Body of `POST /api/compare`. A missing region means the server default.
#[derive(Debug, Deserialize)]
pub struct CompareBody {
    pub prompt: String,
    pub region: Option<String>,
    pub agents: Vec<AgentConfig>,
}

/// A comparison plus its summary table, as rendered by the UI.
#[derive(Debug, Serialize)]
pub struct ComparisonView {
    #[serde(flatten)]
    pub comparison: Comparison,
    pub summary: Vec<SummaryRow>,
}

impl From<Comparison> for ComparisonView {
    fn from(comparison: Comparison) -> Self {
        let summary = comparison.summary();
        Self { comparison, summary }
    }
}

pub async fn run_comparison(
    State(controller): State<CompareController>,
    body: Result<Json<CompareBody>, JsonRejection>,
) -> Result<Json<ComparisonView>, ApiError> {
    let Json(body) = body?;
    let region = body.region.unwrap_or_else(|| controller.default_region.clone());
    let req = ComparisonRequest::new(body.prompt, body.agents).with_region(region);

    let comparison = controller
        .comparator
        .compare(req)
        .await
        .map_err(|e| ApiError::from_arena(e, controller.expose_error_details))?;

    info!(
        comparison.id = %comparison.id,
        succeeded = comparison.success_count(),
        total = comparison.results.len(),
        "comparison stored"
    );
    controller.store.replace(comparison.clone()).await;

    Ok(Json(comparison.into()))
}
