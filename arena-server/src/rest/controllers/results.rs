use super::{ApiError, compare::ComparisonView};
use crate::ResultStore;
use axum::{
    Json,
    extract::State,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

#[derive(Clone)]
pub struct ResultsController {
    store: ResultStore,
    expose_error_details: bool,
}

impl ResultsController {
    pub fn new(store: ResultStore, expose_error_details: bool) -> Self {
        Self { store, expose_error_details }
    }
}

pub async fn get_results(
    State(controller): State<ResultsController>,
) -> Result<Json<ComparisonView>, ApiError> {
    controller
        .store
        .latest()
        .await
        .map(|c| Json(c.into()))
        .ok_or_else(|| ApiError::not_found("no comparison results"))
}

pub async fn clear_results(State(controller): State<ResultsController>) -> StatusCode {
    controller.store.clear().await;
    StatusCode::NO_CONTENT
}

pub async fn export_results(
    State(controller): State<ResultsController>,
) -> Result<Response, ApiError> {
    let comparison = controller
        .store
        .latest()
        .await
        .ok_or_else(|| ApiError::not_found("no comparison results to export"))?;

    let body = comparison
        .to_export_json()
        .map_err(|e| ApiError::from_arena(e, controller.expose_error_details))?;
    let disposition = format!("attachment; filename=\"{}\"", comparison.export_file_name());
    let disposition = HeaderValue::from_str(&disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/json")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
