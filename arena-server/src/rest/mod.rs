pub mod controllers;

pub use controllers::{ApiError, CompareController, ResultsController, SettingsController};

use crate::{ResultStore, ServerConfig, web_ui};
use arena_telemetry::warn;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

/// Build CORS layer based on security configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.security.allowed_origins.is_empty() {
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> =
            config.security.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Create the server application with a fresh result store
pub fn create_app(config: ServerConfig) -> Router {
    create_app_with_store(config, ResultStore::new())
}

/// Create the server application around an existing result store
pub fn create_app_with_store(config: ServerConfig, store: ResultStore) -> Router {
    if config.security.allowed_origins.is_empty() {
        warn!("CORS allows any origin; set allowed origins outside local use");
    }

    let expose = config.security.expose_error_details;
    let compare_controller = CompareController::new(&config, store.clone());
    let results_controller = ResultsController::new(store, expose);
    let settings_controller = SettingsController::new(config.clone());

    let api_router = Router::new()
        .route("/health", get(health_check))
        .route("/config", get(controllers::settings::get_settings))
        .with_state(settings_controller)
        .route("/compare", post(controllers::compare::run_comparison))
        .with_state(compare_controller)
        .route(
            "/results",
            get(controllers::results::get_results).delete(controllers::results::clear_results),
        )
        .route("/results/export", get(controllers::results::export_results))
        .with_state(results_controller);

    let ui_router = Router::new()
        .route("/", get(web_ui::root_redirect))
        .route("/ui/", get(web_ui::serve_ui_index))
        .route("/ui/{*path}", get(web_ui::serve_ui_assets));

    let app = Router::new().nest("/api", api_router).merge(ui_router);

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                axum::http::StatusCode::REQUEST_TIMEOUT,
                config.security.request_timeout,
            ))
            .layer(DefaultBodyLimit::max(config.security.max_body_size))
            .layer(build_cors_layer(&config))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_FRAME_OPTIONS,
                HeaderValue::from_static("DENY"),
            )),
    )
}

async fn health_check() -> &'static str {
    "OK"
}
