use axum::{
    body::Body,
    http::{StatusCode, Uri, header},
    response::{IntoResponse, Redirect},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/webui"]
struct Assets;

fn embedded(path: &str) -> Option<impl IntoResponse> {
    let content = Assets::get(path)?;
    let mime = mime_guess::from_path(path).first_or_octet_stream();
    let mime_header = header::HeaderValue::from_str(mime.as_ref())
        .unwrap_or_else(|_| header::HeaderValue::from_static("application/octet-stream"));
    Some(([(header::CONTENT_TYPE, mime_header)], Body::from(content.data)))
}

pub async fn serve_ui_assets(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches("/ui/");
    let path = if path.is_empty() { "index.html" } else { path };

    match embedded(path) {
        Some(response) => response.into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub async fn root_redirect() -> impl IntoResponse {
    Redirect::to("/ui/")
}

pub async fn serve_ui_index() -> impl IntoResponse {
    match Assets::get("index.html") {
        Some(content) => {
            let mime_header = header::HeaderValue::from_static("text/html; charset=utf-8");
            ([(header::CONTENT_TYPE, mime_header)], Body::from(content.data)).into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
