use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Prediction form embedded at compile time
#[derive(RustEmbed)]
#[folder = "assets"]
pub struct FormAssets;

/// Serve the prediction form
pub async fn serve_form() -> Response {
    serve_asset::<FormAssets>("index.html")
}

fn serve_asset<E: RustEmbed>(path: &str) -> Response {
    match E::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}
