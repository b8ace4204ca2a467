use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Ошибки прокси каталога
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Catalog request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Invalid catalog base URL '{0}'")]
    InvalidBaseUrl(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}
