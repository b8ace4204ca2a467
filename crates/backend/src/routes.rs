use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::shared::app_state::AppState;
use crate::{handlers, system};

/// API роуты без статики
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/products",
            get(handlers::a001_products::list_products),
        )
        .with_state(state)
}

/// Конфигурация всех роутов приложения
///
/// Unknown paths fall back to the built frontend; unknown files fall back to
/// `index.html` so that client-side routes like `/product/:id` load.
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = std::path::PathBuf::from(&state.config.server.static_dir);
    let index = static_dir.join("index.html");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    api_routes(state)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}
