use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use contracts::shared::list_query::{SortDirection, SortField};
use serde::Deserialize;

use crate::shared::app_state::AppState;
use crate::shared::catalog::{CatalogListRequest, ProxyError};

/// Параметры `GET /api/products` в сыром виде.
///
/// Values are strings so that a malformed number falls back to a default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

fn positive(value: Option<&str>) -> Option<u32> {
    value
        .and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|v| *v >= 1)
}

impl ListProductsQuery {
    pub fn to_catalog_request(&self, default_page_size: u32) -> CatalogListRequest {
        CatalogListRequest {
            page: positive(self.page.as_deref()).unwrap_or(1),
            page_size: positive(self.page_size.as_deref()).unwrap_or(default_page_size),
            search: self.search.clone().unwrap_or_default(),
            sort_field: SortField::parse_or_default(self.sort_by.as_deref()),
            sort_direction: SortDirection::parse_or_default(self.sort_order.as_deref()),
        }
    }
}

/// GET /api/products
///
/// Пробрасывает запрос в каталог и отдаёт его ответ без изменений.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Response, ProxyError> {
    let request = query.to_catalog_request(state.config.catalog.default_page_size);
    tracing::info!(
        "Listing products: page={} size={} search='{}' sort={}:{}",
        request.page,
        request.page_size,
        request.search,
        request.sort_field,
        request.sort_direction
    );

    let upstream = state.catalog.fetch_listing(&request).await?;
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}
