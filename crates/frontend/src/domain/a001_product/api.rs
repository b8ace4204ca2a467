use contracts::domain::a001_product::{FetchError, PageResult};
use contracts::shared::list_query::ListQuery;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Загрузить страницу товаров через прокси каталога
pub async fn fetch_page(query: &ListQuery, page_size: u32) -> Result<PageResult, FetchError> {
    let params = query.to_proxy_params(page_size);
    let qs = serde_qs::to_string(&params)
        .map_err(|e| FetchError::Network(format!("Failed to encode query: {}", e)))?;

    let response = Request::get(&api_url(&format!("/api/products?{}", qs)))
        .send()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to send request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Network(format!("Failed to read response: {}", e)))?;

    PageResult::from_response(status, &body)
}
