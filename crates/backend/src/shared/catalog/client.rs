use axum::body::Bytes;
use contracts::shared::list_query::{SortDirection, SortField};

use super::error::ProxyError;
use crate::shared::config::CatalogConfig;

/// Запрос страницы товаров к каталогу в нормализованном виде
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogListRequest {
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl CatalogListRequest {
    /// Параметры в синтаксисе каталога (фильтры, сортировка, пагинация)
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("populate", "*".to_string()),
            ("pagination[page]", self.page.to_string()),
            ("pagination[pageSize]", self.page_size.to_string()),
        ];
        if !self.search.is_empty() {
            pairs.push(("filters[name][$containsi]", self.search.clone()));
        }
        pairs.push((
            "sort",
            format!("{}:{}", self.sort_field, self.sort_direction),
        ));
        pairs
    }
}

/// Ответ каталога как есть: статус и тело
#[derive(Debug, Clone)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: Bytes,
}

/// HTTP-клиент каталога товаров
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl CatalogClient {
    pub fn new(config: &CatalogConfig) -> Result<Self, ProxyError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ProxyError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_token: config.api_token.clone(),
        })
    }

    pub fn products_url(&self) -> String {
        format!("{}/api/products", self.base_url)
    }

    /// Получить страницу товаров через GET /api/products
    pub async fn fetch_listing(
        &self,
        request: &CatalogListRequest,
    ) -> Result<CatalogResponse, ProxyError> {
        let url = self.products_url();
        let query = request.query_pairs();

        tracing::debug!("=== CATALOG REQUEST ===\nGET {}\nQuery: {:?}", url, query);

        let mut builder = self
            .client
            .get(&url)
            .header("Accept", "application/json")
            .query(&query);

        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let preview: String = String::from_utf8_lossy(&body).chars().take(500).collect();
            tracing::warn!("Catalog answered {}: {}", status, preview);
        } else {
            tracing::debug!("Catalog answered {} ({} bytes)", status, body.len());
        }

        Ok(CatalogResponse {
            status: status.as_u16(),
            body,
        })
    }
}
