//! Страница списка товаров: формат ответа каталога и ошибки загрузки.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::aggregate::{Product, ProductRecord};

/// Ошибки загрузки страницы товаров
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Proxy unreachable or answered with a non-2xx status.
    #[error("Network error: {0}")]
    Network(String),

    /// Body is not JSON or lacks `data` / `meta.pagination`.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Метаданные пагинации каталога
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    pub page_count: u32,
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListMeta {
    pub pagination: Pagination,
}

/// Ответ `GET /api/products` (формат каталога, прокси отдаёт его без изменений).
///
/// Entries of `data` stay raw JSON: a single record of unexpected shape must
/// not fail the whole page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub data: Vec<serde_json::Value>,
    pub meta: ListMeta,
}

/// Одна загруженная страница товаров
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageResult {
    /// Records in catalog order, including ones that cannot be displayed.
    pub items: Vec<ProductRecord>,
    pub total_count: u64,
    pub page_count: u32,
}

impl From<ProductListResponse> for PageResult {
    fn from(response: ProductListResponse) -> Self {
        Self {
            items: response
                .data
                .into_iter()
                .map(ProductRecord::from_value)
                .collect(),
            total_count: response.meta.pagination.total,
            page_count: response.meta.pagination.page_count,
        }
    }
}

impl PageResult {
    /// Разбор тела ответа прокси
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        serde_json::from_str::<ProductListResponse>(body)
            .map(PageResult::from)
            .map_err(|e| FetchError::Malformed(e.to_string()))
    }

    /// Разбор ответа прокси вместе со статусом.
    ///
    /// Any non-2xx status is a `Network` error regardless of the body.
    pub fn from_response(status: u16, body: &str) -> Result<Self, FetchError> {
        if !(200..300).contains(&status) {
            return Err(FetchError::Network(format!(
                "Failed to fetch products: {}",
                status
            )));
        }
        Self::from_json(body)
    }

    /// Товары, пригодные для карточек; счётчики страницы не меняются
    pub fn displayable(&self) -> Vec<Product> {
        self.items
            .iter()
            .filter_map(ProductRecord::to_displayable)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "name": format!("Item {id}"),
            "price": 10 + id,
            "images": [{ "url": format!("/uploads/{id}.png") }],
            "createdAt": "2025-01-01T00:00:00.000Z"
        })
    }

    #[test]
    fn test_parse_catalog_page() {
        let items: Vec<_> = (1..=12).map(item).collect();
        let body = json!({
            "data": items,
            "meta": { "pagination": { "page": 1, "pageSize": 12, "pageCount": 3, "total": 30 } }
        })
        .to_string();

        let page = PageResult::from_json(&body).unwrap();
        assert_eq!(page.items.len(), 12);
        assert_eq!(page.displayable().len(), 12);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total_count, 30);
    }

    #[test]
    fn test_incomplete_record_filtered_counts_kept() {
        let body = json!({
            "data": [
                { "id": 1, "name": "No price", "images": [{ "url": "/a.png" }] },
                item(2)
            ],
            "meta": { "pagination": { "pageCount": 1, "total": 2 } }
        })
        .to_string();

        let page = PageResult::from_json(&body).unwrap();
        assert_eq!(page.displayable().len(), 1);
        assert_eq!(page.total_count, 2);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_bad_record_dropped_alone() {
        let body = json!({
            "data": [
                item(1),
                { "id": 2, "name": "Pending", "price": 5, "images": [{ "id": 9, "name": "pending.png" }] },
                { "id": 3, "name": "Text price", "price": "19.99", "images": [{ "url": "/c.png" }] },
                "garbage"
            ],
            "meta": { "pagination": { "pageCount": 1, "total": 4 } }
        })
        .to_string();

        let page = PageResult::from_json(&body).unwrap();
        assert_eq!(page.items.len(), 4);
        let shown = page.displayable();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Item 1");
        assert_eq!(page.total_count, 4);
        assert_eq!(page.page_count, 1);
    }

    #[test]
    fn test_from_response_status() {
        let good = r#"{"data": [], "meta": {"pagination": {"pageCount": 0, "total": 0}}}"#;

        for status in [404, 502, 301] {
            match PageResult::from_response(status, good) {
                Err(FetchError::Network(msg)) => assert!(msg.contains(&status.to_string())),
                other => panic!("expected Network for {status}, got {other:?}"),
            }
        }

        assert!(matches!(
            PageResult::from_response(200, "<html>oops</html>"),
            Err(FetchError::Malformed(_))
        ));
        assert_eq!(PageResult::from_response(200, good), Ok(PageResult::default()));
    }

    #[test]
    fn test_empty_page_is_valid() {
        let body = r#"{"data": [], "meta": {"pagination": {"pageCount": 0, "total": 0}}}"#;
        let page = PageResult::from_json(body).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.page_count, 0);
    }

    #[test]
    fn test_malformed_bodies() {
        for body in [
            "not json",
            r#"{"data": []}"#,
            r#"{"meta": {"pagination": {"pageCount": 1, "total": 1}}}"#,
            r#"{"data": [], "meta": {}}"#,
            r#"{"data": null, "meta": {"pagination": {"pageCount": 1, "total": 1}}}"#,
        ] {
            match PageResult::from_json(body) {
                Err(FetchError::Malformed(_)) => {}
                other => panic!("expected Malformed for {body}, got {other:?}"),
            }
        }
    }
}
