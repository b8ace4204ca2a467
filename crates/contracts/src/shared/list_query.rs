//! Состояние списка товаров, которое живёт в адресной строке.
//!
//! `ListQuery` is the single source of truth for what the storefront shows:
//! page, search text and sort. It is parsed from address parameters with
//! defaults for anything missing or invalid, and written back when the user
//! navigates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Поле сортировки, поддерживаемое каталогом
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortField {
    #[default]
    #[serde(rename = "createdAt")]
    CreatedAt,
    #[serde(rename = "price")]
    Price,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Price => "price",
        }
    }

    /// Anything other than `price` falls back to `createdAt`.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("price") => SortField::Price,
            _ => SortField::CreatedAt,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Anything other than `asc` falls back to `desc`.
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value {
            Some("asc") => SortDirection::Asc,
            _ => SortDirection::Desc,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Варианты сортировки, которые видит пользователь в меню
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOption {
    Newest,
    Oldest,
    PriceHighToLow,
    PriceLowToHigh,
}

impl SortOption {
    /// Menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::Newest,
        SortOption::Oldest,
        SortOption::PriceHighToLow,
        SortOption::PriceLowToHigh,
    ];

    pub fn from_parts(field: SortField, direction: SortDirection) -> Self {
        match (field, direction) {
            (SortField::CreatedAt, SortDirection::Desc) => SortOption::Newest,
            (SortField::CreatedAt, SortDirection::Asc) => SortOption::Oldest,
            (SortField::Price, SortDirection::Desc) => SortOption::PriceHighToLow,
            (SortField::Price, SortDirection::Asc) => SortOption::PriceLowToHigh,
        }
    }

    pub fn field(&self) -> SortField {
        match self {
            SortOption::Newest | SortOption::Oldest => SortField::CreatedAt,
            SortOption::PriceHighToLow | SortOption::PriceLowToHigh => SortField::Price,
        }
    }

    pub fn direction(&self) -> SortDirection {
        match self {
            SortOption::Newest | SortOption::PriceHighToLow => SortDirection::Desc,
            SortOption::Oldest | SortOption::PriceLowToHigh => SortDirection::Asc,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Newest => "Newest",
            SortOption::Oldest => "Oldest",
            SortOption::PriceHighToLow => "Price: High to Low",
            SortOption::PriceLowToHigh => "Price: Low to High",
        }
    }
}

/// Сырые параметры адресной строки, как они пришли из URL.
///
/// Every field is optional and untyped; [`ListQuery::derive`] turns this into
/// a fully resolved query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(rename = "sortBy", default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder", default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

impl ListQueryParams {
    /// Собрать параметры через функцию доступа (например, из карты параметров роутера)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            search: lookup("search"),
            page: lookup("page"),
            sort_by: lookup("sortBy"),
            sort_order: lookup("sortOrder"),
        }
    }
}

/// Нормализованный запрос списка товаров
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListQuery {
    pub page: u32,
    pub search: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            search: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
        }
    }
}

impl ListQuery {
    /// Разбор параметров адресной строки с подстановкой значений по умолчанию.
    ///
    /// Never fails. `page` must be a positive integer, otherwise it becomes 1.
    pub fn derive(params: &ListQueryParams) -> Self {
        let page = params
            .page
            .as_deref()
            .map(str::trim)
            .and_then(|p| p.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1);

        Self {
            page,
            search: params.search.clone().unwrap_or_default(),
            sort_field: SortField::parse_or_default(params.sort_by.as_deref()),
            sort_direction: SortDirection::parse_or_default(params.sort_order.as_deref()),
        }
    }

    pub fn sort_option(&self) -> SortOption {
        SortOption::from_parts(self.sort_field, self.sort_direction)
    }

    /// Same search and sort, different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// New search text, back to the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            page: 1,
            search: search.into(),
            ..self.clone()
        }
    }

    /// New sort, back to the first page.
    pub fn with_sort(&self, field: SortField, direction: SortDirection) -> Self {
        Self {
            page: 1,
            sort_field: field,
            sort_direction: direction,
            ..self.clone()
        }
    }

    /// Параметры для записи в адресную строку.
    ///
    /// `search` is omitted when empty and `page` when it is 1; sort is always
    /// written.
    pub fn to_address_params(&self) -> ListQueryParams {
        ListQueryParams {
            search: (!self.search.is_empty()).then(|| self.search.clone()),
            page: (self.page > 1).then(|| self.page.to_string()),
            sort_by: Some(self.sort_field.as_str().to_string()),
            sort_order: Some(self.sort_direction.as_str().to_string()),
        }
    }

    /// Параметры запроса к прокси каталога
    pub fn to_proxy_params(&self, page_size: u32) -> ProductListParams {
        ProductListParams {
            page: Some(self.page),
            page_size: Some(page_size),
            search: Some(self.search.clone()),
            sort_by: Some(self.sort_field.as_str().to_string()),
            sort_order: Some(self.sort_direction.as_str().to_string()),
        }
    }
}

/// Query string of `GET /api/products` on the listing proxy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(rename = "pageSize", default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(rename = "sortBy", default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder", default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> ListQueryParams {
        ListQueryParams::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
    }

    #[test]
    fn test_derive_defaults() {
        let query = ListQuery::derive(&ListQueryParams::default());
        assert_eq!(query, ListQuery::default());
        assert_eq!(query.page, 1);
        assert_eq!(query.search, "");
        assert_eq!(query.sort_field, SortField::CreatedAt);
        assert_eq!(query.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_derive_full() {
        let query = ListQuery::derive(&params(&[
            ("page", "3"),
            ("search", "lamp"),
            ("sortBy", "price"),
            ("sortOrder", "asc"),
        ]));
        assert_eq!(query.page, 3);
        assert_eq!(query.search, "lamp");
        assert_eq!(query.sort_field, SortField::Price);
        assert_eq!(query.sort_direction, SortDirection::Asc);
        assert_eq!(query.sort_option(), SortOption::PriceLowToHigh);
    }

    #[test]
    fn test_derive_invalid_values_fall_back() {
        for bad_page in ["0", "-3", "abc", "2.5", ""] {
            let query = ListQuery::derive(&params(&[
                ("page", bad_page),
                ("sortBy", "bogus"),
                ("sortOrder", "sideways"),
            ]));
            assert_eq!(query.page, 1, "page={bad_page}");
            assert_eq!(query.sort_field, SortField::CreatedAt);
            assert_eq!(query.sort_direction, SortDirection::Desc);
        }
    }

    #[test]
    fn test_derive_is_idempotent() {
        let raw = params(&[("page", "2"), ("search", "chair"), ("sortBy", "price")]);
        let first = ListQuery::derive(&raw);
        let second = ListQuery::derive(&raw);
        assert_eq!(first, second);

        // Запись в адрес и повторный разбор дают тот же запрос
        let reparsed = ListQuery::derive(&first.to_address_params());
        assert_eq!(first, reparsed);
    }

    #[test]
    fn test_address_params_omit_defaults() {
        let params = ListQuery::default().to_address_params();
        assert_eq!(params.search, None);
        assert_eq!(params.page, None);
        assert_eq!(params.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(params.sort_order.as_deref(), Some("desc"));

        let params = ListQuery::default().with_page(4).to_address_params();
        assert_eq!(params.page.as_deref(), Some("4"));
    }

    #[test]
    fn test_with_search_and_sort_reset_page() {
        let query = ListQuery {
            page: 5,
            search: "old".into(),
            sort_field: SortField::Price,
            sort_direction: SortDirection::Asc,
        };

        let searched = query.with_search("lamp");
        assert_eq!(searched.page, 1);
        assert_eq!(searched.search, "lamp");
        assert_eq!(searched.sort_field, SortField::Price);
        assert_eq!(searched.sort_direction, SortDirection::Asc);

        let sorted = query.with_sort(SortField::CreatedAt, SortDirection::Desc);
        assert_eq!(sorted.page, 1);
        assert_eq!(sorted.search, "old");
        assert_eq!(sorted.sort_option(), SortOption::Newest);
    }

    #[test]
    fn test_sort_option_round_trip_and_labels() {
        for option in SortOption::ALL {
            assert_eq!(SortOption::from_parts(option.field(), option.direction()), option);
        }
        assert_eq!(SortOption::Newest.label(), "Newest");
        assert_eq!(SortOption::PriceHighToLow.label(), "Price: High to Low");
    }

    #[test]
    fn test_proxy_params() {
        let params = ListQuery::default().with_search("lamp").to_proxy_params(12);
        assert_eq!(params.page, Some(1));
        assert_eq!(params.page_size, Some(12));
        assert_eq!(params.search.as_deref(), Some("lamp"));
        assert_eq!(params.sort_by.as_deref(), Some("createdAt"));
        assert_eq!(params.sort_order.as_deref(), Some("desc"));
    }
}
