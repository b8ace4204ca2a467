use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::common::AggregateId;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара в каталоге.
///
/// The catalog sends numeric ids, some deployments send string document ids;
/// both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Numeric(i64),
    Text(String),
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        match self {
            ProductId::Numeric(n) => n.to_string(),
            ProductId::Text(s) => s.clone(),
        }
    }

    fn from_string(s: &str) -> Result<Self, String> {
        if s.is_empty() {
            return Err("Empty product id".to_string());
        }
        Ok(match s.parse::<i64>() {
            Ok(n) => ProductId::Numeric(n),
            Err(_) => ProductId::Text(s.to_string()),
        })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_string())
    }
}

// ============================================================================
// Wire record
// ============================================================================

/// Изображение товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

impl ProductImage {
    /// Абсолютный адрес картинки.
    ///
    /// Catalog media is usually served with a relative path; those get the
    /// media base URL prepended.
    pub fn resolve_src(&self, media_base: &str) -> String {
        if self.url.starts_with("http") {
            self.url.clone()
        } else {
            format!("{}{}", media_base.trim_end_matches('/'), self.url)
        }
    }
}

/// Товар как он пришёл из каталога.
///
/// Every field may be missing; only [`ProductRecord::to_displayable`] decides
/// whether the record can be shown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub images: Option<Vec<ProductImage>>,
}

impl ProductRecord {
    /// Запись из сырого JSON; запись неожиданной формы становится пустой
    /// (и потому не отображается).
    pub fn from_value(value: serde_json::Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn is_displayable(&self) -> bool {
        self.to_displayable().is_some()
    }

    /// Товар с полным набором полей для карточки, иначе `None`.
    ///
    /// Required: an id that is not an empty string, a non-empty name, a price
    /// and at least one image. A price of `0` counts as present, so free items
    /// are shown.
    pub fn to_displayable(&self) -> Option<Product> {
        let id = self
            .id
            .clone()
            .filter(|id| !matches!(id, ProductId::Text(s) if s.is_empty()))?;
        let name = self.name.clone().filter(|n| !n.is_empty())?;
        let price = self.price?;
        let images = self.images.clone().filter(|i| !i.is_empty())?;
        Some(Product {
            id,
            name,
            price,
            images,
        })
    }
}

// ============================================================================
// Displayable product
// ============================================================================

/// Товар, готовый к отображению: все поля на месте, есть хотя бы одна картинка
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub images: Vec<ProductImage>,
}

impl Product {
    pub fn cover(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    pub fn cover_src(&self, media_base: &str) -> String {
        self.cover()
            .map(|image| image.resolve_src(media_base))
            .unwrap_or_default()
    }

    /// Цена в формате витрины
    pub fn price_label(&self) -> String {
        format!("￥{}", self.price)
    }

    pub fn details_path(&self) -> String {
        format!("/product/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ProductRecord {
        ProductRecord {
            id: Some(ProductId::Numeric(7)),
            name: Some("Desk lamp".into()),
            price: Some(129.0),
            images: Some(vec![ProductImage {
                url: "/uploads/lamp.png".into(),
            }]),
        }
    }

    #[test]
    fn test_complete_record_is_displayable() {
        let product = complete().to_displayable().expect("displayable");
        assert_eq!(product.id, ProductId::Numeric(7));
        assert_eq!(product.price_label(), "￥129");
        assert_eq!(product.details_path(), "/product/7");
        assert_eq!(
            product.cover_src("http://localhost:1337"),
            "http://localhost:1337/uploads/lamp.png"
        );
    }

    #[test]
    fn test_missing_fields_are_not_displayable() {
        let mut r = complete();
        r.price = None;
        assert!(!r.is_displayable());

        let mut r = complete();
        r.id = None;
        assert!(!r.is_displayable());

        let mut r = complete();
        r.name = Some(String::new());
        assert!(!r.is_displayable());

        let mut r = complete();
        r.images = Some(Vec::new());
        assert!(!r.is_displayable());

        let mut r = complete();
        r.images = None;
        assert!(!r.is_displayable());

        let mut r = complete();
        r.id = Some(ProductId::Text(String::new()));
        assert!(!r.is_displayable());
    }

    #[test]
    fn test_zero_price_is_displayable() {
        let mut r = complete();
        r.price = Some(0.0);
        let product = r.to_displayable().expect("free item is shown");
        assert_eq!(product.price_label(), "￥0");
    }

    #[test]
    fn test_from_value_tolerates_bad_shape() {
        let r = ProductRecord::from_value(serde_json::json!({
            "id": 4, "name": "Bad", "price": "12", "images": [{ "url": "/d.png" }]
        }));
        assert_eq!(r, ProductRecord::default());
        assert!(!r.is_displayable());

        let r = ProductRecord::from_value(serde_json::json!({
            "id": 5, "name": "Good", "price": 12, "images": [{ "url": "/e.png" }]
        }));
        assert!(r.is_displayable());
    }

    #[test]
    fn test_image_src_resolution() {
        let relative = ProductImage {
            url: "/uploads/a.png".into(),
        };
        assert_eq!(
            relative.resolve_src("http://localhost:1337/"),
            "http://localhost:1337/uploads/a.png"
        );

        let absolute = ProductImage {
            url: "https://cdn.example.com/a.png".into(),
        };
        assert_eq!(
            absolute.resolve_src("http://localhost:1337"),
            "https://cdn.example.com/a.png"
        );
    }

    #[test]
    fn test_id_accepts_number_and_string() {
        let r: ProductRecord = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        assert_eq!(r.id, Some(ProductId::Numeric(12)));

        let r: ProductRecord = serde_json::from_str(r#"{"id": "abc12"}"#).unwrap();
        assert_eq!(r.id, Some(ProductId::Text("abc12".into())));

        assert_eq!(ProductId::from_string("42"), Ok(ProductId::Numeric(42)));
        assert!(ProductId::from_string("").is_err());

        // Путь карточки и разбор параметра маршрута сходятся
        for id in [ProductId::Numeric(7), ProductId::Text("doc-7a".into())] {
            let path = format!("/product/{}", id);
            let param = path.trim_start_matches("/product/");
            assert_eq!(ProductId::from_string(param), Ok(id));
        }
    }
}
