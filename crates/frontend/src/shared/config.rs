//! Настройки витрины на стороне клиента.

use std::time::Duration;

/// Public base URL of catalog media, used for relative image paths.
///
/// Set at build time: `CATALOG_MEDIA_URL=http://localhost:1337 trunk build`.
pub fn media_base() -> &'static str {
    option_env!("CATALOG_MEDIA_URL").unwrap_or("")
}

/// Параметры списка товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSettings {
    /// Товаров на странице
    pub page_size: u32,
    /// Minimum time the skeleton stays on screen after a fetch starts.
    pub min_loading: Duration,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            page_size: 12,
            min_loading: Duration::from_millis(300),
        }
    }
}
