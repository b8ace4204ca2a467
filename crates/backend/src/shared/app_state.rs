use std::sync::Arc;

use crate::shared::catalog::{CatalogClient, ProxyError};
use crate::shared::config::Config;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<CatalogClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ProxyError> {
        let catalog = CatalogClient::new(&config.catalog)?;
        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        })
    }
}
