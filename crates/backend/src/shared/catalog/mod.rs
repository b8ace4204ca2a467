//! Upstream catalog (Strapi-style content API) client used by the listing proxy.

pub mod client;
pub mod error;

pub use client::{CatalogClient, CatalogListRequest, CatalogResponse};
pub use error::ProxyError;
