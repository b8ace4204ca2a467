pub mod aggregate;
pub mod listing;

pub use aggregate::{Product, ProductId, ProductImage, ProductRecord};
pub use listing::{FetchError, PageResult, ProductListResponse};
