//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the listing proxy listens on
const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// When the page is served by the backend itself the API is same-origin.
/// Otherwise (e.g. `trunk serve` on another port) requests go to the backend
/// port on the same host.
///
/// # Returns
/// - API base URL like "http://localhost:3000", or "" for same-origin
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port == BACKEND_PORT.to_string() {
        return String::new();
    }
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products?page=2");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
