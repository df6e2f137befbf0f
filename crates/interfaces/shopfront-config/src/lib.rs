//! Central configuration constants for endpoints and network defaults.

/// Default store backend base. Override with `SHOPFRONT_API_URL`.
pub const DEFAULT_API_BASE: &str = "http://localhost:8081/api/shop";

/// Path of the product collection endpoint, relative to the API base.
pub const CATALOG_PATH: &str = "product";

/// Path of the order endpoint, relative to the API base.
pub const ORDER_PATH: &str = "order";

/// Per-request timeout for API calls, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

pub const USER_AGENT: &str = concat!("shopfront/", env!("CARGO_PKG_VERSION"));

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "SHOPFRONT_API_URL";

/// Resolves the API base: environment override first, built-in default
/// otherwise.
pub fn api_base() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}
