pub mod api;

// Re-exports for convenience
pub use api::{default_http_client, ApiError, StoreApi};
