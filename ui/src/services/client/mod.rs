//! HTTP client with bounded retry
//!
//! - **http**: JSON GET/POST over the WASM fetch backend
//! - **retry**: fixed-delay retry policy around retryable failures
//! - **errors**: common fetch error taxonomy

pub mod errors;
pub mod http;
pub mod retry;

pub use errors::FetchError;
pub use http::ApiClient;
pub use retry::RetryPolicy;
