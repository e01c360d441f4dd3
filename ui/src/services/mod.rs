//! Infrastructure Services
//!
//! - **client**: JSON HTTP client, retry policy, and fetch error taxonomy
//! - **config**: endpoint and retry configuration
//!
//! The services are designed to be WASM-first, using the browser fetch
//! backend and cooperative timers.

pub mod client;
pub mod config;
