use serde::{Deserialize, Serialize};

use crate::services::client::RetryPolicy;

/// Endpoint and retry configuration, built once at the page root and passed
/// down by props. Defaults target the public placeholder API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Gallery listing endpoint (GET)
    pub gallery_url: String,

    /// Temperature submission endpoint (POST JSON)
    pub submit_url: String,

    /// Retry behavior for gallery loads; submissions are single-attempt
    pub retry: RetryPolicy,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            gallery_url: "https://jsonplaceholder.typicode.com/users".to_string(),
            submit_url: "https://jsonplaceholder.typicode.com/posts".to_string(),
            retry: RetryPolicy::default(),
        }
    }
}
