use reqwest::Client;
use serde::Serialize;
use tracing::instrument;

use super::errors::FetchError;

/// Thin JSON client over the browser fetch backend.
///
/// Success is purely HTTP-status based; any non-2xx response becomes
/// [`FetchError::Status`] before the body is looked at.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::builder()
                .user_agent("room-climate-board/1.0")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    #[instrument(skip(self), err)]
    pub async fn get_json(&self, url: &str) -> Result<serde_json::Value, FetchError> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Decode {
                message: e.to_string(),
            })?;
        Ok(value)
    }

    #[instrument(skip(self, body), err)]
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<serde_json::Value, FetchError> {
        let response = self
            .http_client
            .post(url)
            .header("Content-Type", "application/json; charset=utf-8")
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        let value = response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| FetchError::Decode {
                message: e.to_string(),
            })?;
        Ok(value)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
