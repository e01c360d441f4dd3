use std::future::Future;

use serde::{Deserialize, Serialize};

use super::errors::FetchError;
use crate::console_warn;
use crate::utils::sleep_ms;

/// Bounded retry with a fixed inter-attempt delay.
///
/// An operation gets `1 + max_retries` attempts at most. Retries only apply
/// to failures where [`FetchError::is_retryable`] holds; a 4xx or a decode
/// failure propagates immediately.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Additional attempts after the first failure
    pub max_retries: u32,

    /// Fixed delay between attempts in milliseconds
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            delay_ms: 1000,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay_ms: u32) -> Self {
        Self {
            max_retries,
            delay_ms,
        }
    }

    /// Run `op` until it succeeds, fails with a non-retryable error, or the
    /// retry budget is exhausted. The final failure is wrapped in
    /// [`FetchError::RetriesExhausted`] with the total attempt count.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let max_attempts = self.max_retries + 1;
        let mut attempt = 0;
        let mut last_error = None;

        while attempt < max_attempts {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    attempt += 1;

                    if !e.is_retryable() || attempt >= max_attempts {
                        return Err(FetchError::RetriesExhausted {
                            attempts: attempt,
                            last: Box::new(e),
                        });
                    }

                    console_warn!(
                        "[RetryPolicy] Request failed (attempt {}/{}), retrying in {}ms: {}",
                        attempt,
                        max_attempts,
                        self.delay_ms,
                        e
                    );
                    last_error = Some(e);

                    sleep_ms(self.delay_ms).await;
                }
            }
        }

        // Unreachable for max_attempts >= 1; kept for the degenerate case.
        Err(FetchError::RetriesExhausted {
            attempts: attempt,
            last: Box::new(last_error.unwrap_or(FetchError::Network {
                message: "no attempts were made".to_string(),
            })),
        })
    }
}
