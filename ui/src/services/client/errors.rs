use thiserror::Error;

/// Failures surfaced by [`ApiClient`](super::ApiClient) and the retry layer.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {message}")]
    Network { message: String },

    #[error("HTTP error: {status}")]
    Status { status: u16 },

    #[error("Response decode error: {message}")]
    Decode { message: String },

    #[error("Request failed after {attempts} attempts: {last}")]
    RetriesExhausted {
        attempts: u32,
        #[source]
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Whether a retry could plausibly succeed. Network failures and server
    /// errors are transient; client errors and malformed bodies are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Network { .. } => true,
            FetchError::Status { status } => *status >= 500,
            FetchError::Decode { .. } => false,
            FetchError::RetriesExhausted { .. } => false,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            FetchError::Status {
                status: status.as_u16(),
            }
        } else if error.is_decode() {
            FetchError::Decode {
                message: error.to_string(),
            }
        } else {
            FetchError::Network {
                message: error.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_errors_are_retryable() {
        assert!(FetchError::Status { status: 500 }.is_retryable());
        assert!(FetchError::Status { status: 503 }.is_retryable());
        assert!(FetchError::Network {
            message: "connection reset".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_client_errors_are_not_retryable() {
        assert!(!FetchError::Status { status: 400 }.is_retryable());
        assert!(!FetchError::Status { status: 404 }.is_retryable());
        assert!(!FetchError::Decode {
            message: "expected value".to_string()
        }
        .is_retryable());
    }
}
