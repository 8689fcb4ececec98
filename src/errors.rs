use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Signature verification failed: {0}")]
    Unauthorized(String),

    #[error("Malformed webhook request: {0}")]
    Malformed(String),

    #[error("Failed to access LINE API: {0}")]
    PlatformApi(String),

    #[error("Failed to access completion API: {0}")]
    Completion(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        RelayError::Http(error.to_string())
    }
}

impl From<anyhow::Error> for RelayError {
    fn from(error: anyhow::Error) -> Self {
        RelayError::PlatformApi(error.to_string())
    }
}
