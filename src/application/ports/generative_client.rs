use async_trait::async_trait;

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Sends one prompt and returns the backend's first text response
    /// unmodified.
    async fn generate(&self, prompt: &str) -> Result<String, GenerativeClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerativeClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
