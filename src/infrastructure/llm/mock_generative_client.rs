use crate::application::ports::{GenerativeClient, GenerativeClientError};

pub struct MockGenerativeClient;

#[async_trait::async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerativeClientError> {
        Ok("## Mock summary".to_string())
    }
}
