use async_trait::async_trait;

use crate::domain::AnalysisRequest;

/// A model-serving process answering one chat request synchronously.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, request: &AnalysisRequest) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("model '{0}' is not available on the backend; run `ollama pull {0}` first")]
    ModelNotFound(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
