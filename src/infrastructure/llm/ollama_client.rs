use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::AnalysisRequest;
use crate::presentation::config::OllamaSettings;

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

const USER_ROLE: &str = "user";

/// Client for Ollama's native `/api/chat` endpoint. Requests are not
/// streamed and carry no timeout: the call waits as long as the model runs.
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_settings(settings: &OllamaSettings) -> Self {
        Self::new(&settings.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_OLLAMA_BASE_URL)
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    #[tracing::instrument(skip(self, request), fields(model = %request.model, base_url = %self.base_url))]
    async fn complete(&self, request: &AnalysisRequest) -> Result<String, LlmClientError> {
        let request_body = ChatRequest {
            model: request.model.as_str(),
            messages: vec![ChatMessage {
                role: USER_ROLE.to_string(),
                content: request.prompt.clone(),
            }],
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Model backend unreachable");
                LlmClientError::ApiRequestFailed(e.to_string())
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(body = %body, "Model not found on backend");
            return Err(LlmClientError::ModelNotFound(
                request.model.as_str().to_string(),
            ));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, detail
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        Ok(chat_response.message.content)
    }
}
