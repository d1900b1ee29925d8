use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use scholia::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use scholia::application::services::{AnalysisError, AnalysisService, MAX_PROMPT_CHARS};
use scholia::domain::{AnalysisRequest, ContentType, Document, ModelChoice};

struct FixedTextLoader(String);

#[async_trait::async_trait]
impl FileLoader for FixedTextLoader {
    async fn extract_text(&self, _data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        Ok(self.0.clone())
    }
}

struct FailingLoader;

#[async_trait::async_trait]
impl FileLoader for FailingLoader {
    async fn extract_text(&self, _data: &[u8], _doc: &Document) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed(
            "failed to parse PDF".to_string(),
        ))
    }
}

/// Echoes the prompt back and counts calls.
#[derive(Default)]
struct EchoLlmClient {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl LlmClient for EchoLlmClient {
    async fn complete(&self, request: &AnalysisRequest) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(request.prompt.clone())
    }
}

struct MissingModelClient;

#[async_trait::async_trait]
impl LlmClient for MissingModelClient {
    async fn complete(&self, request: &AnalysisRequest) -> Result<String, LlmClientError> {
        Err(LlmClientError::ModelNotFound(
            request.model.as_str().to_string(),
        ))
    }
}

fn pdf_document() -> Document {
    Document::new("paper.pdf".to_string(), ContentType::Pdf, 10)
}

#[tokio::test]
async fn given_extracted_text_when_analyzing_then_returns_backend_output_and_model() {
    let llm = Arc::new(EchoLlmClient::default());
    let service = AnalysisService::new(
        Arc::new(FixedTextLoader("Findings.".to_string())),
        Arc::clone(&llm),
    );

    let result = service
        .analyze(b"ignored", &pdf_document(), ModelChoice::Qwen25Coder7b)
        .await
        .unwrap();

    assert_eq!(result.model, ModelChoice::Qwen25Coder7b);
    assert!(result.content.ends_with("TEXT: Findings."));
    assert_eq!(llm.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn given_text_over_limit_when_analyzing_then_prompt_is_truncated() {
    let llm = Arc::new(EchoLlmClient::default());
    let text = format!("{}{}", "b".repeat(MAX_PROMPT_CHARS), "tail");
    let service = AnalysisService::new(Arc::new(FixedTextLoader(text)), llm);

    let result = service
        .analyze(b"", &pdf_document(), ModelChoice::Phi4Mini)
        .await
        .unwrap();

    assert!(result.content.ends_with(&"b".repeat(MAX_PROMPT_CHARS)));
    assert!(!result.content.contains("tail"));
}

#[tokio::test]
async fn given_multibyte_text_at_limit_when_analyzing_then_prompt_keeps_every_char() {
    let llm = Arc::new(EchoLlmClient::default());
    let text = "\u{e9}".repeat(MAX_PROMPT_CHARS);
    let service = AnalysisService::new(Arc::new(FixedTextLoader(text.clone())), llm);

    let result = service
        .analyze(b"", &pdf_document(), ModelChoice::Phi4Mini)
        .await
        .unwrap();

    assert!(result.content.ends_with(&text));
}

#[tokio::test]
async fn given_extraction_failure_when_analyzing_then_backend_is_not_called() {
    let llm = Arc::new(EchoLlmClient::default());
    let service = AnalysisService::new(Arc::new(FailingLoader), Arc::clone(&llm));

    let result = service
        .analyze(b"garbage", &pdf_document(), ModelChoice::Phi4Mini)
        .await;

    assert!(matches!(
        result,
        Err(AnalysisError::Extraction(FileLoaderError::ExtractionFailed(_)))
    ));
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_missing_model_when_analyzing_then_returns_completion_error() {
    let service = AnalysisService::new(
        Arc::new(FixedTextLoader("text".to_string())),
        Arc::new(MissingModelClient),
    );

    let result = service
        .analyze(b"", &pdf_document(), ModelChoice::Llama32_3b)
        .await;

    match result {
        Err(AnalysisError::Completion(LlmClientError::ModelNotFound(model))) => {
            assert_eq!(model, "llama3.2:3b");
        }
        other => panic!("expected model-not-found, got {other:?}"),
    }
}
