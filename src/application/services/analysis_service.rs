use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient, LlmClientError};
use crate::domain::{AnalysisRequest, AnalysisResult, Document, ModelChoice};
use crate::infrastructure::observability::sanitize_prompt;

use super::prompt::{MAX_PROMPT_CHARS, build_analysis_prompt};

/// Runs one document through extraction, prompt construction and a single
/// backend call. Nothing is retried.
pub struct AnalysisService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
}

impl<F, L> AnalysisService<F, L>
where
    F: FileLoader + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            llm_client,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            content_type = document.content_type.as_mime(),
            model = %model,
        )
    )]
    pub async fn analyze(
        &self,
        data: &[u8],
        document: &Document,
        model: ModelChoice,
    ) -> Result<AnalysisResult, AnalysisError> {
        tracing::info!(bytes = data.len(), "Reading file content");
        let text = self.file_loader.extract_text(data, document).await?;

        let char_count = text.chars().count();
        if char_count > MAX_PROMPT_CHARS {
            tracing::info!(
                char_count,
                limit = MAX_PROMPT_CHARS,
                "Extracted text exceeds prompt limit, truncating"
            );
        }

        let request = AnalysisRequest::new(model, build_analysis_prompt(&text));
        tracing::debug!(prompt = %sanitize_prompt(&request.prompt), "Prompt built");
        tracing::info!("Sending to {}", model);

        let started = Instant::now();
        let content = self.llm_client.complete(&request).await?;
        let result = AnalysisResult::new(model, content, started.elapsed());

        tracing::info!(
            duration_secs = result.duration_secs(),
            response_chars = result.content.chars().count(),
            "Analysis complete"
        );

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
