use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::application::ports::{FileLoaderError, LlmClientError};
use crate::application::services::AnalysisError;
use crate::domain::{ContentType, Document, ModelChoice};

const FILE_FIELD: &str = "file";
const MODEL_FIELD: &str = "model";

/// One analysis submission: the uploaded file and the selected model.
#[derive(Debug)]
pub struct AnalyzeForm {
    pub document: Document,
    pub data: Bytes,
    pub model: ModelChoice,
}

#[derive(Debug, thiserror::Error)]
pub enum AnalyzeRequestError {
    #[error("Failed to read multipart: {0}")]
    Multipart(String),
    #[error("No file uploaded")]
    MissingFile,
    #[error("Unknown model '{0}'. Choose one of: phi4-mini, llama3.2:3b, qwen2.5-coder:7b")]
    UnknownModel(String),
    #[error("Unsupported content type: {0}. Upload a PDF or TXT file")]
    UnsupportedContentType(String),
    #[error("Could not read the document: {0}")]
    Extraction(String),
    #[error("Model backend failed: {0}")]
    Backend(LlmClientError),
}

impl AnalyzeRequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Multipart(_) | Self::MissingFile => StatusCode::BAD_REQUEST,
            Self::UnknownModel(_) | Self::Extraction(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<AnalysisError> for AnalyzeRequestError {
    fn from(error: AnalysisError) -> Self {
        match error {
            AnalysisError::Extraction(FileLoaderError::UnsupportedContentType(ct)) => {
                Self::UnsupportedContentType(ct)
            }
            AnalysisError::Extraction(FileLoaderError::ExtractionFailed(msg)) => {
                Self::Extraction(msg)
            }
            AnalysisError::Completion(e) => Self::Backend(e),
        }
    }
}

impl AnalyzeForm {
    /// Reads the `file` and `model` parts. A missing `model` part selects the
    /// first menu entry; unknown parts are skipped. A second `file` part is
    /// rejected.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AnalyzeRequestError> {
        let mut upload: Option<(String, Option<String>, Bytes)> = None;
        let mut model = ModelChoice::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AnalyzeRequestError::Multipart(e.to_string()))?
        {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(FILE_FIELD) => {
                    if upload.is_some() {
                        return Err(AnalyzeRequestError::Multipart(
                            "only one file may be uploaded per analysis".to_string(),
                        ));
                    }
                    let filename = field.file_name().unwrap_or("unknown").to_string();
                    let content_type = field.content_type().map(str::to_string);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| AnalyzeRequestError::Multipart(e.to_string()))?;
                    upload = Some((filename, content_type, data));
                }
                Some(MODEL_FIELD) => {
                    let value = field
                        .text()
                        .await
                        .map_err(|e| AnalyzeRequestError::Multipart(e.to_string()))?;
                    let value = value.trim();
                    model = value
                        .parse()
                        .map_err(|_| AnalyzeRequestError::UnknownModel(value.to_string()))?;
                }
                other => {
                    tracing::debug!(field = ?other, "Ignoring unexpected multipart field");
                }
            }
        }

        let (filename, declared_type, data) = upload.ok_or(AnalyzeRequestError::MissingFile)?;

        let content_type = ContentType::detect(declared_type.as_deref(), &filename).ok_or_else(
            || {
                AnalyzeRequestError::UnsupportedContentType(
                    declared_type
                        .clone()
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                )
            },
        )?;

        tracing::debug!(
            filename = %filename,
            content_type = content_type.as_mime(),
            bytes = data.len(),
            model = %model,
            "Analysis form received"
        );

        let document = Document::new(filename, content_type, data.len() as u64);

        Ok(Self {
            document,
            data,
            model,
        })
    }
}
