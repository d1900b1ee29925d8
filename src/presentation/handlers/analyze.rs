use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::{AnalysisResult, Document};
use crate::presentation::state::AppState;

use super::analyze_form::{AnalyzeForm, AnalyzeRequestError};

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub document_id: String,
    pub filename: String,
    pub model: String,
    pub analysis: String,
    pub duration_secs: f64,
    pub status: String,
    pub analyzed_at: DateTime<Utc>,
    pub download_filename: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AnalyzeResponse {
    fn new(document: &Document, result: AnalysisResult) -> Self {
        Self {
            document_id: document.id.as_uuid().to_string(),
            filename: document.filename.clone(),
            model: result.model.as_str().to_string(),
            duration_secs: result.duration_secs(),
            status: result.status_label(),
            analyzed_at: result.analyzed_at,
            download_filename: result.report().filename().to_string(),
            analysis: result.content,
        }
    }
}

fn error_response(error: AnalyzeRequestError) -> Response {
    (
        error.status(),
        Json(ErrorResponse {
            error: error.to_string(),
        }),
    )
        .into_response()
}

async fn run_analysis<F, L>(
    state: &AppState<F, L>,
    multipart: Multipart,
) -> Result<(Document, AnalysisResult), AnalyzeRequestError>
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let form = AnalyzeForm::from_multipart(multipart).await?;
    let result = state
        .analysis_service
        .analyze(&form.data, &form.document, form.model)
        .await?;
    Ok((form.document, result))
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    match run_analysis(&state, multipart).await {
        Ok((document, result)) => {
            (StatusCode::OK, Json(AnalyzeResponse::new(&document, result))).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, status = %e.status(), "Analysis request failed");
            error_response(e)
        }
    }
}

/// Same input as [`analyze_handler`], answered with the report file itself.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_report_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    match run_analysis(&state, multipart).await {
        Ok((_, result)) => {
            let report = result.report();
            let disposition = format!("attachment; filename=\"{}\"", report.filename());
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                report.into_content(),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, status = %e.status(), "Report request failed");
            error_response(e)
        }
    }
}
