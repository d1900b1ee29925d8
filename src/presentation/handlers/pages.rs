use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Response;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::ModelChoice;
use crate::presentation::state::AppState;
use crate::presentation::views::{ErrorPage, IndexPage, ResultPage, render_page};

use super::analyze_form::{AnalyzeForm, AnalyzeRequestError};

pub async fn index_handler() -> Response {
    render_page(StatusCode::OK, &IndexPage::new(ModelChoice::default()))
}

/// Form submission from the page. Re-renders the whole page with either the
/// analysis or the failure; a failed run never carries a download link.
#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_page_handler<F, L>(
    State(state): State<AppState<F, L>>,
    multipart: Multipart,
) -> Response
where
    F: FileLoader + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let form = match AnalyzeForm::from_multipart(multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected analysis form");
            return render_page(
                e.status(),
                &ErrorPage::new(ModelChoice::default(), e.to_string()),
            );
        }
    };

    match state
        .analysis_service
        .analyze(&form.data, &form.document, form.model)
        .await
    {
        Ok(result) => render_page(StatusCode::OK, &ResultPage::new(&form.document, &result)),
        Err(e) => {
            tracing::error!(error = %e, "Analysis failed");
            let e = AnalyzeRequestError::from(e);
            render_page(e.status(), &ErrorPage::new(form.model, e.to_string()))
        }
    }
}
