use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::{AnalysisResult, Document, ModelChoice};

use super::markdown::render_markdown;

pub const PAGE_TITLE: &str = "Research AI Assistant";

pub struct ModelOption {
    pub name: &'static str,
    pub hint: String,
    pub selected: bool,
}

fn model_options(selected: ModelChoice) -> Vec<ModelOption> {
    ModelChoice::ALL
        .into_iter()
        .map(|m| ModelOption {
            name: m.as_str(),
            hint: m.pull_hint(),
            selected: m == selected,
        })
        .collect()
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    pub models: Vec<ModelOption>,
    pub hint: String,
}

impl IndexPage {
    pub fn new(selected: ModelChoice) -> Self {
        Self {
            title: PAGE_TITLE,
            models: model_options(selected),
            hint: selected.pull_hint(),
        }
    }
}

#[derive(Template)]
#[template(path = "result.html")]
pub struct ResultPage {
    pub title: &'static str,
    pub models: Vec<ModelOption>,
    pub hint: String,
    pub filename: String,
    pub model: &'static str,
    pub status: String,
    pub analysis_html: String,
    pub download_href: String,
    pub download_filename: &'static str,
}

impl ResultPage {
    pub fn new(document: &Document, result: &AnalysisResult) -> Self {
        let report = result.report();
        Self {
            title: PAGE_TITLE,
            models: model_options(result.model),
            hint: result.model.pull_hint(),
            filename: document.filename.clone(),
            model: result.model.as_str(),
            status: result.status_label(),
            analysis_html: render_markdown(&result.content),
            download_href: report.data_uri(),
            download_filename: report.filename(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub title: &'static str,
    pub models: Vec<ModelOption>,
    pub hint: String,
    pub message: String,
}

impl ErrorPage {
    pub fn new(selected: ModelChoice, message: String) -> Self {
        Self {
            title: PAGE_TITLE,
            models: model_options(selected),
            hint: selected.pull_hint(),
            message,
        }
    }
}

pub fn render_page<T: Template>(status: StatusCode, page: &T) -> Response {
    match page.render() {
        Ok(body) => (status, Html(body)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}
