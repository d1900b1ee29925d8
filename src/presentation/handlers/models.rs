use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::ModelChoice;

#[derive(Serialize)]
pub struct ModelsResponse {
    pub default: &'static str,
    pub data: Vec<ModelInfo>,
}

#[derive(Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub hint: String,
}

pub async fn models_handler() -> impl IntoResponse {
    let data = ModelChoice::ALL
        .into_iter()
        .map(|m| ModelInfo {
            id: m.as_str(),
            hint: m.pull_hint(),
        })
        .collect();

    (
        StatusCode::OK,
        Json(ModelsResponse {
            default: ModelChoice::default().as_str(),
            data,
        }),
    )
}
