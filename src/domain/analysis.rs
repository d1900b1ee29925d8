use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{ModelChoice, ReportArtifact};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub model: ModelChoice,
    pub prompt: String,
}

impl AnalysisRequest {
    pub fn new(model: ModelChoice, prompt: String) -> Self {
        Self { model, prompt }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub model: ModelChoice,
    pub content: String,
    pub duration: Duration,
    pub analyzed_at: DateTime<Utc>,
}

impl AnalysisResult {
    pub fn new(model: ModelChoice, content: String, duration: Duration) -> Self {
        Self {
            model,
            content,
            duration,
            analyzed_at: Utc::now(),
        }
    }

    /// Seconds rounded to two decimals.
    pub fn duration_secs(&self) -> f64 {
        (self.duration.as_secs_f64() * 100.0).round() / 100.0
    }

    pub fn status_label(&self) -> String {
        format!("Done! (Analysis took {:.2}s)", self.duration_secs())
    }

    pub fn report(&self) -> ReportArtifact {
        ReportArtifact::new(self.content.clone())
    }
}
