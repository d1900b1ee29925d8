use base64::Engine;
use base64::engine::general_purpose::STANDARD;

pub const REPORT_FILENAME: &str = "research_analysis.txt";

/// Downloadable copy of the model response. The content is never altered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    content: String,
}

impl ReportArtifact {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    pub fn filename(&self) -> &'static str {
        REPORT_FILENAME
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_content(self) -> String {
        self.content
    }

    pub fn data_uri(&self) -> String {
        format!(
            "data:text/plain;charset=utf-8;base64,{}",
            STANDARD.encode(self.content.as_bytes())
        )
    }
}
