mod analysis_service;
mod prompt;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use prompt::{MAX_PROMPT_CHARS, build_analysis_prompt, truncate_chars};
