mod analyze;
mod analyze_form;
mod health;
mod models;
mod pages;

pub use analyze::{AnalyzeResponse, ErrorResponse, analyze_handler, analyze_report_handler};
pub use analyze_form::{AnalyzeForm, AnalyzeRequestError};
pub use health::health_handler;
pub use models::models_handler;
pub use pages::{analyze_page_handler, index_handler};
