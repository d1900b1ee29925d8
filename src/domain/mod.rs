mod analysis;
mod document;
mod document_id;
mod model_choice;
mod report_artifact;

pub use analysis::{AnalysisRequest, AnalysisResult};
pub use document::{ContentType, Document};
pub use document_id::DocumentId;
pub use model_choice::ModelChoice;
pub use report_artifact::{REPORT_FILENAME, ReportArtifact};
