mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{LoggingSettings, OllamaSettings, ServerSettings, Settings, UploadSettings};
