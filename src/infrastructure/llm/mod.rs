mod ollama_client;

pub use ollama_client::{DEFAULT_OLLAMA_BASE_URL, OllamaClient};
