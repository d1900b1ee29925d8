use std::fmt;
use std::str::FromStr;

/// The closed set of models offered in the model menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelChoice {
    #[default]
    Phi4Mini,
    Llama32_3b,
    Qwen25Coder7b,
}

impl ModelChoice {
    /// Menu order.
    pub const ALL: [ModelChoice; 3] = [
        ModelChoice::Phi4Mini,
        ModelChoice::Llama32_3b,
        ModelChoice::Qwen25Coder7b,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelChoice::Phi4Mini => "phi4-mini",
            ModelChoice::Llama32_3b => "llama3.2:3b",
            ModelChoice::Qwen25Coder7b => "qwen2.5-coder:7b",
        }
    }

    pub fn pull_hint(&self) -> String {
        format!(
            "Ensure Ollama is running and you have run: `ollama pull {}`",
            self.as_str()
        )
    }
}

impl FromStr for ModelChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelChoice::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("Invalid model: {}", s))
    }
}

impl fmt::Display for ModelChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
