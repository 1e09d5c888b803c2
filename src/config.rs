use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.2";

const ENDPOINT_ENV: &str = "OLLAMA_URL";
const MODEL_ENV: &str = "OLLAMA_MODEL";

/// Advisory endpoint settings. Environment variables seed the values at
/// startup; runtime overrides win for the rest of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisorConfig {
    pub endpoint: String,
    pub model: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Self {
        Self {
            endpoint: env_or(ENDPOINT_ENV, DEFAULT_ENDPOINT),
            model: env_or(MODEL_ENV, DEFAULT_MODEL),
        }
    }

    /// Empty input keeps the current endpoint.
    pub fn set_endpoint(&mut self, input: &str) {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            self.endpoint = trimmed.to_string();
        }
    }

    /// Empty input keeps the current model.
    pub fn set_model(&mut self, input: &str) {
        let trimmed = input.trim();
        if !trimmed.is_empty() {
            self.model = trimmed.to_string();
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}
