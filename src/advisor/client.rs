use crate::advisor::prompts::SYSTEM_PROMPT;
use crate::advisor::types::{ChatMessage, ChatRequest, ChatResponse, DecodingOptions};
use crate::config::AdvisorConfig;
use crate::error::Result;
use log::{debug, warn};
use reqwest::blocking::Client;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub const DEFAULT_TEMPERATURE: f64 = 0.2;
pub const DEFAULT_TOP_P: f64 = 0.9;

/// Stateless client for the advisory chat endpoint.
///
/// Advisory failures never gate the data-entry path: `ask` converts every
/// transport or protocol error into a readable fallback reply.
#[derive(Debug, Clone, Default)]
pub struct AdvisoryClient {
    http: Client,
}

impl AdvisoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Liveness probe against the endpoint root. True iff a plain request
    /// answers with a non-server-error status.
    pub fn available(&self, endpoint: &str) -> bool {
        match self.http.get(endpoint).timeout(REQUEST_TIMEOUT).send() {
            Ok(response) => response.status().as_u16() < 500,
            Err(e) => {
                debug!("advisory endpoint {endpoint} not reachable: {e}");
                false
            }
        }
    }

    /// Single-turn question under the fixed advisory persona.
    ///
    /// On any failure (timeout, connection error, non-2xx, malformed body)
    /// the error is embedded in a fallback string returned as the reply.
    pub fn ask(&self, question: &str, config: &AdvisorConfig, temperature: f64, top_p: f64) -> String {
        match self.try_ask(question, config, temperature, top_p) {
            Ok(reply) => reply,
            Err(e) => {
                warn!("advisory request failed: {e}");
                format!("[I.A. indisponível ou erro na consulta: {e}]")
            }
        }
    }

    fn try_ask(
        &self,
        question: &str,
        config: &AdvisorConfig,
        temperature: f64,
        top_p: f64,
    ) -> Result<String> {
        let payload = ChatRequest {
            model: config.model.clone(),
            messages: vec![
                ChatMessage::system(SYSTEM_PROMPT),
                ChatMessage::user(question.trim()),
            ],
            stream: false,
            options: DecodingOptions { top_p, temperature },
        };

        let response = self
            .http
            .post(format!("{}/api/chat", config.endpoint))
            .timeout(REQUEST_TIMEOUT)
            .json(&payload)
            .send()?
            .error_for_status()?;

        let body: ChatResponse = response.json()?;
        Ok(body.text())
    }
}
