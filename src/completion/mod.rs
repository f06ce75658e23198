
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::config::CompletionConfig;

const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Role instruction sent with every completion request.
pub const SYSTEM_PROMPT: &str =
    "You are a helpful assistant that analyzes and answers questions about documents.";

/// Credential used when the configured environment variable is absent.
/// Authentication then fails at call time rather than at startup.
pub const PLACEHOLDER_API_KEY: &str = "your-api-key";

/// Blocking client for an OpenAI-compatible chat-completion endpoint.
///
/// Holds only the credential and connection configuration; constructed once
/// and reused read-only. Each question is a single round trip with no retry
/// and no streaming.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    base_url: Url,
    model: String,
    api_key: String,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}

impl CompletionClient {
    #[inline]
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("Invalid completion endpoint: {}", config.base_url))?;

        let api_key = std::env::var(&config.api_key_env).unwrap_or_else(|_| {
            debug!(
                "Environment variable {} not set, using placeholder credential",
                config.api_key_env
            );
            PLACEHOLDER_API_KEY.to_string()
        });

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)))
            .build()
            .into();

        Ok(Self {
            base_url,
            model: config.model.clone(),
            api_key,
            agent,
        })
    }

    /// Ask the model to answer `question` given the retrieved `context`.
    ///
    /// Sends the fixed system prompt plus a user message holding the context
    /// and the literal question, and returns the first choice's content
    /// verbatim. Every failure (transport, authentication, malformed
    /// response) surfaces as an error for the caller to report.
    #[inline]
    pub fn complete(&self, context: &str, question: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: format!("{}\n\nQuestion: {}", context, question),
                },
            ],
        };

        let url = format!(
            "{}/chat/completions",
            self.base_url.as_str().trim_end_matches('/')
        );

        debug!("Requesting completion from {} with model {}", url, self.model);

        let request_json =
            serde_json::to_string(&request).context("Failed to serialize completion request")?;
        let authorization = format!("Bearer {}", self.api_key);

        let response_text = self
            .agent
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", authorization.as_str())
            .send(&request_json)
            .and_then(|mut resp| resp.body_mut().read_to_string())
            .map_err(|e| anyhow::anyhow!("Completion request failed: {}", e))?;

        let response: ChatResponse =
            serde_json::from_str(&response_text).context("Failed to parse completion response")?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow::anyhow!("Completion response contained no choices"))?;

        debug!(
            "Received completion ({} chars)",
            choice.message.content.len()
        );

        Ok(choice.message.content)
    }
}
