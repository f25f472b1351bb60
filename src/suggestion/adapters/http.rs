//! OpenAI-compatible chat-completions suggester.

use crate::suggestion::{
    domain::{PrioritySuggestion, SYSTEM_PROMPT, SuggestionRequest, render_prompt},
    ports::{PrioritySuggester, SuggestionError, SuggestionResult},
};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for [`HttpPrioritySuggester`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    /// Full chat-completions URL.
    pub endpoint: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Bearer token, if the endpoint requires one.
    pub api_key: Option<String>,
    /// Upper bound for one request, in seconds.
    pub timeout_secs: u64,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl fmt::Debug for SuggestionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionSettings")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Suggester backed by a chat-completions endpoint in JSON mode.
pub struct HttpPrioritySuggester {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl HttpPrioritySuggester {
    /// Creates a suggester from `settings`.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError::Network`] when the HTTP client cannot be
    /// built.
    pub fn new(settings: &SuggestionSettings) -> SuggestionResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|err| SuggestionError::Network(err.to_string()))?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
        })
    }
}

#[async_trait]
impl PrioritySuggester for HttpPrioritySuggester {
    async fn suggest(&self, request: &SuggestionRequest) -> SuggestionResult<PrioritySuggestion> {
        let prompt = render_prompt(request)?;
        let body = ChatRequest::new(&self.model, &prompt);

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "suggestion backend rejected request");
            return Err(SuggestionError::Http {
                status: status.as_u16(),
                body: text,
            });
        }
        parse_completion(&text)
    }
}

fn transport_error(err: reqwest::Error) -> SuggestionError {
    if err.is_timeout() {
        SuggestionError::Timeout
    } else {
        SuggestionError::Network(err.to_string())
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    response_format: ResponseFormat,
}

impl<'a> ChatRequest<'a> {
    pub(crate) const fn new(model: &'a str, prompt: &'a str) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Extracts the suggestion from a chat-completions response body.
pub(crate) fn parse_completion(body: &str) -> SuggestionResult<PrioritySuggestion> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|err| SuggestionError::InvalidResponse(format!("malformed completion: {err}")))?;
    let content = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| SuggestionError::InvalidResponse("no choices in response".to_owned()))?;
    serde_json::from_str(strip_code_fence(&content))
        .map_err(|err| SuggestionError::InvalidResponse(format!("malformed suggestion: {err}")))
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|inner| inner.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}
