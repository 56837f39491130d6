/// LLM Client: the only module that talks to the generative content service.
///
/// Quiz generation is a single request with a single failure path: there is
/// no retry and no backoff. A failed call is returned to the caller, which
/// tells the user to start over.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
pub const MODEL: &str = "claude-sonnet-4-5";
/// A 55-question quiz with four scored options each needs a large budget.
const MAX_TOKENS: u32 = 16_000;
const REQUEST_TIMEOUT_SECS: u64 = 180;
const WEB_SEARCH_TOOL: &str = "web_search_20250305";
const WEB_SEARCH_MAX_USES: u32 = 3;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [Message<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<[Tool; 1]>,
}

#[derive(Debug, Serialize)]
struct Tool {
    #[serde(rename = "type")]
    tool_type: &'static str,
    name: &'static str,
    max_uses: u32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
    #[serde(default)]
    pub citations: Option<Vec<Citation>>,
}

/// Web page a text block was grounded on.
#[derive(Debug, Clone, Deserialize)]
pub struct Citation {
    pub url: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }

    /// Every text block concatenated. Search-grounded answers are split into
    /// one block per cited passage.
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .filter(|b| b.block_type == "text")
            .filter_map(|b| b.text.as_deref())
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Cited pages as `(title, url)`, first occurrence only. A missing title
    /// falls back to the url.
    pub fn sources(&self) -> Vec<(String, String)> {
        let mut seen = Vec::<(String, String)>::new();
        let citations = self
            .content
            .iter()
            .filter_map(|b| b.citations.as_deref())
            .flatten();
        for citation in citations {
            let Some(url) = citation.url.as_deref().filter(|u| !u.is_empty()) else {
                continue;
            };
            if seen.iter().any(|(_, u)| u == url) {
                continue;
            }
            let title = citation.title.clone().unwrap_or_else(|| url.to_string());
            seen.push((title, url.to_string()));
        }
        seen
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, api_key })
    }

    /// One request, one answer. Transport errors and non-2xx statuses are
    /// returned as-is.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        self.send(&MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            tools: None,
        })
        .await
    }

    /// Like `call`, with the server-side web search tool enabled. Still a
    /// single request; searches run on the provider side.
    pub async fn search(&self, prompt: &str, system: &str) -> Result<LlmResponse, LlmError> {
        self.send(&MessagesRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            system,
            messages: [Message {
                role: "user",
                content: prompt,
            }],
            tools: Some([Tool {
                tool_type: WEB_SEARCH_TOOL,
                name: "web_search",
                max_uses: WEB_SEARCH_MAX_USES,
            }]),
        })
        .await
    }

    async fn send(&self, body: &MessagesRequest<'_>) -> Result<LlmResponse, LlmError> {
        let response = self
            .client
            .post(ANTHROPIC_API_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorEnvelope>(&raw)
                .map(|e| e.error.message)
                .unwrap_or(raw);
            warn!("LLM API returned {status}: {message}");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: LlmResponse = response.json().await?;
        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            parsed.usage.input_tokens, parsed.usage.output_tokens
        );
        Ok(parsed)
    }

    /// Calls the LLM and deserializes its text answer as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        parse_json_answer(text)
    }
}

/// Parses a model answer, tolerating a surrounding markdown code fence.
pub fn parse_json_answer<T: DeserializeOwned>(text: &str) -> Result<T, LlmError> {
    let text = strip_json_fences(text);
    if text.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    serde_json::from_str(text).map_err(LlmError::Parse)
}

fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let rest = rest.trim_start();
    rest.strip_suffix("```").map(str::trim).unwrap_or(rest)
}
