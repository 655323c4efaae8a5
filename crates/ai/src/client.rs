//! Client boundary to the hosted generative model.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::AiError;

/// Default hosted model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// One structured-output generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    /// Declared output schema; the reply must be JSON matching it.
    pub response_schema: &'a JsonValue,
}

/// Outbound boundary to the hosted model.
///
/// One operation: send a prompt with a declared output schema, get back the
/// model's raw JSON text. Implementations must not retain any state across
/// calls; repeated calls with the same input are independent requests.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate_json(&self, req: GenerateRequest<'_>) -> Result<String, AiError>;
}

/// HTTP client for the hosted `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| AiError::Config(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Configuration from the environment.
    ///
    /// `GEMINI_API_KEY` holds the credential; a missing key surfaces as a
    /// configuration failure, indistinguishable from any other call failure
    /// by the time the gateway has degraded it. `MEDIUS_AI_BASE_URL`
    /// overrides the endpoint (useful against a local stub).
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| AiError::Config("GEMINI_API_KEY is not set".to_string()))?;
        let base_url =
            std::env::var("MEDIUS_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url, &api_key)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Request body for `models/{model}:generateContent`.
#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig<'a>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig<'a> {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'a str,
    #[serde(rename = "responseSchema")]
    response_schema: &'a JsonValue,
}

/// Response body from `models/{model}:generateContent`.
#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_json(&self, req: GenerateRequest<'_>) -> Result<String, AiError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, req.model, self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: req.prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: req.response_schema,
            },
        };

        let response = self.http.post(&url).json(&body).send().await.map_err(|e| {
            if e.is_timeout() {
                AiError::Transport(format!(
                    "request timed out after {REQUEST_TIMEOUT_SECS}s"
                ))
            } else if e.is_connect() {
                AiError::Transport(format!("cannot reach {}", self.base_url))
            } else {
                AiError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AiError::MalformedReply(e.to_string()))?;

        let text: String = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(AiError::EmptyReply);
        }
        Ok(text)
    }
}

/// Owned copy of a request seen by the mock client.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub model: String,
    pub prompt: String,
    pub response_schema: JsonValue,
}

/// Scripted client for tests: records every request and replays canned
/// replies in order. An exhausted script fails the call, which exercises the
/// gateway's degradation path.
#[derive(Default)]
pub struct MockGenerativeClient {
    replies: Mutex<VecDeque<Result<String, AiError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockGenerativeClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock whose next call succeeds with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        let mock = Self::default();
        mock.push_reply(Ok(text.into()));
        mock
    }

    /// A mock whose next call fails at the transport layer.
    pub fn failing() -> Self {
        let mock = Self::default();
        mock.push_reply(Err(AiError::Transport("connection refused".to_string())));
        mock
    }

    pub fn push_reply(&self, reply: Result<String, AiError>) {
        self.replies
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push_back(reply);
    }

    /// All requests observed so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone()
    }
}

#[async_trait]
impl GenerativeClient for MockGenerativeClient {
    async fn generate_json(&self, req: GenerateRequest<'_>) -> Result<String, AiError> {
        self.requests
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .push(RecordedRequest {
                model: req.model.to_string(),
                prompt: req.prompt.to_string(),
                response_schema: req.response_schema.clone(),
            });

        self.replies
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .pop_front()
            .unwrap_or_else(|| {
                Err(AiError::Transport("mock reply script exhausted".to_string()))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn mock_replays_scripted_replies_in_order() {
        let mock = MockGenerativeClient::new();
        mock.push_reply(Ok("[1]".to_string()));
        mock.push_reply(Ok("[2]".to_string()));

        let schema = json!({"type": "ARRAY"});
        let req = GenerateRequest {
            model: DEFAULT_MODEL,
            prompt: "p",
            response_schema: &schema,
        };
        assert_eq!(mock.generate_json(req.clone()).await.unwrap(), "[1]");
        assert_eq!(mock.generate_json(req).await.unwrap(), "[2]");
    }

    #[tokio::test]
    async fn mock_records_requests() {
        let mock = MockGenerativeClient::replying("[]");
        let schema = json!({"type": "ARRAY"});
        let req = GenerateRequest {
            model: "gemini-2.5-flash",
            prompt: "forecast please",
            response_schema: &schema,
        };
        let _ = mock.generate_json(req).await;

        let seen = mock.requests();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gemini-2.5-flash");
        assert_eq!(seen[0].prompt, "forecast please");
        assert_eq!(seen[0].response_schema, schema);
    }

    #[tokio::test]
    async fn exhausted_mock_fails_the_call() {
        let mock = MockGenerativeClient::new();
        let schema = json!({});
        let err = mock
            .generate_json(GenerateRequest {
                model: DEFAULT_MODEL,
                prompt: "p",
                response_schema: &schema,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::Transport(_)));
    }

    #[test]
    fn gemini_client_normalizes_base_url() {
        let client = GeminiClient::new("http://localhost:8080/", "test-key").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
