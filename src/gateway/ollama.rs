use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use super::{GatewayError, ModelGateway, UpstreamFailure, fallback_models};
use crate::{
    config::Settings,
    models::{api::ModelInfo, ollama::OllamaChatRequest},
    utils::humanize_size,
};

const TAGS_PATH: &str = "/api/tags";
const CHAT_PATH: &str = "/api/chat";
const IDLE_CONNECTION_TIMEOUT: Duration = Duration::from_mins(1);

/// Talks to an Ollama server over its HTTP API.
#[derive(Debug, Clone)]
pub struct OllamaGateway {
    base_url: String,
    client: Client,
    timeout: Duration,
}

impl OllamaGateway {
    #[must_use]
    pub fn new(base_url: &str, client: Client, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            timeout,
        }
    }

    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built, e.g. no TLS backend is available.
    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(settings.connect_timeout)
            .pool_idle_timeout(IDLE_CONNECTION_TIMEOUT)
            .build()?;
        Ok(Self::new(
            &settings.ollama_base_url,
            client,
            settings.upstream_timeout,
        ))
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, UpstreamFailure> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await
            .map_err(UpstreamFailure::Transport)?;
        if response.status().is_success() {
            Ok(response)
        } else {
            Err(UpstreamFailure::Status(response.status()))
        }
    }

    async fn fetch_models(&self) -> Result<Vec<ModelInfo>, UpstreamFailure> {
        let response = self.send(self.client.get(self.url(TAGS_PATH))).await?;
        let payload: Value = response.json().await.map_err(UpstreamFailure::Decode)?;
        parse_models(&payload)
    }

    async fn request_reply(&self, body: &OllamaChatRequest) -> Result<String, UpstreamFailure> {
        let response = self
            .send(self.client.post(self.url(CHAT_PATH)).json(body))
            .await?;
        let payload: Value = response.json().await.map_err(UpstreamFailure::Decode)?;
        extract_reply(&payload).ok_or(UpstreamFailure::EmptyReply)
    }
}

#[async_trait]
impl ModelGateway for OllamaGateway {
    async fn probe(&self) -> bool {
        match self.send(self.client.get(self.url(TAGS_PATH))).await {
            Ok(_) => true,
            Err(err) => {
                debug!("Ollama health check failed: {err}");
                false
            }
        }
    }

    async fn list_models(&self) -> Vec<ModelInfo> {
        match self.fetch_models().await {
            Ok(models) => {
                info!("Listed {} models from Ollama", models.len());
                models
            }
            Err(err) => {
                warn!("Falling back to sample Ollama models: {err}");
                fallback_models()
            }
        }
    }

    async fn chat(
        &self,
        message: &str,
        model: &str,
        stream: bool,
    ) -> Result<String, GatewayError> {
        let body = OllamaChatRequest::user_message(message, model, stream);
        debug!("Forwarding chat to Ollama model {model}");
        self.request_reply(&body).await.map_err(|err| {
            error!("Ollama chat error: {err}");
            GatewayError::Unavailable(err)
        })
    }
}

/// Maps an `/api/tags` payload to model entries. An empty listing counts as a
/// failure so callers always receive at least one model.
///
/// # Errors
///
/// Returns [`UpstreamFailure::UnexpectedShape`] when `models` is missing, not an
/// array, or empty.
pub fn parse_models(payload: &Value) -> Result<Vec<ModelInfo>, UpstreamFailure> {
    let entries = payload
        .get("models")
        .and_then(Value::as_array)
        .ok_or(UpstreamFailure::UnexpectedShape(
            "`models` is missing or not an array",
        ))?;
    if entries.is_empty() {
        return Err(UpstreamFailure::UnexpectedShape("`models` is empty"));
    }
    Ok(entries.iter().map(model_info).collect())
}

fn model_info(entry: &Value) -> ModelInfo {
    ModelInfo {
        name: entry
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
        size: humanize_size_value(entry.get("size")),
        modified_at: passthrough_text(entry.get("modified_at")),
    }
}

fn passthrough_text(value: Option<&Value>) -> Option<String> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}

fn humanize_size_value(size: Option<&Value>) -> String {
    match size {
        None | Some(Value::Null) => humanize_size(0.0),
        Some(Value::Number(n)) => humanize_size(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .map_or_else(|_| s.clone(), humanize_size),
        Some(other) => other.to_string(),
    }
}

/// Pulls the reply text from either `message.content` or `response`.
#[must_use]
pub fn extract_reply(payload: &Value) -> Option<String> {
    non_empty_text(payload.get("message").and_then(|m| m.get("content")))
        .or_else(|| non_empty_text(payload.get("response")))
        .map(ToString::to_string)
}

fn non_empty_text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
}
