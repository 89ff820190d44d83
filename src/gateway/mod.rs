//! Adapter between this service and the upstream model server.
//!
//! Discovery (`probe`, `list_models`) never fails: outages turn into `false` or
//! the fallback model list. `chat` is the only call that reports failure, since
//! an invented reply would mislead the user.

pub mod ollama;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::api::ModelInfo;

pub use self::ollama::OllamaGateway;

pub const UNAVAILABLE_MESSAGE: &str = "Unable to reach the model service. Is it running?";

#[derive(Error, Debug)]
pub enum UpstreamFailure {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream returned {0}")]
    Status(StatusCode),
    #[error("response body was not valid JSON: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("unexpected payload: {0}")]
    UnexpectedShape(&'static str),
    #[error("response did not include content")]
    EmptyReply,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{}", UNAVAILABLE_MESSAGE)]
    Unavailable(#[source] UpstreamFailure),
}

#[async_trait]
pub trait ModelGateway: Send + Sync {
    async fn probe(&self) -> bool;

    async fn list_models(&self) -> Vec<ModelInfo>;

    async fn chat(&self, message: &str, model: &str, stream: bool) -> Result<String, GatewayError>;
}

#[must_use]
pub fn fallback_models() -> Vec<ModelInfo> {
    vec![
        ModelInfo {
            name: "llama2".to_string(),
            size: "7B".to_string(),
            modified_at: Some("2025-12-01T10:00:00".to_string()),
        },
        ModelInfo {
            name: "codellama".to_string(),
            size: "7B".to_string(),
            modified_at: Some("2025-12-10T15:30:00".to_string()),
        },
    ]
}
