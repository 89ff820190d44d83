use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use synapse_backend::gateway::ModelGateway;

use super::{TIMEOUT, slow_upstream, tags_upstream};
use crate::helpers::{ollama_gateway, refused_url, spawn_upstream};

#[tokio::test]
async fn test_probe_true_on_success() {
    let url = spawn_upstream(tags_upstream(StatusCode::OK, json!({"models": []}))).await;
    assert!(ollama_gateway(&url, TIMEOUT).probe().await);
}

#[tokio::test]
async fn test_probe_false_on_connection_refused() {
    let url = refused_url().await;
    assert!(!ollama_gateway(&url, TIMEOUT).probe().await);
}

#[tokio::test]
async fn test_probe_false_on_server_error() {
    let url = spawn_upstream(tags_upstream(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({"error": "boom"}),
    ))
    .await;
    assert!(!ollama_gateway(&url, TIMEOUT).probe().await);
}

#[tokio::test]
async fn test_probe_false_on_timeout() {
    let url = spawn_upstream(slow_upstream(Duration::from_secs(2))).await;
    assert!(
        !ollama_gateway(&url, Duration::from_millis(200))
            .probe()
            .await
    );
}
