mod probe;

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use serde_json::{Value, json};

pub const TIMEOUT: Duration = Duration::from_secs(5);

pub type RequestLog = Arc<Mutex<Option<Value>>>;

pub fn tags_upstream(status: StatusCode, body: Value) -> Router {
    Router::new().route(
        "/api/tags",
        get(move || {
            let body = body.clone();
            async move { (status, Json(body)) }
        }),
    )
}

pub fn chat_upstream(status: StatusCode, body: Value, seen: RequestLog) -> Router {
    Router::new()
        .route(
            "/api/chat",
            post(
                move |State(seen): State<RequestLog>, Json(request): Json<Value>| {
                    let body = body.clone();
                    async move {
                        *seen.lock().expect("Request log lock should not be poisoned") =
                            Some(request);
                        (status, Json(body))
                    }
                },
            ),
        )
        .with_state(seen)
}

pub fn slow_upstream(delay: Duration) -> Router {
    Router::new().route(
        "/api/tags",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(json!({"models": []}))
        }),
    )
}
