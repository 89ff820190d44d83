use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

use crate::gateway::GatewayError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(message) => {
                warn!("Rejected request: {message}");
                (StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            // the gateway already logged the cause
            AppError::Gateway(err) => (StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
