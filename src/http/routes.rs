use crate::{
    AppState,
    error::AppError,
    models::{
        api::{ChatRequest, ChatResponse, HealthResponse, ModelsResponse},
        dashboard::{AnalyticsResponse, ProjectsResponse, WorkflowsResponse},
    },
};
use axum::{Json as JsonExtractor, extract::State, response::Json};
use chrono::Utc;
use tracing::{debug, info};

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let online = state.gateway.probe().await;
    debug!("Upstream reachable: {online}");
    Json(HealthResponse::from_probe(online, Utc::now()))
}

pub async fn analytics(State(state): State<AppState>) -> Json<AnalyticsResponse> {
    Json(state.data.analytics(Utc::now()))
}

pub async fn workflows(State(state): State<AppState>) -> Json<WorkflowsResponse> {
    Json(state.data.workflows(Utc::now()))
}

pub async fn projects(State(state): State<AppState>) -> Json<ProjectsResponse> {
    Json(state.data.projects(Utc::now()))
}

pub async fn list_models(State(state): State<AppState>) -> Json<ModelsResponse> {
    let models = state.gateway.list_models().await;
    Json(ModelsResponse { models })
}

/// # Errors
///
/// [`AppError::Validation`] for an empty message, [`AppError::Gateway`] when the
/// model service cannot produce a reply.
pub async fn chat(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    validate_chat_request(&request)?;
    info!("Handling chat request for model: {}", request.model);

    let response = state
        .gateway
        .chat(&request.message, &request.model, request.stream)
        .await?;

    Ok(Json(ChatResponse {
        response,
        model: request.model,
        created_at: Utc::now(),
    }))
}

fn validate_chat_request(request: &ChatRequest) -> Result<(), AppError> {
    if request.message.is_empty() {
        return Err(AppError::Validation(
            "message must contain at least 1 character".to_string(),
        ));
    }
    Ok(())
}
