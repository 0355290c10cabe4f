//! HTTP request handlers

use super::types::{ErrorResponse, HelpResponse, MessageRequest, MessageResponse, SessionResponse};
use super::AppState;
use crate::engine::ChatContext;
use crate::game;
use crate::store::SessionStore;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Chat messages from the host
        .route("/api/messages", post(post_message))
        // Session inspection
        .route("/api/sessions/:id", get(get_session))
        .route("/api/help", get(get_help))
        .route("/version", get(get_version))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn post_message(
    State(state): State<AppState>,
    Json(req): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest("text must not be empty".to_string()));
    }

    let chat = ChatContext {
        group_id: req.group_id,
        user_id: req.user_id,
    };

    let response = match state.engine.handle(&chat, &req.text).await {
        Some(outcome) => MessageResponse {
            handled: true,
            success: Some(outcome.success),
            reason: Some(outcome.reason.to_string()),
            reply: Some(outcome.reply),
        },
        None => MessageResponse::unhandled(),
    };
    Ok(Json(response))
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state
        .engine
        .store()
        .get(&id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("No session for {id}")))?;
    Ok(Json(session.into()))
}

async fn get_help(State(state): State<AppState>) -> Json<HelpResponse> {
    Json(HelpResponse {
        text: game::help_text(&state.engine.context().prefix),
    })
}

async fn get_version(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "version": env!("CARGO_PKG_VERSION"),
        "sessions": state.engine.store().len().await,
    }))
}

// ============================================================
// Error Handling
// ============================================================

#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}
