//! HTTP handlers for CBT endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, parse_session_id, require_user_id, ValidatedJson};
use crate::adapters::http::journal::JournalEntryResponse;
use crate::application::handlers::cbt::{AnalyzeThoughtCommand, AnalyzeThoughtHandler, GuidedSessionHandler};
use crate::domain::cbt::{CbtError, CbtSession, SessionError};

use super::dto::{
    AdvanceRequest, AnalyzeRequest, DiagnosisResponse, EditSuggestionsRequest, SessionResponse,
    StartSessionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct CbtHandlers {
    analyze_handler: Arc<AnalyzeThoughtHandler>,
    session_handler: Arc<GuidedSessionHandler>,
}

impl CbtHandlers {
    pub fn new(analyze_handler: Arc<AnalyzeThoughtHandler>, session_handler: Arc<GuidedSessionHandler>) -> Self {
        Self {
            analyze_handler,
            session_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /cbt/analyze - Classify a thought
pub async fn analyze_thought(
    State(handlers): State<CbtHandlers>,
    ValidatedJson(req): ValidatedJson<AnalyzeRequest>,
) -> Response {
    let cmd = AnalyzeThoughtCommand {
        situation: req.situation,
        emotion: req.emotion,
        thought: req.thought,
    };

    match handlers.analyze_handler.handle(cmd).await {
        Ok(diagnosis) => (StatusCode::OK, Json(DiagnosisResponse::from(&diagnosis))).into_response(),
        Err(e) => handle_cbt_error(e),
    }
}

/// POST /cbt/sessions - Open a guided session
pub async fn start_session(
    State(handlers): State<CbtHandlers>,
    ValidatedJson(req): ValidatedJson<StartSessionRequest>,
) -> Response {
    let user_id = match require_user_id(req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.session_handler.start(user_id).await {
        Ok(session) => (StatusCode::CREATED, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// GET /cbt/sessions/:id - Current session view
pub async fn get_session(State(handlers): State<CbtHandlers>, Path(id): Path<String>) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_result(handlers.session_handler.get(id).await)
}

/// POST /cbt/sessions/:id/advance - Submit the current step's value
pub async fn advance_session(
    State(handlers): State<CbtHandlers>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<AdvanceRequest>,
) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_result(handlers.session_handler.advance(id, &req.value).await)
}

/// POST /cbt/sessions/:id/back - Return to the previous step
pub async fn back_session(State(handlers): State<CbtHandlers>, Path(id): Path<String>) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_result(handlers.session_handler.back(id).await)
}

/// PATCH /cbt/sessions/:id/suggestions - Overwrite challenge and/or reframe
pub async fn edit_suggestions(
    State(handlers): State<CbtHandlers>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<EditSuggestionsRequest>,
) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    session_result(
        handlers
            .session_handler
            .edit_suggestions(id, req.challenge, req.reframe)
            .await,
    )
}

/// POST /cbt/sessions/:id/submit - Persist the entry and close the session
pub async fn submit_session(State(handlers): State<CbtHandlers>, Path(id): Path<String>) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.session_handler.submit(id).await {
        Ok(entry) => (StatusCode::CREATED, Json(JournalEntryResponse::from(entry))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

/// DELETE /cbt/sessions/:id - Cancel and discard
pub async fn cancel_session(State(handlers): State<CbtHandlers>, Path(id): Path<String>) -> Response {
    let id = match parse_session_id(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.session_handler.cancel(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => handle_session_error(e),
    }
}

fn session_result(result: Result<CbtSession, SessionError>) -> Response {
    match result {
        Ok(session) => (StatusCode::OK, Json(SessionResponse::from(&session))).into_response(),
        Err(e) => handle_session_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_cbt_error(error: CbtError) -> Response {
    error_response(error.code(), error.message(), error.issues())
}

fn handle_session_error(error: SessionError) -> Response {
    error_response(error.code(), error.message(), error.issues())
}
