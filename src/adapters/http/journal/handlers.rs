//! HTTP handlers for journal endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{error_response, parse_id, parse_user_query, require_user_id, ValidatedJson};
use crate::adapters::http::{UserIdQuery, ValidatedQuery};
use crate::application::handlers::journal::{
    CreateEntryCommand, CreateEntryHandler, GetEntryHandler, GetEntryQuery, ListEntriesHandler,
    ListEntriesQuery, UpdateEntryCommand, UpdateEntryHandler,
};
use crate::domain::foundation::EntryId;
use crate::domain::journal::JournalError;

use super::dto::{CreateEntryRequest, JournalEntryResponse, UpdateEntryRequest};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct JournalHandlers {
    create_handler: Arc<CreateEntryHandler>,
    update_handler: Arc<UpdateEntryHandler>,
    get_handler: Arc<GetEntryHandler>,
    list_handler: Arc<ListEntriesHandler>,
}

impl JournalHandlers {
    pub fn new(
        create_handler: Arc<CreateEntryHandler>,
        update_handler: Arc<UpdateEntryHandler>,
        get_handler: Arc<GetEntryHandler>,
        list_handler: Arc<ListEntriesHandler>,
    ) -> Self {
        Self {
            create_handler,
            update_handler,
            get_handler,
            list_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /journal - Store an entry
pub async fn create_entry(
    State(handlers): State<JournalHandlers>,
    ValidatedJson(req): ValidatedJson<CreateEntryRequest>,
) -> Response {
    let user_id = match require_user_id(req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = CreateEntryCommand {
        user_id,
        situation: req.situation,
        emotion: req.emotion,
        thought: req.thought,
        challenge: req.challenge,
        reframe: req.reframe,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(entry) => (StatusCode::CREATED, Json(JournalEntryResponse::from(entry))).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// GET /journal?userId= - List a user's entries, newest first
pub async fn list_entries(
    State(handlers): State<JournalHandlers>,
    ValidatedQuery(query): ValidatedQuery<UserIdQuery>,
) -> Response {
    let user_id = match parse_user_query(query.user_id.as_deref()) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.list_handler.handle(ListEntriesQuery { user_id }).await {
        Ok(entries) => {
            let response: Vec<JournalEntryResponse> = entries.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_journal_error(e),
    }
}

/// GET /journal/:id - Fetch one entry
pub async fn get_entry(State(handlers): State<JournalHandlers>, Path(id): Path<String>) -> Response {
    let entry_id = match parse_id::<EntryId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match handlers.get_handler.handle(GetEntryQuery { entry_id }).await {
        Ok(entry) => (StatusCode::OK, Json(JournalEntryResponse::from(entry))).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

/// PATCH /journal/:id - Set challenge and/or reframe
pub async fn update_entry(
    State(handlers): State<JournalHandlers>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateEntryRequest>,
) -> Response {
    let entry_id = match parse_id::<EntryId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateEntryCommand {
        entry_id,
        challenge: req.challenge,
        reframe: req.reframe,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(entry) => (StatusCode::OK, Json(JournalEntryResponse::from(entry))).into_response(),
        Err(e) => handle_journal_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_journal_error(error: JournalError) -> Response {
    error_response(error.code(), error.message(), error.issues())
}
