//! HTTP routes for CBT endpoints.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    advance_session, analyze_thought, back_session, cancel_session, edit_suggestions, get_session,
    start_session, submit_session, CbtHandlers,
};

/// Creates the CBT router with all endpoints.
pub fn cbt_routes(handlers: CbtHandlers) -> Router {
    Router::new()
        .route("/cbt/analyze", post(analyze_thought))
        .route("/cbt/sessions", post(start_session))
        .route("/cbt/sessions/:id", get(get_session).delete(cancel_session))
        .route("/cbt/sessions/:id/advance", post(advance_session))
        .route("/cbt/sessions/:id/back", post(back_session))
        .route("/cbt/sessions/:id/suggestions", patch(edit_suggestions))
        .route("/cbt/sessions/:id/submit", post(submit_session))
        .with_state(handlers)
}
