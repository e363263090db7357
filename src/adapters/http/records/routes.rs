//! HTTP routes for users, moods, habits, meditations and thought patterns.

use axum::{
    routing::{get, patch, post},
    Router,
};

use super::handlers::{
    create_habit, create_user, get_meditation, get_thought_pattern, get_user, list_habit_completions,
    list_habits, list_meditation_completions, list_meditations, list_moods, list_thought_patterns,
    log_mood, record_habit_completion, record_meditation, update_habit, RecordHandlers,
};

pub fn record_routes(handlers: RecordHandlers) -> Router {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
        .route("/moods", post(log_mood).get(list_moods))
        .route("/habits", post(create_habit).get(list_habits))
        .route("/habits/:id", patch(update_habit))
        .route(
            "/habits/:id/completions",
            post(record_habit_completion).get(list_habit_completions),
        )
        .route("/meditations", get(list_meditations))
        .route(
            "/meditations/completions",
            post(record_meditation).get(list_meditation_completions),
        )
        .route("/meditations/:id", get(get_meditation))
        .route("/thought-patterns", get(list_thought_patterns))
        .route("/thought-patterns/:id", get(get_thought_pattern))
        .with_state(handlers)
}
