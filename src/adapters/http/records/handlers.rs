//! HTTP handlers for the collateral record endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::adapters::http::error::{
    error_response, parse_id, parse_user_query, require_user_id, OptionalJson, ValidatedJson,
};
use crate::adapters::http::{UserIdQuery, ValidatedQuery};
use crate::application::handlers::records::{
    CreateHabitCommand, CreateHabitHandler, CreateUserCommand, CreateUserHandler,
    GetMeditationHandler, GetUserHandler, ListHabitCompletionsHandler, ListHabitsHandler,
    ListMeditationCompletionsHandler, ListMeditationsHandler, ListMoodsHandler, LogMoodCommand,
    LogMoodHandler, RecordHabitCompletionCommand, RecordHabitCompletionHandler,
    RecordMeditationCommand, RecordMeditationHandler, ThoughtPatternHandler, UpdateHabitCommand,
    UpdateHabitHandler,
};
use crate::domain::foundation::{HabitId, MeditationId, ThoughtPatternId, UserId};
use crate::domain::records::RecordError;
use crate::ports::{
    HabitRepository, MeditationRepository, MoodRepository, ThoughtPatternReader, UserRepository,
};

use super::dto::{
    CreateHabitRequest, CreateUserRequest, HabitCompletionResponse, HabitResponse, LogMoodRequest,
    MeditationCompletionResponse, MeditationResponse, MoodResponse, RecordCompletionRequest,
    RecordMeditationRequest, ThoughtPatternResponse, UpdateHabitRequest, UserResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct RecordHandlers {
    create_user: Arc<CreateUserHandler>,
    get_user: Arc<GetUserHandler>,
    log_mood: Arc<LogMoodHandler>,
    list_moods: Arc<ListMoodsHandler>,
    create_habit: Arc<CreateHabitHandler>,
    list_habits: Arc<ListHabitsHandler>,
    update_habit: Arc<UpdateHabitHandler>,
    record_habit_completion: Arc<RecordHabitCompletionHandler>,
    list_habit_completions: Arc<ListHabitCompletionsHandler>,
    list_meditations: Arc<ListMeditationsHandler>,
    get_meditation: Arc<GetMeditationHandler>,
    record_meditation: Arc<RecordMeditationHandler>,
    list_meditation_completions: Arc<ListMeditationCompletionsHandler>,
    thought_patterns: Arc<ThoughtPatternHandler>,
}

impl RecordHandlers {
    pub fn new(
        users: Arc<dyn UserRepository>,
        moods: Arc<dyn MoodRepository>,
        habits: Arc<dyn HabitRepository>,
        meditations: Arc<dyn MeditationRepository>,
        patterns: Arc<dyn ThoughtPatternReader>,
    ) -> Self {
        Self {
            create_user: Arc::new(CreateUserHandler::new(users.clone())),
            get_user: Arc::new(GetUserHandler::new(users)),
            log_mood: Arc::new(LogMoodHandler::new(moods.clone())),
            list_moods: Arc::new(ListMoodsHandler::new(moods)),
            create_habit: Arc::new(CreateHabitHandler::new(habits.clone())),
            list_habits: Arc::new(ListHabitsHandler::new(habits.clone())),
            update_habit: Arc::new(UpdateHabitHandler::new(habits.clone())),
            record_habit_completion: Arc::new(RecordHabitCompletionHandler::new(habits.clone())),
            list_habit_completions: Arc::new(ListHabitCompletionsHandler::new(habits)),
            list_meditations: Arc::new(ListMeditationsHandler::new(meditations.clone())),
            get_meditation: Arc::new(GetMeditationHandler::new(meditations.clone())),
            record_meditation: Arc::new(RecordMeditationHandler::new(meditations.clone())),
            list_meditation_completions: Arc::new(ListMeditationCompletionsHandler::new(meditations)),
            thought_patterns: Arc::new(ThoughtPatternHandler::new(patterns)),
        }
    }
}

fn respond<T, R>(status: StatusCode, result: Result<T, RecordError>) -> Response
where
    R: Serialize + From<T>,
{
    match result {
        Ok(value) => (status, Json(R::from(value))).into_response(),
        Err(e) => handle_record_error(e),
    }
}

fn respond_list<T, R>(result: Result<Vec<T>, RecordError>) -> Response
where
    R: Serialize + From<T>,
{
    match result {
        Ok(values) => {
            let body: Vec<R> = values.into_iter().map(R::from).collect();
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(e) => handle_record_error(e),
    }
}

fn user_query(query: &UserIdQuery) -> Result<UserId, Response> {
    parse_user_query(query.user_id.as_deref())
}

// ════════════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════════════

/// POST /users - Register a username
pub async fn create_user(
    State(handlers): State<RecordHandlers>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> Response {
    let result = handlers
        .create_user
        .handle(CreateUserCommand {
            username: req.username,
        })
        .await;
    respond::<_, UserResponse>(StatusCode::CREATED, result)
}

/// GET /users/:id
pub async fn get_user(State(handlers): State<RecordHandlers>, Path(id): Path<String>) -> Response {
    let user_id = match parse_id::<UserId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond::<_, UserResponse>(StatusCode::OK, handlers.get_user.handle(user_id).await)
}

// ════════════════════════════════════════════════════════════════════════════
// Moods
// ════════════════════════════════════════════════════════════════════════════

/// POST /moods - Log a mood with intensity 1-10
pub async fn log_mood(
    State(handlers): State<RecordHandlers>,
    ValidatedJson(req): ValidatedJson<LogMoodRequest>,
) -> Response {
    let user_id = match require_user_id(req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = LogMoodCommand {
        user_id,
        mood: req.mood,
        intensity: req.intensity,
        note: req.note,
    };
    respond::<_, MoodResponse>(StatusCode::CREATED, handlers.log_mood.handle(cmd).await)
}

/// GET /moods?userId=
pub async fn list_moods(
    State(handlers): State<RecordHandlers>,
    ValidatedQuery(query): ValidatedQuery<UserIdQuery>,
) -> Response {
    let user_id = match user_query(&query) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond_list::<_, MoodResponse>(handlers.list_moods.handle(user_id).await)
}

// ════════════════════════════════════════════════════════════════════════════
// Habits
// ════════════════════════════════════════════════════════════════════════════

/// POST /habits
pub async fn create_habit(
    State(handlers): State<RecordHandlers>,
    ValidatedJson(req): ValidatedJson<CreateHabitRequest>,
) -> Response {
    let user_id = match require_user_id(req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = CreateHabitCommand {
        user_id,
        name: req.name,
        description: req.description,
        target_per_week: req.target_per_week,
    };
    respond::<_, HabitResponse>(StatusCode::CREATED, handlers.create_habit.handle(cmd).await)
}

/// GET /habits?userId= - Habits with their current streaks
pub async fn list_habits(
    State(handlers): State<RecordHandlers>,
    ValidatedQuery(query): ValidatedQuery<UserIdQuery>,
) -> Response {
    let user_id = match user_query(&query) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond_list::<_, HabitResponse>(handlers.list_habits.handle(user_id).await)
}

/// PATCH /habits/:id
pub async fn update_habit(
    State(handlers): State<RecordHandlers>,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<UpdateHabitRequest>,
) -> Response {
    let habit_id = match parse_id::<HabitId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = UpdateHabitCommand {
        habit_id,
        name: req.name,
        description: req.description,
        target_per_week: req.target_per_week,
    };
    respond::<_, HabitResponse>(StatusCode::OK, handlers.update_habit.handle(cmd).await)
}

/// POST /habits/:id/completions - Body optional; date defaults to today
pub async fn record_habit_completion(
    State(handlers): State<RecordHandlers>,
    Path(id): Path<String>,
    OptionalJson(req): OptionalJson<RecordCompletionRequest>,
) -> Response {
    let habit_id = match parse_id::<HabitId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordHabitCompletionCommand {
        habit_id,
        completed_on: req.completed_on,
    };
    respond::<_, HabitCompletionResponse>(
        StatusCode::CREATED,
        handlers.record_habit_completion.handle(cmd).await,
    )
}

/// GET /habits/:id/completions
pub async fn list_habit_completions(
    State(handlers): State<RecordHandlers>,
    Path(id): Path<String>,
) -> Response {
    let habit_id = match parse_id::<HabitId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond_list::<_, HabitCompletionResponse>(handlers.list_habit_completions.handle(habit_id).await)
}

// ════════════════════════════════════════════════════════════════════════════
// Meditations
// ════════════════════════════════════════════════════════════════════════════

/// GET /meditations - The seeded catalog
pub async fn list_meditations(State(handlers): State<RecordHandlers>) -> Response {
    respond_list::<_, MeditationResponse>(handlers.list_meditations.handle().await)
}

/// GET /meditations/:id
pub async fn get_meditation(
    State(handlers): State<RecordHandlers>,
    Path(id): Path<String>,
) -> Response {
    let meditation_id = match parse_id::<MeditationId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond::<_, MeditationResponse>(StatusCode::OK, handlers.get_meditation.handle(meditation_id).await)
}

/// POST /meditations/completions
pub async fn record_meditation(
    State(handlers): State<RecordHandlers>,
    ValidatedJson(req): ValidatedJson<RecordMeditationRequest>,
) -> Response {
    let user_id = match require_user_id(req.user_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let cmd = RecordMeditationCommand {
        user_id,
        meditation_id: MeditationId::new(req.meditation_id),
        duration_seconds: req.duration_seconds,
    };
    respond::<_, MeditationCompletionResponse>(
        StatusCode::CREATED,
        handlers.record_meditation.handle(cmd).await,
    )
}

/// GET /meditations/completions?userId=
pub async fn list_meditation_completions(
    State(handlers): State<RecordHandlers>,
    ValidatedQuery(query): ValidatedQuery<UserIdQuery>,
) -> Response {
    let user_id = match user_query(&query) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond_list::<_, MeditationCompletionResponse>(
        handlers.list_meditation_completions.handle(user_id).await,
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Thought patterns
// ════════════════════════════════════════════════════════════════════════════

/// GET /thought-patterns
pub async fn list_thought_patterns(State(handlers): State<RecordHandlers>) -> Response {
    let body: Vec<ThoughtPatternResponse> = handlers
        .thought_patterns
        .list()
        .into_iter()
        .map(Into::into)
        .collect();
    (StatusCode::OK, Json(body)).into_response()
}

/// GET /thought-patterns/:id
pub async fn get_thought_pattern(
    State(handlers): State<RecordHandlers>,
    Path(id): Path<String>,
) -> Response {
    let pattern_id = match parse_id::<ThoughtPatternId>(&id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    respond::<_, ThoughtPatternResponse>(StatusCode::OK, handlers.thought_patterns.get(pattern_id))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_record_error(error: RecordError) -> Response {
    error_response(error.code(), error.message(), error.issues())
}
