//! Shared HTTP error body and request extractors.
//!
//! Every error response has the shape `{ "code": ..., "message": ... }`,
//! where `message` is a string or, for schema violations, a list of
//! `{ field, message }` issues.

use axum::{
    async_trait,
    body::Bytes,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use std::str::FromStr;

use crate::domain::foundation::{CbtSessionId, ErrorCode, FieldIssue, UserId, ValidationError};

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: ErrorMessage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    Issues(Vec<FieldIssue>),
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: ErrorMessage::Text(message.into()),
        }
    }

    pub fn validation(issues: Vec<FieldIssue>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: ErrorMessage::Issues(issues),
        }
    }

    /// Generic failure. Never carries internal detail.
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, INTERNAL_MESSAGE)
    }

    pub fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Maps an error code to its status and builds the body.
///
/// Storage and internal failures are logged here and answered with the
/// generic message.
pub fn error_response(code: ErrorCode, message: String, issues: Vec<FieldIssue>) -> Response {
    let status = status_for(code);
    if matches!(code, ErrorCode::StorageError | ErrorCode::InternalError) {
        tracing::error!(code = %code, error = %message, "request failed");
        return ErrorResponse::internal().into_response_with(status);
    }
    if code == ErrorCode::ValidationFailed && !issues.is_empty() {
        return ErrorResponse::validation(issues).into_response_with(status);
    }
    ErrorResponse::new(code, message).into_response_with(status)
}

pub fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound
        | ErrorCode::JournalEntryNotFound
        | ErrorCode::UserNotFound
        | ErrorCode::HabitNotFound
        | ErrorCode::MeditationNotFound
        | ErrorCode::ThoughtPatternNotFound
        | ErrorCode::SessionNotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict | ErrorCode::InvalidStateTransition | ErrorCode::SessionBusy => {
            StatusCode::CONFLICT
        }
        ErrorCode::CapacityExceeded => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::ClassificationFailed | ErrorCode::StorageError | ErrorCode::InternalError => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn bad_request(issue: FieldIssue) -> Response {
    ErrorResponse::validation(vec![issue]).into_response_with(StatusCode::BAD_REQUEST)
}

// ════════════════════════════════════════════════════════════════════════════
// Identifiers
// ════════════════════════════════════════════════════════════════════════════

/// Parses a record id from a path segment; 400 on failure.
pub fn parse_id<T>(raw: &str) -> Result<T, Response>
where
    T: FromStr<Err = ValidationError>,
{
    raw.parse::<T>().map_err(|e| bad_request(e.to_issue()))
}

pub fn parse_session_id(raw: &str) -> Result<CbtSessionId, Response> {
    raw.parse::<CbtSessionId>().map_err(|_| {
        bad_request(ValidationError::invalid_format("id", "must be a UUID").to_issue())
    })
}

/// Parses the `userId` query parameter, which is required.
pub fn parse_user_query(raw: Option<&str>) -> Result<UserId, Response> {
    match raw {
        Some(raw) => parse_id(raw),
        None => Err(bad_request(ValidationError::empty_field("userId").to_issue())),
    }
}

/// Checks a `userId` taken from a JSON body.
pub fn require_user_id(raw: u64) -> Result<UserId, Response> {
    if raw == 0 {
        return Err(bad_request(
            ValidationError::invalid_format("userId", "must be a positive integer").to_issue(),
        ));
    }
    Ok(UserId::new(raw))
}

// ════════════════════════════════════════════════════════════════════════════
// Query strings
// ════════════════════════════════════════════════════════════════════════════

/// `Query<T>` whose rejections are 400 responses with field-level issues.
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(bad_request(describe_query_rejection(&rejection))),
        }
    }
}

const QUERY_ERROR_PREFIX: &str = "Failed to deserialize query string: ";

fn describe_query_rejection(rejection: &QueryRejection) -> FieldIssue {
    let text = rejection.body_text();
    let detail = text.strip_prefix(QUERY_ERROR_PREFIX).unwrap_or(text.as_str());

    if let Some(field) = backticked_after(detail, "duplicate field `") {
        return ValidationError::invalid_format(field, "must be given at most once").to_issue();
    }
    let issue = describe_data_error(detail);
    if issue.field == "body" {
        return FieldIssue {
            field: "query".to_string(),
            message: issue.message,
        };
    }
    issue
}

// ════════════════════════════════════════════════════════════════════════════
// JSON bodies
// ════════════════════════════════════════════════════════════════════════════

/// `Json<T>` whose rejections are 400 responses with field-level issues.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(bad_request(describe_rejection(&rejection))),
        }
    }
}

/// Like [`ValidatedJson`], but an empty body yields `T::default()`.
pub struct OptionalJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| bad_request(body_issue(rejection.body_text())))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }
        serde_json::from_slice(&bytes).map(Self).map_err(|e| {
            let issue = if e.is_data() {
                describe_data_error(&e.to_string())
            } else {
                body_issue("Malformed JSON body")
            };
            bad_request(issue)
        })
    }
}

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

fn describe_rejection(rejection: &JsonRejection) -> FieldIssue {
    match rejection {
        JsonRejection::JsonDataError(e) => {
            let text = e.body_text();
            describe_data_error(text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(text.as_str()))
        }
        JsonRejection::JsonSyntaxError(_) => body_issue("Malformed JSON body"),
        JsonRejection::MissingJsonContentType(_) => {
            body_issue("Expected request with `Content-Type: application/json`")
        }
        other => body_issue(other.body_text()),
    }
}

/// Turns a serde error such as ``challenge: invalid type: integer `3`,
/// expected a string at line 1 column 15`` into a field issue.
fn describe_data_error(detail: &str) -> FieldIssue {
    let detail = match detail.find(" at line ") {
        Some(pos) => &detail[..pos],
        None => detail,
    };

    for marker in ["unknown field `", "missing field `"] {
        if let Some(field) = backticked_after(detail, marker) {
            let err = if marker.starts_with("unknown") {
                ValidationError::unknown_field(field)
            } else {
                ValidationError::empty_field(field)
            };
            return err.to_issue();
        }
    }

    match detail.split_once(": ") {
        Some((path, message)) if !path.is_empty() && !path.contains(' ') => FieldIssue {
            field: path.to_string(),
            message: message.to_string(),
        },
        _ => body_issue(detail),
    }
}

fn backticked_after<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    let len = text[start..].find('`')?;
    Some(&text[start..start + len])
}

fn body_issue(message: impl Into<String>) -> FieldIssue {
    FieldIssue {
        field: "body".to_string(),
        message: message.into(),
    }
}
