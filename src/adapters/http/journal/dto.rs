//! DTOs for journal endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::journal::JournalEntry;

/// Request body for POST /journal.
///
/// Text fields default to empty so that missing keys surface as
/// field-level validation errors.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateEntryRequest {
    pub user_id: u64,
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub thought: String,
    pub challenge: Option<String>,
    pub reframe: Option<String>,
}

/// Request body for PATCH /journal/:id. Only these two keys are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateEntryRequest {
    pub challenge: Option<String>,
    pub reframe: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntryResponse {
    pub id: u64,
    pub user_id: u64,
    pub situation: String,
    pub emotion: String,
    pub thought: String,
    pub challenge: Option<String>,
    pub reframe: Option<String>,
    pub created_at: Timestamp,
}

impl From<JournalEntry> for JournalEntryResponse {
    fn from(entry: JournalEntry) -> Self {
        Self {
            id: entry.id().value(),
            user_id: entry.user_id().value(),
            situation: entry.situation().to_string(),
            emotion: entry.emotion().to_string(),
            thought: entry.thought().to_string(),
            challenge: entry.challenge().map(str::to_string),
            reframe: entry.reframe().map(str::to_string),
            created_at: *entry.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_request_tolerates_missing_text() {
        let req: CreateEntryRequest = serde_json::from_value(json!({ "userId": 1 })).unwrap();
        assert_eq!(req.situation, "");
        assert!(req.challenge.is_none());
    }

    #[test]
    fn update_request_rejects_other_keys() {
        let result: Result<UpdateEntryRequest, _> =
            serde_json::from_value(json!({ "reframe": "X", "thought": "sneaky" }));
        assert!(result.is_err());
    }

    #[test]
    fn response_uses_camel_case() {
        let response = JournalEntryResponse {
            id: 1,
            user_id: 2,
            situation: "s".into(),
            emotion: "e".into(),
            thought: "t".into(),
            challenge: None,
            reframe: Some("r".into()),
            created_at: Timestamp::now(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["userId"], 2);
        assert!(json["createdAt"].is_string());
        assert!(json["challenge"].is_null());
    }
}
