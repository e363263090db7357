//! DTOs for CBT endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::cbt::{CbtSession, CbtStep, ClassifierDiagnosis, SessionFields, SessionStatus};

/// Request body for POST /cbt/analyze.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub situation: String,
    #[serde(default)]
    pub emotion: String,
    #[serde(default)]
    pub thought: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResponse {
    pub thought_pattern: String,
    pub pattern_explanation: String,
    pub challenge: String,
    pub reframe: String,
}

impl From<&ClassifierDiagnosis> for DiagnosisResponse {
    fn from(d: &ClassifierDiagnosis) -> Self {
        Self {
            thought_pattern: d.thought_pattern().to_string(),
            pattern_explanation: d.pattern_explanation().to_string(),
            challenge: d.challenge().to_string(),
            reframe: d.reframe().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartSessionRequest {
    pub user_id: u64,
}

/// Value for the step the session is on.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdvanceRequest {
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EditSuggestionsRequest {
    pub challenge: Option<String>,
    pub reframe: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: String,
    pub user_id: u64,
    pub step: Option<CbtStep>,
    pub status: SessionStatus,
    pub fields: SessionFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<DiagnosisResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

impl From<&CbtSession> for SessionResponse {
    fn from(session: &CbtSession) -> Self {
        Self {
            id: session.id().to_string(),
            user_id: session.user_id().value(),
            step: session.step(),
            status: session.status(),
            fields: session.fields().clone(),
            diagnosis: session.diagnosis().map(DiagnosisResponse::from),
            warning: session.warning().map(str::to_string),
            last_error: session.last_error().map(str::to_string),
        }
    }
}
