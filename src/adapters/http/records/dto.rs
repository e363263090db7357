//! DTOs for the collateral record endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::foundation::Timestamp;
use crate::domain::records::{
    HabitCompletion, HabitView, Meditation, MeditationCategory, MeditationCompletion, Mood,
    ThoughtPattern, User,
};

/// Distinguishes an absent key (`None`) from an explicit `null` (`Some(None)`).
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ════════════════════════════════════════════════════════════════════════════
// Users
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: u64,
    pub username: String,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
            created_at: *user.created_at(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Moods
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogMoodRequest {
    pub user_id: u64,
    #[serde(default)]
    pub mood: String,
    pub intensity: i64,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodResponse {
    pub id: u64,
    pub user_id: u64,
    pub mood: String,
    pub intensity: u8,
    pub note: Option<String>,
    pub created_at: Timestamp,
}

impl From<Mood> for MoodResponse {
    fn from(mood: Mood) -> Self {
        Self {
            id: mood.id().value(),
            user_id: mood.user_id().value(),
            mood: mood.mood().to_string(),
            intensity: mood.intensity(),
            note: mood.note().map(str::to_string),
            created_at: *mood.created_at(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Habits
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateHabitRequest {
    pub user_id: u64,
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
    pub target_per_week: Option<i64>,
}

/// `"description": null` clears the description; omitting it keeps it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateHabitRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub target_per_week: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordCompletionRequest {
    pub completed_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitResponse {
    pub id: u64,
    pub user_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub target_per_week: u8,
    pub current_streak: u32,
    pub created_at: Timestamp,
}

impl From<HabitView> for HabitResponse {
    fn from(view: HabitView) -> Self {
        let habit = view.habit;
        Self {
            id: habit.id().value(),
            user_id: habit.user_id().value(),
            name: habit.name().to_string(),
            description: habit.description().map(str::to_string),
            target_per_week: habit.target_per_week(),
            current_streak: view.current_streak,
            created_at: *habit.created_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitCompletionResponse {
    pub id: u64,
    pub habit_id: u64,
    pub completed_on: NaiveDate,
    pub created_at: Timestamp,
}

impl From<HabitCompletion> for HabitCompletionResponse {
    fn from(c: HabitCompletion) -> Self {
        Self {
            id: c.id().value(),
            habit_id: c.habit_id().value(),
            completed_on: c.completed_on(),
            created_at: *c.created_at(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Meditations
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationResponse {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub duration_minutes: u32,
    pub category: MeditationCategory,
}

impl From<Meditation> for MeditationResponse {
    fn from(m: Meditation) -> Self {
        Self {
            id: m.id().value(),
            title: m.title().to_string(),
            description: m.description().to_string(),
            duration_minutes: m.duration_minutes(),
            category: m.category(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RecordMeditationRequest {
    pub user_id: u64,
    pub meditation_id: u64,
    pub duration_seconds: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeditationCompletionResponse {
    pub id: u64,
    pub user_id: u64,
    pub meditation_id: u64,
    pub duration_seconds: u32,
    pub completed_at: Timestamp,
}

impl From<MeditationCompletion> for MeditationCompletionResponse {
    fn from(c: MeditationCompletion) -> Self {
        Self {
            id: c.id().value(),
            user_id: c.user_id().value(),
            meditation_id: c.meditation_id().value(),
            duration_seconds: c.duration_seconds(),
            completed_at: *c.completed_at(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Thought patterns
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThoughtPatternResponse {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub examples: Vec<String>,
    pub reframe_strategies: Vec<String>,
}

impl From<ThoughtPattern> for ThoughtPatternResponse {
    fn from(p: ThoughtPattern) -> Self {
        Self {
            id: p.id.value(),
            name: p.name.to_string(),
            description: p.description.to_string(),
            examples: p.examples.iter().map(|s| s.to_string()).collect(),
            reframe_strategies: p.reframe_strategies.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn habit_patch_distinguishes_null_from_absent() {
        let absent: UpdateHabitRequest = serde_json::from_value(json!({ "name": "Walk" })).unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateHabitRequest = serde_json::from_value(json!({ "description": null })).unwrap();
        assert_eq!(cleared.description, Some(None));

        let set: UpdateHabitRequest = serde_json::from_value(json!({ "description": "Daily" })).unwrap();
        assert_eq!(set.description, Some(Some("Daily".to_string())));
    }

    #[test]
    fn completion_date_parses_iso_format() {
        let req: RecordCompletionRequest = serde_json::from_value(json!({ "completedOn": "2024-05-01" })).unwrap();
        assert_eq!(req.completed_on, NaiveDate::from_ymd_opt(2024, 5, 1));
    }
}
