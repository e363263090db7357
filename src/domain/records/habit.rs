//! Habit tracking records and streak computation.

use chrono::NaiveDate;

use crate::domain::foundation::{
    bounded_text, optional_text, HabitCompletionId, HabitId, Timestamp, UserId, ValidationError,
};

pub const MIN_TARGET_PER_WEEK: i64 = 1;
pub const MAX_TARGET_PER_WEEK: i64 = 7;
const MAX_NAME_CHARS: usize = 100;
const MAX_DESCRIPTION_CHARS: usize = 1_000;

/// A habit the user wants to build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Habit {
    id: HabitId,
    user_id: UserId,
    name: String,
    description: Option<String>,
    target_per_week: u8,
    created_at: Timestamp,
}

impl Habit {
    pub fn create(id: HabitId, draft: NewHabit, created_at: Timestamp) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            name: draft.name,
            description: draft.description,
            target_per_week: draft.target_per_week,
            created_at,
        }
    }

    pub fn id(&self) -> HabitId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn target_per_week(&self) -> u8 {
        self.target_per_week
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn apply(&mut self, patch: &HabitPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(target) = patch.target_per_week {
            self.target_per_week = target;
        }
    }
}

/// Validated input for creating a habit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewHabit {
    user_id: UserId,
    name: String,
    description: Option<String>,
    target_per_week: u8,
}

impl NewHabit {
    /// `target_per_week` defaults to every day.
    pub fn new(
        user_id: UserId,
        name: &str,
        description: Option<String>,
        target_per_week: Option<i64>,
    ) -> Result<Self, Vec<ValidationError>> {
        let patch = HabitPatch::new(Some(name), description.map(Some), target_per_week)?;
        Ok(Self {
            user_id,
            name: patch.name.unwrap_or_default(),
            description: patch.description.flatten(),
            target_per_week: patch.target_per_week.unwrap_or(MAX_TARGET_PER_WEEK as u8),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}

/// Partial habit update. `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HabitPatch {
    name: Option<String>,
    description: Option<Option<String>>,
    target_per_week: Option<u8>,
}

impl HabitPatch {
    pub fn new(
        name: Option<&str>,
        description: Option<Option<String>>,
        target_per_week: Option<i64>,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut issues = Vec::new();

        let name = match name.map(|n| bounded_text("name", n, 1, MAX_NAME_CHARS)) {
            Some(Ok(n)) => Some(n),
            Some(Err(e)) => {
                issues.push(e);
                None
            }
            None => None,
        };
        let description = description.map(optional_text);
        if let Some(Some(text)) = &description {
            let len = text.chars().count();
            if len > MAX_DESCRIPTION_CHARS {
                issues.push(ValidationError::too_long("description", MAX_DESCRIPTION_CHARS, len));
            }
        }
        if let Some(target) = target_per_week {
            if !(MIN_TARGET_PER_WEEK..=MAX_TARGET_PER_WEEK).contains(&target) {
                issues.push(ValidationError::out_of_range(
                    "targetPerWeek",
                    MIN_TARGET_PER_WEEK,
                    MAX_TARGET_PER_WEEK,
                    target,
                ));
            }
        }

        if issues.is_empty() {
            Ok(Self {
                name,
                description,
                target_per_week: target_per_week.map(|t| t as u8),
            })
        } else {
            Err(issues)
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.description.is_none() && self.target_per_week.is_none()
    }
}

/// A day on which a habit was done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitCompletion {
    id: HabitCompletionId,
    habit_id: HabitId,
    completed_on: NaiveDate,
    created_at: Timestamp,
}

impl HabitCompletion {
    pub fn new(id: HabitCompletionId, habit_id: HabitId, completed_on: NaiveDate, created_at: Timestamp) -> Self {
        Self {
            id,
            habit_id,
            completed_on,
            created_at,
        }
    }

    pub fn id(&self) -> HabitCompletionId {
        self.id
    }

    pub fn habit_id(&self) -> HabitId {
        self.habit_id
    }

    pub fn completed_on(&self) -> NaiveDate {
        self.completed_on
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}

/// A habit together with its derived streak.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HabitView {
    pub habit: Habit,
    pub current_streak: u32,
}

/// Consecutive days with a completion, ending today or yesterday.
///
/// A streak that ended before yesterday is broken and counts as zero.
pub fn current_streak<I>(dates: I, today: NaiveDate) -> u32
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut days: Vec<NaiveDate> = dates.into_iter().filter(|d| *d <= today).collect();
    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let Some(&latest) = days.first() else {
        return 0;
    };
    if (today - latest).num_days() > 1 {
        return 0;
    }

    let mut streak = 1;
    for pair in days.windows(2) {
        if (pair[0] - pair[1]).num_days() == 1 {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}
