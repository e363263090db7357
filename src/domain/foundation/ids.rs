//! Strongly-typed identifier value objects.
//!
//! Stored records use monotonic integer ids handed out by the record store.
//! Guided CBT sessions are transient and use random UUIDs instead.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw store id.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw integer value.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().parse::<u64>() {
                    Ok(raw) if raw > 0 => Ok(Self(raw)),
                    _ => Err(ValidationError::invalid_format(
                        $field,
                        "must be a positive integer",
                    )),
                }
            }
        }
    };
}

record_id!(
    /// Identifier of a user record.
    UserId,
    "userId"
);
record_id!(
    /// Identifier of a persisted journal entry.
    EntryId,
    "id"
);
record_id!(
    /// Identifier of a mood log.
    MoodId,
    "id"
);
record_id!(
    /// Identifier of a tracked habit.
    HabitId,
    "id"
);
record_id!(
    /// Identifier of a single habit completion.
    HabitCompletionId,
    "id"
);
record_id!(
    /// Identifier of a guided meditation in the catalog.
    MeditationId,
    "id"
);
record_id!(
    /// Identifier of a finished meditation.
    MeditationCompletionId,
    "id"
);
record_id!(
    /// Identifier of a cognitive distortion in the reference library.
    ThoughtPatternId,
    "id"
);

/// Unique identifier for a guided CBT session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CbtSessionId(Uuid);

impl CbtSessionId {
    /// Creates a new random CbtSessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CbtSessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CbtSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CbtSessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_positive_integers() {
        let id: EntryId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn record_id_rejects_zero_and_garbage() {
        assert!("0".parse::<EntryId>().is_err());
        assert!("-3".parse::<UserId>().is_err());
        assert!("abc".parse::<HabitId>().is_err());
        assert!("".parse::<MoodId>().is_err());
    }

    #[test]
    fn record_id_error_names_the_field() {
        let err = "nope".parse::<UserId>().unwrap_err();
        assert!(err.to_string().contains("userId"));
    }

    #[test]
    fn record_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&EntryId::new(7)).unwrap();
        assert_eq!(json, "7");
        let back: EntryId = serde_json::from_str("7").unwrap();
        assert_eq!(back, EntryId::new(7));
    }

    #[test]
    fn session_id_roundtrips_through_string() {
        let id = CbtSessionId::new();
        let parsed: CbtSessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn session_ids_are_unique() {
        assert_ne!(CbtSessionId::new(), CbtSessionId::new());
    }
}
