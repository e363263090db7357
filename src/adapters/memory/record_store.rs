//! In-memory record store.
//!
//! One adapter owns every collection. Each collection is a `BTreeMap`
//! keyed by a monotonic id starting at 1; ids are never reused. All
//! writes go through a single `RwLock`, so concurrent updates are
//! serialized and the last write wins.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{btree_map, BTreeMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{
    EntryId, HabitCompletionId, HabitId, MeditationCompletionId, MeditationId, MoodId,
    ThoughtPatternId, Timestamp, UserId,
};
use crate::domain::journal::{JournalEntry, JournalError, JournalPatch, NewJournalEntry};
use crate::domain::records::{
    find_thought_pattern, seed_catalog, Habit, HabitCompletion, HabitPatch, Meditation,
    MeditationCompletion, Mood, NewHabit, NewMeditationCompletion, NewMood, RecordError,
    ThoughtPattern, User, Username, THOUGHT_PATTERNS,
};
use crate::ports::{
    HabitRepository, JournalRepository, MeditationRepository, MoodRepository,
    ThoughtPatternReader, UserRepository,
};

/// A keyed collection with its own id counter.
#[derive(Debug)]
struct Collection<V> {
    items: BTreeMap<u64, V>,
    next_id: u64,
}

impl<V: Clone> Collection<V> {
    fn new() -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Allocates the next id and stores the value built from it.
    fn insert_with(&mut self, build: impl FnOnce(u64) -> V) -> V {
        let id = self.next_id;
        self.next_id += 1;
        let value = build(id);
        self.items.insert(id, value.clone());
        value
    }

    fn get(&self, id: u64) -> Option<V> {
        self.items.get(&id).cloned()
    }

    fn values(&self) -> btree_map::Values<'_, u64, V> {
        self.items.values()
    }
}

#[derive(Debug)]
struct Collections {
    users: Collection<User>,
    moods: Collection<Mood>,
    journal: Collection<JournalEntry>,
    habits: Collection<Habit>,
    habit_completions: Collection<HabitCompletion>,
    meditations: Collection<Meditation>,
    meditation_completions: Collection<MeditationCompletion>,
}

impl Collections {
    fn seeded() -> Self {
        let mut meditations = Collection::new();
        for (title, description, minutes, category) in seed_catalog() {
            meditations.insert_with(|id| {
                Meditation::new(MeditationId::new(id), title, description, minutes, category)
            });
        }

        Self {
            users: Collection::new(),
            moods: Collection::new(),
            journal: Collection::new(),
            habits: Collection::new(),
            habit_completions: Collection::new(),
            meditations,
            meditation_completions: Collection::new(),
        }
    }
}

/// Process-wide store shared behind `Arc` by every repository port.
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore {
    inner: Arc<RwLock<Collections>>,
}

impl InMemoryRecordStore {
    /// Creates a store with the meditation catalog seeded.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Collections::seeded())),
        }
    }

    /// Number of stored journal entries.
    pub async fn journal_count(&self) -> usize {
        self.inner.read().await.journal.items.len()
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest first, ties broken by the larger id.
fn newest_first<V, K: Ord>(mut items: Vec<V>, key: impl Fn(&V) -> K) -> Vec<V> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

// ─────────────────────────────────────────────────────────────────────────────
// Journal
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl JournalRepository for InMemoryRecordStore {
    async fn create(&self, draft: NewJournalEntry) -> Result<JournalEntry, JournalError> {
        let mut store = self.inner.write().await;
        let entry = store
            .journal
            .insert_with(|id| JournalEntry::create(EntryId::new(id), draft, Timestamp::now()));
        tracing::debug!(entry_id = %entry.id(), user_id = %entry.user_id(), "journal entry stored");
        Ok(entry)
    }

    async fn update(&self, id: EntryId, patch: &JournalPatch) -> Result<JournalEntry, JournalError> {
        let mut store = self.inner.write().await;
        let entry = store
            .journal
            .items
            .get_mut(&id.value())
            .ok_or(JournalError::not_found(id))?;
        entry.apply(patch);
        Ok(entry.clone())
    }

    async fn find_by_id(&self, id: EntryId) -> Result<Option<JournalEntry>, JournalError> {
        Ok(self.inner.read().await.journal.get(id.value()))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<JournalEntry>, JournalError> {
        let store = self.inner.read().await;
        let entries = store
            .journal
            .values()
            .filter(|e| e.user_id() == user_id)
            .cloned()
            .collect();
        Ok(newest_first(entries, |e| (*e.created_at(), e.id())))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl UserRepository for InMemoryRecordStore {
    async fn create(&self, username: Username) -> Result<User, RecordError> {
        let mut store = self.inner.write().await;
        if store.users.values().any(|u| u.username() == &username) {
            return Err(RecordError::UsernameTaken(username.to_string()));
        }
        Ok(store
            .users
            .insert_with(|id| User::new(UserId::new(id), username, Timestamp::now())))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RecordError> {
        Ok(self.inner.read().await.users.get(id.value()))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, RecordError> {
        let store = self.inner.read().await;
        let found = store.users.values().find(|u| u.username() == username).cloned();
        Ok(found)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Moods
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl MoodRepository for InMemoryRecordStore {
    async fn create(&self, draft: NewMood) -> Result<Mood, RecordError> {
        let mut store = self.inner.write().await;
        Ok(store
            .moods
            .insert_with(|id| Mood::create(MoodId::new(id), draft, Timestamp::now())))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Mood>, RecordError> {
        let store = self.inner.read().await;
        let moods = store
            .moods
            .values()
            .filter(|m| m.user_id() == user_id)
            .cloned()
            .collect();
        Ok(newest_first(moods, |m| (*m.created_at(), m.id())))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Habits
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl HabitRepository for InMemoryRecordStore {
    async fn create(&self, draft: NewHabit) -> Result<Habit, RecordError> {
        let mut store = self.inner.write().await;
        Ok(store
            .habits
            .insert_with(|id| Habit::create(HabitId::new(id), draft, Timestamp::now())))
    }

    async fn find_by_id(&self, id: HabitId) -> Result<Option<Habit>, RecordError> {
        Ok(self.inner.read().await.habits.get(id.value()))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Habit>, RecordError> {
        let store = self.inner.read().await;
        let habits = store
            .habits
            .values()
            .filter(|h| h.user_id() == user_id)
            .cloned()
            .collect();
        Ok(habits)
    }

    async fn update(&self, id: HabitId, patch: &HabitPatch) -> Result<Habit, RecordError> {
        let mut store = self.inner.write().await;
        let habit = store
            .habits
            .items
            .get_mut(&id.value())
            .ok_or(RecordError::HabitNotFound(id))?;
        habit.apply(patch);
        Ok(habit.clone())
    }

    async fn record_completion(
        &self,
        habit_id: HabitId,
        completed_on: NaiveDate,
    ) -> Result<HabitCompletion, RecordError> {
        let mut store = self.inner.write().await;
        if !store.habits.items.contains_key(&habit_id.value()) {
            return Err(RecordError::HabitNotFound(habit_id));
        }
        if let Some(existing) = store
            .habit_completions
            .values()
            .find(|c| c.habit_id() == habit_id && c.completed_on() == completed_on)
        {
            return Ok(existing.clone());
        }
        Ok(store.habit_completions.insert_with(|id| {
            HabitCompletion::new(HabitCompletionId::new(id), habit_id, completed_on, Timestamp::now())
        }))
    }

    async fn list_completions(&self, habit_id: HabitId) -> Result<Vec<HabitCompletion>, RecordError> {
        let store = self.inner.read().await;
        if !store.habits.items.contains_key(&habit_id.value()) {
            return Err(RecordError::HabitNotFound(habit_id));
        }
        let completions = store
            .habit_completions
            .values()
            .filter(|c| c.habit_id() == habit_id)
            .cloned()
            .collect();
        Ok(newest_first(completions, |c| (c.completed_on(), c.id())))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Meditations
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl MeditationRepository for InMemoryRecordStore {
    async fn list(&self) -> Result<Vec<Meditation>, RecordError> {
        Ok(self.inner.read().await.meditations.values().cloned().collect())
    }

    async fn find_by_id(&self, id: MeditationId) -> Result<Option<Meditation>, RecordError> {
        Ok(self.inner.read().await.meditations.get(id.value()))
    }

    async fn record_completion(
        &self,
        draft: NewMeditationCompletion,
    ) -> Result<MeditationCompletion, RecordError> {
        let mut store = self.inner.write().await;
        let meditation_id = draft.meditation_id();
        if !store.meditations.items.contains_key(&meditation_id.value()) {
            return Err(RecordError::MeditationNotFound(meditation_id));
        }
        Ok(store.meditation_completions.insert_with(|id| {
            MeditationCompletion::create(MeditationCompletionId::new(id), draft, Timestamp::now())
        }))
    }

    async fn list_completions_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<MeditationCompletion>, RecordError> {
        let store = self.inner.read().await;
        let completions = store
            .meditation_completions
            .values()
            .filter(|c| c.user_id() == user_id)
            .cloned()
            .collect();
        Ok(newest_first(completions, |c| (*c.completed_at(), c.id())))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Thought patterns
// ─────────────────────────────────────────────────────────────────────────────

impl ThoughtPatternReader for InMemoryRecordStore {
    fn list(&self) -> Vec<ThoughtPattern> {
        THOUGHT_PATTERNS.clone()
    }

    fn find_by_id(&self, id: ThoughtPatternId) -> Option<ThoughtPattern> {
        find_thought_pattern(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn draft(user: u64, thought: &str) -> NewJournalEntry {
        NewJournalEntry::new(
            UserId::new(user),
            "Presenting to my boss",
            "anxious",
            thought,
            Some("What evidence do I have?".into()),
            None,
        )
        .unwrap()
    }

    mod journal {
        use super::*;

        #[tokio::test]
        async fn create_assigns_sequential_ids() {
            let store = InMemoryRecordStore::new();
            let a = JournalRepository::create(&store, draft(1, "first thought")).await.unwrap();
            let b = JournalRepository::create(&store, draft(1, "second thought")).await.unwrap();
            assert_eq!(a.id(), EntryId::new(1));
            assert_eq!(b.id(), EntryId::new(2));
        }

        #[tokio::test]
        async fn find_returns_stored_entry_twice_identically() {
            let store = InMemoryRecordStore::new();
            let created = JournalRepository::create(&store, draft(1, "I will fail")).await.unwrap();
            let first = JournalRepository::find_by_id(&store, created.id()).await.unwrap();
            let second = JournalRepository::find_by_id(&store, created.id()).await.unwrap();
            assert_eq!(first, Some(created));
            assert_eq!(first, second);
        }

        #[tokio::test]
        async fn update_missing_entry_is_not_found() {
            let store = InMemoryRecordStore::new();
            let patch = JournalPatch::new(None, Some("x".into())).unwrap();
            let err = JournalRepository::update(&store, EntryId::new(9), &patch).await.unwrap_err();
            assert_eq!(err, JournalError::not_found(EntryId::new(9)));
        }

        #[tokio::test]
        async fn list_is_newest_first_and_scoped_to_user() {
            let store = InMemoryRecordStore::new();
            for thought in ["thought one", "thought two", "thought three"] {
                JournalRepository::create(&store, draft(1, thought)).await.unwrap();
            }
            JournalRepository::create(&store, draft(2, "someone else")).await.unwrap();

            let ids: Vec<u64> = JournalRepository::list_by_user(&store, UserId::new(1))
                .await
                .unwrap()
                .iter()
                .map(|e| e.id().value())
                .collect();
            assert_eq!(ids, vec![3, 2, 1]);
        }
    }

    mod users {
        use super::*;

        #[tokio::test]
        async fn duplicate_username_conflicts() {
            let store = InMemoryRecordStore::new();
            let name = Username::parse("river").unwrap();
            let first = UserRepository::create(&store, name.clone()).await.unwrap();
            let err = UserRepository::create(&store, name.clone()).await.unwrap_err();

            assert!(matches!(err, RecordError::UsernameTaken(_)));
            let found = store.find_by_username(&name).await.unwrap().unwrap();
            assert_eq!(found.id(), first.id());
        }

        #[tokio::test]
        async fn unknown_username_is_none() {
            let store = InMemoryRecordStore::new();
            UserRepository::create(&store, Username::parse("river").unwrap()).await.unwrap();
            let missing = Username::parse("lake").unwrap();
            assert!(store.find_by_username(&missing).await.unwrap().is_none());
        }

        #[tokio::test]
        async fn usernames_differing_in_case_are_distinct() {
            let store = InMemoryRecordStore::new();
            UserRepository::create(&store, Username::parse("River").unwrap()).await.unwrap();
            assert!(UserRepository::create(&store, Username::parse("river").unwrap()).await.is_ok());
        }
    }

    mod habits {
        use super::*;

        fn day(d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
        }

        #[tokio::test]
        async fn completion_is_idempotent_per_date() {
            let store = InMemoryRecordStore::new();
            let habit = HabitRepository::create(
                &store,
                NewHabit::new(UserId::new(1), "Walk", None, None).unwrap(),
            )
            .await
            .unwrap();

            let a = HabitRepository::record_completion(&store, habit.id(), day(3)).await.unwrap();
            let b = HabitRepository::record_completion(&store, habit.id(), day(3)).await.unwrap();
            HabitRepository::record_completion(&store, habit.id(), day(4)).await.unwrap();

            assert_eq!(a.id(), b.id());
            let dates: Vec<NaiveDate> = store
                .list_completions(habit.id())
                .await
                .unwrap()
                .iter()
                .map(|c| c.completed_on())
                .collect();
            assert_eq!(dates, vec![day(4), day(3)]);
        }

        #[tokio::test]
        async fn completion_for_unknown_habit_fails() {
            let store = InMemoryRecordStore::new();
            let err = HabitRepository::record_completion(&store, HabitId::new(5), day(1)).await.unwrap_err();
            assert_eq!(err, RecordError::HabitNotFound(HabitId::new(5)));
        }
    }

    mod meditations {
        use super::*;

        #[tokio::test]
        async fn catalog_is_seeded() {
            let store = InMemoryRecordStore::new();
            let catalog = MeditationRepository::list(&store).await.unwrap();
            assert_eq!(catalog.len(), seed_catalog().len());
            assert_eq!(catalog[0].id(), MeditationId::new(1));
        }

        #[tokio::test]
        async fn completion_requires_known_meditation() {
            let store = InMemoryRecordStore::new();
            let draft = NewMeditationCompletion::new(UserId::new(1), MeditationId::new(999), 60).unwrap();
            let err = MeditationRepository::record_completion(&store, draft).await.unwrap_err();
            assert_eq!(err, RecordError::MeditationNotFound(MeditationId::new(999)));
        }
    }

    #[test]
    fn thought_patterns_come_from_static_catalog() {
        let store = InMemoryRecordStore::new();
        assert_eq!(ThoughtPatternReader::list(&store).len(), THOUGHT_PATTERNS.len());
        assert!(ThoughtPatternReader::find_by_id(&store, ThoughtPatternId::new(2)).is_some());
    }

    proptest! {
        #[test]
        fn listing_is_sorted_strictly_descending(owners in prop::collection::vec(1u64..=3, 1..20)) {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            rt.block_on(async {
                let store = InMemoryRecordStore::new();
                for owner in &owners {
                    JournalRepository::create(&store, draft(*owner, "a thought")).await.unwrap();
                }
                for owner in 1..=3u64 {
                    let listed = JournalRepository::list_by_user(&store, UserId::new(owner)).await.unwrap();
                    let expected = owners.iter().filter(|o| **o == owner).count();
                    prop_assert_eq!(listed.len(), expected);
                    for pair in listed.windows(2) {
                        prop_assert!((pair[0].created_at(), pair[0].id()) > (pair[1].created_at(), pair[1].id()));
                    }
                }
                Ok(())
            })?;
        }
    }
}
