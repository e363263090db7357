//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, validation, errors)
//! - `journal` - CBT journal entries and their partial-update patch
//! - `cbt` - Thought classification values and the guided session state machine
//! - `records` - Users, moods, habits, meditations and the thought-pattern library

pub mod cbt;
pub mod foundation;
pub mod journal;
pub mod records;
