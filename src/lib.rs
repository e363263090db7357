//! Mindwell - personal mental-wellness tracker.
//!
//! The core is the CBT journaling flow: a guided session collects a
//! situation, emotion and automatic thought, an LLM classifier names the
//! thought pattern and suggests a challenge and reframe, and the result is
//! stored as a journal entry. Moods, habits, meditations and a library of
//! thought patterns sit alongside.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
