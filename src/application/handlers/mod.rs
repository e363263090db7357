//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod cbt;
pub mod journal;
pub mod records;
