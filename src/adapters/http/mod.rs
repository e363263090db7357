//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure;
//! [`build_router`] mounts them all.

pub mod cbt;
pub mod error;
pub mod health;
pub mod journal;
pub mod records;
mod router;

use serde::Deserialize;

pub use error::{ErrorMessage, ErrorResponse, OptionalJson, ValidatedJson, ValidatedQuery};
pub use router::build_router;

/// `?userId=` filter shared by the listing endpoints.
///
/// Kept as a string so a malformed value becomes a field-level 400.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserIdQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}
