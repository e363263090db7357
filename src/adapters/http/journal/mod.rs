//! HTTP adapter for journal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateEntryRequest, JournalEntryResponse, UpdateEntryRequest};
pub use handlers::JournalHandlers;
pub use routes::journal_routes;
