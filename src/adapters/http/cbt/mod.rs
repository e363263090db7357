//! HTTP adapter for thought analysis and guided CBT sessions.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AdvanceRequest, AnalyzeRequest, DiagnosisResponse, EditSuggestionsRequest, SessionResponse,
    StartSessionRequest,
};
pub use handlers::CbtHandlers;
pub use routes::cbt_routes;
