//! CBT analysis and guided session handlers.

mod analyze_thought;
mod guided_session;
mod session_registry;

pub use analyze_thought::{AnalyzeThoughtCommand, AnalyzeThoughtHandler};
pub use guided_session::GuidedSessionHandler;
pub use session_registry::SessionRegistry;
