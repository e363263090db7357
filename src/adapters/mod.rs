//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - Thought classification over an LLM provider
//! - `http` - axum REST surface
//! - `memory` - In-process record store

pub mod ai;
pub mod http;
pub mod memory;
