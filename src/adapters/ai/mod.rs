//! AI Adapters.
//!
//! ## Available Adapters
//!
//! - `OpenAIProvider` - OpenAI chat completions
//! - `MockAIProvider` - Configurable mock for testing
//! - `LlmThoughtClassifier` - Thought classification over any provider
//! - `UnconfiguredClassifier` - Always-failing stand-in when no key is set

mod llm_classifier;
mod mock_provider;
mod openai_provider;

pub use llm_classifier::{LlmThoughtClassifier, UnconfiguredClassifier};
pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
