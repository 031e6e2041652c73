//! LLM provider abstraction shared across the service.
//!
//! The [`LlmProvider`] trait presents a single capability: send a prompt
//! (with optional system context) and get the model's textual response back.
//! Callers stay agnostic to which backend answers. The trait abstraction
//! enables:
//!
//! - Easy mocking in unit tests
//! - HTTP-level testing with stubbed servers in integration tests
//! - Swapping implementations (local models, alternative hosted APIs)
//!
//! # Example
//!
//! ```ignore
//! use billy_llm::{GeminiProvider, LlmProvider};
//!
//! let provider = GeminiProvider::new("my-api-key");
//! let answer = provider.prompt("Summarize this bill.", None).await?;
//! println!("{} says: {}", provider.provider_name(), answer);
//! ```

use async_trait::async_trait;

mod gemini;

pub use gemini::GeminiProvider;

/// Trait for single-turn LLM prompt/response backends.
///
/// Implementations issue one request per call. No retries, no streaming,
/// no fallback provider — a backend failure propagates to the caller as an
/// opaque error.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a prompt to the model and return its textual response.
    ///
    /// `system` sets the model's system context for this call when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend request fails or the backend reports
    /// an error of its own.
    async fn prompt(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<String>;

    /// Human-readable name of the backend (e.g. "Gemini").
    fn provider_name(&self) -> &'static str;
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(
    clippy::unwrap_used,
    clippy::missing_panics_doc,
    clippy::missing_const_for_fn,
    clippy::must_use_candidate
)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::LlmProvider;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// A recorded call to [`MockLlmProvider::prompt`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PromptCall {
        pub prompt: String,
        pub system: Option<String>,
    }

    /// Mock implementation of [`LlmProvider`] for unit tests.
    ///
    /// Configure the next response with [`set_response`](Self::set_response)
    /// and verify what the code under test sent with
    /// [`prompt_calls`](Self::prompt_calls).
    pub struct MockLlmProvider {
        response: Mutex<Option<anyhow::Result<String>>>,
        calls: Mutex<Vec<PromptCall>>,
    }

    impl MockLlmProvider {
        pub fn new() -> Self {
            Self {
                response: Mutex::new(None),
                calls: Mutex::new(Vec::new()),
            }
        }

        /// Set the result for the next `prompt` call.
        pub fn set_response(&self, result: anyhow::Result<String>) {
            *self.response.lock().unwrap() = Some(result);
        }

        /// Get all prompts passed to `prompt`, in call order.
        pub fn prompt_calls(&self) -> Vec<PromptCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Default for MockLlmProvider {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl LlmProvider for MockLlmProvider {
        async fn prompt(&self, prompt: &str, system: Option<&str>) -> anyhow::Result<String> {
            self.calls.lock().unwrap().push(PromptCall {
                prompt: prompt.to_string(),
                system: system.map(String::from),
            });

            self.response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(String::new()))
        }

        fn provider_name(&self) -> &'static str {
            "Mock"
        }
    }
}
