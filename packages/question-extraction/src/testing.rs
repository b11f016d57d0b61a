//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use this library without making
//! real AI calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::error::{ExtractionError, Result};
use crate::pipeline::prompts::NO_QUESTIONS_SENTINEL;
use crate::traits::AI;

/// A mock collaborator for testing.
///
/// Returns a deterministic, configurable response; can be told to fail or
/// to delay, and records every call for assertions.
#[derive(Default)]
pub struct MockAI {
    /// Scripted response; defaults to the no-questions sentinel
    response: Arc<RwLock<Option<String>>>,

    /// When set, every call fails
    fail: Arc<RwLock<bool>>,

    /// Artificial latency before responding, for timeout tests
    delay_ms: Arc<RwLock<u64>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockAICall>>>,
}

/// Record of a call made to the mock AI.
#[derive(Debug, Clone)]
pub struct MockAICall {
    /// Full prompt the pipeline sent
    pub prompt: String,

    /// Temperature the pipeline requested
    pub temperature: f32,
}

impl MockAI {
    /// Create a new mock with default behavior (sentinel response).
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the response returned by every call.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        *self.response.write().unwrap() = Some(response.into());
        self
    }

    /// Make every call fail with a connection error.
    pub fn failing(self) -> Self {
        *self.fail.write().unwrap() = true;
        self
    }

    /// Delay every response by the given number of milliseconds.
    pub fn with_delay_ms(self, ms: u64) -> Self {
        *self.delay_ms.write().unwrap() = ms;
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockAICall> {
        self.calls.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }
}

#[async_trait]
impl AI for MockAI {
    async fn ask(&self, prompt: &str, temperature: f32) -> Result<String> {
        self.calls.write().unwrap().push(MockAICall {
            prompt: prompt.to_string(),
            temperature,
        });

        let delay = *self.delay_ms.read().unwrap();
        if delay > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
        }

        if *self.fail.read().unwrap() {
            return Err(ExtractionError::AI(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "Mock AI failure",
            ))));
        }

        Ok(self
            .response
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| NO_QUESTIONS_SENTINEL.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_ai_scripted_response() {
        let ai = MockAI::new().with_response("Do you approve of the governor?");

        let response = ai.ask("prompt", 0.2).await.unwrap();
        assert_eq!(response, "Do you approve of the governor?");

        let calls = ai.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "prompt");
        assert!((calls[0].temperature - 0.2).abs() < f32::EPSILON);
    }

    #[tokio::test]
    async fn test_mock_ai_default_is_sentinel() {
        let ai = MockAI::new();
        assert_eq!(ai.ask("prompt", 0.2).await.unwrap(), NO_QUESTIONS_SENTINEL);
    }

    #[tokio::test]
    async fn test_mock_ai_failing() {
        let ai = MockAI::new().failing();
        assert!(ai.ask("prompt", 0.2).await.is_err());
        // The failed call is still recorded
        assert_eq!(ai.calls().len(), 1);
    }
}
