//! AI trait for the natural-language collaborator.
//!
//! The collaborator is consulted only when pattern-based detection yields
//! too few questions. It is passed explicitly into the extractor rather
//! than held as ambient state, so the no-collaborator path (pure pattern
//! extraction) is a first-class configuration, not a null-check special
//! case.

use async_trait::async_trait;

use crate::error::Result;

/// AI trait for LLM operations.
///
/// Implementations wrap specific LLM providers and handle transport,
/// authentication, and provider-side retries. The extraction pipeline
/// performs no retries of its own and bounds each call with a configured
/// timeout; on any error it degrades to pattern-only output.
#[async_trait]
pub trait AI: Send + Sync {
    /// Send a prompt and return the raw text response.
    ///
    /// `temperature` controls sampling randomness; the pipeline passes a
    /// low value because fallback extraction must quote questions that
    /// already exist in the content. The response is treated as
    /// unstructured text and parsed line by line.
    async fn ask(&self, prompt: &str, temperature: f32) -> Result<String>;
}
