//! Typed errors for the question extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Note that the extraction API itself never surfaces these to callers:
//! collaborator failures are caught inside the pipeline and degrade to
//! pattern-only output. The error type exists for `AI` implementations
//! and for the pipeline's internal fallback handling.

use thiserror::Error;

/// Errors that can occur while consulting the AI collaborator.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// AI service unavailable or failed
    #[error("AI service error: {0}")]
    AI(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// AI call exceeded the configured deadline
    #[error("AI request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// Result type alias for collaborator operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
