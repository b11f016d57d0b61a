//! Domain types: extracted questions and extractor configuration.

pub mod config;
pub mod question;

pub use config::ExtractorConfig;
pub use question::{Question, EXTRACTION_METHOD};
