//! Error types for validation, submission, and configuration

use thiserror::Error;

/// Per-field validation failure. The `Display` text is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a valid 10-digit mobile number")]
    InvalidMobile,
}

/// Failure of a single submission attempt.
///
/// The user only ever sees one generic message for all of these; the variants
/// exist for the diagnostic trace.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("collector rejected submission with status {status}")]
    Rejected { status: u16 },
    #[error("Submission failed")]
    Simulated,
    #[error("submission task ended without reporting an outcome")]
    Dropped,
}

/// Configuration loading or validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid endpoint URL '{url}': {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("simulated success rate must be within 0.0..=1.0, got {0}")]
    InvalidSuccessRate(f64),
    #[error("field mapping is empty")]
    EmptyMapping,
    #[error("unknown transport '{0}' (expected 'simulated' or 'http')")]
    UnknownTransport(String),
}
