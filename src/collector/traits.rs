//! Trait abstraction for the form collector to enable mocking in tests

use super::payload::FormPayload;
use crate::error::SubmissionError;
use async_trait::async_trait;

/// Something that can deliver a booking to the external collector
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectorTransport: Send + Sync {
    /// Deliver one payload. A single attempt; callers do not retry.
    async fn submit(&self, payload: FormPayload) -> Result<(), SubmissionError>;

    /// Short description for logs
    fn describe(&self) -> String;
}
