//! Trait abstraction for submission sinks to enable mocking in tests

use crate::state::Submission;
use async_trait::async_trait;
use thiserror::Error;

/// Errors a sink can report when delivering a submission
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode submission: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for completed intake forms
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver a submission. Called once per submit action, never retried.
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;

    /// Short name used in logs and status messages
    fn name(&self) -> &'static str;
}
