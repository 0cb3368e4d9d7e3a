//! Sink that reports submissions to the log

use super::traits::{SubmissionSink, SubmitError};
use crate::state::Submission;
use async_trait::async_trait;

/// Emits each submission as a structured log event
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

#[async_trait]
impl SubmissionSink for LogSink {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let values = serde_json::to_string(&submission.values)?;
        tracing::info!(
            id = %submission.id,
            submitted_at = %submission.submitted_at,
            values = %values,
            "Submit form"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
