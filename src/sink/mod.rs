//! Submission sinks
//!
//! The form hands completed submissions to a [`SubmissionSink`]. Which sink is
//! used comes from the user configuration.

mod file_sink;
mod log_sink;
mod traits;

pub use file_sink::JsonFileSink;
pub use log_sink::LogSink;
pub use traits::SubmissionSink;

#[cfg(test)]
pub use traits::{MockSubmissionSink, SubmitError};

use crate::config::{IntakeConfig, SinkKind};

/// Build the sink selected by `config`
pub fn from_config(config: &IntakeConfig) -> Box<dyn SubmissionSink> {
    match config.sink_kind() {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::File => match config.submissions_path() {
            Some(path) => {
                let sink = JsonFileSink::new(path);
                tracing::info!(path = %sink.path().display(), "submissions go to file");
                Box::new(sink)
            }
            None => {
                tracing::warn!("no data directory for submissions, falling back to log sink");
                Box::new(LogSink)
            }
        },
    }
}
