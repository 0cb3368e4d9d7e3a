//! Sink that appends submissions to a JSON-lines file

use super::traits::{SubmissionSink, SubmitError};
use crate::state::Submission;
use async_trait::async_trait;
use std::io::{self, SeekFrom};
use std::path::{Path, PathBuf};
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};

/// Appends one JSON object per line to `path`.
///
/// Each record is written with a single `write_all`. If that write fails the
/// file is truncated back to its previous length, so a failed submission
/// leaves no partial line behind. Should a torn line still be present (the
/// process died mid-write, or truncation itself failed) the next record starts
/// on a fresh line, and every later line still parses on its own.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubmissionSink for JsonFileSink {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let mut line = serde_json::to_string(submission)?;
        line.push('\n');

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)
            .await?;

        let start = file.metadata().await?.len();
        if start > 0 && !ends_with_newline(&mut file, start).await? {
            tracing::warn!(path = %self.path.display(), "submissions file ends in a torn line");
            line.insert(0, '\n');
        }

        if let Err(err) = write_line(&mut file, line.as_bytes()).await {
            if let Err(truncate_err) = file.set_len(start).await {
                tracing::warn!(
                    path = %self.path.display(),
                    "could not remove partial submission: {truncate_err}"
                );
            }
            return Err(err.into());
        }

        tracing::info!(id = %submission.id, path = %self.path.display(), "submission written");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

async fn write_line(file: &mut File, line: &[u8]) -> io::Result<()> {
    file.write_all(line).await?;
    file.flush().await
}

async fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    file.seek(SeekFrom::Start(len - 1)).await?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last).await?;
    Ok(last[0] == b'\n')
}
