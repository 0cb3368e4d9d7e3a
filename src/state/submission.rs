//! Submission envelope handed to a sink

use super::forms::FormValues;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted intake request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub values: FormValues,
}

impl Submission {
    /// Wrap a snapshot of form values with a fresh id and timestamp
    pub fn new(values: FormValues) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            values,
        }
    }
}
