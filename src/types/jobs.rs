//! Job domain types.

use crate::pagination::PageItem;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    /// Queued, not yet started.
    Ready,
    /// Currently running.
    Started,
    /// Finished successfully.
    Finished,
    /// Failed permanently.
    Failed,
    /// Aborted by a user.
    Aborted,
    /// Paused.
    Paused,
    /// Waiting on another job.
    Waiting,
}

/// Kind of work a job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    /// Media transcode.
    Transcode,
    /// File transfer between storages.
    Transfer,
    /// Delete operation.
    Delete,
    /// Metadata extraction or analysis.
    Analyze,
    /// Archive to cold storage.
    Archive,
    /// Restore from cold storage.
    Restore,
    /// Miscellaneous custom work.
    Custom,
}

/// One step of a job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobStep {
    /// Step identifier.
    pub id: String,
    /// Step label.
    #[serde(default)]
    pub label: Option<String>,
    /// Step status.
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Status message for operators.
    #[serde(default)]
    pub message: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// A background job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    /// Job identifier.
    pub id: String,
    /// Job title.
    #[serde(default)]
    pub title: Option<String>,
    /// Kind of work.
    #[serde(default, rename = "type")]
    pub job_type: Option<JobType>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: Option<JobStatus>,
    /// Identifier of the object the job operates on.
    #[serde(default)]
    pub object_id: Option<String>,
    /// Type of the object the job operates on.
    #[serde(default)]
    pub object_type: Option<String>,
    /// Completion ratio, 0-100.
    #[serde(default)]
    pub progress: Option<u32>,
    /// Steps, in execution order.
    #[serde(default)]
    pub steps: Vec<JobStep>,
    /// Error message when failed.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    /// Last modification timestamp.
    #[serde(default)]
    pub date_modified: Option<DateTime<Utc>>,
}

impl PageItem for Job {
    fn date_created(&self) -> Option<DateTime<Utc>> {
        self.date_created
    }
}
