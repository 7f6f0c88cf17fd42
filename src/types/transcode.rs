//! Transcode domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Priority of a transcode job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TranscodePriority {
    /// Processed before normal jobs.
    High,
    /// Default priority.
    Normal,
    /// Processed when idle.
    Low,
}

/// A queued or running transcode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscodeJob {
    /// Transcode job identifier.
    pub id: String,
    /// Asset being transcoded.
    #[serde(default)]
    pub asset_id: Option<String>,
    /// Source format identifier.
    #[serde(default)]
    pub format_id: Option<String>,
    /// Target profile name.
    #[serde(default)]
    pub profile: Option<String>,
    /// Queue priority.
    #[serde(default)]
    pub priority: Option<TranscodePriority>,
    /// Job status.
    #[serde(default)]
    pub status: Option<String>,
    /// Creation timestamp.
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
}

/// Result of a media analysis pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaInfo {
    /// Container format.
    #[serde(default)]
    pub format: Option<String>,
    /// Duration in milliseconds.
    #[serde(default)]
    pub duration_milliseconds: Option<u64>,
    /// Video codec.
    #[serde(default)]
    pub video_codec: Option<String>,
    /// Audio codec.
    #[serde(default)]
    pub audio_codec: Option<String>,
    /// Frame rate.
    #[serde(default)]
    pub frame_rate: Option<String>,
    /// Resolution, e.g. `1920x1080`.
    #[serde(default)]
    pub resolution: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transcode_job_deserializes() {
        let job: TranscodeJob = serde_json::from_value(json!({
            "id": "t1",
            "asset_id": "a1",
            "priority": "HIGH"
        }))
        .unwrap();
        assert_eq!(job.priority, Some(TranscodePriority::High));
    }
}
