use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One selected slot, expanded to the day it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableTime {
    pub date: String,
    pub day_name: String,
    pub time: String,
    pub label: String,
}

/// A judge's complete availability. Replaced wholesale on every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub judge_id: String,
    pub judge_name: String,
    pub judge_role: String,
    pub available_times: Vec<AvailableTime>,
    #[serde(default)]
    pub notes: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRequest {
    pub judge_id: String,
    pub judge_name: String,
    pub judge_role: String,
    /// Takes precedence over `available_times` when non-empty.
    #[serde(default)]
    pub slot_ids: Vec<String>,
    #[serde(default)]
    pub available_times: Vec<AvailableTime>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Accepted for compatibility; the server stamps its own time.
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseQuery {
    #[serde(rename = "judgeId")]
    pub judge_id: String,
}
