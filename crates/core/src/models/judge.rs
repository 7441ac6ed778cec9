use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    pub id: String,
    pub name: String,
    pub role: String,
}

/// A roster entry as shown on the administrative listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JudgeLink {
    pub id: String,
    pub name: String,
    pub role: String,
    pub link: String,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
}
