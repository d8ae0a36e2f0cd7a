use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A showcased project. `technologies` and `team_members` are normalized to
/// plain string lists by the backend regardless of how the form submitted
/// them (repeated fields or one comma-separated value).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub status: String,
    pub stars: i64,
    pub team: String,
    pub technologies: Vec<String>,
    pub team_members: Vec<String>,
    pub image: String,
    pub content: String,
    pub github_url: String,
    pub demo_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
