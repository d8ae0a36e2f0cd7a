use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An alumni directory entry. `avatar_url` is a `/uploads/...` path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Alumni {
    #[serde(rename = "_id")]
    pub id: String,
    pub fullname: String,
    pub batch: String,
    pub department: String,
    pub current_position: String,
    pub company: String,
    pub bio: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub facebook: String,
    pub avatar_url: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
