use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post. `content` is markdown rendered by the detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Blog {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub author: String,
    pub image: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "postTime")]
    pub post_time: DateTime<Utc>,
    #[serde(rename = "readTime")]
    pub read_time: String,
}
