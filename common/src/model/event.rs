use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A society event as served by `/api/events`.
///
/// `image` is a `/uploads/...` path for a file uploaded with the event;
/// `image_url` is an optional external URL used when no file was uploaded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub time: String,
    pub location: String,
    pub attendees: i64,
    #[serde(rename = "type")]
    pub event_type: String,
    pub status: String,
    pub image: String,
    pub image_url: String,
    pub registration_link: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
