use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An attendee registration for an event.
///
/// `event_title` is copied from the event at creation time so the admin list
/// stays readable even if the event is later deleted; it is not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRegistration {
    #[serde(rename = "_id")]
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "studentId")]
    pub student_id: String,
    pub department: String,
    pub batch: String,
    pub section: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
