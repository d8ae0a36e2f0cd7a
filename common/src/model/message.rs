use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact-form message shown in the admin inbox.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
