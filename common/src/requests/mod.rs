//! Request and response payloads exchanged between the frontend and the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/admin/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Status envelope returned by login/logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The authenticated principal reported by `GET /api/admin/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: String,
    pub email: String,
}

/// Response of `GET /api/admin/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
}

/// Body of `POST /api/events/{id}/register`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "studentId", default)]
    pub student_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub section: String,
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /api/admin/messages`.
///
/// Older clients sent the sender under `name`; the current contact form sends
/// `fullName`. Both are accepted, `fullName` winning when both are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl MessageRequest {
    /// Resolves the sender name from whichever field the client filled in.
    pub fn sender(&self) -> String {
        self.full_name
            .clone()
            .or_else(|| self.name.clone())
            .unwrap_or_default()
    }
}

/// Body of `PUT /api/carousel/{id}`: every field optional, applied in place.
///
/// `order` is typed as an integer so fractional JSON input is rejected at the
/// boundary instead of being rounded somewhere downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryMetaPatch {
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Body of `POST /api/carousel/reorder`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub ids: Vec<String>,
}

/// A field that clients may submit either as one comma-separated string or as
/// a list of strings. `into_list` is the single normalization point producing
/// the canonical trimmed list used everywhere past the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub fn into_list(self) -> Vec<String> {
        let raw = match self {
            StringOrList::One(s) => vec![s],
            StringOrList::Many(v) => v,
        };
        raw.iter()
            .flat_map(|s| s.split(','))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_or_list_splits_and_trims_single_string() {
        let v = StringOrList::One("Rust, embedded ,  , web".to_string());
        assert_eq!(v.into_list(), vec!["Rust", "embedded", "web"]);
    }

    #[test]
    fn string_or_list_keeps_list_shape_and_splits_members() {
        let v = StringOrList::Many(vec!["a".into(), "b, c".into()]);
        assert_eq!(v.into_list(), vec!["a", "b", "c"]);
    }

    #[test]
    fn message_request_prefers_full_name_over_legacy_name() {
        let req = MessageRequest {
            name: Some("legacy".into()),
            full_name: Some("current".into()),
            ..Default::default()
        };
        assert_eq!(req.sender(), "current");

        let req = MessageRequest {
            name: Some("legacy".into()),
            ..Default::default()
        };
        assert_eq!(req.sender(), "legacy");
    }
}
