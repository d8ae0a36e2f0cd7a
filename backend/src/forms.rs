//! Multipart form intake shared by every upload-accepting endpoint.
//!
//! A request is drained into text fields plus at most one stored file. Files
//! land in the uploads area under a collision-resistant generated name; a
//! file part whose extension is not on the allow-list is drained and dropped
//! (the surrounding record is still saved, matching the historical
//! behavior), which the gallery upload endpoint then reports as a missing
//! file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use actix_multipart::Multipart;
use chrono::Utc;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use futures_util::StreamExt;
use log::warn;
use uuid::Uuid;

use common::requests::StringOrList;

use crate::error::ApiError;

/// Extensions accepted for any uploaded file.
const ALLOWED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

/// A file persisted from a multipart part.
pub struct StoredFile {
    /// Generated file name on disk (also the gallery id when moved there).
    pub name: String,
    /// Public path under the uploads prefix.
    pub web_path: String,
    /// Absolute location the bytes were written to.
    pub disk_path: PathBuf,
}

/// Text fields plus the optional stored file of one multipart submission.
pub struct SubmittedForm {
    fields: Vec<(String, String)>,
    pub file: Option<StoredFile>,
}

impl SubmittedForm {
    /// First value submitted under `name`, if any.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn text(&self, name: &str) -> String {
        self.value(name).unwrap_or_default().to_string()
    }

    /// Integer field; `None` when absent or unparseable (callers supply the
    /// default, as the original `parseInt(..) || 0` did).
    pub fn int(&self, name: &str) -> Option<i64> {
        self.value(name).and_then(|v| v.trim().parse().ok())
    }

    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        self.value(name).and_then(parse_date)
    }

    /// List-valued field accepted either as repeated parts or as one
    /// comma-separated value; `None` when the field was not submitted.
    pub fn list(&self, name: &str) -> Option<Vec<String>> {
        let values: Vec<String> = self
            .fields
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect();
        match values.len() {
            0 => None,
            1 => Some(StringOrList::One(values.into_iter().next().unwrap_or_default()).into_list()),
            _ => Some(StringOrList::Many(values).into_list()),
        }
    }
}

/// Accepts several date shapes the admin forms produce.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?));
    }
    None
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

fn extension_allowed(filename: &str) -> bool {
    let allowed: HashSet<&str> = ALLOWED_EXTENSIONS.into_iter().collect();
    matches!(extension_of(filename), Some(ext) if allowed.contains(ext.as_str()))
}

/// `<millis>-<suffix>.<ext>`: unique enough for a single-node site while
/// keeping names chronologically sortable.
pub fn generate_filename(original: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: String = Uuid::new_v4().simple().to_string()[..7].to_string();
    match extension_of(original) {
        Some(ext) => format!("{millis}-{suffix}.{ext}"),
        None => format!("{millis}-{suffix}"),
    }
}

/// Drains a multipart payload into `SubmittedForm`.
///
/// The part named `file_field` carrying a filename is streamed to
/// `dest_dir`; every other part is collected as a UTF-8 text field.
pub async fn read_form(
    mut payload: Multipart,
    file_field: &str,
    dest_dir: &Path,
) -> Result<SubmittedForm, ApiError> {
    let mut form = SubmittedForm {
        fields: Vec::new(),
        file: None,
    };

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| ApiError::Validation(format!("invalid multipart payload: {e}")))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()));

        match (name, filename) {
            (Some(name), Some(filename)) if name == file_field => {
                if !extension_allowed(&filename) {
                    warn!("rejected upload {filename:?}: extension not allowed");
                    drain(&mut field).await?;
                    continue;
                }
                let stored = generate_filename(&filename);
                let disk_path = dest_dir.join(&stored);
                let mut writer = BufWriter::new(File::create(&disk_path)?);
                while let Some(chunk) = field.next().await {
                    let chunk = chunk
                        .map_err(|e| ApiError::Validation(format!("upload interrupted: {e}")))?;
                    writer.write_all(&chunk)?;
                }
                writer.flush()?;
                form.file = Some(StoredFile {
                    web_path: format!("/uploads/{stored}"),
                    name: stored,
                    disk_path,
                });
            }
            (Some(name), _) => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk
                        .map_err(|e| ApiError::Validation(format!("invalid multipart payload: {e}")))?;
                    bytes.extend_from_slice(&chunk);
                }
                form.fields
                    .push((name, String::from_utf8_lossy(&bytes).into_owned()));
            }
            _ => drain(&mut field).await?,
        }
    }

    Ok(form)
}

async fn drain(field: &mut actix_multipart::Field) -> Result<(), ApiError> {
    while let Some(chunk) = field.next().await {
        chunk.map_err(|e| ApiError::Validation(format!("invalid multipart payload: {e}")))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: Vec<(&str, &str)>) -> SubmittedForm {
        SubmittedForm {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            file: None,
        }
    }

    #[test]
    fn list_accepts_comma_separated_and_repeated_shapes() {
        let f = form(vec![("technologies", "Rust, Yew , SQLite")]);
        assert_eq!(
            f.list("technologies"),
            Some(vec!["Rust".to_string(), "Yew".to_string(), "SQLite".to_string()])
        );

        let f = form(vec![("technologies", "Rust"), ("technologies", "Yew")]);
        assert_eq!(
            f.list("technologies"),
            Some(vec!["Rust".to_string(), "Yew".to_string()])
        );

        assert_eq!(f.list("team_members"), None);
    }

    #[test]
    fn int_fields_fall_back_on_garbage() {
        let f = form(vec![("attendees", "42"), ("stars", "many")]);
        assert_eq!(f.int("attendees"), Some(42));
        assert_eq!(f.int("stars"), None);
        assert_eq!(f.int("absent"), None);
    }

    #[test]
    fn date_shapes() {
        assert!(parse_date("2026-03-14").is_some());
        assert!(parse_date("2026-03-14T18:30").is_some());
        assert!(parse_date("2026-03-14T18:30:00+06:00").is_some());
        assert!(parse_date("soon").is_none());
    }

    #[test]
    fn generated_names_keep_the_extension_and_differ() {
        let a = generate_filename("Poster.PNG");
        let b = generate_filename("Poster.PNG");
        assert!(a.ends_with(".png"));
        assert_ne!(a, b);
    }

    #[test]
    fn extension_allow_list_is_case_insensitive_and_excludes_gif() {
        assert!(extension_allowed("a.JPG"));
        assert!(extension_allowed("b.webp"));
        assert!(!extension_allowed("c.gif"));
        assert!(!extension_allowed("noext"));
    }
}
