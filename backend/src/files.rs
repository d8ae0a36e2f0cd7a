//! Owned-file bookkeeping for records that reference an uploaded image.
//!
//! Records own their file: replacing or deleting the record deals with the
//! file too, always best-effort — a failed cleanup is logged and never rolls
//! back the record mutation.

use std::fs;
use std::path::Path;

use log::warn;

use crate::forms::StoredFile;

/// Best-effort removal of a public web path (e.g. `/uploads/x.png`).
pub fn delete_public_file(public_dir: &Path, web_path: &str) {
    if web_path.is_empty() || !web_path.starts_with('/') {
        return;
    }
    let path = public_dir.join(web_path.trim_start_matches('/'));
    if path.exists() {
        if let Err(err) = fs::remove_file(&path) {
            warn!("failed to delete {}: {err}", path.display());
        }
    }
}

/// Replace-if-new: when a fresh upload is present, the old file is deleted
/// best-effort and the new public path returned; otherwise `None` (keep the
/// current path).
pub fn replace_owned_file(
    public_dir: &Path,
    old_web_path: &str,
    new_file: Option<&StoredFile>,
) -> Option<String> {
    let file = new_file?;
    delete_public_file(public_dir, old_web_path);
    Some(file.web_path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn delete_ignores_empty_and_relative_paths() {
        // Nothing to assert beyond "does not panic / does not touch cwd".
        delete_public_file(Path::new("/nonexistent"), "");
        delete_public_file(Path::new("/nonexistent"), "plain.png");
    }

    #[test]
    fn delete_removes_the_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();
        fs::write(uploads.join("old.png"), b"img").unwrap();

        delete_public_file(dir.path(), "/uploads/old.png");
        assert!(!uploads.join("old.png").exists());

        // Missing file: logged, no panic.
        delete_public_file(dir.path(), "/uploads/old.png");
    }

    #[test]
    fn replace_keeps_old_path_without_new_upload() {
        assert_eq!(
            replace_owned_file(Path::new("/nonexistent"), "/uploads/a.png", None),
            None
        );
    }

    #[test]
    fn replace_swaps_in_the_new_path_and_drops_the_old_file() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploads");
        fs::create_dir_all(&uploads).unwrap();
        fs::write(uploads.join("old.png"), b"img").unwrap();

        let stored = StoredFile {
            name: "new.png".to_string(),
            web_path: "/uploads/new.png".to_string(),
            disk_path: PathBuf::from("unused"),
        };
        let replaced = replace_owned_file(dir.path(), "/uploads/old.png", Some(&stored));
        assert_eq!(replaced.as_deref(), Some("/uploads/new.png"));
        assert!(!uploads.join("old.png").exists());
    }
}
