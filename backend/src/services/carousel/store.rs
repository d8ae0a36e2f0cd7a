//! Gallery metadata store: a JSON sidecar file reconciled against the files
//! actually present in the gallery directory.
//!
//! The sidecar (`gallery_meta.json`, an array of `{id, caption, title,
//! order}`) is the source of truth for captions, titles and ordering; the
//! directory is the source of truth for existence. Every listing reconciles
//! the two — entries without a backing file are dropped, files without an
//! entry are adopted at the end of the order — so images added or removed by
//! hand on the server heal themselves on the next request.
//!
//! `order` is kept dense and unique (`1..N`) after every mutation. All
//! read-modify-write cycles on the sidecar are serialized behind one mutex;
//! sidecar write failures are logged and swallowed, because losing a caption
//! must never fail the upload or deletion that triggered the write.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::error;
use regex::Regex;
use serde::{Deserialize, Serialize};

use common::model::gallery::GalleryImage;
use common::requests::GalleryMetaPatch;

use crate::error::ApiError;

pub const META_FILE: &str = "gallery_meta.json";

/// One sidecar record. `id` equals the file name in the gallery directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GalleryEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub order: i64,
}

impl GalleryEntry {
    /// The wire shape, with the public path the browser loads.
    pub fn to_public(&self) -> GalleryImage {
        GalleryImage {
            id: self.id.clone(),
            image: format!("/gallery/{}", self.id),
            title: self.title.clone(),
            caption: self.caption.clone(),
            order: self.order,
        }
    }
}

pub struct GalleryStore {
    dir: PathBuf,
    meta_path: PathBuf,
    lock: Mutex<()>,
}

impl GalleryStore {
    pub fn new(dir: PathBuf) -> Self {
        let meta_path = dir.join(META_FILE);
        Self {
            dir,
            meta_path,
            lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Scan, reconcile, renormalize, persist, return ascending by order.
    ///
    /// Listing writes: that is deliberate — reconciliation is what keeps the
    /// sidecar honest after out-of-band file changes.
    pub fn list(&self) -> io::Result<Vec<GalleryEntry>> {
        let _guard = self.guard();
        let files = self.scan_files()?;

        let mut meta = self.load_meta();
        meta.retain(|m| files.contains(&m.id));

        let mut next = meta.iter().map(|m| m.order).max().unwrap_or(0) + 1;
        for file in &files {
            if !meta.iter().any(|m| &m.id == file) {
                meta.push(GalleryEntry {
                    id: file.clone(),
                    order: next,
                    ..GalleryEntry::default()
                });
                next += 1;
            }
        }

        let meta = normalize_order(meta);
        self.save_meta(&meta);
        Ok(meta)
    }

    /// Appends a freshly uploaded file at the end of the order.
    pub fn add(&self, id: &str, title: &str, caption: &str) -> GalleryEntry {
        let _guard = self.guard();
        let mut meta = self.load_meta();
        let next = meta.iter().map(|m| m.order).max().unwrap_or(0) + 1;
        meta.push(GalleryEntry {
            id: id.to_string(),
            caption: caption.to_string(),
            title: title.to_string(),
            order: next,
        });
        let meta = normalize_order(meta);
        self.save_meta(&meta);
        find_entry(&meta, id)
    }

    /// Applies a caption/title/order patch to one entry.
    ///
    /// An order change moves the entry to the clamped position `[1, N]`; the
    /// entry wins that slot and everything after it shifts down by one.
    pub fn update_entry(&self, id: &str, patch: &GalleryMetaPatch) -> Result<GalleryEntry, ApiError> {
        let _guard = self.guard();
        let mut meta = normalize_order(self.load_meta());
        let idx = meta
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| ApiError::NotFound("Not found".to_string()))?;

        if let Some(caption) = &patch.caption {
            meta[idx].caption = caption.clone();
        }
        if let Some(title) = &patch.title {
            meta[idx].title = title.clone();
        }

        let meta = match patch.order {
            Some(order) => {
                let target = order.clamp(1, meta.len() as i64) as usize;
                let entry = meta.remove(idx);
                meta.insert(target - 1, entry);
                renumber(meta)
            }
            None => meta,
        };

        self.save_meta(&meta);
        Ok(find_entry(&meta, id))
    }

    /// Resequences to match `ids`; items omitted from the input keep their
    /// relative order and are appended after the listed ones.
    pub fn reorder(&self, ids: &[String]) -> Vec<GalleryEntry> {
        let _guard = self.guard();
        let mut remaining = normalize_order(self.load_meta());
        let mut sequenced = Vec::with_capacity(remaining.len());
        for id in ids {
            if let Some(pos) = remaining.iter().position(|m| &m.id == id) {
                sequenced.push(remaining.remove(pos));
            }
        }
        sequenced.append(&mut remaining);
        let meta = renumber(sequenced);
        self.save_meta(&meta);
        meta
    }

    /// Deletes the backing file, then the metadata entry.
    ///
    /// A failed file deletion aborts the whole operation with the metadata
    /// untouched; the next listing would otherwise silently prune the entry.
    pub fn remove(&self, id: &str) -> Result<(), ApiError> {
        if id.contains('/') || id.contains('\\') || id == ".." {
            return Err(ApiError::NotFound("Not found".to_string()));
        }
        let _guard = self.guard();
        let path = self.dir.join(id);
        fs::remove_file(&path).map_err(|err| {
            error!("failed to delete gallery file {}: {err}", path.display());
            ApiError::Storage("Failed to delete image".to_string())
        })?;

        let mut meta = self.load_meta();
        meta.retain(|m| m.id != id);
        let meta = normalize_order(meta);
        self.save_meta(&meta);
        Ok(())
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn scan_files(&self) -> io::Result<Vec<String>> {
        let pattern = Regex::new(r"(?i)\.(jpe?g|png|webp|gif)$").unwrap();
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if pattern.is_match(name) {
                    files.push(name.to_string());
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Missing or unreadable metadata degrades to an empty list; the next
    /// reconciliation rebuilds it from the directory contents.
    fn load_meta(&self) -> Vec<GalleryEntry> {
        let raw = match fs::read_to_string(&self.meta_path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    error!("failed to read gallery metadata: {err}");
                }
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(list) => list,
            Err(err) => {
                error!("failed to parse gallery metadata: {err}");
                Vec::new()
            }
        }
    }

    fn save_meta(&self, list: &[GalleryEntry]) {
        match serde_json::to_string_pretty(list) {
            Ok(json) => {
                if let Err(err) = fs::write(&self.meta_path, json) {
                    error!("failed to write gallery metadata: {err}");
                }
            }
            Err(err) => error!("failed to serialize gallery metadata: {err}"),
        }
    }
}

/// Stable sort by the current order values, then renumber densely. Ties keep
/// their prior relative position; renormalizing a normalized list is a no-op.
pub fn normalize_order(mut list: Vec<GalleryEntry>) -> Vec<GalleryEntry> {
    list.sort_by_key(|m| m.order);
    renumber(list)
}

fn renumber(mut list: Vec<GalleryEntry>) -> Vec<GalleryEntry> {
    for (idx, item) in list.iter_mut().enumerate() {
        item.order = idx as i64 + 1;
    }
    list
}

fn find_entry(meta: &[GalleryEntry], id: &str) -> GalleryEntry {
    meta.iter()
        .find(|m| m.id == id)
        .cloned()
        .unwrap_or_else(|| GalleryEntry {
            id: id.to_string(),
            ..GalleryEntry::default()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(files: &[&str]) -> (TempDir, GalleryStore) {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), b"img").unwrap();
        }
        let store = GalleryStore::new(dir.path().to_path_buf());
        (dir, store)
    }

    fn orders(meta: &[GalleryEntry]) -> Vec<(String, i64)> {
        meta.iter().map(|m| (m.id.clone(), m.order)).collect()
    }

    fn assert_dense(meta: &[GalleryEntry]) {
        let mut seen: Vec<i64> = meta.iter().map(|m| m.order).collect();
        seen.sort_unstable();
        let expected: Vec<i64> = (1..=meta.len() as i64).collect();
        assert_eq!(seen, expected, "orders must be exactly 1..=N");
    }

    #[test]
    fn list_adopts_untracked_files_in_name_order() {
        let (_dir, store) = store_with(&["b.png", "a.jpg", "notes.txt"]);
        let meta = store.list().unwrap();
        assert_eq!(
            orders(&meta),
            vec![("a.jpg".to_string(), 1), ("b.png".to_string(), 2)]
        );
        assert!(meta.iter().all(|m| m.caption.is_empty() && m.title.is_empty()));
    }

    #[test]
    fn list_accepts_every_listed_extension_case_insensitively() {
        let (_dir, store) = store_with(&["a.PNG", "b.JpEg", "c.webp", "d.GIF", "e.bmp"]);
        let meta = store.list().unwrap();
        let ids: Vec<&str> = meta.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a.PNG", "b.JpEg", "c.webp", "d.GIF"]);
    }

    #[test]
    fn list_prunes_orphaned_metadata() {
        let (dir, store) = store_with(&["a.png"]);
        let sidecar = serde_json::json!([
            { "id": "gone.png", "caption": "x", "title": "x", "order": 1 },
            { "id": "a.png", "caption": "kept", "title": "", "order": 2 }
        ]);
        fs::write(dir.path().join(META_FILE), sidecar.to_string()).unwrap();

        let meta = store.list().unwrap();
        assert_eq!(orders(&meta), vec![("a.png".to_string(), 1)]);
        assert_eq!(meta[0].caption, "kept");
    }

    #[test]
    fn list_adopts_new_files_after_the_current_maximum() {
        let (dir, store) = store_with(&["a.png"]);
        store.list().unwrap();
        fs::write(dir.path().join("z.png"), b"img").unwrap();

        let meta = store.list().unwrap();
        assert_eq!(
            orders(&meta),
            vec![("a.png".to_string(), 1), ("z.png".to_string(), 2)]
        );
    }

    #[test]
    fn list_is_idempotent_without_filesystem_changes() {
        let (dir, store) = store_with(&["a.png", "b.png", "c.png"]);
        let first = store.list().unwrap();
        let sidecar_after_first = fs::read_to_string(dir.path().join(META_FILE)).unwrap();
        let second = store.list().unwrap();
        let sidecar_after_second = fs::read_to_string(dir.path().join(META_FILE)).unwrap();
        assert_eq!(first, second);
        assert_eq!(sidecar_after_first, sidecar_after_second);
    }

    #[test]
    fn corrupt_sidecar_degrades_to_empty_and_self_heals() {
        let (dir, store) = store_with(&["a.png"]);
        fs::write(dir.path().join(META_FILE), "{not json").unwrap();
        let meta = store.list().unwrap();
        assert_eq!(orders(&meta), vec![("a.png".to_string(), 1)]);
        // Sidecar was rewritten with valid content.
        let healed: Vec<GalleryEntry> =
            serde_json::from_str(&fs::read_to_string(dir.path().join(META_FILE)).unwrap()).unwrap();
        assert_eq!(healed, meta);
    }

    #[test]
    fn add_appends_at_max_plus_one() {
        let (_dir, store) = store_with(&["a.png"]);
        store.list().unwrap();
        let entry = store.add("b.png", "Title", "Caption");
        assert_eq!(entry.order, 2);
        assert_eq!(entry.title, "Title");
        assert_eq!(entry.caption, "Caption");
    }

    #[test]
    fn update_moves_entry_to_clamped_position() {
        let (_dir, store) = store_with(&["a.png", "b.png", "c.png"]);
        store.list().unwrap();

        // Clamp far beyond N: the entry takes the last slot.
        let patch = GalleryMetaPatch {
            order: Some(99),
            ..GalleryMetaPatch::default()
        };
        let updated = store.update_entry("a.png", &patch).unwrap();
        assert_eq!(updated.order, 3);
        let meta = store.list().unwrap();
        assert_eq!(
            orders(&meta),
            vec![
                ("b.png".to_string(), 1),
                ("c.png".to_string(), 2),
                ("a.png".to_string(), 3)
            ]
        );

        // Zero and negatives clamp to the front.
        let patch = GalleryMetaPatch {
            order: Some(0),
            ..GalleryMetaPatch::default()
        };
        let updated = store.update_entry("a.png", &patch).unwrap();
        assert_eq!(updated.order, 1);
    }

    #[test]
    fn update_pushes_later_items_down_by_one() {
        let (_dir, store) = store_with(&["a.png", "b.png"]);
        store.list().unwrap();
        let patch = GalleryMetaPatch {
            order: Some(2),
            ..GalleryMetaPatch::default()
        };
        store.update_entry("a.png", &patch).unwrap();
        let meta = store.list().unwrap();
        assert_eq!(
            orders(&meta),
            vec![("b.png".to_string(), 1), ("a.png".to_string(), 2)]
        );
    }

    #[test]
    fn update_caption_and_title_in_place() {
        let (_dir, store) = store_with(&["a.png", "b.png"]);
        store.list().unwrap();
        let patch = GalleryMetaPatch {
            caption: Some("new caption".to_string()),
            title: Some("new title".to_string()),
            order: None,
        };
        let updated = store.update_entry("b.png", &patch).unwrap();
        assert_eq!(updated.caption, "new caption");
        assert_eq!(updated.title, "new title");
        assert_eq!(updated.order, 2, "order untouched without an order patch");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let (_dir, store) = store_with(&["a.png"]);
        store.list().unwrap();
        let err = store
            .update_entry("ghost.png", &GalleryMetaPatch::default())
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[test]
    fn reorder_is_stable_for_omitted_ids() {
        let (_dir, store) = store_with(&["a.png", "b.png", "c.png"]);
        store.list().unwrap();
        let meta = store.reorder(&["b.png".to_string(), "a.png".to_string()]);
        assert_eq!(
            orders(&meta),
            vec![
                ("b.png".to_string(), 1),
                ("a.png".to_string(), 2),
                ("c.png".to_string(), 3)
            ]
        );
    }

    #[test]
    fn reorder_ignores_unknown_ids() {
        let (_dir, store) = store_with(&["a.png", "b.png"]);
        store.list().unwrap();
        let meta = store.reorder(&["ghost.png".to_string(), "b.png".to_string()]);
        assert_eq!(
            orders(&meta),
            vec![("b.png".to_string(), 1), ("a.png".to_string(), 2)]
        );
        assert_dense(&meta);
    }

    #[test]
    fn remove_deletes_file_and_entry() {
        let (dir, store) = store_with(&["a.png", "b.png"]);
        store.list().unwrap();
        store.remove("a.png").unwrap();
        assert!(!dir.path().join("a.png").exists());
        let meta = store.list().unwrap();
        assert_eq!(orders(&meta), vec![("b.png".to_string(), 1)]);
    }

    #[test]
    fn remove_missing_file_fails_and_keeps_metadata() {
        let (dir, store) = store_with(&["a.png"]);
        store.list().unwrap();
        fs::remove_file(dir.path().join("a.png")).unwrap();

        let err = store.remove("a.png").unwrap_err();
        assert!(matches!(err, ApiError::Storage(_)));
        // Metadata untouched by the failed delete (pruning is list()'s job).
        let raw: Vec<GalleryEntry> =
            serde_json::from_str(&fs::read_to_string(dir.path().join(META_FILE)).unwrap()).unwrap();
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn remove_rejects_path_traversal_ids() {
        let (_dir, store) = store_with(&[]);
        assert!(store.remove("../escape.png").is_err());
    }

    #[test]
    fn orders_stay_dense_across_a_mutation_sequence() {
        let (dir, store) = store_with(&["a.png", "b.png", "c.png", "d.png"]);
        assert_dense(&store.list().unwrap());

        store
            .update_entry(
                "c.png",
                &GalleryMetaPatch {
                    order: Some(1),
                    ..GalleryMetaPatch::default()
                },
            )
            .unwrap();
        assert_dense(&store.list().unwrap());

        store.remove("b.png").unwrap();
        assert_dense(&store.list().unwrap());

        fs::write(dir.path().join("e.png"), b"img").unwrap();
        assert_dense(&store.list().unwrap());

        let meta = store.reorder(&["e.png".to_string(), "d.png".to_string()]);
        assert_dense(&meta);
    }

    #[test]
    fn normalize_is_idempotent_and_stable() {
        let list = vec![
            GalleryEntry { id: "x".into(), order: 7, ..GalleryEntry::default() },
            GalleryEntry { id: "y".into(), order: 7, ..GalleryEntry::default() },
            GalleryEntry { id: "z".into(), order: 2, ..GalleryEntry::default() },
        ];
        let once = normalize_order(list);
        assert_eq!(
            once.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(),
            vec!["z", "x", "y"],
            "ties keep prior relative position"
        );
        let twice = normalize_order(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn end_to_end_upload_update_reorder_delete() {
        let (dir, store) = store_with(&[]);

        fs::write(dir.path().join("a.png"), b"img").unwrap();
        let a = store.add("a.png", "", "");
        fs::write(dir.path().join("b.png"), b"img").unwrap();
        let b = store.add("b.png", "", "");
        assert_eq!((a.order, b.order), (1, 2));

        store
            .update_entry(
                "a.png",
                &GalleryMetaPatch {
                    order: Some(2),
                    ..GalleryMetaPatch::default()
                },
            )
            .unwrap();
        let meta = store.list().unwrap();
        assert_eq!(
            orders(&meta),
            vec![("b.png".to_string(), 1), ("a.png".to_string(), 2)]
        );

        let meta = store.reorder(&["a.png".to_string()]);
        assert_eq!(
            orders(&meta),
            vec![("a.png".to_string(), 1), ("b.png".to_string(), 2)]
        );

        store.remove("a.png").unwrap();
        assert!(!dir.path().join("a.png").exists());
        let meta = store.list().unwrap();
        assert_eq!(orders(&meta), vec![("b.png".to_string(), 1)]);
    }
}
