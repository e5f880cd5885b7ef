//! Gallery store: a JSON index of saved patterns, keyed by owner.
//!
//! Each exported pattern can be published to the gallery with a
//! user-chosen name. The index lives in a single JSON file guarded by
//! an advisory lock, mirroring the session storage.

use anyhow::{Context, Result};
use chrono::Utc;
use fs2::FileExt;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

/// One saved pattern in the gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryEntry {
    /// Unique id, derived from the publish timestamp
    pub id: i64,
    /// User-chosen display name
    pub name: String,
    /// Location of the exported image (a file path for file exports)
    pub url: String,
    /// Owner id the entry belongs to
    pub owner_id: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GalleryIndex {
    entries: Vec<GalleryEntry>,
}

/// File-backed gallery index.
#[derive(Debug)]
pub struct GalleryStore {
    index_path: PathBuf,
}

impl GalleryStore {
    pub fn new(index_path: PathBuf) -> Self {
        Self { index_path }
    }

    fn lock_path(&self) -> PathBuf {
        self.index_path.with_extension("lock")
    }

    fn with_lock<T>(&self, exclusive: bool, f: impl FnOnce() -> Result<T>) -> Result<T> {
        if let Some(parent) = self.index_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create gallery directory {}", parent.display())
            })?;
        }

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("failed to open gallery lock file {}", lock_path.display()))?;
        if exclusive {
            lock_file
                .lock_exclusive()
                .with_context(|| format!("failed to lock gallery index {}", lock_path.display()))?;
        } else {
            lock_file.lock_shared().with_context(|| {
                format!("failed to acquire shared lock {}", lock_path.display())
            })?;
        }

        let result = f();

        lock_file.unlock().unwrap_or_else(|err| {
            warn!(
                "failed to unlock gallery index {}: {}",
                lock_path.display(),
                err
            )
        });

        result
    }

    fn load_index(&self) -> Result<GalleryIndex> {
        if !self.index_path.exists() {
            return Ok(GalleryIndex::default());
        }
        let json = fs::read_to_string(&self.index_path).with_context(|| {
            format!("failed to read gallery index {}", self.index_path.display())
        })?;
        serde_json::from_str(&json).with_context(|| {
            format!(
                "failed to parse gallery index {}",
                self.index_path.display()
            )
        })
    }

    fn save_index(&self, index: &GalleryIndex) -> Result<()> {
        let json = serde_json::to_vec_pretty(index).context("failed to serialise gallery index")?;
        let tmp_path = self.index_path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).with_context(|| {
            format!(
                "failed to write temporary gallery index {}",
                tmp_path.display()
            )
        })?;
        fs::rename(&tmp_path, &self.index_path).with_context(|| {
            format!(
                "failed to move temporary gallery index {} -> {}",
                tmp_path.display(),
                self.index_path.display()
            )
        })?;
        Ok(())
    }

    /// Publishes a saved pattern under `name` and returns the new entry.
    pub fn add(&self, name: &str, owner_id: &str, url: &str) -> Result<GalleryEntry> {
        let name = name.trim();
        if name.is_empty() {
            anyhow::bail!("gallery entry name must not be empty");
        }

        self.with_lock(true, || {
            let mut index = self.load_index()?;

            // Timestamp-derived id, bumped past the newest existing
            // entry so two publishes in the same millisecond stay
            // distinct.
            let mut id = Utc::now().timestamp_millis();
            if let Some(max) = index.entries.iter().map(|e| e.id).max()
                && id <= max
            {
                id = max + 1;
            }

            let entry = GalleryEntry {
                id,
                name: name.to_string(),
                url: url.to_string(),
                owner_id: owner_id.to_string(),
            };
            index.entries.push(entry.clone());
            self.save_index(&index)?;
            info!("Published '{}' to gallery for {}", entry.name, owner_id);
            Ok(entry)
        })
    }

    /// All entries belonging to `owner_id`, newest first.
    pub fn entries_for(&self, owner_id: &str) -> Result<Vec<GalleryEntry>> {
        self.with_lock(false, || {
            let mut entries: Vec<_> = self
                .load_index()?
                .entries
                .into_iter()
                .filter(|e| e.owner_id == owner_id)
                .collect();
            entries.sort_by_key(|e| std::cmp::Reverse(e.id));
            Ok(entries)
        })
    }

    /// Removes an entry by id. Returns whether anything was removed.
    pub fn remove(&self, id: i64) -> Result<bool> {
        self.with_lock(true, || {
            let mut index = self.load_index()?;
            let before = index.entries.len();
            index.entries.retain(|e| e.id != id);
            let removed = index.entries.len() != before;
            if removed {
                self.save_index(&index)?;
            }
            Ok(removed)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> GalleryStore {
        GalleryStore::new(dir.path().join("gallery.json"))
    }

    #[test]
    fn add_then_list_for_owner() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.add("Morning calm", "guest-1", "/tmp/a.png").unwrap();
        store.add("Evening", "guest-2", "/tmp/b.png").unwrap();
        store.add("Lotus", "guest-1", "/tmp/c.png").unwrap();

        let mine = store.entries_for("guest-1").unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|e| e.owner_id == "guest-1"));

        assert!(store.entries_for("nobody").unwrap().is_empty());
    }

    #[test]
    fn empty_names_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.add("   ", "guest-1", "/tmp/a.png").is_err());
    }

    #[test]
    fn names_are_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let entry = store.add("  Lotus  ", "guest-1", "/tmp/a.png").unwrap();
        assert_eq!(entry.name, "Lotus");
    }

    #[test]
    fn remove_deletes_only_the_matching_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let kept = store.add("Keep", "guest-1", "/tmp/a.png").unwrap();
        let gone = store.add("Drop", "guest-1", "/tmp/b.png").unwrap();

        assert!(store.remove(gone.id).unwrap());
        assert!(!store.remove(gone.id).unwrap());

        let remaining = store.entries_for("guest-1").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);
    }

    #[test]
    fn index_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = store_in(&dir);
            store.add("Persisted", "guest-1", "/tmp/a.png").unwrap();
        }
        let store = store_in(&dir);
        assert_eq!(store.entries_for("guest-1").unwrap().len(), 1);
    }
}
