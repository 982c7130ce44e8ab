// File: ./src/storage.rs
// Reads and writes the festival list as a JSON array on disk.
use crate::model::FestivalRecord;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FestivalStorage;

impl FestivalStorage {
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive advisory lock next to `file_path`.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file '{}'", lock_path.display()))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Loads the festival list.
    ///
    /// Never fails: a missing file is an empty list, and unreadable or
    /// malformed content is logged and also treated as empty.
    pub fn load(path: &Path) -> Vec<FestivalRecord> {
        if !path.exists() {
            return vec![];
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Vec<FestivalRecord>>(&json) {
                Ok(records) => {
                    log::debug!("Loaded {} festivals from {}", records.len(), path.display());
                    records
                }
                Err(e) => {
                    log::warn!(
                        "Ignoring corrupt festival file {}: {}",
                        path.display(),
                        e
                    );
                    vec![]
                }
            },
            Err(e) => {
                log::warn!("Could not read festival file {}: {}", path.display(), e);
                vec![]
            }
        }
    }

    /// Replaces the file content with the full list.
    ///
    /// Output is pretty-printed with two-space indentation and keeps non-ASCII
    /// names as-is.
    pub fn save(path: &Path, records: &[FestivalRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)?;
        Self::with_lock(path, || Self::atomic_write(path, &json))
            .with_context(|| format!("Failed to save festivals to '{}'", path.display()))?;
        log::debug!("Saved {} festivals to {}", records.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppContext, TestContext};

    #[test]
    fn test_missing_file_is_empty() {
        let ctx = TestContext::new();
        let path = ctx.get_festival_path().unwrap();
        assert!(FestivalStorage::load(&path).is_empty());
    }

    #[test]
    fn test_output_format() {
        let ctx = TestContext::new();
        let path = ctx.get_festival_path().unwrap();
        let records = vec![FestivalRecord::new("दशैं", 6, 10).unwrap()];
        FestivalStorage::save(&path, &records).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "[\n  {\n    \"name\": \"दशैं\",\n    \"month\": 6,\n    \"day\": 10\n  }\n]"
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_lock_path_appends_suffix() {
        assert_eq!(
            FestivalStorage::get_lock_path(Path::new("/x/festivals.json")),
            PathBuf::from("/x/festivals.json.lock")
        );
        assert_eq!(
            FestivalStorage::get_lock_path(Path::new("/x/festivals")),
            PathBuf::from("/x/festivals.lock")
        );
    }
}
