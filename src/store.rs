// File: ./src/store.rs
// In-memory festival list, persisted in full after every change.
use crate::model::FestivalRecord;
use crate::storage::FestivalStorage;
use anyhow::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FestivalStore {
    path: PathBuf,
    festivals: Vec<FestivalRecord>,
}

impl FestivalStore {
    /// Opens the list stored at `path`, starting empty if there is nothing
    /// usable there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let festivals = FestivalStorage::load(&path);
        Self { path, festivals }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn festivals(&self) -> &[FestivalRecord] {
        &self.festivals
    }

    pub fn get(&self, index: usize) -> Option<&FestivalRecord> {
        self.festivals.get(index)
    }

    pub fn len(&self) -> usize {
        self.festivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.festivals.is_empty()
    }

    /// Appends a record and saves. Returns the new record's index.
    ///
    /// If saving fails the record stays in memory and the error is returned.
    pub fn add(&mut self, record: FestivalRecord) -> Result<usize> {
        log::info!(
            "Adding festival '{}' (BS month {}, day {})",
            record.name,
            record.month,
            record.day
        );
        self.festivals.push(record);
        self.save()?;
        Ok(self.festivals.len() - 1)
    }

    /// Removes the record at `index` and saves.
    ///
    /// Out-of-range indices are a no-op returning `Ok(None)`. As with `add`,
    /// a failed save leaves the in-memory list already modified.
    pub fn remove(&mut self, index: usize) -> Result<Option<FestivalRecord>> {
        if index >= self.festivals.len() {
            return Ok(None);
        }
        let removed = self.festivals.remove(index);
        log::info!("Removed festival '{}'", removed.name);
        self.save()?;
        Ok(Some(removed))
    }

    pub fn save(&self) -> Result<()> {
        FestivalStorage::save(&self.path, &self.festivals)
    }
}
