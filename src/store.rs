use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::{
    config::StoreConfig,
    error::{Result, StoreError},
    file::{FileManager, Page, RecordId},
    part::{self, Part, RECORD_LEN},
};

/// A flat file of fixed-length part records addressed by record number.
///
/// Record `i` lives at byte offset `i * RECORD_LEN`. The store owns its file
/// handle from [`open`](Self::open) until [`close`](Self::close); every
/// operation after `close` fails with [`StoreError::Closed`].
pub struct RecordStore {
    file_manager: FileManager,
    config: StoreConfig,
}

impl RecordStore {
    /// Opens the store at `path`, creating an empty file if none exists.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, StoreConfig::default())
    }

    pub fn open_with(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        let file_manager = FileManager::new(path, RECORD_LEN, &config)?;
        debug!(
            "Opened record store {:?} (new: {})",
            file_manager.path(),
            file_manager.is_new()
        );
        Ok(Self {
            file_manager,
            config,
        })
    }

    /// Number of whole records in the file.
    pub fn record_count(&self) -> Result<u64> {
        self.file_manager.size()
    }

    /// Appends a record at the end of the file and returns its id.
    pub fn append(
        &self,
        part_number: &str,
        description: &str,
        quantity: i32,
        unit_cost: i32,
    ) -> Result<RecordId> {
        let page = part::encode(part_number, description, quantity, unit_cost)?;
        let id = self.file_manager.append(&page)?;
        debug!("Appended part {:?} as record {}", part_number, id.index());
        Ok(id)
    }

    pub fn select(&self, index: u64) -> Result<Part> {
        let id = self.checked_id(index)?;
        let mut page = Page::with_size(RECORD_LEN);
        self.file_manager.read(&id, &mut page)?;
        Ok(part::decode(&page)?)
    }

    /// Overwrites the existing record at `index`.
    pub fn update(
        &self,
        index: u64,
        part_number: &str,
        description: &str,
        quantity: i32,
        unit_cost: i32,
    ) -> Result<()> {
        let id = self.checked_id(index)?;
        let page = part::encode(part_number, description, quantity, unit_cost)?;
        self.file_manager.write(&id, &page)?;
        debug!("Updated record {} with part {:?}", index, part_number);
        Ok(())
    }

    /// Iterates over all records present when the iterator is created.
    pub fn records(&self) -> Result<Records<'_>> {
        let count = self.record_count()?;
        Ok(Records {
            store: self,
            next: 0,
            count,
        })
    }

    /// Releases the file handle. Safe to call more than once.
    pub fn close(&self) {
        self.file_manager.close();
    }

    pub fn is_closed(&self) -> bool {
        self.file_manager.is_closed()
    }

    pub fn path(&self) -> &PathBuf {
        self.file_manager.path()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn checked_id(&self, index: u64) -> Result<RecordId> {
        let count = self.record_count()?;
        if index >= count {
            trace!("Rejecting record {} of {}", index, count);
            return Err(StoreError::OutOfRange { index, count });
        }
        Ok(RecordId::new(index))
    }
}

/// Iterator over the records of a [`RecordStore`], in file order.
pub struct Records<'a> {
    store: &'a RecordStore,
    next: u64,
    count: u64,
}

impl Iterator for Records<'_> {
    type Item = Result<Part>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let item = self.store.select(self.next);
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.count - self.next).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
