use std::{
    fs::{File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
    sync::{
        Mutex, MutexGuard,
        atomic::{AtomicBool, Ordering},
    },
};

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use log::{debug, error, trace, warn};

use crate::{
    config::StoreConfig,
    error::{Result, StoreError},
    file::{page::Page, record_id::RecordId},
};

/// Owns the single handle of a fixed-length-record file.
///
/// Every seek and the read or write that follows it happen while holding the
/// handle lock, so a `FileManager` can be shared between threads.
pub struct FileManager {
    record_len: usize,
    path: PathBuf,
    is_new: bool,
    file: Mutex<Option<File>>,
    partial_tail_reported: AtomicBool,
}

impl FileManager {
    pub fn new(path: impl AsRef<Path>, record_len: usize, config: &StoreConfig) -> Result<Self> {
        debug!("Start to initialize file manager");
        let path_buf = path.as_ref().to_path_buf();
        let is_new = !path_buf.exists();

        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        apply_sync_flag(&mut options, config);
        let file = options.open(&path_buf)?;

        debug!("File manager initialization done for {:?} (new: {})", path_buf, is_new);
        Ok(Self {
            record_len,
            path: path_buf,
            is_new,
            file: Mutex::new(Some(file)),
            partial_tail_reported: AtomicBool::new(false),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|_| io::Error::other("Failed to acquire file lock").into())
    }

    fn with_file<T>(&self, op: impl FnOnce(&mut File) -> io::Result<T>) -> Result<T> {
        let mut guard = self.lock()?;
        let file = guard.as_mut().ok_or(StoreError::Closed)?;
        Ok(op(file)?)
    }

    pub fn read(&self, record_id: &RecordId, page: &mut Page) -> Result<()> {
        let offset = record_id.offset(self.record_len);
        trace!("Reading record {} at offset {}", record_id.index(), offset);
        self.with_file(|file| {
            file.seek(SeekFrom::Start(offset))?;
            file.read_exact(page.content_mut())
        })
    }

    pub fn write(&self, record_id: &RecordId, page: &Page) -> Result<()> {
        let offset = record_id.offset(self.record_len);
        trace!("Writing record {} at offset {}", record_id.index(), offset);
        self.with_file(|file| {
            file.seek(SeekFrom::Start(offset))?;
            file.write_all(page.content())
        })
    }

    /// Writes `page` after the last whole record and returns its id.
    ///
    /// Trailing bytes of a partial record are overwritten, so the returned id
    /// always addresses the bytes just written.
    pub fn append(&self, page: &Page) -> Result<RecordId> {
        let record_len = self.record_len as u64;
        self.with_file(|file| {
            let end = file.seek(SeekFrom::End(0))?;
            let trailing = end % record_len;
            let start = end - trailing;
            if trailing != 0 {
                warn!(
                    "Overwriting {} trailing bytes of a partial record in {:?}",
                    trailing, self.path
                );
                file.seek(SeekFrom::Start(start))?;
            }
            file.write_all(page.content())?;
            trace!("Appended record at offset {}", start);
            Ok(RecordId::new(start / record_len))
        })
    }

    /// Length of the file in bytes.
    pub fn len(&self) -> Result<u64> {
        self.with_file(|file| file.metadata().map(|m| m.len()))
    }

    /// Number of whole records in the file. Trailing partial bytes are ignored.
    pub fn size(&self) -> Result<u64> {
        let len = self.len()?;
        let record_len = self.record_len as u64;
        let trailing = len % record_len;
        if trailing != 0 && !self.partial_tail_reported.swap(true, Ordering::Relaxed) {
            warn!(
                "{:?} is {} bytes long, ignoring {} trailing bytes of a partial record",
                self.path, len, trailing
            );
        }
        Ok(len / record_len)
    }

    /// Releases the file handle. Failures are logged, never returned.
    pub fn close(&self) {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("File lock poisoned while closing {:?}", self.path);
                poisoned.into_inner()
            }
        };

        match guard.take() {
            Some(file) => {
                if let Err(e) = file.sync_all() {
                    error!("Failed to flush {:?} on close: {}", self.path, e);
                }
                debug!("Closed {:?}", self.path);
            }
            None => trace!("{:?} already closed", self.path),
        }
    }

    pub fn is_closed(&self) -> bool {
        match self.file.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }

    pub fn record_len(&self) -> usize {
        self.record_len
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

#[cfg(unix)]
fn apply_sync_flag(options: &mut OpenOptions, config: &StoreConfig) {
    if config.sync_writes {
        trace!("Opening with O_SYNC");
        options.custom_flags(libc::O_SYNC);
    }
}

#[cfg(not(unix))]
fn apply_sync_flag(_options: &mut OpenOptions, _config: &StoreConfig) {}
