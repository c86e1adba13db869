/// Options applied when a [`RecordStore`](crate::RecordStore) opens its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Open the file with `O_SYNC` so each write reaches the device before
    /// returning. Ignored on non-Unix targets.
    pub sync_writes: bool,
}

impl StoreConfig {
    pub fn with_sync_writes(mut self, sync_writes: bool) -> Self {
        self.sync_writes = sync_writes;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { sync_writes: true }
    }
}
