/// Zero-based position of a record within the store file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId {
    index: u64,
}

impl RecordId {
    pub fn new(index: u64) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    /// Byte offset of this record in a file of `record_len`-byte records.
    pub fn offset(&self, record_len: usize) -> u64 {
        self.index * record_len as u64
    }
}

impl From<u64> for RecordId {
    fn from(index: u64) -> Self {
        Self::new(index)
    }
}
