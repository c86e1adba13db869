use std::io;

use crate::file::PageError;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("record {index} out of range (store holds {count} records)")]
    OutOfRange { index: u64, count: u64 },

    #[error("store has been closed")]
    Closed,

    #[error("record buffer error: {0}")]
    Page(#[from] PageError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
