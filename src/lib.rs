//! A fixed-length-record flat-file store for part records.
//!
//! Each record is encoded into exactly [`RECORD_LEN`] bytes and stored at
//! `index * RECORD_LEN`, so records are appended, read and overwritten by
//! record number without any index structure.

mod config;
mod error;
pub mod file;
mod part;
mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use file::RecordId;
pub use part::{DESCRIPTION_LEN, PART_NUMBER_LEN, Part, RECORD_LEN};
pub use store::{RecordStore, Records};
