//! Fixed-length-record file access.
//!
//! This module provides the storage primitives underneath the record store:
//! - Record identification and addressing (`offset = index * record length`)
//! - A fixed-size record buffer with big-endian integer and wide-character fields
//! - A file manager owning one locked handle with positional, synchronous I/O

// Private modules - not exposed in public API
mod manager;
mod page;
mod record_id;

// Public re-exports with inlined documentation
#[doc(inline)]
pub use self::manager::FileManager;
#[doc(inline)]
pub use self::page::{CHAR_WIDTH, Page, PageError, PageResult};
#[doc(inline)]
pub use self::record_id::RecordId;
