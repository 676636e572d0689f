//! I/O module
//!
//! Handles the on-disk record format and the storage backends.
//!
//! # Components
//!
//! - `record_format` - Pipe-delimited record encoding and decoding
//! - `file_store` - Flat-file [`RecordStore`](crate::core::RecordStore)
//! - `memory_store` - In-memory [`RecordStore`](crate::core::RecordStore)

pub mod file_store;
pub mod memory_store;
pub mod record_format;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
pub use record_format::format_amount;
