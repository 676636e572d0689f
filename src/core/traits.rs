//! Core traits for record storage
//!
//! The ledger never touches files directly. It talks to a [`RecordStore`],
//! so the flat-file backend can be swapped for an in-memory one in tests or
//! for another backend entirely.

use crate::types::LedgerError;

/// Trait for a line-oriented record store
///
/// A record is one line of text without its terminator. Implementations
/// decide where records live; the ledger decides what they mean.
pub trait RecordStore {
    /// Read every record, in stored order
    ///
    /// A store that does not exist yet reads as empty.
    fn read_records(&self) -> Result<Vec<String>, LedgerError>;

    /// Replace the whole store with the given records
    fn write_records(&mut self, records: &[String]) -> Result<(), LedgerError>;

    /// Append a single record to the end of the store
    fn append_record(&mut self, record: &str) -> Result<(), LedgerError>;

    /// Human-readable location, used in log events
    fn location(&self) -> String;
}
