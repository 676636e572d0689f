//! In-memory record store
//!
//! Keeps records in a `Vec<String>`. Used by tests and benchmarks in place of
//! [`FileStore`](super::file_store::FileStore).

use crate::core::traits::RecordStore;
use crate::types::LedgerError;

/// Record store held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with raw records
    pub fn with_records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryStore {
            records: records.into_iter().map(Into::into).collect(),
        }
    }

    /// Raw records currently held
    pub fn records(&self) -> &[String] {
        &self.records
    }
}

impl RecordStore for MemoryStore {
    fn read_records(&self) -> Result<Vec<String>, LedgerError> {
        Ok(self.records.clone())
    }

    fn write_records(&mut self, records: &[String]) -> Result<(), LedgerError> {
        self.records = records.to_vec();
        Ok(())
    }

    fn append_record(&mut self, record: &str) -> Result<(), LedgerError> {
        self.records.push(record.to_string());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
