//! Flat-file record store
//!
//! Stores one record per line in a plain text file.
//!
//! # Write Semantics
//!
//! - `append_record` opens the file in append mode (creating it if needed)
//! - `write_records` writes a temporary file next to the target and renames
//!   it over the target, so readers see either the old or the new contents
//!
//! A line that is not valid UTF-8 is logged and skipped on read; the other
//! lines are still returned. File handles are held only for the duration of
//! each call.

use crate::core::traits::RecordStore;
use crate::types::LedgerError;
use std::fs::{self, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// Record store backed by a single text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given path
    ///
    /// The file is not touched until the first read or write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, error: &std::io::Error) -> LedgerError {
        LedgerError::store_unavailable(&self.path.display().to_string(), error)
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl RecordStore for FileStore {
    fn read_records(&self) -> Result<Vec<String>, LedgerError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file does not exist yet, reading as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.unavailable(&e)),
        };

        let mut records = Vec::new();
        for (index, line) in bytes.split_inclusive(|b| *b == b'\n').enumerate() {
            let line = line.strip_suffix(b"\n").unwrap_or(line);
            let line = line.strip_suffix(b"\r").unwrap_or(line);

            match std::str::from_utf8(line) {
                Ok(record) => records.push(record.to_string()),
                Err(e) => {
                    let error = LedgerError::malformed(format!("Record is not valid UTF-8: {}", e))
                        .at_line(index + 1);
                    warn!(path = %self.path.display(), error = %error, "Skipping unreadable record");
                }
            }
        }

        Ok(records)
    }

    fn write_records(&mut self, records: &[String]) -> Result<(), LedgerError> {
        let mut staged = NamedTempFile::new_in(self.parent_dir()).map_err(|e| self.unavailable(&e))?;

        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            for record in records {
                writeln!(writer, "{}", record).map_err(|e| self.unavailable(&e))?;
            }
            writer.flush().map_err(|e| self.unavailable(&e))?;
        }

        staged
            .persist(&self.path)
            .map_err(|e| self.unavailable(&e.error))?;

        debug!(path = %self.path.display(), records = records.len(), "Rewrote store");
        Ok(())
    }

    fn append_record(&mut self, record: &str) -> Result<(), LedgerError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unavailable(&e))?;

        writeln!(file, "{}", record).map_err(|e| self.unavailable(&e))?;

        debug!(path = %self.path.display(), "Appended record");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("accounts.txt"))
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.read_records().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_append_creates_file_and_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.append_record("Alice|1001|1000.00").unwrap();
        store.append_record("Bob|1002|500.00").unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "Alice|1001|1000.00\nBob|1002|500.00\n"
        );
        assert_eq!(
            store.read_records().unwrap(),
            vec!["Alice|1001|1000.00", "Bob|1002|500.00"]
        );
    }

    #[test]
    fn test_read_skips_line_with_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(
            store.path(),
            b"Alice|1001|1000.00\r\n\xff\xfe|1003|1.00\nBob|1002|500.00",
        )
        .unwrap();

        assert_eq!(
            store.read_records().unwrap(),
            vec!["Alice|1001|1000.00", "Bob|1002|500.00"]
        );
    }

    #[test]
    fn test_write_records_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.append_record("stale|1|0.00").unwrap();

        store
            .write_records(&["Alice|1001|700.00".to_string(), "Bob|1002|800.00".to_string()])
            .unwrap();

        assert_eq!(
            store.read_records().unwrap(),
            vec!["Alice|1001|700.00", "Bob|1002|800.00"]
        );
    }

    #[test]
    fn test_write_empty_set_truncates() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store.append_record("Alice|1001|700.00").unwrap();

        store.write_records(&[]).unwrap();

        assert!(store.read_records().unwrap().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_unreadable_location_is_store_unavailable() {
        let dir = TempDir::new().unwrap();
        // A directory cannot be read as a file
        let store = FileStore::new(dir.path());

        let result = store.read_records();

        assert!(matches!(result, Err(LedgerError::StoreUnavailable { .. })));
    }

    #[test]
    fn test_missing_directory_is_store_unavailable() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("missing").join("accounts.txt"));

        assert!(matches!(
            store.append_record("Alice|1001|1.00"),
            Err(LedgerError::StoreUnavailable { .. })
        ));
        assert!(matches!(
            store.write_records(&["Alice|1001|1.00".to_string()]),
            Err(LedgerError::StoreUnavailable { .. })
        ));
    }
}
