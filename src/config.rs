//! Ledger configuration
//!
//! Built from command-line arguments by [`CliArgs::to_ledger_config`].
//!
//! [`CliArgs::to_ledger_config`]: crate::cli::CliArgs::to_ledger_config

use std::path::PathBuf;

/// Default account store file
pub const DEFAULT_ACCOUNTS_FILE: &str = "accounts.txt";

/// Default transaction log file
pub const DEFAULT_TRANSACTIONS_FILE: &str = "transactions.txt";

/// Locations of the two flat-file stores
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerConfig {
    /// Account store, one `name|accountNumber|balance` record per line
    pub accounts_path: PathBuf,

    /// Append-only transaction log
    pub transactions_path: PathBuf,
}

impl LedgerConfig {
    pub fn new(accounts_path: impl Into<PathBuf>, transactions_path: impl Into<PathBuf>) -> Self {
        LedgerConfig {
            accounts_path: accounts_path.into(),
            transactions_path: transactions_path.into(),
        }
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNTS_FILE, DEFAULT_TRANSACTIONS_FILE)
    }
}
