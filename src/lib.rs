//! Bank Ledger Library
//! # Overview
//!
//! This library provides a small flat-file bank ledger: accounts with
//! validated deposits and withdrawals, persisted one record per line, and
//! transfers between two accounts that either fully apply or leave the
//! stores untouched.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, Transaction, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account creation, persistence and transfers
//!   - [`core::traits`] - The [`RecordStore`] storage capability
//! - [`io`] - Record format and storage backends (file, in-memory)
//! - [`cli`] - CLI arguments parsing and command execution
//! - [`config`] - Store locations
//! - [`logging`] - Tracing subscriber setup
//!
//! # Store Formats
//!
//! - Accounts: `name|accountNumber|balance`, e.g. `Alice|1001|700.00`
//! - Transactions: `fromAccount|toAccount|amount|note`, e.g.
//!   `1001|1002|300.00|transfer`
//!
//! # Example
//!
//! ```
//! use bank_ledger::{Account, Ledger};
//! use rust_decimal::Decimal;
//!
//! let mut ledger = Ledger::in_memory();
//! ledger.create_account(&Account::new(1001, "Alice", Decimal::new(1000, 0)).unwrap()).unwrap();
//! ledger.create_account(&Account::new(1002, "Bob", Decimal::new(500, 0)).unwrap()).unwrap();
//!
//! ledger.transfer(1001, 1002, Decimal::new(300, 0)).unwrap();
//! assert_eq!(ledger.find_account(1001).unwrap().balance(), Decimal::new(700, 0));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::config::LedgerConfig;
pub use crate::core::{FileLedger, Ledger, MemoryLedger, RecordStore};
pub use crate::io::{FileStore, MemoryStore};
pub use crate::types::{Account, AccountNumber, Displayable, LedgerError, Transaction};
