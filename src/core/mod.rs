//! Core business logic module
//!
//! This module contains the ledger components:
//! - `traits` - Storage abstraction the ledger is written against
//! - `ledger` - Account creation, persistence and transfers

pub mod ledger;
pub mod traits;

pub use ledger::{FileLedger, Ledger, MemoryLedger};
pub use traits::RecordStore;
