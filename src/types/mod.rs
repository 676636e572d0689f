//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account entity and balance operations
//! - `transaction`: Transaction log entries
//! - `displayable`: Human-readable rendering capability
//! - `error`: Error types for the ledger

pub mod account;
pub mod displayable;
pub mod error;
pub mod transaction;

pub use account::{Account, AccountNumber};
pub use displayable::Displayable;
pub use error::LedgerError;
pub use transaction::{Transaction, TRANSFER_NOTE};
