//! Error types for the bank ledger
//!
//! Every fallible operation in the crate returns [`LedgerError`].
//!
//! # Error Categories
//!
//! - **Validation Errors**: invalid amounts, invalid owner names, self transfers
//! - **Balance Errors**: insufficient funds, arithmetic overflow
//! - **Lookup Errors**: account not found, duplicate account
//! - **Storage Errors**: malformed records, unavailable store

use crate::types::account::AccountNumber;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the ledger
///
/// Variants carry enough context (account numbers, amounts, paths) to be
/// printed directly to the user by the CLI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// Amount is negative (or not strictly positive, for transfers)
    #[error("Invalid amount {amount}: {reason}")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
        /// Why it was rejected
        reason: String,
    },

    /// Withdrawal exceeds the account balance
    ///
    /// The account is left unchanged.
    #[error("Insufficient funds in account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account number
        account: AccountNumber,
        /// Balance at the time of the attempt
        balance: Decimal,
        /// Requested withdrawal amount
        requested: Decimal,
    },

    /// No account with this number exists in the store
    #[error("Account {account} not found")]
    AccountNotFound {
        /// Account number that was looked up
        account: AccountNumber,
    },

    /// An account with this number already exists in the store
    #[error("Account {account} already exists")]
    DuplicateAccount {
        /// Account number that is duplicated
        account: AccountNumber,
    },

    /// A stored record could not be decoded
    ///
    /// Skipped (and logged) during bulk loads; returned as-is from
    /// single-record decoding.
    #[error("Malformed record{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MalformedRecord {
        /// Line number in the store (if known)
        line: Option<usize>,
        /// Description of the decoding failure
        message: String,
    },

    /// The backing store could not be opened, read or written
    #[error("Store unavailable ({path}): {message}")]
    StoreUnavailable {
        /// Store location
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// Owner name cannot be stored as a single record
    #[error("Invalid owner name {name:?}: {reason}")]
    InvalidOwnerName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Transfer source and destination are the same account
    #[error("Cannot transfer from account {account} to itself")]
    InvalidTransfer {
        /// The account given as both source and destination
        account: AccountNumber,
    },

    /// Balance arithmetic would overflow the decimal range
    #[error("Arithmetic overflow in {operation} for account {account}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account number
        account: AccountNumber,
    },
}

impl LedgerError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal, reason: &str) -> Self {
        LedgerError::InvalidAmount {
            amount,
            reason: reason.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(account: AccountNumber, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientFunds {
            account,
            balance,
            requested,
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(account: AccountNumber) -> Self {
        LedgerError::AccountNotFound { account }
    }

    /// Create a DuplicateAccount error
    pub fn duplicate_account(account: AccountNumber) -> Self {
        LedgerError::DuplicateAccount { account }
    }

    /// Create a MalformedRecord error without a line number
    pub fn malformed(message: impl Into<String>) -> Self {
        LedgerError::MalformedRecord {
            line: None,
            message: message.into(),
        }
    }

    /// Attach a line number to a MalformedRecord error
    ///
    /// Other variants are returned unchanged.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            LedgerError::MalformedRecord { message, .. } => LedgerError::MalformedRecord {
                line: Some(line),
                message,
            },
            other => other,
        }
    }

    /// Create a StoreUnavailable error from an I/O error
    pub fn store_unavailable(path: &str, error: &std::io::Error) -> Self {
        LedgerError::StoreUnavailable {
            path: path.to_string(),
            message: error.to_string(),
        }
    }

    /// Create an InvalidOwnerName error
    pub fn invalid_owner_name(name: &str, reason: &str) -> Self {
        LedgerError::InvalidOwnerName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, account: AccountNumber) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            account,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::invalid_amount(
        LedgerError::InvalidAmount { amount: Decimal::new(-500, 2), reason: "deposit must not be negative".to_string() },
        "Invalid amount -5.00: deposit must not be negative"
    )]
    #[case::insufficient_funds(
        LedgerError::InsufficientFunds { account: 1001, balance: Decimal::new(5000, 2), requested: Decimal::new(10000, 2) },
        "Insufficient funds in account 1001: balance 50.00, requested 100.00"
    )]
    #[case::account_not_found(
        LedgerError::AccountNotFound { account: 9999 },
        "Account 9999 not found"
    )]
    #[case::duplicate_account(
        LedgerError::DuplicateAccount { account: 1001 },
        "Account 1001 already exists"
    )]
    #[case::malformed_with_line(
        LedgerError::MalformedRecord { line: Some(3), message: "expected 3 fields".to_string() },
        "Malformed record at line 3: expected 3 fields"
    )]
    #[case::malformed_without_line(
        LedgerError::MalformedRecord { line: None, message: "expected 3 fields".to_string() },
        "Malformed record: expected 3 fields"
    )]
    #[case::store_unavailable(
        LedgerError::StoreUnavailable { path: "accounts.txt".to_string(), message: "Permission denied".to_string() },
        "Store unavailable (accounts.txt): Permission denied"
    )]
    #[case::invalid_transfer(
        LedgerError::InvalidTransfer { account: 1001 },
        "Cannot transfer from account 1001 to itself"
    )]
    #[case::arithmetic_overflow(
        LedgerError::ArithmeticOverflow { operation: "deposit".to_string(), account: 1 },
        "Arithmetic overflow in deposit for account 1"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::account_not_found(
        LedgerError::account_not_found(9999),
        LedgerError::AccountNotFound { account: 9999 }
    )]
    #[case::duplicate_account(
        LedgerError::duplicate_account(1001),
        LedgerError::DuplicateAccount { account: 1001 }
    )]
    #[case::malformed(
        LedgerError::malformed("bad"),
        LedgerError::MalformedRecord { line: None, message: "bad".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_at_line_only_touches_malformed_records() {
        let malformed = LedgerError::malformed("bad").at_line(7);
        assert_eq!(
            malformed,
            LedgerError::MalformedRecord {
                line: Some(7),
                message: "bad".to_string()
            }
        );

        let other = LedgerError::account_not_found(1).at_line(7);
        assert_eq!(other, LedgerError::AccountNotFound { account: 1 });
    }

    #[test]
    fn test_store_unavailable_from_io_error() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error = LedgerError::store_unavailable("accounts.txt", &io_error);
        assert!(matches!(error, LedgerError::StoreUnavailable { .. }));
        assert_eq!(
            error.to_string(),
            "Store unavailable (accounts.txt): Permission denied"
        );
    }
}
