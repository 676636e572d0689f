//! Transaction log types for the bank ledger

use super::account::AccountNumber;
use super::displayable::Displayable;
use super::error::LedgerError;
use crate::io::record_format::{decode_transaction, encode_transaction, format_amount};
use rust_decimal::Decimal;

/// Note written for ledger transfers
pub const TRANSFER_NOTE: &str = "transfer";

/// One entry of the append-only transaction log
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Account the funds were taken from
    pub from_account: AccountNumber,

    /// Account the funds were credited to
    pub to_account: AccountNumber,

    /// Amount moved
    pub amount: Decimal,

    /// Free-form note
    pub note: String,
}

impl Transaction {
    /// Create a transfer log entry
    pub fn transfer(from_account: AccountNumber, to_account: AccountNumber, amount: Decimal) -> Self {
        Transaction {
            from_account,
            to_account,
            amount,
            note: TRANSFER_NOTE.to_string(),
        }
    }

    /// Serialize as one `fromAccount|toAccount|amount|note` record
    pub fn serialize(&self) -> Result<String, LedgerError> {
        encode_transaction(self)
    }

    /// Parse one `fromAccount|toAccount|amount|note` record
    pub fn deserialize(record: &str) -> Result<Self, LedgerError> {
        decode_transaction(record)
    }
}

impl Displayable for Transaction {
    fn describe(&self, show_amount: bool) -> String {
        let mut line = format!("{} -> {}", self.from_account, self.to_account);
        if show_amount {
            line.push_str(&format!(" | {}", format_amount(self.amount)));
        }
        line.push_str(&format!(" | {}", self.note));
        line
    }
}
