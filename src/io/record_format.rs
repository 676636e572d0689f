//! Pipe-delimited record format for the account store and transaction log
//!
//! This module centralizes all record format concerns:
//! - `AccountRow` / `TransactionRow` structures for (de)serialization
//! - Conversion between rows and domain types
//! - Amount formatting
//!
//! One record is one line. Fields are separated by `|` and quoted only when
//! they contain the delimiter, a quote or a line break. All functions are
//! pure (no I/O).

use crate::types::{Account, AccountNumber, LedgerError, Transaction};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field separator used by both stores
pub const FIELD_DELIMITER: u8 = b'|';

/// Minimum number of decimal places written for amounts
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Account store record: `name|accountNumber|balance`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AccountRow {
    pub owner_name: String,
    pub account_number: String,
    pub balance: String,
}

/// Transaction log record: `fromAccount|toAccount|amount|note`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransactionRow {
    pub from_account: String,
    pub to_account: String,
    pub amount: String,
    pub note: String,
}

/// Format an amount with at least two decimal places
///
/// Amounts with a larger scale keep it, so formatting never loses precision.
pub fn format_amount(amount: Decimal) -> String {
    let mut padded = amount;
    if padded.scale() < AMOUNT_DECIMAL_PLACES {
        padded.rescale(AMOUNT_DECIMAL_PLACES);
    }
    padded.to_string()
}

/// Encode an account as a single record (no line terminator)
pub fn encode_account(account: &Account) -> Result<String, LedgerError> {
    encode_row(&AccountRow {
        owner_name: account.owner_name().to_string(),
        account_number: account.account_number().to_string(),
        balance: format_amount(account.balance()),
    })
}

/// Decode a single account record
///
/// # Errors
///
/// Returns `MalformedRecord` if:
/// - The record does not have exactly 3 fields
/// - The account number is not plain decimal digits (no sign)
/// - The balance is not a decimal number, or is negative
/// - The owner name is not storable (see [`Account::new`])
pub fn decode_account(record: &str) -> Result<Account, LedgerError> {
    let row: AccountRow = decode_row(record, 3)?;

    let account_number = parse_account_number(&row.account_number, "account number")?;
    let balance = parse_amount(&row.balance, "balance")?;

    Account::new(account_number, row.owner_name, balance)
        .map_err(|e| LedgerError::malformed(e.to_string()))
}

/// Encode a transaction as a single record (no line terminator)
pub fn encode_transaction(transaction: &Transaction) -> Result<String, LedgerError> {
    encode_row(&TransactionRow {
        from_account: transaction.from_account.to_string(),
        to_account: transaction.to_account.to_string(),
        amount: format_amount(transaction.amount),
        note: transaction.note.clone(),
    })
}

/// Decode a single transaction log record
pub fn decode_transaction(record: &str) -> Result<Transaction, LedgerError> {
    let row: TransactionRow = decode_row(record, 4)?;

    Ok(Transaction {
        from_account: parse_account_number(&row.from_account, "source account")?,
        to_account: parse_account_number(&row.to_account, "destination account")?,
        amount: parse_amount(&row.amount, "amount")?,
        note: row.note,
    })
}

fn encode_row<T: Serialize>(row: &T) -> Result<String, LedgerError> {
    let mut writer = WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .serialize(row)
        .map_err(|e| LedgerError::malformed(format!("Failed to encode record: {}", e)))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| LedgerError::malformed(format!("Failed to flush record: {}", e)))?;

    let encoded = String::from_utf8(bytes)
        .map_err(|e| LedgerError::malformed(format!("Encoded record is not UTF-8: {}", e)))?;

    Ok(encoded.trim_end_matches('\n').to_string())
}

fn decode_row<T: for<'de> Deserialize<'de>>(
    record: &str,
    expected_fields: usize,
) -> Result<T, LedgerError> {
    let fields = split_fields(record)?;

    if fields.len() != expected_fields {
        return Err(LedgerError::malformed(format!(
            "Expected {} fields, found {}",
            expected_fields,
            fields.len()
        )));
    }

    fields
        .deserialize(None)
        .map_err(|e| LedgerError::malformed(format!("Invalid record: {}", e)))
}

fn split_fields(record: &str) -> Result<StringRecord, LedgerError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .flexible(true)
        .from_reader(record.as_bytes());

    let mut records = reader.records();
    let fields = match records.next() {
        Some(Ok(fields)) => fields,
        Some(Err(e)) => return Err(LedgerError::malformed(format!("Invalid record: {}", e))),
        None => return Err(LedgerError::malformed("Empty record")),
    };

    if records.next().is_some() {
        return Err(LedgerError::malformed("Record spans more than one line"));
    }

    Ok(fields)
}

/// Account number field of an account record, even if the rest is malformed
///
/// Returns `None` when the record has no parseable number in the second
/// field.
pub fn account_number_field(record: &str) -> Option<AccountNumber> {
    let fields = split_fields(record).ok()?;
    parse_account_number(fields.get(1)?, "account number").ok()
}

/// Plain decimal digits only; a sign (`+1001`) is malformed
fn parse_account_number(field: &str, what: &str) -> Result<AccountNumber, LedgerError> {
    let digits = field.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LedgerError::malformed(format!("Invalid {} '{}'", what, field)));
    }

    AccountNumber::from_str(digits)
        .map_err(|_| LedgerError::malformed(format!("Invalid {} '{}'", what, field)))
}

fn parse_amount(field: &str, what: &str) -> Result<Decimal, LedgerError> {
    Decimal::from_str(field.trim())
        .map_err(|_| LedgerError::malformed(format!("Invalid {} '{}'", what, field)))
}
