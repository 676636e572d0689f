//! Ledger module
//!
//! This module provides the `Ledger` which owns the account store and the
//! transaction log, and performs every persisted operation.
//!
//! The Ledger is responsible for:
//! - Creating accounts (append, rejecting duplicate numbers)
//! - Loading and saving the full account set
//! - Single-account deposits and withdrawals
//! - Transfers between two accounts, logged to the transaction log
//!
//! # Staging
//!
//! Every mutating operation loads the current state, applies the change to
//! an in-memory copy and only writes once all validation has passed. A
//! failed operation leaves the stores untouched.
//!
//! # Lenient Loads
//!
//! Malformed records are skipped with a warning during bulk loads. A rewrite
//! of the account store drops them.

use crate::config::LedgerConfig;
use crate::core::traits::RecordStore;
use crate::io::record_format::account_number_field;
use crate::io::{FileStore, MemoryStore};
use crate::types::{Account, AccountNumber, LedgerError, Transaction};
use rust_decimal::Decimal;
use tracing::{error, info, warn};

/// Ledger over a flat-file account store and transaction log
pub type FileLedger = Ledger<FileStore, FileStore>;

/// Ledger held entirely in memory
pub type MemoryLedger = Ledger<MemoryStore, MemoryStore>;

/// Owns the account store and the transaction log
///
/// Generic over both stores so backends can be substituted independently.
pub struct Ledger<A, J> {
    accounts: A,
    journal: J,
}

impl Ledger<FileStore, FileStore> {
    /// Open a file-backed ledger
    ///
    /// Files are created lazily on first write.
    pub fn open(config: &LedgerConfig) -> Self {
        Ledger::new(
            FileStore::new(&config.accounts_path),
            FileStore::new(&config.transactions_path),
        )
    }
}

impl Ledger<MemoryStore, MemoryStore> {
    /// Create an empty in-memory ledger
    pub fn in_memory() -> Self {
        Ledger::new(MemoryStore::new(), MemoryStore::new())
    }
}

impl<A: RecordStore, J: RecordStore> Ledger<A, J> {
    /// Create a ledger over the given account store and transaction log
    pub fn new(accounts: A, journal: J) -> Self {
        Ledger { accounts, journal }
    }

    /// The account store
    pub fn account_store(&self) -> &A {
        &self.accounts
    }

    /// The transaction log store
    pub fn transaction_store(&self) -> &J {
        &self.journal
    }

    /// Add a new account to the store
    ///
    /// # Errors
    ///
    /// - `DuplicateAccount` if a stored record carries the same number,
    ///   including records that are otherwise malformed
    /// - `StoreUnavailable` if the store cannot be read or appended to
    pub fn create_account(&mut self, account: &Account) -> Result<(), LedgerError> {
        let existing = self.accounts.read_records()?;
        if existing
            .iter()
            .any(|record| account_number_field(record) == Some(account.account_number()))
        {
            return Err(LedgerError::duplicate_account(account.account_number()));
        }

        let record = account.serialize()?;
        self.accounts.append_record(&record)?;

        info!(
            account = account.account_number(),
            owner = account.owner_name(),
            balance = %account.balance(),
            "Created account"
        );
        Ok(())
    }

    /// Load every account from the store
    ///
    /// Malformed records are logged and skipped; blank lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the store cannot be read.
    pub fn load_all(&self) -> Result<Vec<Account>, LedgerError> {
        let records = self.accounts.read_records()?;
        Ok(decode_leniently(
            &records,
            &self.accounts.location(),
            Account::deserialize,
        ))
    }

    /// Overwrite the store with the given full account set
    ///
    /// Accounts are written in the given order. Nothing is written if any
    /// account fails to serialize.
    pub fn save_all(&mut self, accounts: &[Account]) -> Result<(), LedgerError> {
        let records = accounts
            .iter()
            .map(Account::serialize)
            .collect::<Result<Vec<_>, _>>()?;

        self.accounts.write_records(&records)
    }

    /// Look up a single stored account
    ///
    /// # Errors
    ///
    /// Returns `AccountNotFound` if no stored account has this number.
    pub fn find_account(&self, account_number: AccountNumber) -> Result<Account, LedgerError> {
        let accounts = self.load_all()?;
        let index = locate(&accounts, account_number)?;
        Ok(accounts[index].clone())
    }

    /// Deposit into a stored account and persist the new balance
    ///
    /// # Returns
    ///
    /// The account after the deposit.
    pub fn deposit(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<Account, LedgerError> {
        let mut staged = self.load_all()?;
        let index = locate(&staged, account_number)?;

        staged[index].deposit(amount)?;
        self.save_all(&staged)?;

        info!(account = account_number, amount = %amount, "Deposited");
        Ok(staged[index].clone())
    }

    /// Withdraw from a stored account and persist the new balance
    ///
    /// # Returns
    ///
    /// The account after the withdrawal.
    pub fn withdraw(
        &mut self,
        account_number: AccountNumber,
        amount: Decimal,
    ) -> Result<Account, LedgerError> {
        let mut staged = self.load_all()?;
        let index = locate(&staged, account_number)?;

        staged[index].withdraw(amount)?;
        self.save_all(&staged)?;

        info!(account = account_number, amount = %amount, "Withdrew");
        Ok(staged[index].clone())
    }

    /// Transfer funds between two stored accounts
    ///
    /// Withdraws from `from_account` then deposits into `to_account` on an
    /// in-memory copy of the store. Once both succeed the account store is
    /// rewritten and a `from|to|amount|transfer` entry is appended to the
    /// transaction log.
    ///
    /// # Arguments
    ///
    /// * `from_account` - Account to debit
    /// * `to_account` - Account to credit
    /// * `amount` - Amount to move, must be strictly positive
    ///
    /// # Returns
    ///
    /// The logged transaction.
    ///
    /// # Errors
    ///
    /// Returns an error, with both stores unchanged, if:
    /// - `amount` is not strictly positive (`InvalidAmount`)
    /// - source and destination are the same account (`InvalidTransfer`)
    /// - either account is missing (`AccountNotFound`)
    /// - the source balance is too low (`InsufficientFunds`)
    /// - either store cannot be written (`StoreUnavailable`); a failed log
    ///   append rolls the account store back to its previous records
    pub fn transfer(
        &mut self,
        from_account: AccountNumber,
        to_account: AccountNumber,
        amount: Decimal,
    ) -> Result<Transaction, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::invalid_amount(
                amount,
                "transfer amount must be positive",
            ));
        }
        if from_account == to_account {
            return Err(LedgerError::InvalidTransfer {
                account: from_account,
            });
        }

        let previous = self.accounts.read_records()?;
        let mut staged = decode_leniently(&previous, &self.accounts.location(), Account::deserialize);

        let from_index = locate(&staged, from_account)?;
        let to_index = locate(&staged, to_account)?;

        // Withdraw first so a rejected debit never touches the destination
        staged[from_index].withdraw(amount)?;
        staged[to_index].deposit(amount)?;

        let transaction = Transaction::transfer(from_account, to_account, amount);
        let entry = transaction.serialize()?;

        self.save_all(&staged)?;

        if let Err(e) = self.journal.append_record(&entry) {
            if let Err(rollback) = self.accounts.write_records(&previous) {
                error!(
                    error = %rollback,
                    store = %self.accounts.location(),
                    "Failed to restore account store after transaction log failure"
                );
            }
            return Err(e);
        }

        info!(
            from = from_account,
            to = to_account,
            amount = %amount,
            "Transferred"
        );
        Ok(transaction)
    }

    /// Load the transaction log
    ///
    /// Same lenient policy as [`load_all`](Ledger::load_all).
    pub fn transactions(&self) -> Result<Vec<Transaction>, LedgerError> {
        let records = self.journal.read_records()?;
        Ok(decode_leniently(
            &records,
            &self.journal.location(),
            Transaction::deserialize,
        ))
    }
}

/// Decode records, skipping blank lines and logging malformed ones
fn decode_leniently<T>(
    records: &[String],
    location: &str,
    decode: impl Fn(&str) -> Result<T, LedgerError>,
) -> Vec<T> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
        .filter_map(|(index, record)| match decode(record) {
            Ok(value) => Some(value),
            Err(e) => {
                let e = e.at_line(index + 1);
                warn!(store = location, error = %e, "Skipping malformed record");
                None
            }
        })
        .collect()
}

fn locate(accounts: &[Account], account_number: AccountNumber) -> Result<usize, LedgerError> {
    accounts
        .iter()
        .position(|a| a.account_number() == account_number)
        .ok_or_else(|| LedgerError::account_not_found(account_number))
}
