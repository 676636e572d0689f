//! Account-related types for the bank ledger
//!
//! This module defines the Account structure, its balance operations and
//! its single-record serialization.

use super::displayable::Displayable;
use super::error::LedgerError;
use crate::io::record_format::{decode_account, encode_account, format_amount};
use rust_decimal::Decimal;
use std::fmt;

/// Account identifier
///
/// Supports account numbers from 0 to 4,294,967,295
pub type AccountNumber = u32;

/// A bank account
///
/// Holds the account identity (number and owner) together with its balance.
/// Fields are private so the balance can only change through [`deposit`]
/// and [`withdraw`], which keep it non-negative.
///
/// [`deposit`]: Account::deposit
/// [`withdraw`]: Account::withdraw
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    account_number: AccountNumber,
    owner_name: String,
    balance: Decimal,
}

impl Account {
    /// Create a new account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the initial balance is negative
    /// - `InvalidOwnerName` if the name contains a line break (a stored
    ///   account must fit on one line)
    pub fn new(
        account_number: AccountNumber,
        owner_name: impl Into<String>,
        balance: Decimal,
    ) -> Result<Self, LedgerError> {
        let owner_name = owner_name.into();

        if balance < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(
                balance,
                "initial balance must not be negative",
            ));
        }

        if owner_name.contains(|c: char| c == '\n' || c == '\r') {
            return Err(LedgerError::invalid_owner_name(
                &owner_name,
                "must not contain line breaks",
            ));
        }

        Ok(Account {
            account_number,
            owner_name,
            balance,
        })
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Deposit funds into the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    /// - `ArithmeticOverflow` if the new balance is out of range
    ///
    /// The balance is unchanged on failure.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(
                amount,
                "deposit must not be negative",
            ));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("deposit", self.account_number))?;

        Ok(())
    }

    /// Withdraw funds from the account
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` is negative
    /// - `InsufficientFunds` if `amount` exceeds the balance
    ///
    /// The balance is unchanged on failure.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount < Decimal::ZERO {
            return Err(LedgerError::invalid_amount(
                amount,
                "withdrawal must not be negative",
            ));
        }

        if amount > self.balance {
            return Err(LedgerError::insufficient_funds(
                self.account_number,
                self.balance,
                amount,
            ));
        }

        // amount <= balance, so the result stays non-negative
        self.balance -= amount;

        Ok(())
    }

    /// Serialize the account as one `name|accountNumber|balance` record
    pub fn serialize(&self) -> Result<String, LedgerError> {
        encode_account(self)
    }

    /// Parse an account from one `name|accountNumber|balance` record
    ///
    /// Fails with `MalformedRecord` on missing fields or non-numeric
    /// account number or balance.
    pub fn deserialize(record: &str) -> Result<Self, LedgerError> {
        decode_account(record)
    }
}

impl Displayable for Account {
    fn describe(&self, show_balance: bool) -> String {
        let mut line = format!("Acc#: {} | Name: {}", self.account_number, self.owner_name);
        if show_balance {
            line.push_str(&format!(" | Balance: {}", format_amount(self.balance)));
        }
        line
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn alice() -> Account {
        Account::new(1001, "Alice", Decimal::new(1000, 0)).unwrap()
    }

    #[test]
    fn test_new_account() {
        let account = alice();
        assert_eq!(account.account_number(), 1001);
        assert_eq!(account.owner_name(), "Alice");
        assert_eq!(account.balance(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_new_account_zero_balance() {
        let account = Account::new(1, "Zero", Decimal::ZERO).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn test_new_account_rejects_negative_balance() {
        let result = Account::new(1, "Neg", Decimal::new(-1, 2));
        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
    }

    #[rstest]
    #[case::newline("Ali\nce")]
    #[case::carriage_return("Ali\rce")]
    fn test_new_account_rejects_multiline_name(#[case] name: &str) {
        let result = Account::new(1, name, Decimal::ONE);
        assert!(matches!(result, Err(LedgerError::InvalidOwnerName { .. })));
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::cents(Decimal::new(1, 2))]
    #[case::whole(Decimal::new(250, 0))]
    #[case::fractional(Decimal::new(123456, 4))]
    fn test_deposit_increases_balance(#[case] amount: Decimal) {
        let mut account = alice();
        let before = account.balance();

        account.deposit(amount).unwrap();

        assert_eq!(account.balance(), before + amount);
    }

    #[test]
    fn test_deposit_negative_fails_and_keeps_balance() {
        let mut account = alice();

        let result = account.deposit(Decimal::new(-5, 0));

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(account.balance(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_deposit_overflow_keeps_balance() {
        let mut account = Account::new(1, "Max", Decimal::MAX).unwrap();

        let result = account.deposit(Decimal::ONE);

        assert!(matches!(result, Err(LedgerError::ArithmeticOverflow { .. })));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[rstest]
    #[case::partial(Decimal::new(300, 0), Decimal::new(700, 0))]
    #[case::entire_balance(Decimal::new(1000, 0), Decimal::ZERO)]
    #[case::zero(Decimal::ZERO, Decimal::new(1000, 0))]
    fn test_withdraw_decreases_balance(#[case] amount: Decimal, #[case] expected: Decimal) {
        let mut account = alice();

        account.withdraw(amount).unwrap();

        assert_eq!(account.balance(), expected);
    }

    #[rstest]
    #[case::just_over(Decimal::new(100001, 2))]
    #[case::far_over(Decimal::new(5000, 0))]
    fn test_withdraw_more_than_balance_fails(#[case] amount: Decimal) {
        let mut account = alice();

        let result = account.withdraw(amount);

        assert_eq!(
            result,
            Err(LedgerError::InsufficientFunds {
                account: 1001,
                balance: Decimal::new(1000, 0),
                requested: amount,
            })
        );
        assert_eq!(account.balance(), Decimal::new(1000, 0));
    }

    #[test]
    fn test_withdraw_negative_fails_and_keeps_balance() {
        let mut account = alice();

        let result = account.withdraw(Decimal::new(-50, 0));

        assert!(matches!(result, Err(LedgerError::InvalidAmount { .. })));
        assert_eq!(account.balance(), Decimal::new(1000, 0));
    }

    #[rstest]
    #[case::alice(Account::new(1001, "Alice", Decimal::new(1000, 0)).unwrap())]
    #[case::fractional(Account::new(42, "Bob Smith", Decimal::new(1234567, 4)).unwrap())]
    #[case::zero_balance(Account::new(0, "Empty", Decimal::ZERO).unwrap())]
    #[case::delimiter_in_name(Account::new(5, "A|B \"C\"", Decimal::new(5, 1)).unwrap())]
    fn test_serialize_round_trip(#[case] account: Account) {
        let record = account.serialize().unwrap();
        assert_eq!(Account::deserialize(&record).unwrap(), account);
    }

    #[test]
    fn test_serialize_format() {
        assert_eq!(alice().serialize().unwrap(), "Alice|1001|1000.00");
    }

    #[test]
    fn test_describe() {
        let account = alice();
        assert_eq!(account.describe(false), "Acc#: 1001 | Name: Alice");
        assert_eq!(
            account.describe(true),
            "Acc#: 1001 | Name: Alice | Balance: 1000.00"
        );
        assert_eq!(account.to_string(), account.display());
    }
}
