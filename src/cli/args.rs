use crate::config::{LedgerConfig, DEFAULT_ACCOUNTS_FILE, DEFAULT_TRANSACTIONS_FILE};
use crate::types::AccountNumber;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Manage bank accounts stored in flat files
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(about = "Manage bank accounts stored in flat files", long_about = None)]
pub struct CliArgs {
    /// Account store file
    #[arg(
        long = "accounts",
        value_name = "FILE",
        default_value = DEFAULT_ACCOUNTS_FILE,
        help = "Path to the account store"
    )]
    pub accounts_file: PathBuf,

    /// Transaction log file
    #[arg(
        long = "transactions",
        value_name = "FILE",
        default_value = DEFAULT_TRANSACTIONS_FILE,
        help = "Path to the transaction log"
    )]
    pub transactions_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level when RUST_LOG is unset (error, warn, info, debug, trace)"
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create a new account
    Create {
        #[arg(long, value_name = "NUMBER")]
        number: AccountNumber,
        #[arg(long, value_name = "NAME")]
        name: String,
        #[arg(long, value_name = "AMOUNT", default_value = "0")]
        balance: Decimal,
    },

    /// List all stored accounts
    List {
        #[arg(long, help = "Omit balances from the listing")]
        hide_balance: bool,
    },

    /// Show a single account
    Show {
        #[arg(value_name = "NUMBER")]
        number: AccountNumber,
    },

    /// Deposit into an account
    Deposit {
        #[arg(long, value_name = "NUMBER")]
        number: AccountNumber,
        #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Withdraw from an account
    Withdraw {
        #[arg(long, value_name = "NUMBER")]
        number: AccountNumber,
        #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Transfer funds between two accounts
    Transfer {
        #[arg(long, value_name = "NUMBER")]
        from: AccountNumber,
        #[arg(long, value_name = "NUMBER")]
        to: AccountNumber,
        #[arg(long, value_name = "AMOUNT", allow_negative_numbers = true)]
        amount: Decimal,
    },

    /// Print the transaction log
    History,
}

impl CliArgs {
    /// Create a LedgerConfig from CLI arguments
    pub fn to_ledger_config(&self) -> LedgerConfig {
        LedgerConfig::new(&self.accounts_file, &self.transactions_file)
    }
}
