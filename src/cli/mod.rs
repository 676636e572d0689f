// CLI module
// Command-line interface, argument parsing and command execution

mod args;

pub use args::{CliArgs, Command};

use crate::core::{Ledger, RecordStore};
use crate::io::format_amount;
use crate::types::{Account, Displayable};
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing subcommand, or `--help`),
/// clap prints an error or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run one command against a ledger, writing human-readable output
///
/// # Returns
///
/// * `Ok(())` if the command succeeded
/// * `Err(String)` with a printable message if the ledger rejected it or
///   output could not be written
pub fn execute<A: RecordStore, J: RecordStore>(
    command: &Command,
    ledger: &mut Ledger<A, J>,
    output: &mut dyn Write,
) -> Result<(), String> {
    let lines = match command {
        Command::Create {
            number,
            name,
            balance,
        } => {
            let account = Account::new(*number, name.as_str(), *balance).map_err(|e| e.to_string())?;
            ledger.create_account(&account).map_err(|e| e.to_string())?;
            vec![format!("Created {}", account.display())]
        }
        Command::List { hide_balance } => ledger
            .load_all()
            .map_err(|e| e.to_string())?
            .iter()
            .map(|account| account.describe(!hide_balance))
            .collect(),
        Command::Show { number } => {
            vec![ledger.find_account(*number).map_err(|e| e.to_string())?.display()]
        }
        Command::Deposit { number, amount } => {
            vec![ledger
                .deposit(*number, *amount)
                .map_err(|e| e.to_string())?
                .display()]
        }
        Command::Withdraw { number, amount } => {
            vec![ledger
                .withdraw(*number, *amount)
                .map_err(|e| e.to_string())?
                .display()]
        }
        Command::Transfer { from, to, amount } => {
            let transaction = ledger
                .transfer(*from, *to, *amount)
                .map_err(|e| e.to_string())?;
            vec![format!(
                "Transferred {} from {} to {}",
                format_amount(transaction.amount),
                transaction.from_account,
                transaction.to_account
            )]
        }
        Command::History => ledger
            .transactions()
            .map_err(|e| e.to_string())?
            .iter()
            .map(Displayable::display)
            .collect(),
    };

    for line in lines {
        writeln!(output, "{}", line).map_err(|e| format!("Failed to write output: {}", e))?;
    }

    Ok(())
}
