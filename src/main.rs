//! Bank Ledger CLI
//!
//! Command-line front end for the flat-file ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- create --number 1001 --name Alice --balance 1000
//! cargo run -- create --number 1002 --name Bob --balance 500
//! cargo run -- transfer --from 1001 --to 1002 --amount 300
//! cargo run -- list
//! cargo run -- --accounts bank.txt --transactions bank.log history
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (unknown account, insufficient funds, unreadable store, etc.)

use bank_ledger::{cli, logging, Ledger};
use std::process;

fn main() {
    let args = cli::parse_args();

    logging::init(&args.log_level);

    let config = args.to_ledger_config();
    let mut ledger = Ledger::open(&config);

    let mut output = std::io::stdout();
    if let Err(e) = cli::execute(&args.command, &mut ledger, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
