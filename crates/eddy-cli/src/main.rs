//! Eddy CLI - deterministic passphrase-based wallet backup and recovery
//!
//! This is the command-line interface for Eddy. It parses arguments into a
//! wallet request, runs exactly one core operation, and renders the
//! outcome. A failed address verification on decrypt is reported as a
//! normal result with a success exit code; only request and internal
//! errors are fatal.

mod cli;
mod commands;
mod ui;

use clap::Parser;
use eddy_core::EddyError;

use crate::cli::{Cli, Commands};
use crate::ui::print_error;

/// Exit code for unsupported or missing argument values.
const EXIT_BAD_REQUEST: i32 = 2;
/// Exit code for derivation/cipher/codec failures.
const EXIT_INTERNAL: i32 = 1;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        print_error(&format!("{:#}", e));
        let code = match e.downcast_ref::<EddyError>() {
            Some(err) if err.is_bad_request() => EXIT_BAD_REQUEST,
            _ => EXIT_INTERNAL,
        };
        std::process::exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Generate(args) => commands::handle_generate(args)?,
        Commands::Encrypt(args) => commands::handle_encrypt(args)?,
        Commands::Decrypt(args) => commands::handle_decrypt(args)?,
    }
    Ok(())
}
