//! # Lanchonete Entry Point
//!
//! The actual setup is in lib.rs so the menu can be driven from tests.

use std::process::ExitCode;

fn main() -> ExitCode {
    lanchonete_cli::run()
}
