//! # Lanchonete CLI Library
//!
//! Interactive terminal front end for a single snack stall. All business
//! rules live in `lanchonete-core`; this crate reads input, calls the
//! [`Stall`], and prints what came back.
//!
//! ## Module Organization
//! ```text
//! lanchonete_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── AppConfig: env > TOML file > defaults
//! ├── error.rs        ◄─── CliError / ErrorCode, ConfigError
//! ├── prompt.rs       ◄─── Line-based input parsing
//! ├── menu.rs         ◄─── Session loop and output formatting
//! └── commands/
//!     ├── stock.rs    ◄─── Register stock, stock listing
//!     ├── recipe.rs   ◄─── Register recipe, production estimate
//!     ├── customer.rs ◄─── Register customer
//!     ├── sale.rs     ◄─── Record sale, history
//!     └── closing.rs  ◄─── Preview and close the register
//! ```
//!
//! ## Output Streams
//! Menu text goes to stdout; logs go to stderr so they never interleave
//! with prompts.

pub mod commands;
pub mod config;
pub mod error;
pub mod menu;
pub mod prompt;

use std::io;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::{AppConfig, DEFAULT_LOG_FILTER};
use error::CliResult;
use lanchonete_core::Stall;
use menu::{Session, SessionEnd};

/// Runs the interactive application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • env vars > config.toml > defaults                                 │
/// │     • malformed file: print error, exit 1                               │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG, else config log_filter, writing to stderr               │
/// │                                                                         │
/// │  3. Build Stall ──────────────────────────────────────────────────────► │
/// │     • seeded with "Sanduíche de Frango" unless disabled                 │
/// │                                                                         │
/// │  4. Run Menu on stdin/stdout until closing or EOF                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(DEFAULT_LOG_FILTER);
            error!(code = ?err.code, error = %err.message, "Startup failed");
            eprintln!("lanchonete: {}", err.message);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);
    info!(store = %config.store_name, "Starting Lanchonete");

    let stall = build_stall(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stall, config, stdin.lock(), stdout.lock());

    match session.run() {
        Ok(SessionEnd::Closed(report)) => {
            info!(net_profit = %report.net_profit, "Session ended with register closed");
            ExitCode::SUCCESS
        }
        Ok(SessionEnd::EndOfInput) => {
            info!(
                sales = session.stall().history().len(),
                "Session ended without closing"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(code = ?err.code, error = %err.message, "Session aborted");
            eprintln!("lanchonete: {}", err.message);
            ExitCode::FAILURE
        }
    }
}

/// Loads the process configuration, reporting failures as
/// [`CliError`](error::CliError) with [`ErrorCode::Config`](error::ErrorCode::Config).
pub fn load_config() -> CliResult<AppConfig> {
    load_config_with(|key| std::env::var(key).ok())
}

/// Like [`load_config`] with an injectable environment lookup.
pub fn load_config_with(env: impl Fn(&str) -> Option<String>) -> CliResult<AppConfig> {
    Ok(AppConfig::load_with(env)?)
}

/// A stall as configured: seeded with the default recipe or empty.
pub fn build_stall(config: &AppConfig) -> Stall {
    if config.seed_default_recipe {
        Stall::with_default_recipe()
    } else {
        Stall::new()
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=lanchonete=trace` - Trace for this app only
/// - Default: the configured `log_filter`
fn init_tracing(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
