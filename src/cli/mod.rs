//! Thin command-line layer: parses one verb, runs it against the ledger, prints the result.

pub mod args;
pub mod commands;
pub mod output;
pub mod ui;

pub use args::Cli;
pub use commands::{run_cli, run_with, CommandContext};
