use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::utils::build_info;

#[derive(Debug, Parser)]
#[command(
    name = "expense-tracker",
    about = "Record expenses and summarize what you spend",
    version,
    long_version = build_info::LONG_VERSION,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Ledger file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a new expense dated now
    Add(AddArgs),
    /// List every expense in the order it was recorded
    List,
    /// Delete the expense with the given id
    Delete(DeleteArgs),
    /// Show the total spent, optionally for one month of the current year
    Summary(SummaryArgs),
    /// Show or change preferences
    Config(ConfigArgs),
    /// Any unrecognised action
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub amount: f64,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub id: Option<i64>,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Month number, 1-12
    #[arg(long)]
    pub month: Option<u32>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration
    Show,
    /// Update one or more settings
    Set(ConfigSetArgs),
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    /// Symbol printed before amounts
    #[arg(long)]
    pub currency: Option<String>,
    /// Ledger file used when --file is not given
    #[arg(long, value_name = "PATH", conflicts_with = "reset_data_file")]
    pub data_file: Option<PathBuf>,
    /// Go back to the default ledger file location
    #[arg(long)]
    pub reset_data_file: bool,
}
