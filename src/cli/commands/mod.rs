pub mod config;
pub mod expense_handlers;

use std::path::PathBuf;

use crate::cli::args::{Cli, Command};
use crate::cli::output::{self, OutputPreferences};
use crate::config::{Config, ConfigManager};
use crate::core::ExpenseTracker;
use crate::errors::CliError;
use crate::storage::JsonExpenseStore;
use crate::time::{Clock, SystemClock};

pub type CommandResult = Result<(), CliError>;

const UNKNOWN_ACTION: &str = "Enter a valid action!";

/// Everything a ledger command needs for one invocation.
pub struct CommandContext {
    pub tracker: ExpenseTracker,
    pub config: Config,
    pub data_file: PathBuf,
}

impl CommandContext {
    pub fn new(config: Config, data_file: PathBuf, clock: Box<dyn Clock>) -> Self {
        let store = JsonExpenseStore::new(data_file.clone());
        Self {
            tracker: ExpenseTracker::new(Box::new(store), clock),
            config,
            data_file,
        }
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }
}

/// Runs one parsed command against the default configuration location.
pub fn run_cli(cli: Cli) -> CommandResult {
    run_with(cli, &ConfigManager::new(), Box::new(SystemClock))
}

pub fn run_with(cli: Cli, manager: &ConfigManager, clock: Box<dyn Clock>) -> CommandResult {
    if cli.no_color {
        output::set_preferences(OutputPreferences { plain_mode: true });
    }

    let file = cli.file;

    // Ledger commands fall back to default settings when the config file is broken.
    let ledger_context = || {
        let config = manager.load().unwrap_or_else(|err| {
            output::warning(format!("{err}; using default settings."));
            Config::default()
        });
        let data_file = manager.resolve_data_file(&config, file.clone());
        CommandContext::new(config, data_file, clock)
    };

    match cli.command {
        Command::Add(args) => expense_handlers::handle_add(&ledger_context(), args),
        Command::List => expense_handlers::handle_list(&ledger_context()),
        Command::Delete(args) => expense_handlers::handle_delete(&ledger_context(), args),
        Command::Summary(args) => expense_handlers::handle_summary(&ledger_context(), args),
        Command::Config(args) => {
            let config = manager.load()?;
            let data_file = manager.resolve_data_file(&config, file.clone());
            config::cmd_config(manager, &config, &data_file, args)
        }
        Command::Unknown(_) => {
            output::error(UNKNOWN_ACTION);
            Ok(())
        }
    }
}
