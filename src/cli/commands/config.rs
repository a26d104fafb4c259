use std::path::Path;

use crate::cli::args::{ConfigAction, ConfigArgs, ConfigSetArgs};
use crate::cli::output;
use crate::config::{Config, ConfigManager};
use crate::errors::CliError;

use super::CommandResult;

pub fn cmd_config(
    manager: &ConfigManager,
    config: &Config,
    data_file: &Path,
    args: ConfigArgs,
) -> CommandResult {
    match args.action.unwrap_or(ConfigAction::Show) {
        ConfigAction::Show => {
            show_config(manager, config, data_file);
            Ok(())
        }
        ConfigAction::Set(set) => set_config(manager, config.clone(), set),
    }
}

fn show_config(manager: &ConfigManager, config: &Config, data_file: &Path) {
    let entries = [
        ("Config file", manager.path().display().to_string()),
        ("Data file", data_file.display().to_string()),
        ("Currency", config.currency_symbol.clone()),
    ];
    let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in entries {
        output::info(format!("{label:<width$}  {value}"));
    }
}

fn set_config(manager: &ConfigManager, mut config: Config, set: ConfigSetArgs) -> CommandResult {
    if set.currency.is_none() && set.data_file.is_none() && !set.reset_data_file {
        return Err(CliError::Input(
            "nothing to change; pass --currency, --data-file or --reset-data-file".into(),
        ));
    }
    if let Some(symbol) = set.currency {
        config.currency_symbol = symbol;
    }
    if let Some(path) = set.data_file {
        config.data_file = Some(path);
    }
    if set.reset_data_file {
        config.data_file = None;
    }
    manager.save(&config)?;
    tracing::info!(path = %manager.path().display(), "configuration saved");
    output::success("Configuration saved.");
    Ok(())
}
