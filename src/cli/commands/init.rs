use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Create the configuration directory and default config file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.test)?;
    messages::success("Initialization complete.");
    Ok(())
}
