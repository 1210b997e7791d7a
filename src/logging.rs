use crate::config::AppConfig;
use crate::errors::AppResult;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};
use std::fs::OpenOptions;

/// Installs the global logger: appends to `log_file` when one is configured,
/// otherwise writes to stderr so stdout stays clean for formatted output.
pub fn init_logging(config: &AppConfig) -> AppResult<()> {
    let level = config.level_filter();

    match &config.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            WriteLogger::init(level, Config::default(), file)?;
        }
        None => {
            TermLogger::init(
                level,
                Config::default(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )?;
        }
    }

    log::debug!("logging initialised at {}", level);
    Ok(())
}
