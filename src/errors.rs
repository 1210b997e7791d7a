use thiserror::Error;

// Bring in specific errors from the modules we wrap
use crate::config::ConfigError;
use crate::prompt::PromptError;
use crate::wrap::FormatError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Formatting error: {0}")]
    Format(#[from] FormatError),

    #[error("Input/output error: {0}")]
    Prompt(#[from] PromptError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type AppResult<T> = Result<T, AppError>;
