use crate::align::Alignment;
use crate::prompt::DEFAULT_MENU_PROMPT;
use crate::wrap::DEFAULT_TAB_WIDTH;
use clap::Args;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

// Using constants for default values makes them easy to change.
const DEFAULT_COLUMN_WIDTH: usize = 80;
const DEFAULT_LOG_LEVEL: &str = "warn";
const MAX_TAB_WIDTH: usize = 16;
const ENV_PREFIX: &str = "CLITEXT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Serde struct for deserializing config file values.
// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    column_width: Option<usize>,
    tab_width: Option<usize>,
    alignment: Option<Alignment>,
    menu_prompt: Option<String>,
    log_level: Option<String>,
    log_file: Option<PathBuf>,
}

// Final config, every field resolved to a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub column_width: usize,
    pub tab_width: usize,
    pub alignment: Alignment,
    pub menu_prompt: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            column_width: DEFAULT_COLUMN_WIDTH,
            tab_width: DEFAULT_TAB_WIDTH,
            alignment: Alignment::default(),
            menu_prompt: DEFAULT_MENU_PROMPT.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Parsed log level. Only valid after [`validate_config`] has passed.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }
}

/// Settings shared by every subcommand. Anything left unset falls back to
/// the environment, then the config file, then the built-in default.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Path to a custom configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Default column width for formatted output
    #[arg(long, global = true)]
    pub column_width: Option<usize>,

    /// Number of spaces a tab expands to before wrapping
    #[arg(long, global = true)]
    pub tab_width: Option<usize>,

    /// Default alignment for the wrap command
    #[arg(long, global = true, value_enum)]
    pub alignment: Option<Alignment>,

    /// Prompt shown when asking for a menu choice
    #[arg(long, global = true)]
    pub menu_prompt: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long, global = true)]
    pub debug_config: bool,
}

pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "clitext").map(|dirs| dirs.config_dir().join("config.toml"))
}

// Function to load configuration from all sources.
pub fn load_config(args: &ConfigArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");
    // Missing env vars are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
pub fn build_config(
    args: &ConfigArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        log::debug!("reading config file {}", path.display());
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides (environment or a test map) win over the file
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let args = args.clone();
    let config = AppConfig {
        column_width: args
            .column_width
            .or(loaded_sources.column_width)
            .unwrap_or(DEFAULT_COLUMN_WIDTH),
        tab_width: args
            .tab_width
            .or(loaded_sources.tab_width)
            .unwrap_or(DEFAULT_TAB_WIDTH),
        alignment: args
            .alignment
            .or(loaded_sources.alignment)
            .unwrap_or_default(),
        menu_prompt: args
            .menu_prompt
            .or(loaded_sources.menu_prompt)
            .unwrap_or_else(|| DEFAULT_MENU_PROMPT.to_string()),
        log_level: args
            .log_level
            .or(loaded_sources.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        log_file: args.log_file.or(loaded_sources.log_file),
    };

    validate_config(&config)?;
    Ok(config)
}

/// Validates the loaded configuration for consistency.
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.column_width == 0 {
        return Err(ConfigError::ValidationError(
            "column_width must be at least 1".to_string(),
        ));
    }

    if !(1..=MAX_TAB_WIDTH).contains(&config.tab_width) {
        return Err(ConfigError::ValidationError(format!(
            "tab_width must be between 1 and {}",
            MAX_TAB_WIDTH
        )));
    }

    if LevelFilter::from_str(&config.log_level).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "unknown log_level: {}",
            config.log_level
        )));
    }

    Ok(())
}
