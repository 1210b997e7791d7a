pub mod align;
pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
pub mod prompt;
pub mod strings;
pub mod tokenize;
pub mod wrap;

// Command line surface
pub mod commands;

// Re-export commonly used types
pub use crate::align::{align, center, right_justify, Alignment};
pub use crate::app::App;
pub use crate::config::AppConfig;
pub use crate::errors::{AppError, AppResult};
pub use crate::strings::{normalize, parse_words, repeat, trim_left, trim_right};
pub use crate::tokenize::{tokenize, Tokenized};
pub use crate::wrap::{format_width, wrap, FormatError, TextWrapper};
