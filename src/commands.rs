use crate::align::Alignment;
use crate::config::ConfigArgs;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "Text formatting helpers for the command line", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

// Commands that take an optional TEXT read one line from stdin when it is omitted.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Re-flows text to fit within a column width
    Wrap {
        #[arg(help = "Text to wrap")]
        text: Option<String>,

        #[arg(short, long, help = "Column width (overrides the configured default)")]
        width: Option<usize>,

        #[arg(short, long, value_enum, help = "Alignment of each wrapped line")]
        align: Option<Alignment>,
    },
    /// Wraps text and centers each line in the column
    Center {
        #[arg(help = "Text to center")]
        text: Option<String>,

        #[arg(short, long, help = "Column width (overrides the configured default)")]
        width: Option<usize>,
    },
    /// Wraps text and right-justifies each line in the column
    Right {
        #[arg(help = "Text to right-justify")]
        text: Option<String>,

        #[arg(short, long, help = "Column width (overrides the configured default)")]
        width: Option<usize>,
    },
    /// Removes leading and/or trailing whitespace
    Trim {
        #[arg(help = "Text to trim")]
        text: Option<String>,

        #[arg(long, conflicts_with = "right", help = "Only trim the start")]
        left: bool,

        #[arg(long, help = "Only trim the end")]
        right: bool,
    },
    /// Trims text and collapses internal whitespace to single spaces
    Normalize {
        #[arg(help = "Text to normalize")]
        text: Option<String>,
    },
    /// Splits text into words, keeping quoted phrases together
    Words {
        #[arg(help = "Text to split")]
        text: Option<String>,
    },
    /// Repeats text a number of times
    Repeat {
        #[arg(help = "Text to repeat")]
        text: String,

        #[arg(allow_negative_numbers = true, help = "Number of repetitions")]
        count: i64,
    },
    /// Prints a numbered list
    List {
        #[arg(required = true, help = "Items to list")]
        items: Vec<String>,
    },
    /// Prints a numbered menu and echoes the chosen item
    Menu {
        #[arg(required = true, help = "Menu items")]
        items: Vec<String>,
    },
}
