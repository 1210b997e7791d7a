use crate::wrap::{display_width, FormatError, TextWrapper};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Pads a line so its content sits in the middle of the column. Odd
/// leftover space goes on the right.
pub fn center_line(line: &str, column_width: usize) -> String {
    let slack = column_width.saturating_sub(display_width(line));
    let left = slack / 2;
    format!("{}{}{}", " ".repeat(left), line, " ".repeat(slack - left))
}

pub fn right_justify_line(line: &str, column_width: usize) -> String {
    let trimmed = line.trim();
    let pad = column_width.saturating_sub(display_width(trimmed));
    format!("{}{}", " ".repeat(pad), trimmed)
}

impl TextWrapper {
    /// Wraps `text` and then positions every line within the column.
    pub fn aligned(&self, text: &str, alignment: Alignment) -> Vec<String> {
        let lines = self.wrap(text);
        let width = self.column_width();
        match alignment {
            Alignment::Left => lines,
            Alignment::Center => lines.iter().map(|l| center_line(l, width)).collect(),
            Alignment::Right => lines
                .iter()
                .map(|l| right_justify_line(l, width))
                .collect(),
        }
    }
}

pub fn align(text: &str, column_width: usize, alignment: Alignment) -> Result<String, FormatError> {
    Ok(TextWrapper::new(column_width)?
        .aligned(text, alignment)
        .join("\n"))
}

pub fn center(text: &str, column_width: usize) -> Result<String, FormatError> {
    align(text, column_width, Alignment::Center)
}

pub fn right_justify(text: &str, column_width: usize) -> Result<String, FormatError> {
    align(text, column_width, Alignment::Right)
}
