use crate::tokenize::tokenize;
use std::borrow::Cow;
use thiserror::Error;
use unicode_width::UnicodeWidthChar;

pub const DEFAULT_TAB_WIDTH: usize = 5;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid column width: {0} (must be at least 1)")]
    InvalidWidth(usize),
}

/// Display width of a string in terminal columns.
///
/// Summed per character so that it always agrees with [`split_at_column`].
pub fn display_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Splits off the longest prefix of `s` that fits in `columns`.
fn split_at_column(s: &str, columns: usize) -> (&str, &str) {
    let mut used = 0;
    for (idx, c) in s.char_indices() {
        let w = char_width(c);
        if used + w > columns {
            return s.split_at(idx);
        }
        used += w;
    }
    (s, "")
}

/// Drops characters from the front of `s` until at least `columns` are gone.
fn skip_columns(s: &str, columns: usize) -> &str {
    let mut dropped = 0;
    for (idx, c) in s.char_indices() {
        if dropped >= columns {
            return &s[idx..];
        }
        dropped += char_width(c);
    }
    ""
}

fn split_first_char(s: &str) -> (&str, &str) {
    let end = s.chars().next().map_or(0, char::len_utf8);
    s.split_at(end)
}

fn is_single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}

/// Append-only accumulator of finished lines plus the line being filled.
struct LineBuilder {
    column_width: usize,
    lines: Vec<String>,
    current: String,
    current_width: usize,
}

impl LineBuilder {
    fn new(column_width: usize) -> Self {
        Self {
            column_width,
            lines: Vec::new(),
            current: String::new(),
            current_width: 0,
        }
    }

    fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    fn room(&self) -> usize {
        self.column_width.saturating_sub(self.current_width)
    }

    fn fits(&self, s: &str) -> bool {
        self.current_width + display_width(s) <= self.column_width
    }

    fn append(&mut self, s: &str) {
        self.current.push_str(s);
        self.current_width += display_width(s);
    }

    fn break_line(&mut self) {
        self.lines.push(std::mem::take(&mut self.current));
        self.current_width = 0;
    }

    fn finish(mut self) -> Vec<String> {
        self.lines.push(self.current);
        self.lines
    }
}

/// Re-flows free-form text into lines no wider than a column width.
///
/// Whitespace between words is kept as written wherever it fits on the
/// current line. A run of whitespace that would overflow the line ends it
/// and is dropped rather than carried onto the next line. Words wider than
/// the column are split across as many lines as needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextWrapper {
    column_width: usize,
    tab_width: usize,
}

impl TextWrapper {
    pub fn new(column_width: usize) -> Result<Self, FormatError> {
        if column_width == 0 {
            return Err(FormatError::InvalidWidth(column_width));
        }
        Ok(Self {
            column_width,
            tab_width: DEFAULT_TAB_WIDTH,
        })
    }

    /// Number of spaces each tab expands to before wrapping (at least one).
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    pub fn column_width(&self) -> usize {
        self.column_width
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// Expands tabs and turns existing line breaks into single spaces, since
    /// the wrapper inserts its own.
    fn prepare<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.contains(['\t', '\n', '\r']) {
            return Cow::Borrowed(text);
        }
        let tab = " ".repeat(self.tab_width);
        Cow::Owned(
            text.replace("\r\n", " ")
                .replace(['\r', '\n'], " ")
                .replace('\t', &tab),
        )
    }

    pub fn wrap(&self, text: &str) -> Vec<String> {
        let width = self.column_width;
        let text = self.prepare(text);
        let tokenized = tokenize(&text);
        let mut builder = LineBuilder::new(width);

        let mut leading = tokenized.leading_gap();
        while display_width(leading) > width {
            builder.append(&" ".repeat(width));
            builder.break_line();
            leading = skip_columns(leading, width);
        }
        builder.append(leading);

        for (token, gap) in tokenized.pairs() {
            let mut rest = token;
            while display_width(rest) > width && !is_single_char(rest) {
                let (head, tail) = match split_at_column(rest, builder.room()) {
                    // A single character wider than the whole column still has to go somewhere
                    ("", _) if builder.is_empty() => split_first_char(rest),
                    split => split,
                };
                builder.append(head);
                builder.break_line();
                rest = tail;
            }

            if !builder.fits(rest) && !builder.is_empty() {
                builder.break_line();
            }
            builder.append(rest);

            if gap.is_empty() || builder.fits(gap) {
                builder.append(gap);
            } else {
                builder.break_line();
            }
        }

        let lines = builder.finish();
        log::trace!(
            "wrapped {} tokens into {} lines at width {}",
            tokenized.tokens.len(),
            lines.len(),
            width
        );
        lines
    }

    /// Wrapped text as a single string, lines joined by `\n` with no
    /// trailing break.
    pub fn format(&self, text: &str) -> String {
        self.wrap(text).join("\n")
    }
}

pub fn wrap(text: &str, column_width: usize) -> Result<Vec<String>, FormatError> {
    Ok(TextWrapper::new(column_width)?.wrap(text))
}

pub fn format_width(text: &str, column_width: usize) -> Result<String, FormatError> {
    Ok(TextWrapper::new(column_width)?.format(text))
}
