use crate::align::Alignment;
use crate::commands::Commands;
use crate::config::AppConfig;
use crate::errors::AppResult;
use crate::prompt::{self, print_lines, print_ln};
use crate::strings;
use crate::wrap::TextWrapper;
use std::io::{BufRead, Write};

/// Runs commands against a resolved configuration. Input and output are
/// passed in so the same code serves the terminal and the tests.
pub struct App {
    pub config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// A wrapper for `width`, falling back to the configured column width.
    pub fn wrapper(&self, width: Option<usize>) -> AppResult<TextWrapper> {
        let width = width.unwrap_or(self.config.column_width);
        Ok(TextWrapper::new(width)?.with_tab_width(self.config.tab_width))
    }

    fn text_or_line<R: BufRead>(text: &Option<String>, input: &mut R) -> AppResult<String> {
        match text {
            Some(text) => Ok(text.clone()),
            None => Ok(prompt::read_line(input)?),
        }
    }

    pub fn run<R: BufRead, W: Write>(
        &self,
        command: &Commands,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<()> {
        log::debug!("running {:?}", command);

        match command {
            Commands::Wrap { text, width, align } => {
                let alignment = align.unwrap_or(self.config.alignment);
                self.print_aligned(text, *width, alignment, input, out)?;
            }
            Commands::Center { text, width } => {
                self.print_aligned(text, *width, Alignment::Center, input, out)?;
            }
            Commands::Right { text, width } => {
                self.print_aligned(text, *width, Alignment::Right, input, out)?;
            }
            Commands::Trim { text, left, right } => {
                let text = Self::text_or_line(text, input)?;
                let trimmed = match (*left, *right) {
                    (true, _) => strings::trim_left(&text),
                    (_, true) => strings::trim_right(&text),
                    _ => strings::trim_right(strings::trim_left(&text)),
                };
                print_ln(out, trimmed)?;
            }
            Commands::Normalize { text } => {
                let text = Self::text_or_line(text, input)?;
                print_ln(out, &strings::normalize(&text))?;
            }
            Commands::Words { text } => {
                let text = Self::text_or_line(text, input)?;
                print_lines(out, &strings::parse_words(&text))?;
            }
            Commands::Repeat { text, count } => {
                print_ln(out, &strings::repeat(text, *count))?;
            }
            Commands::List { items } => {
                prompt::print_list(out, items)?;
            }
            Commands::Menu { items } => {
                let choice = prompt::print_menu(input, out, items, &self.config.menu_prompt)?;
                log::info!("menu choice {} ({})", choice + 1, items[choice]);
                print_ln(out, &items[choice])?;
            }
        }

        out.flush()?;
        Ok(())
    }

    fn print_aligned<R: BufRead, W: Write>(
        &self,
        text: &Option<String>,
        width: Option<usize>,
        alignment: Alignment,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<()> {
        // Validate the width before blocking on input
        let wrapper = self.wrapper(width)?;
        let text = Self::text_or_line(text, input)?;
        print_lines(out, &wrapper.aligned(&text, alignment))?;
        Ok(())
    }
}
