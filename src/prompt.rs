use crate::wrap::TextWrapper;
use std::io::{self, BufRead, Write};
use thiserror::Error;

pub const DEFAULT_MENU_PROMPT: &str = "Enter choice: ";

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input closed before a valid choice was entered")]
    InputClosed,
    #[error("Menu has no items to choose from")]
    EmptyMenu,
}

/// Reads one line, stripping the line terminator. `None` at end of input.
fn next_line<R: BufRead>(input: &mut R) -> Result<Option<String>, PromptError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
    buf.truncate(trimmed_len);
    Ok(Some(buf))
}

/// Reads a single line of user input. Returns an empty string when the
/// input has nothing left.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    Ok(next_line(input)?.unwrap_or_default())
}

pub fn read_text_input() -> Result<String, PromptError> {
    read_line(&mut io::stdin().lock())
}

pub fn print<W: Write>(out: &mut W, s: &str) -> Result<(), PromptError> {
    write!(out, "{}", s)?;
    out.flush()?;
    Ok(())
}

pub fn print_ln<W: Write>(out: &mut W, s: &str) -> Result<(), PromptError> {
    writeln!(out, "{}", s)?;
    Ok(())
}

pub fn print_lines<W: Write, S: AsRef<str>>(out: &mut W, lines: &[S]) -> Result<(), PromptError> {
    for line in lines {
        print_ln(out, line.as_ref())?;
    }
    Ok(())
}

/// Prints text re-flowed to the wrapper's column width.
pub fn print_wrapped<W: Write>(
    out: &mut W,
    wrapper: &TextWrapper,
    text: &str,
) -> Result<(), PromptError> {
    print_lines(out, &wrapper.wrap(text))
}

/// Prints each item on its own line, numbered from 1.
pub fn print_list<W: Write, S: AsRef<str>>(out: &mut W, items: &[S]) -> Result<(), PromptError> {
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item.as_ref())?;
    }
    Ok(())
}

/// Shows a numbered menu and asks until a number between 1 and the item
/// count is entered. Returns the zero-based index of the chosen item.
pub fn print_menu<R, W, S>(
    input: &mut R,
    out: &mut W,
    items: &[S],
    prompt: &str,
) -> Result<usize, PromptError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    if items.is_empty() {
        return Err(PromptError::EmptyMenu);
    }
    print_list(out, items)?;

    let count = items.len();
    loop {
        print(out, prompt)?;
        let Some(line) = next_line(input)? else {
            return Err(PromptError::InputClosed);
        };

        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=count).contains(&choice) => return Ok(choice - 1),
            Ok(choice) => {
                log::debug!("menu choice {} out of range 1..={}", choice, count);
                print_ln(
                    out,
                    &format!("Error: Choice must be in the range of 1 to {}", count),
                )?;
            }
            Err(e) => {
                log::debug!("menu choice {:?} is not a number: {}", line, e);
                print_ln(
                    out,
                    &format!(
                        "Error: Choice must be an integer in the range of 1 to {}",
                        count
                    ),
                )?;
            }
        }
    }
}
