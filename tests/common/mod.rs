#![allow(dead_code)]
use clap::Parser;
use clitext::commands::Cli;
use clitext::config::build_config;
use clitext::{App, AppResult};
use std::io::Cursor;
use tempfile::TempDir;

/// Sample inputs covering the awkward corners of wrapping
pub const CORPUS: &[&str] = &[
    "",
    " ",
    "hello world",
    "The quick brown fox jumps over the lazy dog",
    "   leading whitespace then words",
    "trailing whitespace   ",
    "multiple    spaces     between    words",
    "tabs\tbetween\twords",
    "\t\tleading tabs",
    "line\nbreaks\r\nin the\rmiddle",
    "supercalifragilisticexpialidocious",
    "a supercalifragilisticexpialidocious word in a sentence",
    "x y z",
    "                                        ",
];

pub const WIDTHS: &[usize] = &[1, 2, 3, 4, 5, 7, 10, 13, 20, 80];

/// Renders lines between pipes so leading and trailing spaces stay visible.
pub fn boxed<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| format!("|{}|", line.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn non_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parses `args` like the binary would and runs the command against `stdin`.
/// The config file lookup is pointed at an empty temp dir unless `--config`
/// is given, so the developer's own config never leaks into tests.
pub fn run_cli(args: &[&str], stdin: &str) -> AppResult<String> {
    let mut argv = vec!["clitext"];
    argv.extend_from_slice(args);
    let mut cli = Cli::try_parse_from(argv).expect("valid test arguments");

    let dir = TempDir::new()?;
    if cli.config.config.is_none() {
        cli.config.config = Some(dir.path().join("config.toml"));
    }
    let config = build_config(&cli.config, None)?;

    let command = cli.command.expect("test arguments include a command");
    let app = App::new(config);
    let mut input = Cursor::new(stdin.to_string());
    let mut out: Vec<u8> = Vec::new();
    app.run(&command, &mut input, &mut out)?;

    Ok(String::from_utf8(out).expect("utf-8 output"))
}
