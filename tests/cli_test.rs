mod common;

use clitext::errors::AppError;
use clitext::prompt::PromptError;
use clitext::FormatError;
use common::run_cli;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_wrap_from_argument() {
    let output = run_cli(&["wrap", "hello world", "--width", "5"], "").unwrap();
    assert_eq!(output, "hello\nworld\n");
}

#[test]
fn test_wrap_from_stdin() {
    let output = run_cli(&["wrap", "-w", "8"], "one two three\n").unwrap();
    assert_eq!(output, "one two \nthree\n");
}

#[test]
fn test_wrap_uses_configured_alignment() {
    let output = run_cli(&["--alignment", "right", "wrap", "-w", "6", "hi"], "").unwrap();
    assert_eq!(output, "    hi\n");
}

#[test]
fn test_wrap_align_flag_beats_config() {
    let output = run_cli(
        &["--alignment", "right", "wrap", "-w", "6", "-a", "left", "hi"],
        "",
    )
    .unwrap();
    assert_eq!(output, "hi\n");
}

#[test]
fn test_center_command() {
    let output = run_cli(&["center", "hi", "--width", "6"], "").unwrap();
    assert_eq!(output, "  hi  \n");
}

#[test]
fn test_right_command() {
    let output = run_cli(&["right", "ab cd", "--width", "4"], "").unwrap();
    assert_eq!(output, "  ab\n  cd\n");
}

#[test]
fn test_zero_width_reports_error() {
    let result = run_cli(&["wrap", "text", "--width", "0"], "");
    assert!(matches!(
        result,
        Err(AppError::Format(FormatError::InvalidWidth(0)))
    ));
}

#[test]
fn test_column_width_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "column_width = 5\n").unwrap();
    let path = path.to_str().unwrap();

    let output = run_cli(&["--config", path, "wrap", "hello world"], "").unwrap();
    assert_eq!(output, "hello\nworld\n");
}

#[test]
fn test_tab_width_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "tab_width = 1\n").unwrap();
    let path = path.to_str().unwrap();

    let output = run_cli(&["--config", path, "wrap", "a\tb"], "").unwrap();
    assert_eq!(output, "a b\n");
}

#[test]
fn test_trim_variants() {
    assert_eq!(run_cli(&["trim", "  x  "], "").unwrap(), "x\n");
    assert_eq!(run_cli(&["trim", "--left", "  x  "], "").unwrap(), "x  \n");
    assert_eq!(run_cli(&["trim", "--right", "  x  "], "").unwrap(), "  x\n");
}

#[test]
fn test_normalize_from_stdin() {
    let output = run_cli(&["normalize"], "  a   b  c \n").unwrap();
    assert_eq!(output, "a b c\n");
}

#[test]
fn test_words_keep_quoted_phrases() {
    let output = run_cli(&["words", "open \"my file.txt\" now"], "").unwrap();
    assert_eq!(output, "open\nmy file.txt\nnow\n");
}

#[test]
fn test_repeat() {
    assert_eq!(run_cli(&["repeat", "ab", "3"], "").unwrap(), "ababab\n");
    assert_eq!(run_cli(&["repeat", "ab", "-1"], "").unwrap(), "\n");
}

#[test]
fn test_list() {
    let output = run_cli(&["list", "alpha", "beta"], "").unwrap();
    assert_eq!(output, "1. alpha\n2. beta\n");
}

#[test]
fn test_menu_retries_then_accepts() {
    let output = run_cli(
        &["--menu-prompt", "> ", "menu", "red", "green", "blue"],
        "blue\n4\n3\n",
    )
    .unwrap();
    assert_eq!(
        output,
        "1. red\n2. green\n3. blue\n\
         > Error: Choice must be an integer in the range of 1 to 3\n\
         > Error: Choice must be in the range of 1 to 3\n\
         > blue\n"
    );
}

#[test]
fn test_menu_on_closed_input() {
    let result = run_cli(&["menu", "only"], "");
    assert!(matches!(
        result,
        Err(AppError::Prompt(PromptError::InputClosed))
    ));
}
