use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

// Bare word, "double quoted" or 'single quoted' run
static WORD_OR_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([^\s"']+)|"([^"]*)"|'([^']*)'"#).expect("valid word pattern")
});

pub fn trim_left(s: &str) -> &str {
    s.trim_start()
}

pub fn trim_right(s: &str) -> &str {
    s.trim_end()
}

/// Trims both ends and collapses every internal whitespace run to one space.
pub fn normalize(s: &str) -> String {
    WHITESPACE_RUN.replace_all(s.trim(), " ").into_owned()
}

/// Splits on whitespace, keeping quoted runs together as a single word with
/// the quotes removed. A stray quote with no partner is skipped.
pub fn parse_words(s: &str) -> Vec<String> {
    WORD_OR_QUOTED
        .captures_iter(s)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `s` concatenated `n` times. Non-positive counts give an empty string.
pub fn repeat(s: &str, n: i64) -> String {
    match usize::try_from(n) {
        Ok(count) if count > 0 => s.repeat(count),
        _ => String::new(),
    }
}
