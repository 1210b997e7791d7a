use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").expect("valid word pattern"));

/// Text split into alternating whitespace gaps and word tokens.
///
/// There is always exactly one more gap than there are tokens: a leading
/// gap before the first token and one gap after every token. Any of them
/// may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenized<'a> {
    pub gaps: Vec<&'a str>,
    pub tokens: Vec<&'a str>,
}

impl<'a> Tokenized<'a> {
    /// The gap before the first token.
    pub fn leading_gap(&self) -> &'a str {
        self.gaps[0]
    }

    /// Each token paired with the gap that follows it.
    pub fn pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.tokens
            .iter()
            .copied()
            .zip(self.gaps[1..].iter().copied())
    }

    /// Interleaves gaps and tokens back into the original text.
    pub fn reassemble(&self) -> String {
        let mut out = String::from(self.leading_gap());
        for (token, gap) in self.pairs() {
            out.push_str(token);
            out.push_str(gap);
        }
        out
    }
}

pub fn tokenize(text: &str) -> Tokenized<'_> {
    let mut gaps = Vec::new();
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in WORD.find_iter(text) {
        gaps.push(&text[last..m.start()]);
        tokens.push(m.as_str());
        last = m.end();
    }

    // Trailing gap, empty when the text ends on a token
    gaps.push(&text[last..]);

    Tokenized { gaps, tokens }
}
