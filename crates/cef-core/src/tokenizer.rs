use regex::Regex;
use std::sync::LazyLock;

static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Tokenize text into lowercase word-character runs.
/// Punctuation and whitespace are dropped; underscores and digits are word characters.
/// Order is preserved so frequency-based metrics see every repetition.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_RUN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of whitespace-separated words. This is the raw count `ContextState`
/// reports as `token_count`; it is not the same as `tokenize(text).len()`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
