//! Text surface-feature helpers.
//!
//! Counting and normalization primitives shared by the scorer and the
//! rewriter: exclamations, questions, hashtags, caps runs, emoticon-block
//! emoji, and whitespace collapsing.

use regex::Regex;
use std::sync::LazyLock;

/// Regex for emoji in the emoticon/transport block (U+1F600–U+1F6FF).
pub static EMOJI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{1F600}-\x{1F6FF}]").expect("valid regex"));

/// Regex for `#word` hashtags.
static HASHTAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").expect("valid regex"));

/// Regex for runs of 2+ consecutive uppercase ASCII letters.
static CAPS_RUN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{2,}").expect("valid regex"));

/// Regex for whitespace runs.
static WHITESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Count `!` characters.
pub fn exclamation_count(text: &str) -> usize {
    text.matches('!').count()
}

/// Count `?` characters.
pub fn question_count(text: &str) -> usize {
    text.matches('?').count()
}

/// Count emoticon-block emoji code points.
pub fn emoji_count(text: &str) -> usize {
    EMOJI_PATTERN.find_iter(text).count()
}

/// Count `#word` hashtags.
pub fn hashtag_count(text: &str) -> usize {
    HASHTAG_PATTERN.find_iter(text).count()
}

/// Count non-overlapping runs of 2+ uppercase letters (SHOUTING fragments,
/// acronyms, and the like).
pub fn caps_run_count(text: &str) -> usize {
    CAPS_RUN_PATTERN.find_iter(text).count()
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_PATTERN.replace_all(text, " ").trim().to_string()
}
