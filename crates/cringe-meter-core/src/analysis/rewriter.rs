//! De-corporatizing rewriter.
//!
//! Applies an ordered table of case-insensitive phrase replacements, then
//! normalizes punctuation, limits emoji to one per sentence, and collapses
//! whitespace. A best-effort cosmetic pass: output may still sound slightly
//! corporate, but the function never fails.

use regex::Regex;
use std::sync::LazyLock;

use crate::text::{self, EMOJI_PATTERN};

/// Ordered replacement rules, applied in sequence as global
/// case-insensitive matches.
///
/// Order is load-bearing: multi-word phrases come before the single words
/// they contain ("I'm thrilled to announce" before "thrilled"), otherwise
/// the longer match is mangled before it can apply. Literal inputs are
/// escaped, so phrases may safely contain regex metacharacters.
static REWRITE_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        ("I'm thrilled to announce", "I wanted to share"),
        ("I'm excited to share", "I wanted to mention"),
        ("I'm humbled", "I'm surprised"),
        ("I'm blessed", "I'm lucky"),
        ("thrilled", "happy"),
        ("blessed", "lucky"),
        ("humbled", "surprised"),
        ("journey", "experience"),
        ("passionate", "interested"),
        ("leverage", "use"),
        ("synergy", "teamwork"),
        ("disrupt", "change"),
        ("paradigm", "approach"),
        ("innovative", "new"),
        ("game-changer", "helpful"),
        ("revolutionary", "different"),
        ("exponential", "significant"),
        ("ecosystem", "environment"),
        ("thought leader", "person with opinions"),
        ("rockstar", "good employee"),
        ("ninja", "skilled person"),
        ("guru", "expert"),
    ]
    .into_iter()
    .map(|(phrase, plain)| {
        let pattern = Regex::new(&format!("(?i){}", regex::escape(phrase))).expect("valid regex");
        (pattern, plain)
    })
    .collect()
});

/// Runs of exclamation marks.
static EXCLAMATION_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!+").expect("valid regex"));

/// Runs of question marks.
static QUESTION_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\?+").expect("valid regex"));

/// Sentence delimiters for the emoji-limiting pass.
static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Rewrite a post into plainer language.
///
/// Single-pass guarantee only: re-rewriting the output may still match
/// residual patterns.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn rewrite(text: &str) -> String {
    let mut rewritten = text.to_string();
    for (pattern, plain) in REWRITE_RULES.iter() {
        rewritten = pattern.replace_all(&rewritten, *plain).into_owned();
    }

    // Deflate the enthusiasm
    rewritten = EXCLAMATION_RUN.replace_all(&rewritten, ".").into_owned();
    rewritten = QUESTION_RUN.replace_all(&rewritten, "?").into_owned();

    // At most one emoji per sentence
    let sentences: Vec<String> = SENTENCE_SPLIT.split(&rewritten).map(limit_emoji).collect();
    text::collapse_whitespace(&sentences.join(". "))
}

/// Keep only the first emoji of a sentence, reattached at its end.
fn limit_emoji(sentence: &str) -> String {
    let emojis: Vec<&str> = EMOJI_PATTERN
        .find_iter(sentence)
        .map(|m| m.as_str())
        .collect();
    if emojis.len() > 1 {
        let stripped = EMOJI_PATTERN.replace_all(sentence, "");
        format!("{}{}", stripped.trim(), emojis[0])
    } else {
        sentence.to_string()
    }
}
