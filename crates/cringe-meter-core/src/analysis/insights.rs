//! Pattern-matched observations about a post.
//!
//! Checks run in a fixed order and the result is truncated to the first
//! three messages, so earlier checks win when many patterns fire.

use regex::Regex;
use std::sync::LazyLock;

use crate::text;

/// Maximum number of insight messages returned.
const MAX_INSIGHTS: usize = 3;
/// Buzzword count above which the buzzword note fires.
const BUZZWORD_NOTE_THRESHOLD: usize = 3;
/// Percentage above which the "top 10%" note fires.
const TOP_TIER_THRESHOLD: u8 = 80;
/// Percentage below which the "refreshingly authentic" note fires.
const AUTHENTIC_THRESHOLD: u8 = 25;

/// Story-structure patterns, each contributing at most one message.
static STORY_PATTERNS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (
            r"(?i)yesterday.*taught me",
            "Classic \"profound moment\" story structure detected",
        ),
        (
            r"(?i)\d+-year-old.*said",
            "Using child wisdom for credibility - very LinkedIn",
        ),
        (
            r"(?i)plot twist",
            "Plot twist narrative device - trying too hard for engagement",
        ),
        (
            r"(?i)true story",
            "Having to say \"true story\" makes it sound less true",
        ),
        (
            r"(?i)agree\?",
            "Fishing for engagement with \"Agree?\" - classic LinkedIn move",
        ),
    ]
    .into_iter()
    .map(|(pattern, message)| (Regex::new(pattern).expect("valid regex"), message))
    .collect()
});

/// Generate up to three observations for a scored post.
#[tracing::instrument(skip_all, fields(percentage, buzzword_count = buzzwords.len()))]
pub fn insights(text: &str, percentage: u8, buzzwords: &[String]) -> Vec<String> {
    let mut insights = Vec::new();

    if buzzwords.len() > BUZZWORD_NOTE_THRESHOLD {
        insights.push(format!(
            "Detected {} corporate buzzwords - consider more specific language",
            buzzwords.len()
        ));
    }

    let exclamations = text::exclamation_count(text);
    if exclamations > 0 {
        insights.push(format!(
            "{exclamations} exclamation marks detected - tone down the artificial enthusiasm"
        ));
    }

    if percentage > TOP_TIER_THRESHOLD {
        insights.push(
            "This post ranks in the top 10% of corporate BS - might want to dial it back"
                .to_string(),
        );
    } else if percentage < AUTHENTIC_THRESHOLD {
        insights.push("Refreshingly authentic content - keep this natural tone".to_string());
    }

    for (pattern, message) in STORY_PATTERNS.iter() {
        if pattern.is_match(text) {
            insights.push((*message).to_string());
        }
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| (*n).to_string()).collect()
    }

    #[test]
    fn quiet_post_yields_no_insights() {
        assert!(insights("we shipped the feature", 50, &[]).is_empty());
    }

    #[test]
    fn buzzword_note_needs_more_than_three() {
        let three = words(&["synergy", "leverage", "pivot"]);
        assert!(insights("text", 50, &three).is_empty());

        let four = words(&["synergy", "leverage", "pivot", "guru"]);
        let result = insights("text", 50, &four);
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("4 corporate buzzwords"));
    }

    #[test]
    fn exclamation_note_reports_the_count() {
        let result = insights("wow!! nice!", 50, &[]);
        assert_eq!(result.len(), 1);
        assert!(result[0].starts_with("3 exclamation marks"));
    }

    #[test]
    fn score_notes_are_mutually_exclusive() {
        let top = insights("text", 81, &[]);
        assert!(top[0].contains("top 10%"));

        let low = insights("text", 24, &[]);
        assert!(low[0].contains("Refreshingly authentic"));

        // Neither fires in the middle band, nor at the boundaries
        assert!(insights("text", 80, &[]).is_empty());
        assert!(insights("text", 25, &[]).is_empty());
    }

    #[test]
    fn story_patterns_fire_case_insensitively() {
        let result = insights("YESTERDAY my mentor TAUGHT ME everything", 50, &[]);
        assert_eq!(result.len(), 1);
        assert!(result[0].contains("profound moment"));
    }

    #[test]
    fn child_wisdom_pattern_needs_both_halves() {
        assert!(insights("a 7-year-old was there", 50, &[]).is_empty());
        let result = insights("a 7-year-old looked at me and said the truth", 50, &[]);
        assert!(result[0].contains("child wisdom"));
    }

    #[test]
    fn never_more_than_three() {
        let many = words(&["synergy", "leverage", "pivot", "guru", "ninja"]);
        let text = "Plot twist! True story! A 9-year-old said: agree? Yesterday it taught me!";
        let result = insights(text, 90, &many);
        assert_eq!(result.len(), 3);
        // Evaluation order: buzzwords, exclamations, then score
        assert!(result[0].contains("buzzwords"));
        assert!(result[1].contains("exclamation"));
        assert!(result[2].contains("top 10%"));
    }
}
