//! Corporate-BS scoring.
//!
//! An additive point model over surface features: buzzword hits, punctuation
//! and emoji counts, and a fixed set of phrase bonuses, clamped to [8, 96].
//! The weights are hand-tuned constants and are part of the observable
//! contract — changing them changes every downstream verdict.

use regex::Regex;
use std::sync::LazyLock;

use crate::lexicon::Lexicon;
use crate::text;

use super::reports::{Authenticity, ScoreReport};

/// Every post starts here before any feature is counted.
const BASE_SCORE: u32 = 10;
/// Added per detected buzzword.
const BUZZWORD_WEIGHT: u32 = 12;
/// Added per `!`.
const EXCLAMATION_WEIGHT: u32 = 4;
/// Added per emoticon-block emoji.
const EMOJI_WEIGHT: u32 = 3;
/// Added per `#word` hashtag.
const HASHTAG_WEIGHT: u32 = 6;
/// Added per run of 2+ uppercase letters.
const CAPS_RUN_WEIGHT: u32 = 8;
/// Added per `?`.
const QUESTION_WEIGHT: u32 = 2;
/// Added when the post opens a story with a literal "Yesterday" or
/// "True story" (case-sensitive, one bonus for either).
const STORY_OPENER_BONUS: u32 = 10;
/// Added when the post cites someone's age for gravitas.
const AGE_MENTION_BONUS: u32 = 8;
/// Final percentage floor.
const PERCENTAGE_FLOOR: u32 = 8;
/// Final percentage ceiling.
const PERCENTAGE_CEILING: u32 = 96;
/// Sentiment points per positive-word hit.
const SENTIMENT_WORD_WEIGHT: u32 = 15;
/// Sentiment points per `!`.
const SENTIMENT_EXCLAMATION_WEIGHT: u32 = 5;
/// Sentiment ceiling.
const SENTIMENT_CEILING: u32 = 100;

/// Case-insensitive phrase bonuses, evaluated independently and additively.
static PHRASE_BONUSES: &[(&str, u32)] = &[
    ("thrilled to announce", 15),
    ("humbled", 12),
    ("blessed", 10),
    ("journey", 8),
    ("game changer", 15),
    ("thought leader", 12),
    ("plot twist", 15),
];

/// Case-sensitive story openers sharing a single bonus.
static STORY_OPENERS: &[&str] = &["Yesterday", "True story"];

/// Regex for age mentions ("37-year-old", "7-year-old", ...).
static AGE_MENTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+-year-old").expect("valid regex"));

/// Score a post.
///
/// Total over all inputs: the empty string scores the floor with no
/// buzzwords, and arbitrarily long or emoji-heavy input cannot escape the
/// [8, 96] clamp.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn score(text: &str, lexicon: &Lexicon) -> ScoreReport {
    let lower = text.to_lowercase();

    let buzzwords: Vec<String> = lexicon
        .buzzwords
        .iter()
        .filter(|word| lower.contains(&word.to_lowercase()))
        .map(|word| (*word).to_string())
        .collect();

    let exclamations = text::exclamation_count(text);

    // u64 with saturation so pathological inputs cannot overflow before
    // the clamp.
    let mut points = u64::from(BASE_SCORE);
    points = points.saturating_add(buzzwords.len() as u64 * u64::from(BUZZWORD_WEIGHT));
    points = points.saturating_add(exclamations as u64 * u64::from(EXCLAMATION_WEIGHT));
    points = points.saturating_add(text::emoji_count(text) as u64 * u64::from(EMOJI_WEIGHT));
    points = points.saturating_add(text::hashtag_count(text) as u64 * u64::from(HASHTAG_WEIGHT));
    points = points.saturating_add(text::caps_run_count(text) as u64 * u64::from(CAPS_RUN_WEIGHT));
    points = points.saturating_add(text::question_count(text) as u64 * u64::from(QUESTION_WEIGHT));

    for (phrase, bonus) in PHRASE_BONUSES {
        if lower.contains(phrase) {
            points += u64::from(*bonus);
        }
    }
    if STORY_OPENERS.iter().any(|opener| text.contains(opener)) {
        points += u64::from(STORY_OPENER_BONUS);
    }
    if AGE_MENTION_PATTERN.is_match(text) {
        points += u64::from(AGE_MENTION_BONUS);
    }

    let percentage =
        points.clamp(u64::from(PERCENTAGE_FLOOR), u64::from(PERCENTAGE_CEILING)) as u8;

    ScoreReport {
        percentage,
        authenticity: Authenticity::from_percentage(percentage),
        sentiment_score: sentiment_score(&lower, exclamations, lexicon),
        buzzwords,
    }
}

/// Artificial-positivity score: positive-word hits and exclamation density,
/// capped at 100. Computed independently of the percentage.
fn sentiment_score(lower: &str, exclamations: usize, lexicon: &Lexicon) -> u8 {
    let hits = lexicon
        .positive_words
        .iter()
        .filter(|word| lower.contains(*word))
        .count() as u64;

    (hits * u64::from(SENTIMENT_WORD_WEIGHT)
        + exclamations as u64 * u64::from(SENTIMENT_EXCLAMATION_WEIGHT))
    .min(u64::from(SENTIMENT_CEILING)) as u8
}
