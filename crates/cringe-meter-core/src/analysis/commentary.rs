//! Sarcastic commentary: honest comments, drama mode, meter verdicts.

use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

use super::reports::Authenticity;

/// Comments for posts that read like a human wrote them.
static HONEST_COMMENTS_HIGH: &[&str] = &[
    "Actually sounds like a real human wrote this. Rare on LinkedIn.",
    "Refreshingly authentic. Did you forget you were on LinkedIn?",
    "Wait, genuine content? Are you sure you're using LinkedIn correctly?",
];

/// Comments for posts teetering on the edge.
static HONEST_COMMENTS_MEDIUM: &[&str] = &[
    "Could go either way. Teetering on the edge of LinkedIn cringe.",
    "Not terrible, but I can smell the corporate handbook from here.",
    "Moderately authentic with hints of professional posturing.",
];

/// Comments for peak corporate content. The largest pool, by popular demand.
static HONEST_COMMENTS_LOW: &[&str] = &[
    "Peak LinkedIn energy. My secondhand embarrassment meter is off the charts.",
    "This reads like it was written by a motivational poster that gained consciousness.",
    "I can practically hear the elevator music while reading this.",
    "Sir/Madam, this is a professional network, not a creative writing class.",
    "The corporate buzzword bingo card is completely filled.",
    "This post gave me corporate PTSD and I don't even work in an office.",
    "Did ChatGPT write this after being trained exclusively on LinkedIn posts?",
    "I think I just witnessed the birth of a new thought leader. Congratulations, I guess.",
];

/// Ordered hyperbole substitutions for drama mode.
///
/// These run before the punctuation and uppercase passes: the injected
/// phrases are already uppercase and contain no sentence punctuation, so
/// the later passes cannot mangle them. The bare `I` rule is deliberately
/// case-sensitive and unbounded: every capital I gets the treatment.
static DRAMA_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    [
        (r"I", "I, THE CHOSEN ONE,"),
        (r"(?i)\bwe\b", "WE, THE LEGENDARY SQUAD,"),
        (r"(?i)\bmy\b", "MY ABSOLUTELY PHENOMENAL"),
        (r"(?i)learned", "DISCOVERED THROUGH EARTH-SHATTERING REVELATION"),
        (r"(?i)important", "MIND-BLOWINGLY LIFE-CHANGING"),
        (r"(?i)team", "SQUAD OF ABSOLUTE LEGENDS AND VISIONARIES"),
        (r"(?i)success", "UNPRECEDENTED WORLD-DOMINATING SUCCESS"),
    ]
    .into_iter()
    .map(|(pattern, hype)| (Regex::new(pattern).expect("valid regex"), hype))
    .collect()
});

/// Sentence punctuation inflated by drama mode.
static DRAMA_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!]").expect("valid regex"));

/// Pick one sarcastic comment for the given authenticity tier.
pub fn honest_comment<R: Rng + ?Sized>(authenticity: Authenticity, rng: &mut R) -> String {
    let pool = match authenticity {
        Authenticity::High => HONEST_COMMENTS_HIGH,
        Authenticity::Medium => HONEST_COMMENTS_MEDIUM,
        Authenticity::Low => HONEST_COMMENTS_LOW,
    };
    pool[rng.gen_range(0..pool.len())].to_string()
}

/// Render a post in full melodrama: hyperbole substitutions, tripled
/// punctuation, all caps, fire on both ends.
pub fn drama_mode(text: &str) -> String {
    let mut dramatic = text.to_string();
    for (pattern, hype) in DRAMA_RULES.iter() {
        dramatic = pattern.replace_all(&dramatic, *hype).into_owned();
    }
    let dramatic = DRAMA_PUNCTUATION.replace_all(&dramatic, "!!!");
    format!("🔥🔥🔥 {} 🔥🔥🔥", dramatic.to_uppercase())
}

/// One-line meter verdict for a percentage band.
pub const fn verdict(percentage: u8) -> &'static str {
    match percentage {
        0..=19 => "Wow, actual human detected!",
        20..=39 => "Pretty authentic... suspicious",
        40..=59 => "Getting a bit corporate-y",
        60..=79 => "Peak LinkedIn energy",
        _ => "100% Pure Corporate Cringe",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn comment_comes_from_the_matching_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let comment = honest_comment(Authenticity::Low, &mut rng);
            assert!(HONEST_COMMENTS_LOW.contains(&comment.as_str()));

            let comment = honest_comment(Authenticity::High, &mut rng);
            assert!(HONEST_COMMENTS_HIGH.contains(&comment.as_str()));
        }
    }

    #[test]
    fn seeded_comment_is_deterministic() {
        let pick = |seed| honest_comment(Authenticity::Medium, &mut StdRng::seed_from_u64(seed));
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn drama_mode_is_uppercase_and_wrapped() {
        let dramatic = drama_mode("we learned a lot.");
        assert!(dramatic.starts_with("🔥🔥🔥 "));
        assert!(dramatic.ends_with(" 🔥🔥🔥"));
        let inner = dramatic
            .trim_start_matches("🔥🔥🔥 ")
            .trim_end_matches(" 🔥🔥🔥");
        assert_eq!(inner, inner.to_uppercase());
    }

    #[test]
    fn drama_substitutions_apply() {
        let dramatic = drama_mode("my team learned about success");
        assert!(dramatic.contains("MY ABSOLUTELY PHENOMENAL"));
        assert!(dramatic.contains("SQUAD OF ABSOLUTE LEGENDS AND VISIONARIES"));
        assert!(dramatic.contains("DISCOVERED THROUGH EARTH-SHATTERING REVELATION"));
        assert!(dramatic.contains("UNPRECEDENTED WORLD-DOMINATING SUCCESS"));
    }

    #[test]
    fn punctuation_is_tripled_once() {
        assert_eq!(drama_mode("done."), "🔥🔥🔥 DONE!!! 🔥🔥🔥");
        assert_eq!(drama_mode("done!"), "🔥🔥🔥 DONE!!! 🔥🔥🔥");
    }

    #[test]
    fn injected_phrases_are_not_re_inflated() {
        // The substitution output contains commas only, so the punctuation
        // pass must leave it alone.
        let dramatic = drama_mode("we win");
        assert!(dramatic.contains("WE, THE LEGENDARY SQUAD, WIN"));
    }

    #[test]
    fn capital_i_expands_everywhere() {
        let dramatic = drama_mode("I tried");
        assert!(dramatic.contains("I, THE CHOSEN ONE, TRIED"));
    }

    #[test]
    fn verdict_bands() {
        assert_eq!(verdict(8), "Wow, actual human detected!");
        assert_eq!(verdict(19), "Wow, actual human detected!");
        assert_eq!(verdict(20), "Pretty authentic... suspicious");
        assert_eq!(verdict(40), "Getting a bit corporate-y");
        assert_eq!(verdict(60), "Peak LinkedIn energy");
        assert_eq!(verdict(80), "100% Pure Corporate Cringe");
        assert_eq!(verdict(96), "100% Pure Corporate Cringe");
    }
}
