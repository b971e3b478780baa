//! Post analysis.
//!
//! Decomposes the corporate-BS verdict into four independent components —
//! scoring, rewriting, insights, and commentary — orchestrated by
//! [`run_analysis`]. Each component is a pure function in its own module
//! and can be invoked individually.

pub mod commentary;
pub mod insights;
pub mod reports;
pub mod rewriter;
pub mod scorer;

use rand::Rng;

pub use reports::{AnalysisReport, Authenticity, ScoreReport};

use crate::lexicon::Lexicon;

/// Run the full analysis pipeline over one post.
///
/// Total over its input domain: empty strings, very long strings, and
/// surrogate-pair emoji all produce a valid bounded report. The random
/// source only influences the honest-comment pick.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn run_analysis<R: Rng + ?Sized>(text: &str, lexicon: &Lexicon, rng: &mut R) -> AnalysisReport {
    let score = scorer::score(text, lexicon);

    AnalysisReport {
        human_rewrite: rewriter::rewrite(text),
        honest_comment: commentary::honest_comment(score.authenticity, rng),
        drama_mode: commentary::drama_mode(text),
        ai_insights: insights::insights(text, score.percentage, &score.buzzwords),
        percentage: score.percentage,
        corporate_buzzwords: score.buzzwords,
        authenticity: score.authenticity,
        sentiment_score: score.sentiment_score,
    }
}
