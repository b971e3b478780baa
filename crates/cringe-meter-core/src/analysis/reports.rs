//! Report structs for post analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in CLI JSON output and downstream consumers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Coarse authenticity tier derived from the corporate-BS percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Authenticity {
    /// Percentage above 70 — peak corporate.
    Low,
    /// Percentage between 30 and 70 inclusive.
    Medium,
    /// Percentage below 30 — reads like a human wrote it.
    High,
}

impl Authenticity {
    /// Derive the tier from a clamped percentage.
    ///
    /// Boundaries are strict: exactly 70 and exactly 30 are `Medium`.
    pub const fn from_percentage(percentage: u8) -> Self {
        if percentage > 70 {
            Self::Low
        } else if percentage < 30 {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Returns the tier as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Authenticity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the scorer alone.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ScoreReport {
    /// Corporate-BS percentage, clamped to [8, 96].
    pub percentage: u8,
    /// Authenticity tier derived from the percentage.
    pub authenticity: Authenticity,
    /// Artificial-positivity score in [0, 100].
    pub sentiment_score: u8,
    /// Detected buzzwords, in lexicon order, no duplicates.
    pub buzzwords: Vec<String>,
}

/// Full analysis of one post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Corporate-BS percentage, clamped to [8, 96].
    pub percentage: u8,
    /// De-corporatized rewrite of the input.
    pub human_rewrite: String,
    /// One sarcastic comment matched to the authenticity tier.
    pub honest_comment: String,
    /// Fully uppercased, hyperbole-substituted rendition.
    pub drama_mode: String,
    /// Up to three pattern-matched observations about the post.
    pub ai_insights: Vec<String>,
    /// Detected buzzwords, in lexicon order, no duplicates.
    pub corporate_buzzwords: Vec<String>,
    /// Authenticity tier derived from the percentage.
    pub authenticity: Authenticity,
    /// Artificial-positivity score in [0, 100].
    pub sentiment_score: u8,
}
