//! Simulated engagement metrics.
//!
//! Produces the fake likes/comments/reposts/shares panel for an analyzed
//! post. Numbers are random around a base metric, doubled for long posts.
//! Pure satire: no network, no real reach.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base metric range (uniform, upper bound exclusive).
const BASE_METRIC_MIN: u32 = 100;
const BASE_METRIC_MAX: u32 = 600;
/// Posts longer than this many characters get double engagement.
const LONG_POST_CHARS: usize = 300;

/// Per-metric factors applied to the base metric.
const LIKES_FACTOR: f64 = 3.0;
const COMMENTS_FACTOR: f64 = 0.3;
const REPOSTS_FACTOR: f64 = 0.8;
const SHARES_FACTOR: f64 = 0.2;

/// Fake engagement counts for one post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EngagementStats {
    /// Simulated reaction count.
    pub likes: u64,
    /// Simulated comment count.
    pub comments: u64,
    /// Simulated repost count.
    pub reposts: u64,
    /// Simulated share count.
    pub shares: u64,
}

/// Simulate engagement for a post from an injected random source.
pub fn simulate_with_rng<R: Rng + ?Sized>(text: &str, rng: &mut R) -> EngagementStats {
    let base = f64::from(rng.gen_range(BASE_METRIC_MIN..BASE_METRIC_MAX));
    let multiplier = if text.chars().count() > LONG_POST_CHARS {
        2.0
    } else {
        1.0
    };

    EngagementStats {
        likes: (base * LIKES_FACTOR * multiplier) as u64,
        comments: (base * COMMENTS_FACTOR * multiplier) as u64,
        reposts: (base * REPOSTS_FACTOR * multiplier) as u64,
        shares: (base * SHARES_FACTOR * multiplier) as u64,
    }
}

/// Simulate engagement using thread-local randomness.
pub fn simulate(text: &str) -> EngagementStats {
    simulate_with_rng(text, &mut rand::thread_rng())
}
