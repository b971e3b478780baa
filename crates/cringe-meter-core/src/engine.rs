//! The analysis engine.
//!
//! [`Engine`] bundles a [`Lexicon`] with the simulated "AI is thinking"
//! delay and exposes the two operations the presentation layer consumes:
//! [`Engine::analyze`] and [`Engine::generate_sample`]. Reports are created
//! fresh per invocation and owned by the caller; the engine holds no
//! mutable state and is safe to share behind a reference.

use std::time::Duration;

use rand::Rng;

use crate::analysis::{self, AnalysisReport};
use crate::engagement::{self, EngagementStats};
use crate::error::GeneratorResult;
use crate::generator::{self, GeneratedPost};
use crate::lexicon::{Lexicon, PostCategory};

/// Default simulated processing delay. Tunable, not a contract.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

/// Stateless analysis engine over a read-only lexicon.
#[derive(Debug, Clone)]
pub struct Engine {
    lexicon: Lexicon,
    delay: Duration,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Engine over the built-in lexicon with the default delay.
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::default())
    }

    /// Engine over an injected lexicon.
    pub const fn with_lexicon(lexicon: Lexicon) -> Self {
        Self {
            lexicon,
            delay: DEFAULT_DELAY,
        }
    }

    /// Override the simulated delay. `Duration::ZERO` for tests.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The lexicon this engine analyzes against.
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Analyze a post after the simulated processing delay.
    ///
    /// The delay is pure latency injection: no side effects, cancellable by
    /// dropping the future. The analysis itself never fails.
    pub async fn analyze(&self, text: &str) -> AnalysisReport {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.analyze_now(text)
    }

    /// Analyze a post immediately.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze_now(&self, text: &str) -> AnalysisReport {
        analysis::run_analysis(text, &self.lexicon, &mut rand::thread_rng())
    }

    /// Analyze with an injected random source (deterministic commentary).
    pub fn analyze_with_rng<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> AnalysisReport {
        analysis::run_analysis(text, &self.lexicon, rng)
    }

    /// Generate a random sample post.
    pub fn generate_sample(&self) -> GeneratedPost {
        generator::generate(&self.lexicon)
    }

    /// Generate a sample post with an injected random source.
    pub fn generate_sample_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> GeneratedPost {
        generator::generate_with_rng(&self.lexicon, rng)
    }

    /// Generate a sample post pinned to one category.
    pub fn generate_sample_in_category<R: Rng + ?Sized>(
        &self,
        category: PostCategory,
        rng: &mut R,
    ) -> GeneratorResult<GeneratedPost> {
        generator::generate_in_category_with_rng(&self.lexicon, category, rng)
    }

    /// Simulate the engagement panel for a post.
    pub fn simulate_engagement(&self, text: &str) -> EngagementStats {
        engagement::simulate(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn zero_delay_resolves_immediately() {
        let engine = Engine::new().with_delay(Duration::ZERO);
        let started = std::time::Instant::now();
        let report = engine.analyze("we shipped the feature today").await;
        assert!(started.elapsed() < Duration::from_millis(250));
        assert_eq!(report.percentage, 10);
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_honored_under_paused_time() {
        let engine = Engine::new().with_delay(Duration::from_millis(1500));
        let started = tokio::time::Instant::now();
        let _report = engine.analyze("hello").await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[test]
    fn generated_samples_analyze_above_the_floor() {
        // Every template carries at least a hashtag plus punctuation, so no
        // sample can score as plain prose. The mildest virtue-signal and
        // thought-leader templates bottom out at 22.
        let engine = Engine::new().with_delay(Duration::ZERO);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let post = engine.generate_sample_with_rng(&mut rng);
            let report = engine.analyze_with_rng(&post.content, &mut rng);
            assert!(
                report.percentage > 20,
                "suspiciously human sample: {}",
                post.content
            );
        }
    }

    #[test]
    fn engine_is_reusable_across_invocations() {
        let engine = Engine::new();
        let first = engine.analyze_now("synergy");
        let second = engine.analyze_now("synergy");
        assert_eq!(first.percentage, second.percentage);
        assert_eq!(first.corporate_buzzwords, second.corporate_buzzwords);
    }
}
