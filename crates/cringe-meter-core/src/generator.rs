//! Randomized sample-post generation.
//!
//! Picks a category, a template, and a flavor scenario uniformly, then
//! resolves every placeholder against its candidate list. The full
//! placeholder list is walked for every template; entries whose token does
//! not appear are no-ops. Substitution replaces all occurrences of a token,
//! so a template may reuse one.

use rand::Rng;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};
use crate::lexicon::{Lexicon, PostCategory};

/// A fully resolved sample post, ready for analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedPost {
    /// The post text with every placeholder resolved.
    pub content: String,
    /// Narrative flavor label. Informational only.
    pub scenario: String,
    /// The archetype the template was drawn from.
    #[serde(rename = "type")]
    pub category: PostCategory,
}

/// Generate a sample post using thread-local randomness.
pub fn generate(lexicon: &Lexicon) -> GeneratedPost {
    generate_with_rng(lexicon, &mut rand::thread_rng())
}

/// Generate a sample post from an injected random source.
///
/// A seeded rng makes the output fully deterministic.
#[tracing::instrument(skip_all)]
pub fn generate_with_rng<R: Rng + ?Sized>(lexicon: &Lexicon, rng: &mut R) -> GeneratedPost {
    let (category, templates) = lexicon.templates[rng.gen_range(0..lexicon.templates.len())];
    fill_template(lexicon, category, templates, rng)
}

/// Generate a sample post pinned to one category.
///
/// Fails only when the lexicon has no template pool for the category; the
/// built-in lexicon covers every category.
pub fn generate_in_category_with_rng<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    category: PostCategory,
    rng: &mut R,
) -> GeneratorResult<GeneratedPost> {
    let templates =
        lexicon
            .templates_for(category)
            .ok_or_else(|| GeneratorError::UnknownCategory {
                name: category.to_string(),
                available: lexicon
                    .templates
                    .iter()
                    .map(|(c, _)| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
    Ok(fill_template(lexicon, category, templates, rng))
}

fn fill_template<R: Rng + ?Sized>(
    lexicon: &Lexicon,
    category: PostCategory,
    templates: &[&str],
    rng: &mut R,
) -> GeneratedPost {
    let template = templates[rng.gen_range(0..templates.len())];
    let scenario = lexicon.scenarios[rng.gen_range(0..lexicon.scenarios.len())];

    let mut content = template.to_string();
    for (name, options) in lexicon.placeholder_fills {
        let choice = options[rng.gen_range(0..options.len())];
        content = content.replace(&format!("{{{name}}}"), choice);
    }

    GeneratedPost {
        content,
        scenario: scenario.to_string(),
        category,
    }
}
