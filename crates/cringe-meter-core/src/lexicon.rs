//! Curated corporate-speak lexicon.
//!
//! Static collections of buzzwords, narrative scenarios, positive-sentiment
//! words, and the post-template pools with their placeholder candidate lists.
//! All data is read-only after initialization and safe to share across
//! threads; the [`Lexicon`] struct is a cheap injectable view over it so
//! tests can substitute truncated lists.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Corporate buzzwords detected by case-insensitive containment.
///
/// Order matters: detected buzzwords are reported in this order.
pub static BUZZWORDS: &[&str] = &[
    "synergy",
    "leverage",
    "disrupt",
    "paradigm",
    "innovative",
    "journey",
    "passionate",
    "thrilled",
    "blessed",
    "grateful",
    "humbled",
    "ecosystem",
    "rockstar",
    "ninja",
    "guru",
    "thought leadership",
    "game-changer",
    "revolutionary",
    "exponential",
    "authentic",
    "vulnerability",
    "pivot",
    "circle back",
    "ideate",
    "low-hanging fruit",
    "move the needle",
    "best practices",
    "deep dive",
    "actionable insights",
    "win-win",
];

/// Words that signal artificial positivity, used by the sentiment score.
pub static POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "incredible",
    "fantastic",
    "revolutionary",
    "game-changing",
    "blessed",
    "grateful",
];

/// Narrative flavor labels attached to generated posts. Cosmetic only —
/// never consumed by the analysis pipeline.
pub static SCENARIOS: &[&str] = &[
    "Meeting a wise stranger who changes everything",
    "Coffee shop epiphany that revolutionizes business",
    "Child asking innocent question with profound implications",
    "Failure leading to massive success story",
    "Janitor teaching leadership lessons",
    "Random encounter with secret CEO",
    "Meditation retreat breakthrough",
    "Family dinner wisdom bomb",
];

/// The archetype of a generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PostCategory {
    /// Achievement announcements disguised as gratitude.
    HumbleBrag,
    /// Implausible encounters that taught a profound lesson.
    FakeStory,
    /// Maximum jargon density per sentence.
    BuzzwordOverload,
    /// Public commitment to a cause, engagement optional.
    VirtueSignal,
    /// Contrarian frameworks and unpopular opinions.
    ThoughtLeader,
}

impl PostCategory {
    /// All categories, in template-pool order.
    pub const ALL: &'static [Self] = &[
        Self::HumbleBrag,
        Self::FakeStory,
        Self::BuzzwordOverload,
        Self::VirtueSignal,
        Self::ThoughtLeader,
    ];

    /// Returns the category as its snake_case tag.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HumbleBrag => "humble_brag",
            Self::FakeStory => "fake_story",
            Self::BuzzwordOverload => "buzzword_overload",
            Self::VirtueSignal => "virtue_signal",
            Self::ThoughtLeader => "thought_leader",
        }
    }
}

impl std::fmt::Display for PostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Post templates by category. Placeholder tokens use `{name}` form and are
/// resolved against [`PLACEHOLDER_FILLS`].
pub static POST_TEMPLATES: &[(PostCategory, &[&str])] = &[
    (
        PostCategory::HumbleBrag,
        &[
            "I'm humbled to announce that {achievement}. This journey taught me that {lesson}. \
             Grateful for my amazing team who made this possible! 🚀 #Success #Leadership",
            "Plot twist: {unexpected_event} turned out to be the best thing that happened to my \
             career. Sometimes failure is just success in disguise! 💪 #Growth #Mindset",
            "I was recently asked '{question}' - this simple question completely shifted my \
             perspective on {topic}. Success isn't about {wrong_thing}, it's about {right_thing}! \
             ✨ #Wisdom",
        ],
    ),
    (
        PostCategory::FakeStory,
        &[
            "Yesterday, while {mundane_activity}, I met {person} who taught me more about {skill} \
             than any {formal_education} ever could. Here's what happened... 🧵 #StoryTime \
             #Learning",
            "LIFE-CHANGING moment: {event} happened and it made me realize that \
             {profound_realization}. This is why I'm passionate about {cause}! 🌟 #Inspiration",
            "True story: {interaction} completely changed how I view {business_concept}. \
             Sometimes the best lessons come from unexpected places! 💡 #Leadership",
        ],
    ),
    (
        PostCategory::BuzzwordOverload,
        &[
            "Our team has successfully leveraged cutting-edge synergy to disrupt the traditional \
             paradigm of {industry}! Through innovative ideation and exponential growth mindset, \
             we're revolutionizing {field}! 🎯 #Innovation #Disruption",
            "Excited to share that we're pivoting our game-changing platform to create actionable \
             insights that move the needle in the {market} space! Let's circle back on best \
             practices for exponential success! 📈 #TechLeadership",
            "Deep dive into how authentic vulnerability and thought leadership can create win-win \
             scenarios in the modern ecosystem. Ready to ideate some low-hanging fruit solutions? \
             🌱 #ThoughtLeadership",
        ],
    ),
    (
        PostCategory::VirtueSignal,
        &[
            "Mental health matters. Work-life balance isn't just a buzzword - it's a necessity. \
             I'm committed to creating an inclusive environment where {value} thrives. Who's with \
             me? 🤝 #MentalHealthAwareness #Inclusion",
            "Diversity isn't just the right thing to do - it's the smart thing to do. Our diverse \
             team has {achievement} because different perspectives create innovation! 🌈 \
             #Diversity #Innovation",
            "Sustainability isn't optional anymore. I'm proud to announce that {green_initiative} \
             because the planet needs leaders who act, not just talk! 🌍 #Sustainability \
             #Leadership",
        ],
    ),
    (
        PostCategory::ThoughtLeader,
        &[
            "Unpopular opinion: {controversial_take}. Here's why traditional {industry} thinking \
             is holding us back and what we should do instead... 🧠 #ThoughtLeadership #Disruption",
            "The future of {field} isn't what you think. After {research}, I've discovered that \
             {prediction}. Here's my framework for {solution}... 📊 #FutureOfWork #Strategy",
            "I've been studying {topic} for {timeframe} and here's what everyone gets wrong: \
             {insight}. Time to challenge the status quo! ⚡ #Innovation #Leadership",
        ],
    ),
];

/// Candidate values for every known placeholder, in substitution order.
///
/// Each generated post resolves the full list; placeholders absent from the
/// chosen template are no-ops. Every `{token}` appearing in
/// [`POST_TEMPLATES`] must have an entry here.
pub static PLACEHOLDER_FILLS: &[(&str, &[&str])] = &[
    (
        "achievement",
        &[
            "closing our biggest deal ever",
            "launching our revolutionary product",
            "getting promoted to VP",
            "being featured in Forbes",
            "increased productivity by 300%",
            "solved our biggest challenge",
            "created breakthrough innovation",
            "exceeded all targets",
        ],
    ),
    (
        "lesson",
        &[
            "perseverance pays off",
            "collaboration beats competition",
            "authenticity is everything",
            "failure is feedback",
        ],
    ),
    (
        "unexpected_event",
        &[
            "getting fired",
            "my startup failing",
            "being rejected 50 times",
            "losing my biggest client",
        ],
    ),
    (
        "question",
        &[
            "What does success mean to you?",
            "How do you define leadership?",
            "What's your biggest fear?",
            "Why do you do what you do?",
        ],
    ),
    (
        "topic",
        &[
            "leadership",
            "entrepreneurship",
            "innovation",
            "success",
            "teamwork",
            "workplace culture",
            "leadership development",
            "digital transformation",
            "customer experience",
        ],
    ),
    (
        "wrong_thing",
        &[
            "climbing the corporate ladder",
            "maximizing profits",
            "individual achievement",
            "working 80-hour weeks",
        ],
    ),
    (
        "right_thing",
        &[
            "lifting others as you climb",
            "creating value for society",
            "building meaningful relationships",
            "finding work-life harmony",
        ],
    ),
    (
        "mundane_activity",
        &[
            "grabbing my morning coffee",
            "waiting for the elevator",
            "walking my dog",
            "standing in line at the grocery store",
        ],
    ),
    (
        "person",
        &[
            "an elderly janitor",
            "a homeless veteran",
            "a 7-year-old kid",
            "an Uber driver",
        ],
    ),
    (
        "skill",
        &[
            "leadership",
            "resilience",
            "empathy",
            "innovation",
            "customer service",
        ],
    ),
    (
        "formal_education",
        &[
            "MBA program",
            "corporate training",
            "business school",
            "leadership seminar",
        ],
    ),
    (
        "event",
        &[
            "My laptop crashed during a pitch",
            "I spilled coffee on my shirt before a meeting",
            "My flight got canceled",
            "I forgot my presentation slides",
        ],
    ),
    (
        "profound_realization",
        &[
            "preparation matters less than adaptability",
            "vulnerability is strength",
            "every setback is a setup for a comeback",
            "authenticity beats perfection",
        ],
    ),
    (
        "cause",
        &[
            "mental health awareness",
            "inclusive leadership",
            "sustainable business",
            "youth mentorship",
        ],
    ),
    (
        "interaction",
        &[
            "A customer complaint",
            "Feedback from my intern",
            "A conversation with my grandmother",
            "Watching my toddler learn to walk",
        ],
    ),
    (
        "business_concept",
        &[
            "customer experience",
            "team dynamics",
            "innovation process",
            "company culture",
        ],
    ),
    (
        "industry",
        &[
            "customer engagement",
            "team collaboration",
            "product development",
            "market research",
        ],
    ),
    (
        "field",
        &[
            "the way we work",
            "business relationships",
            "customer experience",
            "team productivity",
        ],
    ),
    (
        "market",
        &[
            "B2B SaaS",
            "digital transformation",
            "customer success",
            "e-commerce",
        ],
    ),
    (
        "value",
        &[
            "creativity",
            "innovation",
            "authenticity",
            "collaboration",
            "diversity",
        ],
    ),
    (
        "green_initiative",
        &[
            "our company is going carbon neutral",
            "we're implementing sustainable practices",
            "we're partnering with eco-friendly suppliers",
            "we're reducing our environmental footprint",
        ],
    ),
    (
        "controversial_take",
        &[
            "Remote work is killing creativity",
            "AI will replace most managers",
            "Networking events are overrated",
            "Work-life balance is a myth",
        ],
    ),
    (
        "research",
        &[
            "analyzing 1000+ companies",
            "interviewing 50 CEOs",
            "studying market trends for 5 years",
            "testing 100 different strategies",
        ],
    ),
    (
        "prediction",
        &[
            "human connection will become the most valuable skill",
            "traditional hierarchies will disappear",
            "emotional intelligence will beat technical skills",
            "micro-learning will replace formal education",
        ],
    ),
    (
        "solution",
        &[
            "building resilient teams",
            "creating adaptive organizations",
            "fostering innovation culture",
            "developing future leaders",
        ],
    ),
    (
        "timeframe",
        &["10 years", "5 years", "my entire career", "the past decade"],
    ),
    (
        "insight",
        &[
            "It's not about the technology, it's about the people",
            "Culture beats strategy every time",
            "Small actions create big changes",
            "Listening is more important than talking",
        ],
    ),
];

/// Read-only word-list bundle consumed by the analysis and generation
/// components.
///
/// Components take a `&Lexicon` rather than reaching for the statics
/// directly, so tests can inject alternate or truncated lists. The default
/// lexicon points at the built-in data and is free to construct.
#[derive(Debug, Clone)]
pub struct Lexicon {
    /// Buzzwords matched case-insensitively against analyzed text.
    pub buzzwords: &'static [&'static str],
    /// Positive-sentiment words for the sentiment score.
    pub positive_words: &'static [&'static str],
    /// Narrative scenario labels for generated posts.
    pub scenarios: &'static [&'static str],
    /// Template pools keyed by category.
    pub templates: &'static [(PostCategory, &'static [&'static str])],
    /// Placeholder candidate lists, in substitution order.
    pub placeholder_fills: &'static [(&'static str, &'static [&'static str])],
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            buzzwords: BUZZWORDS,
            positive_words: POSITIVE_WORDS,
            scenarios: SCENARIOS,
            templates: POST_TEMPLATES,
            placeholder_fills: PLACEHOLDER_FILLS,
        }
    }
}

impl Lexicon {
    /// Returns the template pool for a category, if present.
    pub fn templates_for(&self, category: PostCategory) -> Option<&'static [&'static str]> {
        self.templates
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, templates)| *templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_lexicon_is_complete() {
        let lexicon = Lexicon::default();
        assert_eq!(lexicon.buzzwords.len(), 30);
        assert_eq!(lexicon.positive_words.len(), 7);
        assert_eq!(lexicon.scenarios.len(), 8);
        assert_eq!(lexicon.templates.len(), 5);
        for category in PostCategory::ALL {
            assert_eq!(lexicon.templates_for(*category).unwrap().len(), 3);
        }
    }

    #[test]
    fn buzzwords_are_lowercase() {
        for word in BUZZWORDS {
            assert_eq!(*word, word.to_lowercase().as_str());
        }
    }

    #[test]
    fn every_template_token_has_a_fill() {
        let known: Vec<String> = PLACEHOLDER_FILLS
            .iter()
            .map(|(name, _)| format!("{{{name}}}"))
            .collect();

        for (category, templates) in POST_TEMPLATES {
            for template in *templates {
                let mut rest = *template;
                while let Some(start) = rest.find('{') {
                    let token_rest = &rest[start..];
                    let end = token_rest.find('}').unwrap_or_else(|| {
                        panic!("unterminated token in {category} template: {template}")
                    });
                    let token = &token_rest[..=end];
                    assert!(
                        known.iter().any(|k| k == token),
                        "unknown token {token} in {category} template"
                    );
                    rest = &token_rest[end + 1..];
                }
            }
        }
    }

    #[test]
    fn placeholder_names_are_unique() {
        for (i, (name, _)) in PLACEHOLDER_FILLS.iter().enumerate() {
            assert!(
                PLACEHOLDER_FILLS[i + 1..].iter().all(|(n, _)| n != name),
                "duplicate placeholder entry: {name}"
            );
        }
    }

    #[test]
    fn category_tags_round_trip() {
        for category in PostCategory::ALL {
            let json = serde_json::to_string(category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
