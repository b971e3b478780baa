//! Core library for cringe-meter.
//!
//! A satirical analyzer for LinkedIn-style posts: a bounded corporate-BS
//! score, a buzzword detector, a de-corporatizing rewriter, sarcastic
//! commentary with a drama-mode transform, and a randomized sample-post
//! generator. All "analysis" is local string matching and template
//! substitution — no models, no network, no feelings.
//!
//! # Modules
//!
//! - [`engine`] - The aggregate entry point consumed by presentation code
//! - [`analysis`] - Scoring, rewriting, insights, and commentary
//! - [`generator`] - Randomized sample posts
//! - [`engagement`] - Simulated engagement metrics
//! - [`lexicon`] - Static word lists and templates
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use cringe_meter_core::Engine;
//! use std::time::Duration;
//!
//! let engine = Engine::new().with_delay(Duration::ZERO);
//! let report = engine.analyze_now("I'm thrilled to announce our amazing synergy!!! #blessed");
//! assert!(report.percentage > 70);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod engagement;

pub mod engine;

pub mod error;

pub mod generator;

pub mod lexicon;

pub mod text;

pub use analysis::{AnalysisReport, Authenticity, ScoreReport};

pub use config::{Config, ConfigLoader, LogLevel};

pub use engagement::EngagementStats;

pub use engine::{DEFAULT_DELAY, Engine};

pub use error::{ConfigError, ConfigResult, GeneratorError, GeneratorResult};

pub use generator::GeneratedPost;

pub use lexicon::{Lexicon, PostCategory};

/// Default cap on CLI input size. The engine itself accepts arbitrary
/// length; this guards the command line against pathological files.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024;
