//! Sample command — generate LinkedIn-style posts on demand.

use clap::Args;
use owo_colors::OwoColorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

use cringe_meter_core::{Engine, GeneratedPost, PostCategory};

/// Arguments for the `sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Generate from a specific category instead of a random one.
    #[arg(long, value_enum)]
    pub category: Option<PostCategory>,

    /// Number of posts to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,

    /// Seed the random source for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Generate one or more sample posts.
#[instrument(name = "cmd_sample", skip_all, fields(count = args.count))]
pub fn cmd_sample(args: SampleArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(category = ?args.category, seed = ?args.seed, "executing sample command");

    let engine = Engine::new();
    let mut rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let mut posts = Vec::with_capacity(args.count);
    for _ in 0..args.count {
        let post = match args.category {
            Some(category) => engine.generate_sample_in_category(category, &mut rng)?,
            None => engine.generate_sample_with_rng(&mut rng),
        };
        posts.push(post);
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&posts)?);
        return Ok(());
    }

    for (i, post) in posts.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_post(post);
    }

    Ok(())
}

fn print_post(post: &GeneratedPost) {
    println!(
        "{} {}  {} {}",
        "Category:".cyan(),
        post.category,
        "Scenario:".cyan(),
        post.scenario.dimmed(),
    );
    println!("{}", post.content);
}
