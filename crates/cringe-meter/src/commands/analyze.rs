//! Analyze command — score a post and render the verdict.

use std::time::Duration;

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use indicatif::ProgressBar;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use cringe_meter_core::analysis::commentary;
use cringe_meter_core::{DEFAULT_DELAY, Engine};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// File containing the post to analyze.
    #[arg(required_unless_present = "text", conflicts_with = "text")]
    pub file: Option<Utf8PathBuf>,

    /// Analyze this text directly instead of reading a file.
    #[arg(long)]
    pub text: Option<String>,

    /// Skip the simulated processing delay.
    #[arg(long)]
    pub no_delay: bool,
}

/// Run the corporate-BS analysis on a post.
#[instrument(name = "cmd_analyze", skip_all)]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_delay_ms: Option<u64>,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, inline = args.text.is_some(), "executing analyze command");

    let content = match (&args.file, args.text) {
        (_, Some(text)) => text,
        (Some(file), None) => super::read_input_file(file, max_input)?,
        (None, None) => bail!("nothing to analyze: pass a file or --text"),
    };

    let delay = if args.no_delay {
        Duration::ZERO
    } else {
        config_delay_ms.map_or(DEFAULT_DELAY, Duration::from_millis)
    };

    let engine = Engine::new().with_delay(delay);

    let rt = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let report = if global_json {
        rt.block_on(engine.analyze(&content))
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_message("Consulting the corporate thesaurus...");
        spinner.enable_steady_tick(Duration::from_millis(80));
        let report = rt.block_on(engine.analyze(&content));
        spinner.finish_and_clear();
        report
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    // Text output — section by section
    let percentage = format!("{}%", report.percentage);
    let percentage = if report.percentage < 40 {
        percentage.green().to_string()
    } else if report.percentage < 70 {
        percentage.yellow().to_string()
    } else {
        percentage.red().to_string()
    };
    println!(
        "{} {} — {}",
        "Corporate BS:".bold(),
        percentage,
        commentary::verdict(report.percentage),
    );
    println!(
        "  {} {}, sentiment {}/100",
        "Authenticity:".cyan(),
        report.authenticity,
        report.sentiment_score,
    );

    if !report.corporate_buzzwords.is_empty() {
        println!(
            "\n  {} {}",
            "Buzzwords:".yellow(),
            report.corporate_buzzwords.join(", "),
        );
    }

    if !report.ai_insights.is_empty() {
        println!("\n  {}", "Insights:".cyan());
        for insight in &report.ai_insights {
            println!("    - {insight}");
        }
    }

    println!("\n  {} {}", "Honest version:".cyan(), report.human_rewrite);
    println!("\n  {} {}", "Honest comment:".cyan(), report.honest_comment);
    println!("\n  {} {}", "Drama mode:".magenta(), report.drama_mode);

    let engagement = engine.simulate_engagement(&content);
    println!(
        "\n  {} {} likes · {} comments · {} reposts · {} shares",
        "Projected reach:".cyan(),
        engagement.likes,
        engagement.comments,
        engagement.reposts,
        engagement.shares,
    );

    Ok(())
}
