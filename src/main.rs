//! rgpt - AI code review for git diffs.

use std::io::IsTerminal;

use anyhow::{Context, bail};
use clap::Parser;
use tokio::io::AsyncReadExt;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use rgpt::config::Config;
use rgpt::openai::{ALIASES, ReviewClient, SamplingParams};
use rgpt::render;

/// Request an AI code review for a git diff.
#[derive(Parser, Debug)]
#[command(name = "rgpt", version, about, long_about = None)]
struct Args {
    /// Diff to review: a file path, or `-` to read from stdin
    #[arg(short, long, default_value = "-")]
    input: String,

    #[arg(short, long, default_value = "turbo", help = model_help())]
    model: String,

    /// Maximum number of tokens to generate
    #[arg(long, visible_alias = "max", default_value_t = SamplingParams::default().max_tokens)]
    max_tokens: u32,

    /// Sampling temperature, between 0 and 1
    #[arg(short, long, default_value_t = SamplingParams::default().temperature)]
    temperature: f64,

    /// Nucleus sampling probability mass, between 0 and 1
    #[arg(long, visible_alias = "topp", default_value_t = SamplingParams::default().top_p)]
    top_p: f64,

    /// Penalty on token frequency, between -2 and 2
    #[arg(
        long,
        visible_alias = "freq",
        allow_negative_numbers = true,
        default_value_t = SamplingParams::default().frequency_penalty
    )]
    frequency_penalty: f64,

    /// Penalty on token presence, between -2 and 2
    #[arg(
        long,
        visible_alias = "presence",
        allow_negative_numbers = true,
        default_value_t = SamplingParams::default().presence_penalty
    )]
    presence_penalty: f64,

    /// Generate this many completions server-side and keep the best
    /// (legacy models only)
    #[arg(long, visible_alias = "bo", default_value_t = SamplingParams::default().best_of)]
    best_of: u32,

    /// A user story with acceptance criteria to review the diff against
    #[arg(long, visible_alias = "us")]
    user_story: Option<String>,

    /// Emit logs in JSON
    #[arg(short, long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn model_help() -> String {
    format!("Model alias ({})", ALIASES.join(", "))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.json);

    let config = Config::load().await?;
    let diff = read_input(&args.input).await?;
    if diff.trim().is_empty() {
        bail!("the diff is empty, nothing to review");
    }
    let review_input = match &args.user_story {
        Some(story) => format!("{diff}\n\nUser story and acceptance criteria:\n{story}"),
        None => diff,
    };

    let params = SamplingParams {
        temperature: args.temperature,
        top_p: args.top_p,
        frequency_penalty: args.frequency_penalty,
        presence_penalty: args.presence_penalty,
        max_tokens: args.max_tokens,
        best_of: args.best_of,
    };

    debug!(model = %args.model, "requesting improvements");
    let client = ReviewClient::new(config.api_key);
    let comments = client
        .request_review(&args.model, &review_input, &params)
        .await
        .context("failed to get review comments")?;
    debug!(count = comments.len(), "got improvements");

    if comments.is_empty() {
        warn!("the model returned no review comments");
        return Ok(());
    }

    let styled = std::io::stdout().is_terminal();
    for comment in &comments {
        if styled {
            println!("{}\n", render::render(comment));
        } else {
            println!("{comment}");
        }
    }
    Ok(())
}

async fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        tokio::io::stdin()
            .read_to_string(&mut buf)
            .await
            .context("failed to read diff from stdin")?;
        Ok(buf)
    } else {
        tokio::fs::read_to_string(input)
            .await
            .with_context(|| format!("failed to read diff from {input}"))
    }
}

fn init_tracing(verbose: bool, json: bool) {
    let default_filter = if verbose { "rgpt=debug" } else { "rgpt=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
