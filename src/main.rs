use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vocab_core::config::Config;
use vocab_core::pipeline::{self, Job};
use vocab_core::ArticlePolicy;

#[derive(Parser)]
#[command(
    name = "vocab-norm",
    about = "Normalize A2 vocabulary records into the A1 dataset schema"
)]
struct Cli {
    /// TOML config file layered over the built-in defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input JSON array (overrides `paths.input`).
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output JSON file (overrides `paths.output`).
    #[arg(long)]
    output: Option<PathBuf>,

    /// How to treat articles other than der/die/das: lenient, warn or strict.
    #[arg(long)]
    article_policy: Option<ArticlePolicy>,

    /// Log at debug level on stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let mut config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(input) = cli.input {
        config.paths.input = input;
    }
    if let Some(output) = cli.output {
        config.paths.output = output;
    }
    if let Some(policy) = cli.article_policy {
        config.normalize.article_policy = policy;
    }

    let job = Job::from(&config);
    tracing::debug!(?job, "starting run");

    let summary = pipeline::run(&job)?;
    println!("{summary}");
    Ok(())
}
