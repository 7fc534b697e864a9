//! whitebg CLI - make the white backgrounds of the bundled images transparent.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use whitebg::batch::{self, DEFAULT_JOBS};
use whitebg::{Config, Remover};

/// Convert near-white pixels of the images under `public/` to transparency.
#[derive(Parser, Debug)]
#[command(name = "whitebg")]
#[command(version, about, long_about = None)]
struct Args {
    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("whitebg={log_level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Failed jobs are reported but never turn into a failing exit status.
    if let Err(err) = run() {
        tracing::error!("{err:#}");
    }

    ExitCode::SUCCESS
}

fn run() -> Result<()> {
    let config = Config {
        show_progress: true,
        ..Config::default()
    };
    let remover = Remover::new(config).context("Failed to initialize remover")?;

    let report = batch::run_jobs(&remover, &DEFAULT_JOBS);

    println!(
        "Converted {} of {} images ({} failed)",
        report.succeeded(),
        report.outcomes.len(),
        report.failed()
    );

    Ok(())
}
