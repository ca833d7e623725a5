#![doc = include_str!("../README.md")]

mod app;

use std::time::Instant;

use anyhow::Context;
use app::config::{AppConfig, CliArgs};
use app::git::Git;
use app::telemetry::init_telemetry;
use clap::Parser;
use gitbrute::{
    SolverConfig, SystemClock, Template, extract_message, solve_template, strip_signatures,
};

// The musl allocator is slow; use mimalloc everywhere.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = AppConfig::try_from(args)?;

    init_telemetry(config.verbose)?;
    log_startup_info(&config);

    run(&config)
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let git = Git::new(&config.repo);

    let hash = git.current_hash()?;
    tracing::debug!("Current HEAD hash {hash} in {}", git.repo().display());
    if config.prefix.matches(&hash) && !config.force {
        tracing::info!(
            "HEAD {hash} already starts with `{}`, nothing to do",
            config.prefix
        );
        return Ok(());
    }

    // The amended commit is unsigned, so search the bytes it will have.
    let raw = git.cat_commit(&hash)?;
    let obj = strip_signatures(&raw);
    if obj.len() != raw.len() {
        tracing::info!("Commit {hash} is signed; the amended commit will not be");
    }
    let message =
        extract_message(&obj).with_context(|| format!("commit {hash} has no message"))?;
    let template =
        Template::parse(&obj).with_context(|| format!("failed to read dates from {hash}"))?;

    let solver = SolverConfig::with_clock(config.prefix.clone(), config.workers, &SystemClock)?;
    tracing::info!(
        "Beginning search for hash matching prefix `{}`",
        config.prefix
    );
    let start = Instant::now();
    let found = solve_template(&template, &solver)?;
    let elapsed = start.elapsed();

    let rate = found.checked as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
    tracing::info!(
        "Found {} in {:.2?} after {} candidates ({:.0}/s)",
        found.hash,
        elapsed,
        found.checked,
        rate
    );
    tracing::debug!(
        "Author date {}, committer date {}, offsets {:?}, worker {}",
        found.solution.author,
        found.solution.committer,
        found.pair,
        found.worker
    );

    if config.dryrun {
        tracing::info!("Dry run: exiting without amending");
        return Ok(());
    }

    git.amend(&found.solution, template.committer(), message)?;

    git.expect_head(&found.hash)?;
    tracing::info!("HEAD is now {}", found.hash);
    Ok(())
}

fn log_startup_info(config: &AppConfig) {
    if cfg!(debug_assertions) {
        tracing::debug!("Starting with full config: {:#?}", config);
    } else {
        tracing::debug!(
            "Starting in {} with {} workers",
            config.repo.display(),
            config.workers
        );
    }
}
