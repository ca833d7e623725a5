//! Log output for the binary.
//!
//! Events go to stderr through `tracing_subscriber::fmt`. `RUST_LOG` takes
//! precedence when set; otherwise `--verbose` selects `debug` and the default
//! is `info`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| level.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(verbose)
                .with_target(false),
        )
        .try_init()?;

    Ok(())
}
