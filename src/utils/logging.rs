//! Logging utilities for the application
//!
//! Diagnostics go through `tracing`, filtered by `RUST_LOG` (default `info`).
//! They are written to stderr so they never interleave with the demo output
//! printed on stdout.
use tracing::Subscriber;
use tracing_subscriber::{filter::EnvFilter, fmt, fmt::MakeWriter, prelude::*};

/// Level used when `RUST_LOG` is unset or invalid
const DEFAULT_LEVEL: &str = "info";

/// Installs the global subscriber, writing to stderr
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	subscriber(std::io::stderr, env_filter()).try_init()?;
	Ok(())
}

fn env_filter() -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Compact, colorless single-line events with their target
fn subscriber<W>(writer: W, filter: EnvFilter) -> impl Subscriber + Send + Sync
where
	W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry().with(filter).with(
		fmt::layer()
			.with_writer(writer)
			.with_ansi(false)
			.with_target(true)
			.with_level(true)
			.compact(),
	)
}
