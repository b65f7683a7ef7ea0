//! REST client demo entry point.
//!
//! Connects to an InterlockLedger node with a client certificate, prints what
//! the node returns for itself, its chains and its mirrors, then waits for
//! <ESC> before exiting.
//!
//! # Flow
//! 1. Parses the command line; fewer than two arguments prints the usage text
//! 2. Loads `.env` and sets up logging
//! 3. Creates the client and runs the demo, printing any failure
//! 4. Waits for <ESC> unless `--no-wait` is given

use dotenvy::dotenv;
use interlockledger_rest_client::{
	bootstrap::{parse_invocation, run_demo, write_usage, Action},
	utils::{console::wait_for_escape, logging::setup_logging},
};
use std::{
	env::{set_var, var},
	io,
};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let invocation = match parse_invocation(std::env::args_os()) {
		Ok(invocation) => invocation,
		Err(e) => e.exit(),
	};

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if let Some(level) = &invocation.log_level {
		if var("RUST_LOG").is_err() {
			set_var("RUST_LOG", level);
		}
	}

	setup_logging().map_err(|e| anyhow::anyhow!("Failed to setup logging: {}", e))?;

	let printed = match &invocation.action {
		Action::Usage => write_usage(io::stdout()),
		Action::Run(settings) => run_demo(settings, |name| var(name).ok(), io::stdout())
			.await
			.map(|_| ()),
	};
	if let Err(e) = printed {
		error!("Failed to write output: {}", e);
	}

	if invocation.wait {
		wait_for_escape(io::stdin().lock(), io::stdout())?;
	}
	Ok(())
}
