//! Bootstrap module for parsing the command line and connecting to the node.
//!
//! - `build_cli`: the clap command accepted by the binary
//! - `parse_invocation`: turns arguments into an [`Invocation`]
//! - `create_node`: builds a [`RestNode`] from the settings and the environment
//! - `run_demo`: connects and runs the demo, printing construction failures

use std::{
	ffi::OsString,
	fmt,
	io::{self, Write},
	path::PathBuf,
};
use thiserror::Error;
use tracing::{info, warn};
use zeroize::Zeroizing;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::{
	models::{parse_port, ClientConfig, ConfigError},
	services::{
		exercise::ExerciseService,
		rest::{RestClientError, RestNode},
	},
	utils::constants::{ENV_HOST, ENV_PORT, PROGRAM_NAME},
};

const ARG_CERTIFICATE: &str = "certificate";
const ARG_PASSWORD: &str = "password";
const ARG_PORT: &str = "port";
const ARG_HOST: &str = "host";
const ARG_LOG_LEVEL: &str = "log-level";
const ARG_NO_WAIT: &str = "no-wait";
const ARG_IGNORED: &str = "ignored";

/// Errors raised while building the client from the command line
#[derive(Debug, Error)]
pub enum BootstrapError {
	#[error(transparent)]
	Config(#[from] ConfigError),

	#[error(transparent)]
	Client(#[from] RestClientError),
}

/// What the binary was asked to do
#[derive(Debug)]
pub struct Invocation {
	pub action: Action,
	/// Value of `--log-level`, applied when `RUST_LOG` is unset
	pub log_level: Option<String>,
	/// Whether to wait for Escape before exiting
	pub wait: bool,
}

#[derive(Debug)]
pub enum Action {
	/// Not enough arguments; print the usage text
	Usage,
	Run(RunSettings),
}

/// Connection settings taken from the command line
pub struct RunSettings {
	pub certificate_path: PathBuf,
	pub certificate_password: Zeroizing<String>,
	/// Port as typed; parsed when the node is created
	pub port: Option<String>,
	pub host: Option<String>,
}

impl fmt::Debug for RunSettings {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RunSettings")
			.field("certificate_path", &self.certificate_path)
			.field("certificate_password", &"<redacted>")
			.field("port", &self.port)
			.field("host", &self.host)
			.finish()
	}
}

pub fn build_cli() -> Command {
	Command::new(PROGRAM_NAME)
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"Connects to an InterlockLedger node with a client certificate and prints what its \
			 REST API returns for the node, its chains and its mirrors.",
		)
		.arg(
			Arg::new(ARG_CERTIFICATE)
				.help("Path to the client certificate (.pfx) file")
				.value_name("PATH")
				.value_parser(clap::value_parser!(PathBuf))
				.index(1),
		)
		.arg(
			Arg::new(ARG_PASSWORD)
				.help("Password of the certificate file")
				.value_name("PASSWORD")
				.allow_hyphen_values(true)
				.index(2),
		)
		.arg(
			Arg::new(ARG_PORT)
				.help("Port of the node's REST API (default: 32032)")
				.value_name("PORT")
				.allow_hyphen_values(true)
				.index(3),
		)
		.arg(
			Arg::new(ARG_IGNORED)
				.help("Extra arguments are accepted and ignored")
				.num_args(0..)
				.action(ArgAction::Append)
				.allow_hyphen_values(true)
				.hide(true)
				.index(4),
		)
		.arg(
			Arg::new(ARG_HOST)
				.long(ARG_HOST)
				.help("Host of the node (default: localhost)")
				.value_name("HOST"),
		)
		.arg(
			Arg::new(ARG_LOG_LEVEL)
				.long(ARG_LOG_LEVEL)
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new(ARG_NO_WAIT)
				.long(ARG_NO_WAIT)
				.help("Exit without waiting for <ESC>")
				.action(ArgAction::SetTrue),
		)
}

/// Parses the program arguments, including the program name
///
/// # Errors
/// Returns clap's error for unknown options and for `--help` or `--version`
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
	I: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let matches = build_cli().try_get_matches_from(args)?;
	Ok(invocation_from(&matches))
}

fn invocation_from(matches: &ArgMatches) -> Invocation {
	let certificate = matches.get_one::<PathBuf>(ARG_CERTIFICATE);
	let password = matches.get_one::<String>(ARG_PASSWORD);
	let action = match (certificate, password) {
		(Some(certificate), Some(password)) => Action::Run(RunSettings {
			certificate_path: certificate.clone(),
			certificate_password: Zeroizing::new(password.clone()),
			port: matches.get_one::<String>(ARG_PORT).cloned(),
			host: matches.get_one::<String>(ARG_HOST).cloned(),
		}),
		_ => Action::Usage,
	};
	Invocation {
		action,
		log_level: matches.get_one::<String>(ARG_LOG_LEVEL).cloned(),
		wait: !matches.get_flag(ARG_NO_WAIT),
	}
}

/// Prints the message shown when fewer than two arguments are given
pub fn write_usage<W: Write>(mut out: W) -> io::Result<()> {
	writeln!(out, "You must provide at least 2 parameters!")?;
	writeln!(out)?;
	writeln!(
		out,
		"Usage: {} path-to-certificate-pfx-file certificate-password [api-port]",
		PROGRAM_NAME
	)
}

/// Creates the node client
///
/// Values given on the command line win over the ones found through `lookup`.
///
/// # Errors
/// Returns a [`BootstrapError`] if the port or another setting is invalid, or
/// the certificate cannot be loaded
pub fn create_node<F>(settings: &RunSettings, lookup: F) -> Result<RestNode, BootstrapError>
where
	F: Fn(&str) -> Option<String>,
{
	let host = settings.host.as_deref().map(str::trim);
	let port = settings.port.as_deref().map(parse_port).transpose()?;
	// Variables replaced by a command-line value are never read
	let mut config = ClientConfig::from_lookup(
		settings.certificate_path.clone(),
		settings.certificate_password.as_str(),
		|name| match name {
			ENV_HOST if host.is_some() => None,
			ENV_PORT if port.is_some() => None,
			_ => lookup(name),
		},
	)?;
	if let Some(host) = host {
		config = config.with_host(host);
	}
	if let Some(port) = port {
		config = config.with_port(port);
	}
	config.validate()?;
	Ok(RestNode::new(&config)?)
}

/// Connects to the node and runs the demo, writing everything to `out`
///
/// A client that cannot be created is reported on `out` like any other failure.
///
/// # Errors
/// Only failures to write the output are returned
pub async fn run_demo<F, W>(settings: &RunSettings, lookup: F, out: W) -> io::Result<W>
where
	F: Fn(&str) -> Option<String>,
	W: Write,
{
	match create_node(settings, lookup) {
		Ok(node) => {
			info!(certificate = %node.certificate_name(), "Client created");
			let mut service = ExerciseService::new(out);
			service.run(&node).await?;
			Ok(service.into_inner())
		}
		Err(e) => {
			warn!(error = %e, "Failed to create the client");
			let mut out = out;
			writeln!(out, "{}", e)?;
			Ok(out)
		}
	}
}
