//! Configuration error types.
//!
//! Raised while turning command-line arguments and `IL2_*` environment
//! variables into a [`ClientConfig`](super::ClientConfig).

use std::{error::Error, fmt};
use tracing::debug;

/// Errors that can occur while assembling the client configuration
#[derive(Debug)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A setting was read but is out of range, e.g. port zero
	ValidationError(String),

	/// A setting could not be parsed, e.g. a non-numeric port
	ParseError(String),

	/// The certificate file is missing or unreadable
	FileError(String),
}

impl ConfigError {
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Invalid setting: {}", msg),
			Self::ParseError(msg) => format!("Unreadable setting: {}", msg),
			Self::FileError(msg) => format!("Certificate file error: {}", msg),
		}
	}

	/// Creates a validation error, logged at debug level
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a parse error, logged at debug level
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a file error, logged at debug level
	pub fn file_error(msg: impl Into<String>) -> Self {
		let error = Self::FileError(msg.into());
		debug!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.format_message())
	}
}

impl Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
	fn from(err: std::io::Error) -> Self {
		Self::file_error(err.to_string())
	}
}

impl From<url::ParseError> for ConfigError {
	fn from(err: url::ParseError) -> Self {
		Self::parse_error(format!("node address: {}", err))
	}
}
