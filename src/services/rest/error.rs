//! REST client error types and handling.
//!
//! Covers every way a call to the node can fail: the certificate could not be
//! loaded, the request never got an answer, the node answered with an error
//! status, or the answer could not be decoded.

use reqwest::StatusCode;
use tracing::debug;

use crate::models::ConfigError;

/// Represents possible errors that can occur while calling the node
#[derive(Debug)]
pub enum RestClientError {
	/// The client certificate could not be read or is not a valid PKCS#12 bundle
	CertificateError(String),

	/// Errors related to network connectivity issues
	ConnectionError(String),

	/// The request was rejected before being sent
	RequestError(String),

	/// The node answered with a non-success status
	///
	/// Contains the status code and the response text
	StatusError(u16, String),

	/// The response body did not match the expected shape
	DecodeError(String),

	/// Internal errors within the client
	InternalError(String),
}

impl RestClientError {
	/// Formats the error message based on the error type
	fn format_message(&self) -> String {
		match self {
			Self::CertificateError(msg) => format!("Certificate error: {}", msg),
			Self::ConnectionError(msg) => format!("Connection error: {}", msg),
			Self::RequestError(msg) => format!("Request error: {}", msg),
			Self::StatusError(status, msg) if msg.is_empty() => {
				format!("Node returned status {}", status_text(*status))
			}
			Self::StatusError(status, msg) => {
				format!("Node returned status {}: {}", status_text(*status), msg)
			}
			Self::DecodeError(msg) => format!("Decode error: {}", msg),
			Self::InternalError(msg) => format!("Internal error: {}", msg),
		}
	}

	/// Creates a new certificate error with logging
	pub fn certificate_error(msg: impl Into<String>) -> Self {
		let error = Self::CertificateError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new connection error with logging
	pub fn connection_error(msg: impl Into<String>) -> Self {
		let error = Self::ConnectionError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new request error with logging
	pub fn request_error(msg: impl Into<String>) -> Self {
		let error = Self::RequestError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new status error with logging
	pub fn status_error(status: u16, msg: impl Into<String>) -> Self {
		let error = Self::StatusError(status, msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new decode error with logging
	pub fn decode_error(msg: impl Into<String>) -> Self {
		let error = Self::DecodeError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// Creates a new internal error with logging
	pub fn internal_error(msg: impl Into<String>) -> Self {
		let error = Self::InternalError(msg.into());
		debug!("{}", error.format_message());
		error
	}

	/// HTTP status returned by the node, if the failure was an error status
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::StatusError(status, _) => Some(*status),
			_ => None,
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.status() == Some(StatusCode::NOT_FOUND.as_u16())
	}
}

fn status_text(status: u16) -> String {
	match StatusCode::from_u16(status)
		.ok()
		.and_then(|code| code.canonical_reason())
	{
		Some(reason) => format!("{} {}", status, reason),
		None => status.to_string(),
	}
}

// Standard error trait implementations
impl std::fmt::Display for RestClientError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl std::error::Error for RestClientError {}

impl From<reqwest::Error> for RestClientError {
	fn from(err: reqwest::Error) -> Self {
		if err.is_decode() {
			Self::decode_error(err.to_string())
		} else if err.is_builder() {
			Self::request_error(err.to_string())
		} else {
			Self::connection_error(err.to_string())
		}
	}
}

impl From<reqwest_middleware::Error> for RestClientError {
	fn from(err: reqwest_middleware::Error) -> Self {
		match err {
			reqwest_middleware::Error::Reqwest(err) => err.into(),
			reqwest_middleware::Error::Middleware(err) => Self::connection_error(err.to_string()),
		}
	}
}

impl From<serde_json::Error> for RestClientError {
	fn from(err: serde_json::Error) -> Self {
		Self::decode_error(err.to_string())
	}
}

impl From<ConfigError> for RestClientError {
	fn from(err: ConfigError) -> Self {
		Self::request_error(err.to_string())
	}
}
