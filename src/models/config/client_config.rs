use std::{
	fmt,
	path::{Path, PathBuf},
	time::Duration,
};
use url::Url;
use zeroize::Zeroizing;

use crate::utils::constants::{
	DEFAULT_HOST, DEFAULT_MAX_RETRIES, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, ENV_HOST,
	ENV_MAX_RETRIES, ENV_PORT, ENV_TIMEOUT_SECS,
};

use super::error::ConfigError;

/// Settings needed to reach a node's REST API with a client certificate
#[derive(Clone)]
pub struct ClientConfig {
	/// PKCS#12 (.pfx) file holding the client certificate and its private key
	pub certificate_path: PathBuf,
	pub certificate_password: Zeroizing<String>,
	pub host: String,
	pub port: u16,
	/// Timeout applied to every request
	pub timeout: Duration,
	/// Retries for transient transport failures; zero disables retrying
	pub max_retries: u32,
}

impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("certificate_path", &self.certificate_path)
			.field("certificate_password", &"<redacted>")
			.field("host", &self.host)
			.field("port", &self.port)
			.field("timeout", &self.timeout)
			.field("max_retries", &self.max_retries)
			.finish()
	}
}

impl ClientConfig {
	pub fn new(
		certificate_path: impl Into<PathBuf>,
		certificate_password: impl Into<String>,
	) -> Self {
		Self {
			certificate_path: certificate_path.into(),
			certificate_password: Zeroizing::new(certificate_password.into()),
			host: DEFAULT_HOST.to_string(),
			port: DEFAULT_PORT,
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
			max_retries: DEFAULT_MAX_RETRIES,
		}
	}

	pub fn with_host(mut self, host: impl Into<String>) -> Self {
		self.host = host.into();
		self
	}

	pub fn with_port(mut self, port: u16) -> Self {
		self.port = port;
		self
	}

	/// Builds a configuration, taking host, port, timeout and retries from
	/// `lookup` when it knows them
	///
	/// # Arguments
	/// * `certificate_path` - Path to the client certificate file
	/// * `certificate_password` - Password protecting the certificate
	/// * `lookup` - Resolves variable names such as `IL2_PORT` to values
	///
	/// # Errors
	/// Returns a [`ConfigError::ParseError`] if a variable holds an invalid value
	pub fn from_lookup<F>(
		certificate_path: impl Into<PathBuf>,
		certificate_password: impl Into<String>,
		lookup: F,
	) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Self::new(certificate_path, certificate_password);
		if let Some(host) = lookup(ENV_HOST).filter(|h| !h.trim().is_empty()) {
			config.host = host.trim().to_string();
		}
		if let Some(port) = lookup(ENV_PORT) {
			config.port = parse_port(&port)?;
		}
		if let Some(timeout) = lookup(ENV_TIMEOUT_SECS) {
			let secs = timeout.trim().parse::<u64>().map_err(|e| {
				ConfigError::parse_error(format!("Invalid {} '{}': {}", ENV_TIMEOUT_SECS, timeout, e))
			})?;
			config.timeout = Duration::from_secs(secs);
		}
		if let Some(retries) = lookup(ENV_MAX_RETRIES) {
			config.max_retries = retries.trim().parse::<u32>().map_err(|e| {
				ConfigError::parse_error(format!("Invalid {} '{}': {}", ENV_MAX_RETRIES, retries, e))
			})?;
		}
		Ok(config)
	}

	/// Root of the node's REST API, always ending with `/`
	pub fn base_url(&self) -> Result<Url, ConfigError> {
		let host = if self.host.contains(':') && !self.host.starts_with('[') {
			format!("[{}]", self.host)
		} else {
			self.host.clone()
		};
		Ok(Url::parse(&format!("https://{}:{}/", host, self.port))?)
	}

	/// Name shown for the certificate: the file name without its extension
	pub fn certificate_name(&self) -> String {
		certificate_name_of(&self.certificate_path)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.host.trim().is_empty() {
			return Err(ConfigError::validation_error("Host must not be empty"));
		}
		if self.port == 0 {
			return Err(ConfigError::validation_error("Port must be between 1 and 65535"));
		}
		if self.timeout.is_zero() {
			return Err(ConfigError::validation_error("Timeout must be greater than 0"));
		}
		if !self.certificate_path.is_file() {
			return Err(ConfigError::file_error(format!(
				"Certificate file not found: {}",
				self.certificate_path.display()
			)));
		}
		Ok(())
	}
}

fn certificate_name_of(path: &Path) -> String {
	path.file_stem()
		.map(|stem| stem.to_string_lossy().into_owned())
		.unwrap_or_else(|| path.display().to_string())
}

/// Parses an API port given on the command line or in the environment
pub fn parse_port(value: &str) -> Result<u16, ConfigError> {
	match value.trim().parse::<u16>() {
		Ok(0) => Err(ConfigError::validation_error("Port must be between 1 and 65535")),
		Ok(port) => Ok(port),
		Err(e) => Err(ConfigError::parse_error(format!("Invalid port '{}': {}", value, e))),
	}
}
