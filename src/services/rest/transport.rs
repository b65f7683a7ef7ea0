//! HTTP transport for the node's REST API.
//!
//! Every call made by [`RestNode`](super::RestNode), [`RestChain`](super::RestChain)
//! and the stores goes through a shared [`HttpTransport`], which provides:
//! - Client-certificate (PKCS#12) authentication
//! - Acceptance of the node's self-signed server certificate
//! - Optional retries of transient failures
//! - Mapping of error statuses and undecodable bodies to [`RestClientError`]

use reqwest::{
	header::{HeaderMap, ACCEPT, CONTENT_TYPE},
	Identity, Method,
};
use reqwest_middleware::ClientWithMiddleware;
use serde::{de::DeserializeOwned, Serialize};
use std::{fmt, path::Path, time::Duration};
use tracing::debug;
use url::Url;
use zeroize::Zeroizing;

use crate::{
	models::ClientConfig,
	services::rest::RestClientError,
	utils::{create_retryable_http_client, HttpRetryConfig},
};

pub const JSON: &str = "application/json";
pub const OCTET_STREAM: &str = "application/octet-stream";
pub const PLAIN_TEXT: &str = "text/plain";

/// Longest error text kept from a failed response
const MAX_ERROR_TEXT: usize = 512;

/// Query string pairs appended to a request
pub type Query = Vec<(&'static str, String)>;

/// Body of a request sent to the node
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
	Empty,
	Json(serde_json::Value),
	Bytes(Vec<u8>),
}

/// A successful response, fully read
#[derive(Debug, Clone)]
pub struct RawResponse {
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}

impl RawResponse {
	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).and_then(|value| value.to_str().ok())
	}

	pub fn content_type(&self) -> Option<&str> {
		self.header(CONTENT_TYPE.as_str())
	}

	pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestClientError> {
		Ok(serde_json::from_slice(&self.body)?)
	}

	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

/// Loads a client certificate and its private key from a PKCS#12 file
///
/// # Errors
/// Returns a [`RestClientError::CertificateError`] if the file cannot be read,
/// the password is wrong, or the content is not PKCS#12
pub fn load_identity(path: &Path, password: &str) -> Result<Identity, RestClientError> {
	let der = Zeroizing::new(std::fs::read(path).map_err(|e| {
		RestClientError::certificate_error(format!("Failed to read {}: {}", path.display(), e))
	})?);
	Identity::from_pkcs12_der(&der, password).map_err(|e| {
		RestClientError::certificate_error(format!("Failed to load {}: {}", path.display(), e))
	})
}

/// HTTP client bound to the root URL of one node
#[derive(Clone)]
pub struct HttpTransport {
	client: ClientWithMiddleware,
	base_url: Url,
}

impl fmt::Debug for HttpTransport {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HttpTransport")
			.field("base_url", &self.base_url.as_str())
			.finish()
	}
}

impl HttpTransport {
	/// Creates a transport for the node at `base_url`
	///
	/// # Arguments
	/// * `base_url` - Root of the REST API; a missing trailing `/` is added
	/// * `identity` - Client certificate presented during the TLS handshake
	/// * `timeout` - Timeout applied to every request
	/// * `retry` - Retry policy for transient failures
	pub fn new(
		mut base_url: Url,
		identity: Option<Identity>,
		timeout: Duration,
		retry: &HttpRetryConfig,
	) -> Result<Self, RestClientError> {
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}

		// Nodes serve self-signed certificates
		let mut builder = reqwest::Client::builder()
			.timeout(timeout)
			.connect_timeout(timeout.min(Duration::from_secs(10)))
			.danger_accept_invalid_certs(true);
		if let Some(identity) = identity {
			builder = builder.use_native_tls().identity(identity);
		}
		let base_client = builder.build().map_err(|e| {
			RestClientError::internal_error(format!("Failed to create HTTP client: {}", e))
		})?;

		Ok(Self {
			client: create_retryable_http_client(retry, base_client),
			base_url,
		})
	}

	/// Creates a transport authenticated with the configured certificate
	pub fn from_config(config: &ClientConfig) -> Result<Self, RestClientError> {
		let identity = load_identity(&config.certificate_path, &config.certificate_password)?;
		Self::new(
			config.base_url()?,
			Some(identity),
			config.timeout,
			&HttpRetryConfig::with_max_retries(config.max_retries),
		)
	}

	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	fn url_for(&self, path: &str) -> Result<Url, RestClientError> {
		self.base_url
			.join(path.trim_start_matches('/'))
			.map_err(|e| RestClientError::request_error(format!("Invalid path '{}': {}", path, e)))
	}

	/// Sends a request and reads the whole response
	///
	/// # Arguments
	/// * `method` - HTTP method
	/// * `path` - Path relative to the API root
	/// * `query` - Query string pairs
	/// * `accept` - Media type asked for in the `Accept` header
	/// * `body` - Request body
	///
	/// # Returns
	/// * `Result<RawResponse, RestClientError>` - The response, or an error for
	///   transport failures and non-success statuses
	pub async fn send_raw_request(
		&self,
		method: Method,
		path: &str,
		query: &[(&'static str, String)],
		accept: &str,
		body: RequestBody,
	) -> Result<RawResponse, RestClientError> {
		let url = self.url_for(path)?;
		debug!(method = %method, url = %url, "Sending request to node");

		let mut request = self.client.request(method, url).header(ACCEPT, accept);
		if !query.is_empty() {
			request = request.query(query);
		}
		request = match body {
			RequestBody::Empty => request,
			RequestBody::Json(value) => request.json(&value),
			RequestBody::Bytes(bytes) => request.header(CONTENT_TYPE, OCTET_STREAM).body(bytes),
		};

		let response = request.send().await?;
		let status = response.status();
		let headers = response.headers().clone();
		let body = response.bytes().await?.to_vec();

		if !status.is_success() {
			return Err(RestClientError::status_error(
				status.as_u16(),
				error_text(&body),
			));
		}

		Ok(RawResponse {
			headers,
			body,
		})
	}

	pub async fn get_json<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &[(&'static str, String)],
	) -> Result<T, RestClientError> {
		self.send_raw_request(Method::GET, path, query, JSON, RequestBody::Empty)
			.await?
			.json()
	}

	pub async fn post_json<B, T>(
		&self,
		path: &str,
		query: &[(&'static str, String)],
		body: &B,
	) -> Result<T, RestClientError>
	where
		B: Serialize + ?Sized,
		T: DeserializeOwned,
	{
		let body = serde_json::to_value(body).map_err(|e| {
			RestClientError::request_error(format!("Failed to serialize request body: {}", e))
		})?;
		self.send_raw_request(Method::POST, path, query, JSON, RequestBody::Json(body))
			.await?
			.json()
	}

	pub async fn post_bytes<T: DeserializeOwned>(
		&self,
		path: &str,
		query: &[(&'static str, String)],
		bytes: Vec<u8>,
	) -> Result<T, RestClientError> {
		self.send_raw_request(Method::POST, path, query, JSON, RequestBody::Bytes(bytes))
			.await?
			.json()
	}

	pub async fn get_raw(&self, path: &str, accept: &str) -> Result<RawResponse, RestClientError> {
		self.send_raw_request(Method::GET, path, &[], accept, RequestBody::Empty)
			.await
	}
}

/// Extracts a readable message from an error response body
///
/// Nodes answer errors with problem-details JSON when they can; anything else
/// is kept as (truncated) text.
fn error_text(body: &[u8]) -> String {
	if let Ok(value) = serde_json::from_slice::<serde_json::Value>(body) {
		for field in ["detail", "message", "title"] {
			if let Some(text) = value.get(field).and_then(|v| v.as_str()) {
				return text.to_string();
			}
		}
	}
	let text = String::from_utf8_lossy(body);
	let text = text.trim();
	match text.char_indices().nth(MAX_ERROR_TEXT) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_string(),
	}
}

/// Escapes a value used as a single path segment
pub(crate) fn segment(value: &str) -> String {
	urlencoding::encode(value).into_owned()
}
