use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, Jitter, RetryTransientMiddleware};
use std::time::Duration;

use crate::utils::constants::DEFAULT_MAX_RETRIES;

/// Configuration for HTTP retry policies
#[derive(Debug, Clone)]
pub struct HttpRetryConfig {
	/// Maximum number of retries for transient errors
	pub max_retries: u32,
	/// Base duration for exponential backoff calculations
	pub base_for_backoff: u32,
	/// Initial backoff duration before the first retry
	pub initial_backoff: Duration,
	/// Maximum backoff duration for retries
	pub max_backoff: Duration,
	/// Jitter to apply to the backoff duration
	pub jitter: Jitter,
}

impl Default for HttpRetryConfig {
	fn default() -> Self {
		Self {
			max_retries: DEFAULT_MAX_RETRIES,
			base_for_backoff: 2,
			initial_backoff: Duration::from_millis(250),
			max_backoff: Duration::from_secs(10),
			jitter: Jitter::Full,
		}
	}
}

impl HttpRetryConfig {
	pub fn with_max_retries(max_retries: u32) -> Self {
		Self {
			max_retries,
			..Self::default()
		}
	}
}

/// Wraps a base HTTP client with transient-failure retries
///
/// # Parameters:
/// - `config`: Configuration for retry policies
/// - `base_client`: The base HTTP client to use, already carrying TLS identity and timeouts
///
/// # Returns
/// A `ClientWithMiddleware` that includes retry capabilities
pub fn create_retryable_http_client(
	config: &HttpRetryConfig,
	base_client: reqwest::Client,
) -> ClientWithMiddleware {
	let retry_policy = ExponentialBackoff::builder()
		.base(config.base_for_backoff)
		.retry_bounds(config.initial_backoff, config.max_backoff)
		.jitter(config.jitter)
		.build_with_max_retries(config.max_retries);

	ClientBuilder::new(base_client)
		.with(RetryTransientMiddleware::new_with_policy(retry_policy))
		.build()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_does_not_retry() {
		let config = HttpRetryConfig::default();
		assert_eq!(config.max_retries, 0);
		assert_eq!(HttpRetryConfig::with_max_retries(3).max_retries, 3);
	}

	#[tokio::test]
	async fn test_retryable_client_retries_server_errors() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("GET", "/")
			.with_status(503)
			.expect(3)
			.create_async()
			.await;

		let config = HttpRetryConfig {
			max_retries: 2,
			initial_backoff: Duration::from_millis(1),
			max_backoff: Duration::from_millis(5),
			..HttpRetryConfig::default()
		};
		let client = create_retryable_http_client(&config, reqwest::Client::new());
		let response = client.get(server.url()).send().await.unwrap();

		assert_eq!(response.status().as_u16(), 503);
		mock.assert_async().await;
	}

	#[tokio::test]
	async fn test_default_client_sends_once() {
		let mut server = mockito::Server::new_async().await;
		let mock = server
			.mock("GET", "/")
			.with_status(503)
			.expect(1)
			.create_async()
			.await;

		let client = create_retryable_http_client(&HttpRetryConfig::default(), reqwest::Client::new());
		let response = client.get(server.url()).send().await.unwrap();

		assert_eq!(response.status().as_u16(), 503);
		mock.assert_async().await;
	}
}
