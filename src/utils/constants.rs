//! Constants for the application

/// Host used when none is configured
pub const DEFAULT_HOST: &str = "localhost";

/// Default port of a node's REST API
pub const DEFAULT_PORT: u16 = 32032;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Transport failures are not retried unless configured, so writes are never replayed
pub const DEFAULT_MAX_RETRIES: u32 = 0;

pub const ENV_HOST: &str = "IL2_HOST";
pub const ENV_PORT: &str = "IL2_PORT";
pub const ENV_TIMEOUT_SECS: &str = "IL2_TIMEOUT_SECS";
pub const ENV_MAX_RETRIES: &str = "IL2_MAX_RETRIES";

/// Name of the binary as shown in the usage line
pub const PROGRAM_NAME: &str = "rest_client";
