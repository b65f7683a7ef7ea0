//! Utility modules for common functionality.
//!
//! This module provides various utility functions and types that are used across
//! the application:
//!
//! - console: Exit prompt handling
//! - constants: Constants for the application
//! - http: Retryable HTTP client construction
//! - logging: Logging utilities

pub mod console;
pub mod constants;
pub mod http;
pub mod logging;

pub use constants::*;
pub use http::{create_retryable_http_client, HttpRetryConfig};
