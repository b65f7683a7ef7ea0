//! Client configuration.
//!
//! Values come from the command line, falling back to `IL2_*` environment
//! variables (optionally loaded from a `.env` file) and then to defaults.

mod client_config;
mod error;

pub use client_config::{parse_port, ClientConfig};
pub use error::ConfigError;
