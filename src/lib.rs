//! Client for the REST API of an InterlockLedger node.
//!
//! The library exposes a typed client for nodes, chains and the chain stores,
//! plus the demo run used by the `rest_client` binary.
//!
//! # Modules
//! - `bootstrap`: command line parsing and client creation
//! - `models`: configuration and the models exchanged with the node
//! - `services`: the REST client and the demo run
//! - `utils`: constants, HTTP, logging and console helpers

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
