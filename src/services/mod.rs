//! Services talking to the node.
//!
//! - `rest`: the REST API client
//! - `exercise`: the demo run printing what the client retrieves

pub mod exercise;
pub mod rest;
