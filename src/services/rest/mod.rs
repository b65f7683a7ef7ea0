//! Typed client for an InterlockLedger node's REST API.
//!
//! - [`RestNode`]: node details, apps, peers, chains, mirrors and chain creation
//! - [`RestChain`]: per-chain summary, keys, documents, interlocks and records
//! - [`JsonStore`] and [`OpaqueStore`]: the chain's JSON document and opaque payload stores
//!
//! All of them share one [`HttpTransport`] authenticated with the client certificate.

mod chain;
mod error;
mod json_store;
mod node;
mod opaque_store;
pub mod transport;

pub use chain::RestChain;
pub use error::RestClientError;
pub use json_store::JsonStore;
pub use node::RestNode;
pub use opaque_store::{OpaqueQuery, OpaqueStore};
pub use transport::HttpTransport;
