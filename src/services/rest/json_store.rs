//! JSON document store of a chain.

use std::sync::Arc;

use crate::{
	models::{AllowedReadersRecordModel, JsonDocumentModel, PageOf, PageRequest},
	services::rest::{
		transport::{segment, HttpTransport, Query},
		RestClientError,
	},
};

/// Stores and retrieves JSON documents kept in a chain
///
/// The node encrypts stored documents for the chain's allowed readers.
#[derive(Clone, Debug)]
pub struct JsonStore {
	transport: Arc<HttpTransport>,
	chain_id: String,
}

impl JsonStore {
	pub(crate) fn new(transport: Arc<HttpTransport>, chain_id: String) -> Self {
		Self {
			transport,
			chain_id,
		}
	}

	fn path(&self, suffix: &str) -> String {
		format!("jsonDocuments@{}{}", segment(&self.chain_id), suffix)
	}

	/// Stores a JSON value as a new document record
	pub async fn add(
		&self,
		document: &serde_json::Value,
	) -> Result<JsonDocumentModel, RestClientError> {
		if document.is_null() {
			return Err(RestClientError::request_error("Cannot store a null JSON document"));
		}
		self.transport.post_json(&self.path(""), &[], document).await
	}

	pub async fn retrieve(&self, serial: u64) -> Result<JsonDocumentModel, RestClientError> {
		self.transport
			.get_json(&self.path(&format!("/{}", serial)), &[])
			.await
	}

	/// Lists the allowed-readers records of the chain, optionally for one context
	pub async fn retrieve_allowed_readers(
		&self,
		context_id: Option<&str>,
		page: PageRequest,
	) -> Result<PageOf<AllowedReadersRecordModel>, RestClientError> {
		let mut query: Query = Vec::new();
		if let Some(context_id) = context_id {
			query.push(("contextId", context_id.to_string()));
		}
		page.append_to(&mut query);
		self.transport.get_json(&self.path("/allow"), &query).await
	}
}
