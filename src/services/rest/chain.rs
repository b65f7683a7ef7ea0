//! Chain-level operations of the REST API.

use std::{fmt, sync::Arc};

use crate::{
	models::{
		ChainIdModel, ChainSummaryModel, DocumentDetailsModel, ForceInterlockModel,
		InterlockingRecordModel, KeyModel, KeyPermitModel, NewRecordModel, PageOf,
		RawDocumentModel, RecordModel, RecordModelAsJson,
	},
	services::rest::{
		transport::{segment, HttpTransport, Query, OCTET_STREAM, PLAIN_TEXT},
		JsonStore, OpaqueStore, RestClientError,
	},
};

/// A chain (or mirror) hosted by the node
#[derive(Clone, Debug)]
pub struct RestChain {
	transport: Arc<HttpTransport>,
	model: ChainIdModel,
}

impl fmt::Display for RestChain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.model, f)
	}
}

impl RestChain {
	pub(crate) fn new(transport: Arc<HttpTransport>, model: ChainIdModel) -> Self {
		Self { transport, model }
	}

	pub fn id(&self) -> &str {
		&self.model.id
	}

	pub fn name(&self) -> &str {
		&self.model.name
	}

	pub fn is_closed(&self) -> bool {
		self.model.closed
	}

	fn chain_path(&self, suffix: &str) -> String {
		format!("chain/{}{}", segment(&self.model.id), suffix)
	}

	fn records_path(&self, suffix: &str) -> String {
		format!("records@{}{}", segment(&self.model.id), suffix)
	}

	fn document_path(&self, file_id: &str) -> String {
		format!("documents@{}/{}", segment(&self.model.id), segment(file_id))
	}

	pub async fn summary(&self) -> Result<ChainSummaryModel, RestClientError> {
		self.transport.get_json(&self.chain_path(""), &[]).await
	}

	pub async fn active_apps(&self) -> Result<Vec<u64>, RestClientError> {
		self.transport
			.get_json(&self.chain_path("/activeApps"), &[])
			.await
	}

	/// Enables more apps on the chain, returning the apps now active
	pub async fn add_active_apps(&self, apps: &[u64]) -> Result<Vec<u64>, RestClientError> {
		self.transport
			.post_json(&self.chain_path("/activeApps"), &[], apps)
			.await
	}

	pub async fn permitted_keys(&self) -> Result<Vec<KeyModel>, RestClientError> {
		self.transport.get_json(&self.chain_path("/key"), &[]).await
	}

	/// Permits new keys, returning every key now permitted on the chain
	///
	/// # Errors
	/// Returns a [`RestClientError::RequestError`] without calling the node if
	/// no key is given or a key is incomplete
	pub async fn permit_keys(
		&self,
		keys: &[KeyPermitModel],
	) -> Result<Vec<KeyModel>, RestClientError> {
		if keys.is_empty() {
			return Err(RestClientError::request_error("No keys to permit"));
		}
		for key in keys {
			key.validate().map_err(RestClientError::request_error)?;
		}
		self.transport
			.post_json(&self.chain_path("/key"), &[], keys)
			.await
	}

	pub async fn documents(&self) -> Result<Vec<DocumentDetailsModel>, RestClientError> {
		self.transport
			.get_json(&format!("documents@{}", segment(&self.model.id)), &[])
			.await
	}

	pub async fn document_as_plain(&self, file_id: &str) -> Result<String, RestClientError> {
		Ok(self
			.transport
			.get_raw(&self.document_path(file_id), PLAIN_TEXT)
			.await?
			.text())
	}

	pub async fn document_as_raw(
		&self,
		file_id: &str,
	) -> Result<RawDocumentModel, RestClientError> {
		let response = self
			.transport
			.get_raw(&self.document_path(file_id), OCTET_STREAM)
			.await?;
		let name = response
			.header("content-disposition")
			.and_then(file_name_from_disposition)
			.unwrap_or_else(|| file_id.to_string());
		let content_type = response
			.content_type()
			.unwrap_or(OCTET_STREAM)
			.to_string();
		Ok(RawDocumentModel {
			name,
			content_type,
			content: response.body,
		})
	}

	/// Interlocks of other chains stored in this chain
	pub async fn interlocks(&self) -> Result<PageOf<InterlockingRecordModel>, RestClientError> {
		self.transport
			.get_json(&self.chain_path("/interlockings"), &[])
			.await
	}

	pub async fn force_interlock(
		&self,
		model: &ForceInterlockModel,
	) -> Result<InterlockingRecordModel, RestClientError> {
		if model.target_chain.trim().is_empty() {
			return Err(RestClientError::request_error(
				"Target chain is required to force an interlock",
			));
		}
		self.transport
			.post_json(&self.chain_path("/interlockings"), &[], model)
			.await
	}

	/// Records with serials in `first..=last`
	pub async fn records_from_to(
		&self,
		first: u64,
		last: u64,
	) -> Result<PageOf<RecordModel>, RestClientError> {
		self.transport
			.get_json(&self.records_path(""), &serial_range(first, Some(last))?)
			.await
	}

	pub async fn records_from(&self, first: u64) -> Result<PageOf<RecordModel>, RestClientError> {
		self.transport
			.get_json(&self.records_path(""), &serial_range(first, None)?)
			.await
	}

	pub async fn records_as_json_from_to(
		&self,
		first: u64,
		last: u64,
	) -> Result<PageOf<RecordModelAsJson>, RestClientError> {
		self.transport
			.get_json(&self.records_path("/asJson"), &serial_range(first, Some(last))?)
			.await
	}

	pub async fn add_record(&self, model: &NewRecordModel) -> Result<RecordModel, RestClientError> {
		self.transport
			.post_json(&self.records_path(""), &[], model)
			.await
	}

	pub fn json_store(&self) -> JsonStore {
		JsonStore::new(self.transport.clone(), self.model.id.clone())
	}

	pub fn opaque_store(&self) -> OpaqueStore {
		OpaqueStore::new(self.transport.clone(), self.model.id.clone())
	}
}

fn serial_range(first: u64, last: Option<u64>) -> Result<Query, RestClientError> {
	let mut query = vec![("firstSerial", first.to_string())];
	if let Some(last) = last {
		if last < first {
			return Err(RestClientError::request_error(format!(
				"Last serial {} comes before first serial {}",
				last, first
			)));
		}
		query.push(("lastSerial", last.to_string()));
	}
	Ok(query)
}

fn file_name_from_disposition(disposition: &str) -> Option<String> {
	disposition
		.split(';')
		.map(str::trim)
		.find_map(|part| part.strip_prefix("filename="))
		.map(|name| name.trim_matches('"').to_string())
		.filter(|name| !name.is_empty())
}
