//! Opaque payload store of a chain.

use chrono::DateTime;
use std::sync::Arc;

use crate::{
	models::{OpaquePayload, OpaqueRecordModel, PageOfOpaqueRecordsModel, PageRequest},
	services::rest::{
		transport::{segment, HttpTransport, Query, RawResponse, OCTET_STREAM},
		RestClientError,
	},
};

const APP_ID_HEADER: &str = "x-app-id";
const PAYLOAD_TYPE_ID_HEADER: &str = "x-payload-type-id";
const CREATED_AT_HEADER: &str = "x-created-at";

/// Filters for [`OpaqueStore::query_records_from`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpaqueQuery {
	pub app_id: u64,
	/// Empty matches every payload type
	pub payload_type_ids: Vec<u64>,
	pub how_many: Option<u64>,
	/// Only records changed after this serial
	pub last_changed_record_serial: Option<u64>,
	pub page: PageRequest,
}

impl OpaqueQuery {
	pub fn for_app(app_id: u64) -> Self {
		Self {
			app_id,
			..Self::default()
		}
	}

	fn to_query(&self) -> Query {
		let mut query = vec![("appId", self.app_id.to_string())];
		for type_id in &self.payload_type_ids {
			query.push(("payloadTypeIds", type_id.to_string()));
		}
		if let Some(how_many) = self.how_many {
			query.push(("howMany", how_many.to_string()));
		}
		if let Some(serial) = self.last_changed_record_serial {
			query.push(("lastChangedRecordSerial", serial.to_string()));
		}
		self.page.append_to(&mut query);
		query
	}
}

/// Stores and retrieves payloads the node keeps without interpreting them
#[derive(Clone, Debug)]
pub struct OpaqueStore {
	transport: Arc<HttpTransport>,
	chain_id: String,
}

impl OpaqueStore {
	pub(crate) fn new(transport: Arc<HttpTransport>, chain_id: String) -> Self {
		Self {
			transport,
			chain_id,
		}
	}

	fn path(&self, suffix: &str) -> String {
		format!("opaque/{}{}", segment(&self.chain_id), suffix)
	}

	/// Appends an opaque payload to the chain
	///
	/// # Arguments
	/// * `app_id` - Application the payload belongs to
	/// * `payload_type_id` - Application-defined payload type
	/// * `last_changed_record_serial` - Serial of a record this one changes, if any
	/// * `payload` - The payload bytes
	pub async fn add_record(
		&self,
		app_id: u64,
		payload_type_id: u64,
		last_changed_record_serial: Option<u64>,
		payload: Vec<u8>,
	) -> Result<OpaqueRecordModel, RestClientError> {
		if payload.is_empty() {
			return Err(RestClientError::request_error("Opaque payload must not be empty"));
		}
		let mut query = vec![
			("appId", app_id.to_string()),
			("payloadTypeId", payload_type_id.to_string()),
		];
		if let Some(serial) = last_changed_record_serial {
			query.push(("lastChangedRecordSerial", serial.to_string()));
		}
		self.transport
			.post_bytes(&self.path(""), &query, payload)
			.await
	}

	/// Retrieves the payload of the record at `serial`
	///
	/// Returns `Ok(None)` when the node has no opaque payload at that serial.
	pub async fn retrieve_single_payload(
		&self,
		serial: u64,
	) -> Result<Option<OpaquePayload>, RestClientError> {
		match self
			.transport
			.get_raw(&self.path(&format!("/{}", serial)), OCTET_STREAM)
			.await
		{
			Ok(response) => payload_from(response).map(Some),
			Err(e) if e.is_not_found() => Ok(None),
			Err(e) => Err(e),
		}
	}

	pub async fn query_records_from(
		&self,
		query: &OpaqueQuery,
	) -> Result<PageOfOpaqueRecordsModel, RestClientError> {
		self.transport
			.get_json(&self.path("/query"), &query.to_query())
			.await
	}
}

fn payload_from(response: RawResponse) -> Result<OpaquePayload, RestClientError> {
	let number = |name: &str| -> Result<u64, RestClientError> {
		response
			.header(name)
			.ok_or_else(|| RestClientError::decode_error(format!("Missing {} header", name)))?
			.trim()
			.parse::<u64>()
			.map_err(|e| RestClientError::decode_error(format!("Invalid {} header: {}", name, e)))
	};
	let app_id = number(APP_ID_HEADER)?;
	let payload_type_id = number(PAYLOAD_TYPE_ID_HEADER)?;
	let created_at = match response.header(CREATED_AT_HEADER) {
		Some(text) => Some(DateTime::parse_from_rfc3339(text.trim()).map_err(|e| {
			RestClientError::decode_error(format!("Invalid {} header: {}", CREATED_AT_HEADER, e))
		})?),
		None => None,
	};
	Ok(OpaquePayload {
		app_id,
		payload_type_id,
		created_at,
		content: response.body,
	})
}
