use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata of a record holding an opaque (uninterpreted) payload
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpaqueRecordModel {
	pub application_id: u64,
	pub chain_id: String,
	#[serde(default)]
	pub created_at: Option<DateTime<FixedOffset>>,
	pub payload_type_id: u64,
	pub serial: u64,
	#[serde(default)]
	pub last_changed_serial: Option<u64>,
}

impl fmt::Display for OpaqueRecordModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Opaque record #{} app #{} type #{} in {}",
			self.serial, self.application_id, self.payload_type_id, self.chain_id
		)
	}
}

/// Page of opaque records plus the serial of the last change seen by the query
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageOfOpaqueRecordsModel {
	#[serde(default)]
	pub items: Vec<OpaqueRecordModel>,
	#[serde(default)]
	pub page: u32,
	#[serde(default)]
	pub page_size: u32,
	#[serde(default)]
	pub total_number_of_pages: u32,
	#[serde(default)]
	pub last_to_first: bool,
	#[serde(default)]
	pub last_changed_record_serial: Option<u64>,
}

impl PageOfOpaqueRecordsModel {
	pub fn first(&self) -> Option<&OpaqueRecordModel> {
		self.items.first()
	}
}

/// Payload bytes of an opaque record with the metadata sent alongside them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaquePayload {
	pub app_id: u64,
	pub payload_type_id: u64,
	pub created_at: Option<DateTime<FixedOffset>>,
	pub content: Vec<u8>,
}

impl OpaquePayload {
	/// Reads up to the first eight content bytes as a big-endian integer
	pub fn big_endian_value(&self) -> u64 {
		self.content
			.iter()
			.take(8)
			.fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte))
	}
}
