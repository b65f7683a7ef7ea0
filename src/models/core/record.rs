//! Record metadata shared by every record-shaped response of the node.
//!
//! A record is a single entry of a chain. The node reports the same set of
//! metadata fields for plain records, interlocks, JSON documents and the like,
//! so those models flatten [`RecordMetadata`] into their own fields.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Classification of a record inside its chain
///
/// Most records are of the type `Data`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum RecordType {
	#[default]
	Data,
	Root,
	Closing,
	EmergencyClosing,
	Corrupted,
}

impl fmt::Display for RecordType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Error returned when a universal record reference cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid record reference '{reference}': {reason}")]
pub struct ParseReferenceError {
	pub reference: String,
	pub reason: &'static str,
}

/// Record universal reference, written as `network:chainId@serial`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniversalRecordReference {
	pub network: String,
	pub chain_id: String,
	pub serial: u64,
}

impl UniversalRecordReference {
	pub fn new(network: impl Into<String>, chain_id: impl Into<String>, serial: u64) -> Self {
		Self {
			network: network.into(),
			chain_id: chain_id.into(),
			serial,
		}
	}
}

impl FromStr for UniversalRecordReference {
	type Err = ParseReferenceError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let fail = |reason| ParseReferenceError {
			reference: s.to_string(),
			reason,
		};
		let (network_and_chain, serial) = s.rsplit_once('@').ok_or_else(|| fail("missing '@'"))?;
		let (network, chain_id) = network_and_chain
			.split_once(':')
			.ok_or_else(|| fail("missing ':'"))?;
		if network.is_empty() {
			return Err(fail("empty network"));
		}
		if chain_id.is_empty() {
			return Err(fail("empty chain id"));
		}
		let serial = serial.parse::<u64>().map_err(|_| fail("serial is not a number"))?;
		Ok(Self::new(network, chain_id, serial))
	}
}

impl fmt::Display for UniversalRecordReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}@{}", self.network, self.chain_id, self.serial)
	}
}

impl Serialize for UniversalRecordReference {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for UniversalRecordReference {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let text = String::deserialize(deserializer)?;
		text.parse().map_err(serde::de::Error::custom)
	}
}

/// Metadata fields carried by every record model
///
/// `chainId`, `network` and `reference` are required; the remaining fields
/// fall back to their defaults when the node omits them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
	/// Application id this record is associated with
	#[serde(default)]
	pub application_id: u64,
	/// Chain id that owns this record
	pub chain_id: String,
	/// Time of record creation
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub created_at: Option<DateTime<FixedOffset>>,
	/// Network the owning chain lives in
	pub network: String,
	/// The payload's tag id
	#[serde(default)]
	pub payload_tag_id: u64,
	pub reference: UniversalRecordReference,
	/// Zero for the first record of a chain
	#[serde(default)]
	pub serial: u64,
	#[serde(default, rename = "type")]
	pub record_type: RecordType,
	/// Version of the record structure
	#[serde(default)]
	pub version: u16,
}

impl fmt::Display for RecordMetadata {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Record #{} [{}] {} app #{} tag #{}",
			self.serial, self.reference, self.record_type, self.application_id, self.payload_tag_id
		)?;
		if let Some(created_at) = self.created_at {
			write!(f, " created at {}", created_at.to_rfc3339())?;
		}
		Ok(())
	}
}

/// Record with its raw payload bytes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordModel {
	#[serde(flatten)]
	pub metadata: RecordMetadata,
	#[serde(default, with = "base64_bytes")]
	pub payload_bytes: Vec<u8>,
}

impl fmt::Display for RecordModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} with {} payload bytes", self.metadata, self.payload_bytes.len())
	}
}

/// Record with its payload rendered as JSON by the node
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordModelAsJson {
	#[serde(flatten)]
	pub metadata: RecordMetadata,
	#[serde(default)]
	pub payload: serde_json::Value,
}

impl fmt::Display for RecordModelAsJson {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.metadata, self.payload)
	}
}

/// Body of a request adding a raw record to a chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecordModel {
	pub application_id: u64,
	pub payload_tag_id: u64,
	#[serde(rename = "type")]
	pub record_type: RecordType,
	#[serde(with = "base64_bytes")]
	pub payload_bytes: Vec<u8>,
}

impl NewRecordModel {
	pub fn new(application_id: u64, payload_tag_id: u64, payload_bytes: Vec<u8>) -> Self {
		Self {
			application_id,
			payload_tag_id,
			record_type: RecordType::Data,
			payload_bytes,
		}
	}
}

/// Serde adapter for byte arrays sent as standard base64 strings
pub(crate) mod base64_bytes {
	use base64::{engine::general_purpose::STANDARD, Engine as _};
	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&STANDARD.encode(bytes))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
		let text = Option::<String>::deserialize(deserializer)?;
		match text {
			Some(text) => STANDARD.decode(text).map_err(serde::de::Error::custom),
			None => Ok(Vec::new()),
		}
	}
}
