use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RecordMetadata;

/// A JSON document record
///
/// Documents are stored encrypted for their allowed readers; this client
/// keeps the encrypted envelope as the node returns it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonDocumentModel {
	#[serde(flatten)]
	pub metadata: RecordMetadata,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub json_text: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub encrypted_json: Option<serde_json::Value>,
}

impl JsonDocumentModel {
	pub fn is_encrypted(&self) -> bool {
		self.json_text.is_none() && self.encrypted_json.is_some()
	}
}

impl fmt::Display for JsonDocumentModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "JsonDocument #{} [{}]", self.metadata.serial, self.metadata.reference)?;
		match &self.json_text {
			Some(text) => write!(f, " {}", text),
			None if self.is_encrypted() => write!(f, " (encrypted)"),
			None => Ok(()),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderKeyModel {
	pub name: String,
	pub public_key: String,
}

/// A record listing the keys allowed to read JSON documents of a context
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedReadersRecordModel {
	#[serde(flatten)]
	pub metadata: RecordMetadata,
	pub context_id: String,
	#[serde(default)]
	pub readers: Vec<ReaderKeyModel>,
}

impl AllowedReadersRecordModel {
	pub fn as_json(&self) -> Result<String, serde_json::Error> {
		serde_json::to_string_pretty(self)
	}
}
