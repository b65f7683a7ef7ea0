use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::RecordMetadata;

/// Hash algorithm used when interlocking a record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum HashAlgorithms {
	#[serde(rename = "SHA1")]
	Sha1,
	#[default]
	#[serde(rename = "SHA256")]
	Sha256,
	#[serde(rename = "SHA512")]
	Sha512,
	#[serde(rename = "SHA3_256")]
	Sha3_256,
	#[serde(rename = "SHA3_512")]
	Sha3_512,
	/// The record bytes are copied instead of hashed
	Copy,
}

/// Request to force an interlock of a chain into a target chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForceInterlockModel {
	pub hash_algorithm: HashAlgorithms,
	pub min_serial: u64,
	pub target_chain: String,
}

impl fmt::Display for ForceInterlockModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Force interlock on {} above record #{} using {:?}",
			self.target_chain, self.min_serial, self.hash_algorithm
		)
	}
}

/// A record anchoring the state of another chain
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterlockingRecordModel {
	#[serde(flatten)]
	pub metadata: RecordMetadata,
	pub interlocked_chain_id: String,
	#[serde(default)]
	pub interlocked_record_hash: Option<String>,
	#[serde(default)]
	pub interlocked_record_offset: u64,
	#[serde(default)]
	pub interlocked_record_serial: u64,
}

impl fmt::Display for InterlockingRecordModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Interlock #{} of {} locking chain {} at record #{} (offset {})",
			self.metadata.serial,
			self.metadata.chain_id,
			self.interlocked_chain_id,
			self.interlocked_record_serial,
			self.interlocked_record_offset
		)?;
		if let Some(hash) = &self.interlocked_record_hash {
			write!(f, " with hash {}", hash)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_interlock_flattens_record_metadata() {
		let interlock: InterlockingRecordModel = serde_json::from_value(json!({
			"applicationId": 2,
			"chainId": "target",
			"network": "Minerva",
			"payloadTagId": 300,
			"reference": "Minerva:target@15",
			"serial": 15,
			"type": "Data",
			"version": 1,
			"interlockedChainId": "source",
			"interlockedRecordHash": "Hash!abc#SHA256",
			"interlockedRecordOffset": 4096,
			"interlockedRecordSerial": 3
		}))
		.unwrap();

		assert_eq!(interlock.metadata.serial, 15);
		assert_eq!(interlock.metadata.application_id, 2);
		assert_eq!(
			interlock.to_string(),
			"Interlock #15 of target locking chain source at record #3 (offset 4096) with hash Hash!abc#SHA256"
		);
	}

	#[test]
	fn test_force_interlock_serialization() {
		let model = ForceInterlockModel {
			hash_algorithm: HashAlgorithms::Copy,
			min_serial: 1,
			target_chain: "target".to_string(),
		};
		assert_eq!(
			serde_json::to_value(&model).unwrap(),
			json!({ "hashAlgorithm": "Copy", "minSerial": 1, "targetChain": "target" })
		);
		assert_eq!(
			serde_json::to_value(HashAlgorithms::Sha3_256).unwrap(),
			json!("SHA3_256")
		);
	}
}
