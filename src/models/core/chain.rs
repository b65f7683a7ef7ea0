use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Algorithms, KeyStrength};

/// Identification of a chain (or mirror) hosted by the node
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainIdModel {
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub closed: bool,
}

impl fmt::Display for ChainIdModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Chain '{}' #{}", self.name, self.id)?;
		if self.closed {
			write!(f, " [closed]")?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainSummaryModel {
	#[serde(default)]
	pub id: Option<String>,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub active_apps: Vec<u64>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub is_closed_for_new_transactions: bool,
	#[serde(default)]
	pub last_record: u64,
	#[serde(default)]
	pub licensing_status: Option<String>,
}

/// Parameters to create a new chain on the node
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainCreationModel {
	pub name: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	pub emergency_closing_key_password: String,
	pub key_management_key_password: String,
	pub key_management_key_strength: KeyStrength,
	pub operating_key_strength: KeyStrength,
	pub keys_algorithm: Algorithms,
	pub additional_apps: Vec<u64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub parent: Option<String>,
}

impl ChainCreationModel {
	pub fn validate(&self) -> Result<(), String> {
		if self.name.trim().is_empty() {
			return Err("Chain name is required".to_string());
		}
		if self.emergency_closing_key_password.is_empty() {
			return Err("Emergency closing key password is required".to_string());
		}
		if self.key_management_key_password.is_empty() {
			return Err("Key management key password is required".to_string());
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainCreatedModel {
	pub id: String,
	#[serde(default)]
	pub name: String,
}

impl fmt::Display for ChainCreatedModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Created chain '{}' #{}", self.name, self.id)
	}
}
