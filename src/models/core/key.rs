//! Key models: keys permitted on a chain and requests to permit new ones.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a key may be used for inside a chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum KeyPurpose {
	Action,
	ChainOperation,
	ClaimSigner,
	Encryption,
	ForceInterlock,
	InterlockSigner,
	KeyManagement,
	Protocol,
}

impl fmt::Display for KeyPurpose {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Debug::fmt(self, f)
	}
}

/// Strength of generated keys, from `Normal` (2048-bit RSA) upwards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum KeyStrength {
	#[default]
	Normal,
	Strong,
	ExtraStrong,
	MegaStrong,
	SuperStrong,
	HyperStrong,
	UltraStrong,
}

/// Public-key algorithms the node can generate keys with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum Algorithms {
	#[default]
	#[serde(rename = "RSA")]
	Rsa,
	#[serde(rename = "DSA")]
	Dsa,
	ElGamal,
	EcDSA,
	EdDSA,
}

/// Actions an application grants to a key
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppPermissions {
	pub app_id: u64,
	#[serde(default)]
	pub action_ids: Vec<u64>,
}

impl AppPermissions {
	pub fn new(app_id: u64, action_ids: impl IntoIterator<Item = u64>) -> Self {
		Self {
			app_id,
			action_ids: action_ids.into_iter().collect(),
		}
	}
}

impl fmt::Display for AppPermissions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.app_id)?;
		for action in &self.action_ids {
			write!(f, ",{}", action)?;
		}
		Ok(())
	}
}

fn join<T: fmt::Display>(items: &[T]) -> String {
	items
		.iter()
		.map(ToString::to_string)
		.collect::<Vec<_>>()
		.join(", ")
}

/// A key permitted on a chain
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyModel {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub public_key: Option<String>,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub permissions: Vec<AppPermissions>,
	#[serde(default)]
	pub purposes: Vec<KeyPurpose>,
}

impl fmt::Display for KeyModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"Key '{}' {} purposes [{}] permissions [{}]",
			self.name,
			self.id,
			join(&self.purposes),
			join(&self.permissions)
		)
	}
}

/// Request to permit a key on a chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyPermitModel {
	pub id: String,
	pub name: String,
	pub public_key: String,
	pub permissions: Vec<AppPermissions>,
	pub purposes: Vec<KeyPurpose>,
}

impl KeyPermitModel {
	/// Permits a key for the given actions of a single app
	pub fn new(
		app: u64,
		actions: impl IntoIterator<Item = u64>,
		id: impl Into<String>,
		name: impl Into<String>,
		public_key: impl Into<String>,
		purposes: impl IntoIterator<Item = KeyPurpose>,
	) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			public_key: public_key.into(),
			permissions: vec![AppPermissions::new(app, actions)],
			purposes: purposes.into_iter().collect(),
		}
	}

	pub fn validate(&self) -> Result<(), String> {
		if self.id.trim().is_empty() {
			return Err("Key id is required".to_string());
		}
		if self.name.trim().is_empty() {
			return Err("Key name is required".to_string());
		}
		if self.public_key.trim().is_empty() {
			return Err("Key public key is required".to_string());
		}
		if self.purposes.is_empty() {
			return Err(format!("Key '{}' must have at least one purpose", self.name));
		}
		if self.purposes.contains(&KeyPurpose::Action) && self.permissions.is_empty() {
			return Err(format!(
				"Key '{}' has the Action purpose but no app permissions",
				self.name
			));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn permit() -> KeyPermitModel {
		KeyPermitModel::new(
			4,
			[1000, 1001],
			"Key!abc",
			"Documenter",
			"PubKey!xyz#RSA",
			[KeyPurpose::Protocol, KeyPurpose::Action],
		)
	}

	#[test]
	fn test_key_permit_serializes_for_node() {
		let value = serde_json::to_value(permit()).unwrap();
		assert_eq!(
			value,
			json!({
				"id": "Key!abc",
				"name": "Documenter",
				"publicKey": "PubKey!xyz#RSA",
				"permissions": [{ "appId": 4, "actionIds": [1000, 1001] }],
				"purposes": ["Protocol", "Action"]
			})
		);
	}

	#[test]
	fn test_key_permit_validation() {
		assert!(permit().validate().is_ok());

		let mut no_purposes = permit();
		no_purposes.purposes.clear();
		assert!(no_purposes.validate().unwrap_err().contains("at least one purpose"));

		let mut no_permissions = permit();
		no_permissions.permissions.clear();
		assert!(no_permissions.validate().unwrap_err().contains("no app permissions"));

		let mut no_key = permit();
		no_key.public_key = " ".to_string();
		assert!(no_key.validate().is_err());
	}

	#[test]
	fn test_key_model_display() {
		let key: KeyModel = serde_json::from_value(json!({
			"id": "Key!abc",
			"name": "Manager",
			"permissions": [{ "appId": 0 }, { "appId": 4, "actionIds": [1000] }],
			"purposes": ["KeyManagement", "Action"]
		}))
		.unwrap();
		assert_eq!(
			key.to_string(),
			"Key 'Manager' Key!abc purposes [KeyManagement, Action] permissions [#0, #4,1000]"
		);
	}

	#[test]
	fn test_algorithm_names_on_the_wire() {
		assert_eq!(serde_json::to_value(Algorithms::Rsa).unwrap(), json!("RSA"));
		assert_eq!(serde_json::to_value(KeyStrength::ExtraStrong).unwrap(), json!("ExtraStrong"));
	}
}
