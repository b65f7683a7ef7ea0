use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftwareVersions {
	pub node: Option<String>,
	pub peer2peer: Option<String>,
	pub core_libs: Option<String>,
}

/// Details a node reports about itself at the API root
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetailsModel {
	pub id: String,
	pub name: String,
	pub network: String,
	#[serde(default)]
	pub color: Option<String>,
	#[serde(default)]
	pub owner_id: Option<String>,
	#[serde(default)]
	pub owner_name: Option<String>,
	#[serde(default)]
	pub roles: Vec<String>,
	#[serde(default)]
	pub peer_address: Option<String>,
	#[serde(default)]
	pub software_versions: SoftwareVersions,
	#[serde(default)]
	pub chains: Vec<String>,
	#[serde(default)]
	pub extensions: BTreeMap<String, String>,
}

impl fmt::Display for NodeDetailsModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Node '{}' {}", self.name, self.id)?;
		writeln!(f, "Network {}", self.network)?;
		if let Some(color) = &self.color {
			writeln!(f, "Color {}", color)?;
		}
		if let Some(owner_name) = &self.owner_name {
			writeln!(
				f,
				"Owner {} #{}",
				owner_name,
				self.owner_id.as_deref().unwrap_or("?")
			)?;
		}
		if let Some(address) = &self.peer_address {
			writeln!(f, "Peer address {}", address)?;
		}
		let versions = &self.software_versions;
		writeln!(
			f,
			"Running il2 node#{} using peer2peer#{} and corelibs#{}",
			versions.node.as_deref().unwrap_or("?"),
			versions.peer2peer.as_deref().unwrap_or("?"),
			versions.core_libs.as_deref().unwrap_or("?")
		)?;
		writeln!(f, "Roles: {}", self.roles.join(", "))?;
		for (name, value) in &self.extensions {
			writeln!(f, "Extension {}: {}", name, value)?;
		}
		write!(f, "Chains: {}", self.chains.join(", "))
	}
}

/// An application published on the network
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishedApp {
	pub id: u64,
	pub name: String,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub publisher_name: Option<String>,
	#[serde(default)]
	pub version: Option<String>,
}

impl fmt::Display for PublishedApp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{} {}", self.id, self.name)?;
		if let Some(version) = &self.version {
			write!(f, " v{}", version)?;
		}
		if let Some(publisher) = &self.publisher_name {
			write!(f, " by {}", publisher)?;
		}
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppsModel {
	pub network: String,
	#[serde(default)]
	pub valid_apps: Vec<PublishedApp>,
}

impl AppsModel {
	/// Valid apps ordered by id
	pub fn sorted_apps(&self) -> Vec<&PublishedApp> {
		let mut apps: Vec<_> = self.valid_apps.iter().collect();
		apps.sort_by_key(|app| app.id);
		apps
	}
}

/// A peer known to the node
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerModel {
	pub id: String,
	pub name: String,
	#[serde(default)]
	pub network: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(default)]
	pub port: Option<u16>,
	#[serde(default)]
	pub protocol: Option<String>,
	#[serde(default)]
	pub color: Option<String>,
	#[serde(default)]
	pub owner_id: Option<String>,
	#[serde(default)]
	pub owner_name: Option<String>,
	#[serde(default)]
	pub roles: Vec<String>,
}

impl fmt::Display for PeerModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Peer '{}' {}", self.name, self.id)?;
		if let Some(address) = &self.address {
			let protocol = self.protocol.as_deref().unwrap_or("tcp");
			match self.port {
				Some(port) => write!(f, " at {}:{}:{}", protocol, address, port)?,
				None => write!(f, " at {}:{}", protocol, address)?,
			}
		}
		if !self.roles.is_empty() {
			write!(f, " [{}]", self.roles.join(", "))?;
		}
		Ok(())
	}
}
