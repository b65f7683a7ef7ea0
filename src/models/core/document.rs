use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading bytes shown when printing raw document content
const RAW_PREVIEW_LEN: usize = 32;

/// A document stored in a chain
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDetailsModel {
	pub file_id: String,
	pub name: String,
	#[serde(default)]
	pub content_type: String,
	#[serde(default)]
	pub is_plain_text: bool,
	#[serde(default)]
	pub file_size: Option<u64>,
	#[serde(default)]
	pub previous_version: Option<String>,
}

impl fmt::Display for DocumentDetailsModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Document '{}' [{}] {}", self.name, self.content_type, self.file_id)?;
		if let Some(size) = self.file_size {
			write!(f, " {} bytes", size)?;
		}
		Ok(())
	}
}

/// Document content as returned by the node, without interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocumentModel {
	pub name: String,
	pub content_type: String,
	pub content: Vec<u8>,
}

impl fmt::Display for RawDocumentModel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let preview = &self.content[..self.content.len().min(RAW_PREVIEW_LEN)];
		write!(
			f,
			"RawDocument '{}' [{}] {} bytes: {}",
			self.name,
			self.content_type,
			self.content.len(),
			hex::encode(preview)
		)?;
		if self.content.len() > RAW_PREVIEW_LEN {
			write!(f, "...")?;
		}
		Ok(())
	}
}
