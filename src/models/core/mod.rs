//! Models exchanged with the node's REST API.
//!
//! These are plain data-transfer types: they are deserialized from the node's
//! camelCase JSON and printed through their `Display` implementations.

mod chain;
mod document;
mod interlock;
mod json_document;
mod key;
mod node;
mod opaque;
mod page;
mod record;

pub use chain::{ChainCreatedModel, ChainCreationModel, ChainIdModel, ChainSummaryModel};
pub use document::{DocumentDetailsModel, RawDocumentModel};
pub use interlock::{ForceInterlockModel, HashAlgorithms, InterlockingRecordModel};
pub use json_document::{AllowedReadersRecordModel, JsonDocumentModel, ReaderKeyModel};
pub use key::{Algorithms, AppPermissions, KeyModel, KeyPermitModel, KeyPurpose, KeyStrength};
pub use node::{AppsModel, NodeDetailsModel, PeerModel, PublishedApp, SoftwareVersions};
pub use opaque::{OpaquePayload, OpaqueRecordModel, PageOfOpaqueRecordsModel};
pub use page::{PageOf, PageRequest};
pub use record::{
	NewRecordModel, ParseReferenceError, RecordMetadata, RecordModel, RecordModelAsJson,
	RecordType, UniversalRecordReference,
};
