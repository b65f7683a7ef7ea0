//! Domain models and data structures for talking to an InterlockLedger node.
//!
//! This module contains all the data structures used throughout the application:
//!
//! - `config`: Client configuration assembled from the command line and environment
//! - `core`: Records, chains, keys, interlocks, documents and the other API models

mod config;
mod core;

// Re-export core types
pub use core::{
	Algorithms, AllowedReadersRecordModel, AppPermissions, AppsModel, ChainCreatedModel,
	ChainCreationModel, ChainIdModel, ChainSummaryModel, DocumentDetailsModel,
	ForceInterlockModel, HashAlgorithms, InterlockingRecordModel, JsonDocumentModel, KeyModel,
	KeyPermitModel, KeyPurpose, KeyStrength, NewRecordModel, NodeDetailsModel, OpaquePayload,
	OpaqueRecordModel, PageOf, PageOfOpaqueRecordsModel, PageRequest, ParseReferenceError,
	PeerModel, PublishedApp, RawDocumentModel, ReaderKeyModel, RecordMetadata, RecordModel,
	RecordModelAsJson, RecordType, SoftwareVersions, UniversalRecordReference,
};

// Re-export config types
pub use config::{parse_port, ClientConfig, ConfigError};
