//! Fixed inputs used by the demo run.

use serde_json::json;

use crate::models::{
	Algorithms, ChainCreationModel, ForceInterlockModel, HashAlgorithms, KeyPermitModel,
	KeyPurpose, KeyStrength,
};

/// Chain mirrored, and interlocked into, by the demo
pub const DEMO_TARGET_CHAIN: &str = "72_1DyspOtgOpg5XG2ihe7M0xCb2DhrZIQWv3-Bivy4";

pub const DEMO_CHAIN_NAME: &str = "Rest Created Test Chain";

/// Payload tag of JSON document records
pub const JSON_DOCUMENT_TAG: u64 = 2100;

/// How many JSON document records are retrieved per chain
pub const MAX_JSON_DOCUMENTS: usize = 3;

pub const OPAQUE_APP_ID: u64 = 13;
pub const OPAQUE_PAYLOAD_TYPE_ID: u64 = 100;
pub const OPAQUE_PAYLOAD: [u8; 4] = [1, 2, 3, 4];

const DOCUMENTER_KEY_ID: &str = "Key!U0y4av1fQGnOkC_1RkZLd4gE8vVSGVGJO5o1pzprQHo";
const DOCUMENTER_KEY_NAME: &str = "InterlockLedger Documenter";
const DOCUMENTER_PUBLIC_KEY: &str = "PubKey!KPkBERD5AQiuLtsWMFr3H6HtQVUMky1wFzL0TQF3VC-X24G4gjFqcrHHawNxNgDiw21YS8Fx6o1ornUOHqJPvIpYX1H2T2bqbIsIMNgyO4H234Ahken7SadTlnRPw92_sRpqprBobfuX9f9K6iM-SUJ2WY_6U4bAG4HdsFRV4yqfdDhrCAedBUs8O9qyne6vHFN8CiTEcapfQE7K-StPlW2wVmLdIXov2FdfYdJpFLXbbkgBCdkAZl2Oc86PRVzPkqD5dzl86QNZGZxhq2ngQ1UXASUQVh4tV5XqXQoe7xgeiE-1O82oWZWOvH6xdHjY9sMFyY3Mhjz8_MrI_0_DBEH7Pikmhp0LlyucyUA6dz4G_e13Xmyty2LDeqyYNhYORuZu2ev7zIEPvclpKeztC5gmJdCdcXZf_Omigb6I20HiggFBBrTGIjxJ_5xvpfb8DZCB6jqG5deTqybkjDJYPkA0TeoswKlwncT6mmZ3RdNNxoojUEX0TcBfSioKrnWRqGZ6Yc5wPFIvZ2REU6NP5gJv53FYe2yGAFygvWM1t2wBpWb6bx4h4BFKbfHPcCdmPqJHF0WQdMd7rtryENICHh9ozcVHtpHUtGdwoqV8gmeav836canWcXhKWQILiTiLpGAMa7FuUmPUr3K3q0c2rAy0IYXigjHvujTMz_0aGYqZoHD726gb4RADAQAB#RSA";

pub fn chain_creation() -> ChainCreationModel {
	ChainCreationModel {
		name: DEMO_CHAIN_NAME.to_string(),
		description: Some("Just a test".to_string()),
		emergency_closing_key_password: "password".to_string(),
		key_management_key_password: "password".to_string(),
		key_management_key_strength: KeyStrength::ExtraStrong,
		keys_algorithm: Algorithms::Rsa,
		additional_apps: vec![4],
		..Default::default()
	}
}

pub fn forced_interlock() -> ForceInterlockModel {
	ForceInterlockModel {
		hash_algorithm: HashAlgorithms::Copy,
		min_serial: 1,
		target_chain: DEMO_TARGET_CHAIN.to_string(),
	}
}

/// Documenter key allowed to run actions 1000 and 1001 of app 4
pub fn documenter_key() -> KeyPermitModel {
	KeyPermitModel::new(
		4,
		[1000, 1001],
		DOCUMENTER_KEY_ID,
		DOCUMENTER_KEY_NAME,
		DOCUMENTER_PUBLIC_KEY,
		[KeyPurpose::Protocol, KeyPurpose::Action],
	)
}

pub fn json_document() -> serde_json::Value {
	json!({
		"description": "Stored by the REST client demo",
		"values": [1, 2, 3, 4]
	})
}
