//! Mock node shared by the integration tests.

use interlockledger_rest_client::{
	services::rest::{HttpTransport, RestNode},
	utils::HttpRetryConfig,
};
use mockito::{Matcher, Mock, Server};
use serde_json::{json, Value};
use std::time::Duration;
use url::Url;

pub const NETWORK: &str = "Minerva";
pub const OWNED_CHAIN: &str = "c1";
pub const MIRROR_CHAIN: &str = "m1";
pub const DOCUMENT_TEXT: &str = "Hello InterlockLedger";

pub fn node_for(server: &Server) -> RestNode {
	let transport = HttpTransport::new(
		Url::parse(&server.url()).unwrap(),
		None,
		Duration::from_secs(5),
		&HttpRetryConfig::default(),
	)
	.unwrap();
	RestNode::with_transport(transport, "demo")
}

pub fn record_json(chain: &str, serial: u64, tag: u64) -> Value {
	json!({
		"applicationId": 8,
		"chainId": chain,
		"network": NETWORK,
		"payloadTagId": tag,
		"reference": format!("{}:{}@{}", NETWORK, chain, serial),
		"serial": serial,
		"type": "Data",
		"version": 1,
		"payloadBytes": "AQID"
	})
}

async fn get(server: &mut Server, path: &str, body: Value) -> Mock {
	server
		.mock("GET", path)
		.match_query(Matcher::Any)
		.with_header("content-type", "application/json")
		.with_body(body.to_string())
		.create_async()
		.await
}

async fn post(server: &mut Server, path: &str, body: Value) -> Mock {
	server
		.mock("POST", path)
		.match_query(Matcher::Any)
		.with_status(201)
		.with_header("content-type", "application/json")
		.with_body(body.to_string())
		.create_async()
		.await
}

/// Node-level endpoints: details, apps, peers, chains, mirrors and creation
pub async fn mock_node(server: &mut Server) -> Vec<Mock> {
	vec![
		get(
			server,
			"/",
			json!({
				"id": "Node!abc",
				"name": "Test Node",
				"network": NETWORK,
				"roles": ["Node"],
				"softwareVersions": { "node": "14.2.2" }
			}),
		)
		.await,
		get(
			server,
			"/apps",
			json!({
				"network": NETWORK,
				"validApps": [
					{ "id": 4, "name": "Multi-Document", "version": "1.0" },
					{ "id": 1, "name": "Key Management" }
				]
			}),
		)
		.await,
		get(
			server,
			"/peers",
			json!([
				{ "id": "Node!zzz", "name": "Zulu", "address": "zulu.example", "port": 32025, "protocol": "tcp" },
				{ "id": "Node!aaa", "name": "Alpha", "address": "alpha.example", "port": 32025, "protocol": "tcp" }
			]),
		)
		.await,
		get(server, "/chain", json!([{ "id": OWNED_CHAIN, "name": "Main" }])).await,
		get(server, "/mirrors", json!([{ "id": MIRROR_CHAIN, "name": "Mirrored" }])).await,
		post(
			server,
			"/mirrors",
			json!([{ "id": "72_1DyspOtgOpg5XG2ihe7M0xCb2DhrZIQWv3-Bivy4", "name": "Remote" }]),
		)
		.await,
		post(
			server,
			"/chain",
			json!({ "id": "new1", "name": "Rest Created Test Chain" }),
		)
		.await,
	]
}

/// Every endpoint the demo calls for an owned chain, writes included
pub async fn mock_owned_chain(server: &mut Server) -> Vec<Mock> {
	let chain = OWNED_CHAIN;
	let mut mocks = vec![
		get(
			server,
			&format!("/chain/{}", chain),
			json!({
				"activeApps": [0, 1, 4],
				"description": "Main chain",
				"isClosedForNewTransactions": false,
				"lastRecord": 41
			}),
		)
		.await,
		get(server, &format!("/chain/{}/activeApps", chain), json!([0, 1, 4])).await,
		get(
			server,
			&format!("/chain/{}/key", chain),
			json!([{
				"id": "Key!owner",
				"name": "Owner",
				"purposes": ["Action", "Protocol"],
				"permissions": [{ "appId": 4, "actionIds": [1000, 1001] }]
			}]),
		)
		.await,
		get(
			server,
			&format!("/documents@{}", chain),
			json!([{ "fileId": "f1", "name": "hello.txt", "contentType": "text/plain", "isPlainText": true }]),
		)
		.await,
		get(
			server,
			&format!("/chain/{}/interlockings", chain),
			json!({ "items": [], "totalNumberOfPages": 0 }),
		)
		.await,
		get(
			server,
			&format!("/interlockings/{}", chain),
			json!({ "items": [], "totalNumberOfPages": 0 }),
		)
		.await,
		get(
			server,
			&format!("/records@{}", chain),
			json!({
				"items": [record_json(chain, 0, 0), record_json(chain, 1, 2100)],
				"totalNumberOfPages": 1
			}),
		)
		.await,
		post(
			server,
			&format!("/chain/{}/interlockings", chain),
			json!({
				"chainId": chain,
				"network": NETWORK,
				"reference": format!("{}:{}@42", NETWORK, chain),
				"serial": 42,
				"interlockedChainId": "72_1DyspOtgOpg5XG2ihe7M0xCb2DhrZIQWv3-Bivy4",
				"interlockedRecordSerial": 7
			}),
		)
		.await,
		post(
			server,
			&format!("/chain/{}/key", chain),
			json!([{ "id": "Key!U0y4av1fQGnOkC_1RkZLd4gE8vVSGVGJO5o1pzprQHo", "name": "InterlockLedger Documenter", "purposes": ["Protocol", "Action"] }]),
		)
		.await,
		post(server, &format!("/jsonDocuments@{}", chain), json_document_json(chain, 43)).await,
		get(server, &format!("/jsonDocuments@{}/1", chain), json_document_json(chain, 1)).await,
		get(
			server,
			&format!("/jsonDocuments@{}/allow", chain),
			json!({ "items": [], "totalNumberOfPages": 0 }),
		)
		.await,
		get(
			server,
			&format!("/opaque/{}/query", chain),
			json!({ "items": [], "lastChangedRecordSerial": 40 }),
		)
		.await,
		post(
			server,
			&format!("/opaque/{}", chain),
			json!({ "applicationId": 13, "chainId": chain, "payloadTypeId": 100, "serial": 44 }),
		)
		.await,
		server
			.mock("GET", format!("/opaque/{}/44", chain).as_str())
			.with_header("x-app-id", "13")
			.with_header("x-payload-type-id", "100")
			.with_header("x-created-at", "2024-03-01T12:30:00+00:00")
			.with_body(vec![1u8, 2, 3, 4])
			.create_async()
			.await,
	];
	mocks.push(
		server
			.mock("GET", format!("/documents@{}/f1", chain).as_str())
			.match_header("accept", "text/plain")
			.with_body(DOCUMENT_TEXT)
			.create_async()
			.await,
	);
	mocks.push(
		server
			.mock("GET", format!("/documents@{}/f1", chain).as_str())
			.match_header("accept", "application/octet-stream")
			.with_header("content-type", "text/plain")
			.with_header("content-disposition", "attachment; filename=\"hello.txt\"")
			.with_body(DOCUMENT_TEXT)
			.create_async()
			.await,
	);
	mocks
}

fn json_document_json(chain: &str, serial: u64) -> Value {
	json!({
		"chainId": chain,
		"network": NETWORK,
		"payloadTagId": 2100,
		"reference": format!("{}:{}@{}", NETWORK, chain, serial),
		"serial": serial,
		"encryptedJson": { "cipherText": "AAAA", "readingKeys": [] }
	})
}
