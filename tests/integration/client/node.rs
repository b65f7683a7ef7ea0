use interlockledger_rest_client::{
	models::{RecordType, UniversalRecordReference},
	services::rest::RestClientError,
};
use mockito::Matcher;
use serde_json::json;

use crate::integration::mocks::{mock_node, node_for, NETWORK};

#[tokio::test]
async fn test_node_listing_calls() {
	let mut server = mockito::Server::new_async().await;
	let _node = mock_node(&mut server).await;
	let node = node_for(&server);

	let details = node.details().await.unwrap();
	assert_eq!(details.network, NETWORK);

	let apps = node.apps().await.unwrap();
	let ids: Vec<u64> = apps.sorted_apps().iter().map(|app| app.id).collect();
	assert_eq!(ids, vec![1, 4]);

	assert_eq!(node.peers().await.unwrap().len(), 2);

	let chains = node.chains().await.unwrap();
	assert_eq!(chains[0].id(), "c1");
	assert_eq!(chains[0].name(), "Main");
	assert!(!chains[0].is_closed());
}

#[tokio::test]
async fn test_interlocks_of_parse_references() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/interlockings/c1")
		.match_query(Matcher::Any)
		.with_body(
			json!({
				"items": [{
					"chainId": "t1",
					"network": NETWORK,
					"reference": "Minerva:t1@9",
					"serial": 9,
					"type": "Data",
					"interlockedChainId": "c1",
					"interlockedRecordSerial": 3
				}],
				"page": 0,
				"pageSize": 10,
				"totalNumberOfPages": 1
			})
			.to_string(),
		)
		.create_async()
		.await;

	let node = node_for(&server);
	let page = node.interlocks_of("c1").await.unwrap();
	let interlock = page.first().unwrap();

	assert_eq!(
		interlock.metadata.reference,
		UniversalRecordReference::new(NETWORK, "t1", 9)
	);
	assert_eq!(interlock.metadata.record_type, RecordType::Data);
	assert_eq!(interlock.interlocked_record_serial, 3);
}

#[tokio::test]
async fn test_forbidden_status_keeps_problem_detail() {
	let mut server = mockito::Server::new_async().await;
	let _mock = server
		.mock("GET", "/peers")
		.with_status(403)
		.with_header("content-type", "application/problem+json")
		.with_body(r#"{"title":"Forbidden","detail":"Certificate is not permitted on this node"}"#)
		.create_async()
		.await;

	let node = node_for(&server);
	let error = node.peers().await.unwrap_err();

	assert_eq!(error.status(), Some(403));
	assert!(matches!(error, RestClientError::StatusError(403, _)));
	assert_eq!(
		error.to_string(),
		"Node returned status 403 Forbidden: Certificate is not permitted on this node"
	);
}
