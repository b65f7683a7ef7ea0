use interlockledger_rest_client::models::NewRecordModel;
use mockito::Matcher;
use serde_json::json;

use crate::integration::mocks::{mock_owned_chain, node_for, record_json, DOCUMENT_TEXT, OWNED_CHAIN};

#[tokio::test]
async fn test_owned_chain_reads() {
	let mut server = mockito::Server::new_async().await;
	let _chain = mock_owned_chain(&mut server).await;
	let chain = node_for(&server).chain(OWNED_CHAIN);

	let summary = chain.summary().await.unwrap();
	assert_eq!(summary.active_apps, vec![0, 1, 4]);

	let keys = chain.permitted_keys().await.unwrap();
	assert_eq!(keys[0].to_string(), "Key 'Owner' Key!owner purposes [Action, Protocol] permissions [#4,1000,1001]");

	let documents = chain.documents().await.unwrap();
	assert!(documents[0].is_plain_text);
	assert_eq!(chain.document_as_plain("f1").await.unwrap(), DOCUMENT_TEXT);

	let raw = chain.document_as_raw("f1").await.unwrap();
	assert_eq!(raw.name, "hello.txt");
	assert_eq!(raw.content_type, "text/plain");
	assert_eq!(raw.content, DOCUMENT_TEXT.as_bytes());

	let records = chain.records_from(0).await.unwrap();
	assert_eq!(records.items[0].payload_bytes, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_add_record_sends_base64_payload() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/records@c1")
		.match_body(Matcher::Json(json!({
			"applicationId": 8,
			"payloadTagId": 300,
			"type": "Data",
			"payloadBytes": "AQID"
		})))
		.with_status(201)
		.with_body(record_json(OWNED_CHAIN, 5, 300).to_string())
		.create_async()
		.await;

	let chain = node_for(&server).chain(OWNED_CHAIN);
	let record = chain
		.add_record(&NewRecordModel::new(8, 300, vec![1, 2, 3]))
		.await
		.unwrap();

	assert_eq!(record.metadata.serial, 5);
	assert_eq!(record.metadata.reference.to_string(), "Minerva:c1@5");
	mock.assert_async().await;
}

#[tokio::test]
async fn test_add_active_apps_posts_app_ids() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("POST", "/chain/c1/activeApps")
		.match_body(Matcher::Json(json!([4, 8])))
		.with_status(201)
		.with_header("content-type", "application/json")
		.with_body("[0, 1, 4, 8]")
		.create_async()
		.await;

	let chain = node_for(&server).chain(OWNED_CHAIN);
	let apps = chain.add_active_apps(&[4, 8]).await.unwrap();

	assert_eq!(apps, vec![0, 1, 4, 8]);
	mock.assert_async().await;
}

#[tokio::test]
async fn test_records_as_json_range() {
	let mut server = mockito::Server::new_async().await;
	let mock = server
		.mock("GET", "/records@c1/asJson")
		.match_query(Matcher::AllOf(vec![
			Matcher::UrlEncoded("firstSerial".into(), "2".into()),
			Matcher::UrlEncoded("lastSerial".into(), "3".into()),
		]))
		.with_body(
			json!({
				"items": [{
					"chainId": OWNED_CHAIN,
					"network": "Minerva",
					"reference": "Minerva:c1@2",
					"serial": 2,
					"payload": { "tagId": 300, "name": "hello" }
				}]
			})
			.to_string(),
		)
		.create_async()
		.await;

	let chain = node_for(&server).chain(OWNED_CHAIN);
	let page = chain.records_as_json_from_to(2, 3).await.unwrap();

	assert_eq!(page.items[0].payload["name"], "hello");
	assert!(chain.records_as_json_from_to(3, 2).await.is_err());
	mock.assert_async().await;
}
