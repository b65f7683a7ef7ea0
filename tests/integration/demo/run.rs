use interlockledger_rest_client::services::exercise::{ExerciseService, DEMO_TARGET_CHAIN};

use crate::integration::mocks::{
	mock_node, mock_owned_chain, node_for, DOCUMENT_TEXT, MIRROR_CHAIN,
};

fn position(text: &str, needle: &str) -> usize {
	text.find(needle)
		.unwrap_or_else(|| panic!("'{}' not found in output:\n{}", needle, text))
}

#[tokio::test]
async fn test_full_demo_run_against_mock_node() {
	let mut server = mockito::Server::new_async().await;
	let _node = mock_node(&mut server).await;
	let _chain = mock_owned_chain(&mut server).await;

	let node = node_for(&server);
	let mut service = ExerciseService::new(Vec::new());
	service.run(&node).await.unwrap();
	let text = String::from_utf8(service.into_inner()).unwrap();

	assert!(text.starts_with(&format!(
		"Client connected to {}/ using certificate demo\n",
		server.url()
	)));

	// Apps ordered by id, peers by name
	assert!(position(&text, "#1 Key Management") < position(&text, "#4 Multi-Document v1.0"));
	assert!(position(&text, "Peer 'Alpha'") < position(&text, "Peer 'Zulu'"));

	let chains = position(&text, "-- Chains:");
	let mirrors = position(&text, "-- Mirrors:");
	let create_mirror = position(&text, "-- Create Mirror:");
	let create_chain = position(&text, "-- Create Chain:");
	assert!(chains < mirrors && mirrors < create_mirror && create_mirror < create_chain);

	let owned = &text[chains..mirrors];
	assert!(owned.contains("Chain 'Main' #c1\n"));
	assert!(owned.contains("  Summary.ActiveApps: 0, 1, 4\n"));
	assert!(owned.contains("  Summary.Description: Main chain\n"));
	assert!(owned.contains("  Summary.IsClosedForNewTransactions: false\n"));
	assert!(owned.contains("  Summary.LastRecord: 41\n"));
	assert!(owned.contains("  Active apps: 0, 1, 4\n"));
	assert!(owned.contains("    Key 'Owner' Key!owner"));
	assert!(owned.contains(&format!("----\n{}\n----\n", DOCUMENT_TEXT)));
	assert!(owned.contains("    Record #1 [Minerva:c1@1] Data app #8 tag #2100 with 3 payload bytes\n"));
	assert!(owned.contains("  Trying to force an interlock:\n"));
	assert!(owned.contains(&format!("locking chain {} at record #7", DEMO_TARGET_CHAIN)));
	assert!(owned.contains("    Key 'InterlockLedger Documenter'"));
	assert!(owned.contains("    Stored JSON document at Minerva:c1@43\n"));
	assert!(owned.contains("    JsonDocument #1 [Minerva:c1@1] (encrypted)\n"));
	assert!(owned.contains("    RetrieveAllowedReaders retrieved no data\n"));
	assert!(owned.contains("    LastChangedRecordSerial 40 for c1\n"));
	assert!(owned.contains("    Trying to add an opaque payload #13,100\n"));
	assert!(owned.contains("    Retrieved AppId: 13\n"));
	assert!(owned.contains("    Retrieved CreatedAt: 2024-03-01T12:30:00+00:00\n"));
	assert!(owned.contains("    Retrieved Bytes: 1020304\n"));

	// Mirrors are never written to and their failures are only printed
	let mirrored = &text[mirrors..create_mirror];
	assert!(mirrored.contains(&format!("Chain 'Mirrored' #{}\n", MIRROR_CHAIN)));
	assert!(mirrored.contains("Node returned status 501"));
	assert!(!mirrored.contains("Trying to force an interlock"));
	assert!(!mirrored.contains("Trying to add an opaque payload"));

	assert!(text[create_mirror..create_chain].contains(&format!("#{}", DEMO_TARGET_CHAIN)));
	assert!(text[create_chain..].contains("Created chain 'Rest Created Test Chain' #new1\n"));
}

#[tokio::test]
async fn test_unreachable_steps_are_printed_and_skipped() {
	let server = mockito::Server::new_async().await;
	let node = node_for(&server);

	let mut service = ExerciseService::new(Vec::new());
	service.run(&node).await.unwrap();
	let text = String::from_utf8(service.into_inner()).unwrap();

	// details, apps, peers, chains, mirrors, create mirror, create chain
	assert_eq!(text.matches("Node returned status 501").count(), 7);
	assert!(text.contains("-- Create Chain:\n"));
}
