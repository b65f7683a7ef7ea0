use interlockledger_rest_client::bootstrap::{
	create_node, parse_invocation, run_demo, write_usage, Action, BootstrapError, RunSettings,
};
use interlockledger_rest_client::models::ConfigError;
use std::collections::HashMap;

fn settings_for(args: &[&str]) -> RunSettings {
	match parse_invocation(args.iter().copied()).unwrap().action {
		Action::Run(settings) => settings,
		Action::Usage => panic!("expected run settings for {:?}", args),
	}
}

#[test]
fn test_single_argument_prints_usage() {
	let invocation = parse_invocation(["rest_client", "only-one.pfx"]).unwrap();
	assert!(matches!(invocation.action, Action::Usage));

	let mut out = Vec::new();
	write_usage(&mut out).unwrap();
	let text = String::from_utf8(out).unwrap();
	assert!(text.starts_with("You must provide at least 2 parameters!\n\n"));
}

#[test]
fn test_environment_port_is_validated() {
	let dir = tempfile::tempdir().unwrap();
	let certificate = dir.path().join("demo.pfx");
	std::fs::write(&certificate, b"placeholder").unwrap();
	let path = certificate.to_string_lossy().into_owned();
	let settings = settings_for(&["rest_client", &path, "secret"]);

	let env: HashMap<&str, &str> = HashMap::from([("IL2_PORT", "0")]);
	let error = create_node(&settings, |name| env.get(name).map(|v| v.to_string())).unwrap_err();
	assert!(matches!(
		error,
		BootstrapError::Config(ConfigError::ValidationError(_))
	));
}

#[tokio::test]
async fn test_bad_port_is_printed_by_the_demo() {
	let dir = tempfile::tempdir().unwrap();
	let certificate = dir.path().join("demo.pfx");
	std::fs::write(&certificate, b"placeholder").unwrap();
	let path = certificate.to_string_lossy().into_owned();
	let settings = settings_for(&["rest_client", &path, "secret", "not-a-port"]);

	let out = run_demo(&settings, |_| None, Vec::new()).await.unwrap();
	let text = String::from_utf8(out).unwrap();

	assert!(text.contains("Invalid port 'not-a-port'"));
	assert!(!text.contains("Client connected"));
}
