// std
use std::{path::PathBuf, sync::Arc, thread};
// self
use amplify_config::{
	Error,
	loader,
	store::{self, ConfigSlot, ReplaceOutcome},
};

const FIXTURE_JSON: &str = include_str!("fixtures/aws-exports.json");

fn fixture_path(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn load_from_installs_then_keeps_identical_payloads() {
	let slot = ConfigSlot::new();

	assert_eq!(
		slot.load_from(fixture_path("aws-exports.json")).expect("JSON fixture should install."),
		ReplaceOutcome::Installed { generation: 1 }
	);
	// Same record in module form: nothing to swap.
	assert_eq!(
		slot.load_from(fixture_path("aws-exports.js")).expect("Module fixture should load."),
		ReplaceOutcome::Unchanged { generation: 1 }
	);

	let snapshot = slot.current().expect("Slot should hold a snapshot.");

	assert_eq!(snapshot.fingerprint, snapshot.config.fingerprint());
	assert_eq!(
		snapshot.config.endpoint_url("ws281xapi").expect("Endpoint should resolve.").as_str(),
		"https://api.debsanddarren.com/ledstrip"
	);
}

#[test]
fn reprovisioned_payload_replaces_wholesale() {
	let slot = ConfigSlot::with_config(
		loader::from_json_str(FIXTURE_JSON).expect("JSON fixture should load."),
	);
	let before = slot.config().expect("Slot should hold a record.");
	let reprovisioned = FIXTURE_JSON.replace(
		"https://api.debsanddarren.com/ledstrip",
		"https://tmtiqr7byh.execute-api.eu-west-1.amazonaws.com/prod",
	);
	let outcome = slot.replace(
		loader::from_json_str(&reprovisioned).expect("Reprovisioned fixture should load."),
	);

	assert_eq!(outcome, ReplaceOutcome::Replaced { previous: 1, generation: 2 });
	assert_eq!(outcome.generation(), 2);
	assert_eq!(
		before.endpoint_url("ws281xapi").expect("Old record should be intact.").as_str(),
		"https://api.debsanddarren.com/ledstrip"
	);
	assert_eq!(
		slot.config()
			.expect("Slot should hold the new record.")
			.endpoint_url("ws281xapi")
			.expect("Endpoint should resolve.")
			.host_str(),
		Some("tmtiqr7byh.execute-api.eu-west-1.amazonaws.com")
	);
}

#[test]
fn failed_reload_keeps_current_snapshot() {
	let slot = ConfigSlot::new();

	slot.load_from(fixture_path("aws-exports.json")).expect("JSON fixture should install.");

	let err = slot
		.load_from(fixture_path("does-not-exist.json"))
		.expect_err("Missing file must fail.");

	assert!(matches!(err, Error::Io { .. }));
	assert_eq!(slot.current().expect("Snapshot should survive.").generation, 1);
}

#[test]
fn readers_share_one_snapshot_across_threads() {
	let slot = Arc::new(ConfigSlot::with_config(
		loader::from_json_str(FIXTURE_JSON).expect("JSON fixture should load."),
	));
	let handles = (0..4)
		.map(|_| {
			let slot = slot.clone();

			thread::spawn(move || slot.current().expect("Slot should hold a snapshot."))
		})
		.collect::<Vec<_>>();
	let current = slot.current().expect("Slot should hold a snapshot.");

	for handle in handles {
		let seen = handle.join().expect("Reader thread should not panic.");

		assert!(Arc::ptr_eq(&seen, &current));
	}
}

#[test]
fn global_slot_is_shared() {
	let config = loader::from_json_str(FIXTURE_JSON).expect("JSON fixture should load.");

	store::global().replace(config);

	assert!(std::ptr::eq(store::global(), store::global()));
	assert!(store::global().is_loaded());
}
