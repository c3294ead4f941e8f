//! Snapshot export/import: a captured dataset survives the JSON round
//! trip and a restored store picks up id assignment where it left off.

use loyalty_core::{
    config::AdminConfig,
    snapshot::AdminSnapshot,
    store::{AdminStore, CustomerPatch},
};

fn make_store() -> AdminStore {
    AdminStore::with_demo_data(&AdminConfig::default_test())
}

/// capture → JSON → parse → restore reproduces the dataset exactly.
#[test]
fn snapshot_survives_json_round_trip() {
    let store = make_store();
    let snapshot = AdminSnapshot::capture(&store);

    let json = snapshot.to_json().expect("snapshot serializes");
    let parsed = AdminSnapshot::from_json(&json).expect("snapshot parses");

    assert_eq!(parsed.snapshot_id, snapshot.snapshot_id);
    assert_eq!(parsed.dataset, store.dataset(), "dataset must round-trip");
}

/// A snapshot is a point-in-time copy: mutations after capture do not
/// leak into a store restored from it.
#[test]
fn restore_rewinds_later_mutations() {
    let mut store = make_store();
    let snapshot = AdminSnapshot::capture(&store);
    let before = store.dataset();

    assert!(store.delete_customer(1));
    let patched = store.update_customer(
        2,
        &CustomerPatch {
            status: Some("inactive".into()),
            ..CustomerPatch::default()
        },
    );
    assert!(patched.is_some(), "customer 2 must accept the update");

    let mut restored = snapshot.restore(&AdminConfig::default_test());
    assert_eq!(restored.dataset(), before);
    assert!(
        restored.get_customer(1).is_some(),
        "deleted customer must be back"
    );
    assert_eq!(
        restored.get_customer(2).map(|c| c.status),
        Some("active".into())
    );
}

/// Id assignment in a restored store continues from the restored
/// maximum, not from 1.
#[test]
fn restored_store_continues_id_assignment() {
    let mut store = make_store();
    let max_before = store
        .list_customers()
        .iter()
        .map(|c| c.customer_id)
        .max()
        .expect("demo data has customers");

    let snapshot = AdminSnapshot::capture(&store);
    let mut restored = snapshot.restore(&AdminConfig::default_test());

    let mut draft = restored.get_customer(1).expect("customer 1 exists");
    draft.name = "Restored Signup".into();
    let created = restored.create_customer(draft);
    assert_eq!(created.customer_id, max_before + 1);
}

/// write_file/read_file round-trips through disk.
#[test]
fn snapshot_file_round_trip() {
    let store = make_store();
    let snapshot = AdminSnapshot::capture(&store);

    let path = std::env::temp_dir().join("loyalty-snapshot-test.json");
    let path = path.to_str().expect("utf-8 temp path");

    snapshot.write_file(path).expect("snapshot writes");
    let loaded = AdminSnapshot::read_file(path).expect("snapshot reads");
    std::fs::remove_file(path).ok();

    assert_eq!(loaded.dataset, snapshot.dataset);
}

/// Reading a missing file is an error (the one I/O edge that can fail),
/// with the path in the message.
#[test]
fn reading_missing_snapshot_reports_path() {
    let err = AdminSnapshot::read_file("/nonexistent/loyalty.json")
        .expect_err("missing file must fail");
    assert!(
        err.to_string().contains("/nonexistent/loyalty.json"),
        "error should name the path: {err}"
    );
}
