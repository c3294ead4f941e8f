//! The CRUD contract every entity sequence honors, exercised through the
//! customer table. All stores are built with latency disabled.

use chrono::NaiveDate;
use loyalty_core::{
    config::AdminConfig,
    store::{AdminStore, Customer, CustomerPatch, Dataset},
};

// ── Test helpers ────────────────────────────────────────────────────────────

fn make_store() -> AdminStore {
    let _ = env_logger::builder().is_test(true).try_init();
    AdminStore::new(&AdminConfig::default_test())
}

fn customer(name: &str) -> Customer {
    Customer {
        customer_id: 0, // ignored by create
        name: name.into(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-000-0000".into(),
        joined_on: NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
        status: "active".into(),
    }
}

/// A store whose customer sequence carries exactly the ids given.
fn store_with_customer_ids(ids: &[u64]) -> AdminStore {
    let customers = ids
        .iter()
        .map(|&id| Customer {
            customer_id: id,
            ..customer("Seeded")
        })
        .collect();
    AdminStore::from_dataset(
        &AdminConfig::default_test(),
        Dataset {
            customers,
            ..Dataset::default()
        },
    )
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// create on an empty sequence assigns id 1.
#[test]
fn create_on_empty_sequence_assigns_id_one() {
    let mut store = make_store();

    let created = store.create_customer(customer("Ada"));
    assert_eq!(
        created.customer_id, 1,
        "first record must get id 1, got {}",
        created.customer_id
    );
}

/// create assigns max(existing ids) + 1, even after deletes punch holes
/// into the sequence.
#[test]
fn create_assigns_max_plus_one() {
    let mut store = store_with_customer_ids(&[1, 2, 3]);

    assert!(store.delete_customer(3), "seeded id 3 must delete");
    let created = store.create_customer(customer("Ada"));
    // max is now 2, so the next id is 3 — ids are reused after deletes.
    assert_eq!(created.customer_id, 3, "expected max+1 = 3");

    let created = store.create_customer(customer("Grace"));
    assert_eq!(created.customer_id, 4, "expected max+1 = 4");
}

/// The id a draft carries is discarded; the store always assigns its own.
#[test]
fn draft_id_is_ignored_on_create() {
    let mut store = make_store();

    let mut draft = customer("Ada");
    draft.customer_id = 999;
    let created = store.create_customer(draft);
    assert_eq!(
        created.customer_id, 1,
        "draft id must be overwritten, got {}",
        created.customer_id
    );
}

/// update overlays only the patch's set fields; everything else is
/// unchanged, and the returned record matches a fresh read.
#[test]
fn update_overlays_only_set_fields() {
    let mut store = make_store();
    let original = store.create_customer(customer("Ada"));

    let patch = CustomerPatch {
        phone: Some("555-777-8888".into()),
        status: Some("inactive".into()),
        ..CustomerPatch::default()
    };
    let merged = store
        .update_customer(original.customer_id, &patch)
        .expect("record exists");

    assert_eq!(merged.phone, "555-777-8888");
    assert_eq!(merged.status, "inactive");
    assert_eq!(merged.name, original.name, "unset field must not change");
    assert_eq!(merged.email, original.email, "unset field must not change");
    assert_eq!(merged.joined_on, original.joined_on);

    let reread = store
        .get_customer(original.customer_id)
        .expect("record exists");
    assert_eq!(reread, merged, "update must return the stored record");
}

/// get/update/delete on a missing id report absence, never a panic or
/// an error.
#[test]
fn missing_ids_report_absence() {
    let mut store = store_with_customer_ids(&[1, 2, 3]);

    assert!(store.get_customer(42).is_none());
    assert!(store
        .update_customer(42, &CustomerPatch::default())
        .is_none());
    assert!(!store.delete_customer(42));
    assert_eq!(store.list_customers().len(), 3, "misses must not mutate");
}

/// delete removes exactly one record when the id exists, and the second
/// delete of the same id is a no-op returning false.
#[test]
fn delete_shrinks_by_one_then_is_noop() {
    let mut store = store_with_customer_ids(&[1, 2, 3]);

    assert!(store.delete_customer(2));
    assert_eq!(store.list_customers().len(), 2);

    assert!(!store.delete_customer(2), "second delete must be a no-op");
    assert_eq!(store.list_customers().len(), 2);
}

/// The worked sequence: ids [1,2,3], create appends id 4, delete(2)
/// leaves [1,3,4] and returns true; delete(2) again returns false.
#[test]
fn create_then_delete_matches_worked_example() {
    let mut store = store_with_customer_ids(&[1, 2, 3]);

    let created = store.create_customer(customer("Ada"));
    assert_eq!(created.customer_id, 4);

    assert!(store.delete_customer(2));
    let ids: Vec<u64> = store
        .list_customers()
        .iter()
        .map(|c| c.customer_id)
        .collect();
    assert_eq!(ids, vec![1, 3, 4], "order and contents after delete");

    assert!(!store.delete_customer(2));
}

/// list after create-then-delete of the same id returns the original
/// sequence's contents, order and values.
#[test]
fn create_delete_round_trip_is_stable() {
    let mut store = store_with_customer_ids(&[1, 2, 3]);
    let before = store.list_customers();

    let created = store.create_customer(customer("Transient"));
    assert!(store.delete_customer(created.customer_id));

    let after = store.list_customers();
    assert_eq!(after, before, "round trip must leave the sequence intact");
}

/// list hands out a copy: mutating it never touches the store.
#[test]
fn list_returns_a_copy() {
    let mut store = store_with_customer_ids(&[1, 2]);

    let mut listed = store.list_customers();
    listed.clear();

    assert_eq!(store.list_customers().len(), 2);
}
