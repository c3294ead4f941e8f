//! Command dispatch: the JSON surface the dashboard submits, end to end
//! against a seeded store.

use loyalty_core::{
    command::{dispatch, AdminCommand, CommandOutcome, EntityKind, RelationKind},
    config::AdminConfig,
    error::AdminError,
    store::AdminStore,
};
use serde_json::json;

fn make_store() -> AdminStore {
    AdminStore::with_demo_data(&AdminConfig::default_test())
}

/// Create accepts a form-shaped payload without an id and returns the
/// stored row with one assigned.
#[test]
fn create_assigns_id_from_json_payload() {
    let mut store = make_store();

    let outcome = dispatch(
        &mut store,
        AdminCommand::Create {
            entity: EntityKind::Customer,
            fields: json!({
                "name": "Form Signup",
                "email": "form@example.com",
                "phone": "555-100-2000",
                "joined_on": "2024-07-01",
                "status": "active"
            }),
        },
    )
    .expect("create dispatches");

    match outcome {
        CommandOutcome::Created { row } => {
            assert_eq!(row["name"], "Form Signup");
            assert_eq!(row["customer_id"], 5, "demo data holds customers 1-4");
        }
        other => panic!("expected Created, got {other:?}"),
    }
}

/// Update takes a partial field set; everything else stays as stored.
#[test]
fn update_merges_partial_payload() {
    let mut store = make_store();

    let outcome = dispatch(
        &mut store,
        AdminCommand::Update {
            entity: EntityKind::Business,
            id: 1,
            fields: json!({ "phone": "555-999-0000" }),
        },
    )
    .expect("update dispatches");

    match outcome {
        CommandOutcome::Updated { row } => {
            assert_eq!(row["phone"], "555-999-0000");
            assert_eq!(row["name"], "Corner Coffee Co.", "unset field unchanged");
        }
        other => panic!("expected Updated, got {other:?}"),
    }
}

/// Unknown ids come back as NotFound outcomes, not errors.
#[test]
fn missing_ids_are_not_found_outcomes() {
    let mut store = make_store();

    let outcome = dispatch(
        &mut store,
        AdminCommand::Get {
            entity: EntityKind::Offer,
            id: 404,
        },
    )
    .expect("get dispatches");
    assert!(matches!(outcome, CommandOutcome::NotFound { id: 404, .. }));

    let outcome = dispatch(
        &mut store,
        AdminCommand::Update {
            entity: EntityKind::Offer,
            id: 404,
            fields: json!({ "active": false }),
        },
    )
    .expect("update dispatches");
    assert!(matches!(outcome, CommandOutcome::NotFound { id: 404, .. }));
}

/// Delete reports whether a row was removed; a repeat delete reports
/// removed = false.
#[test]
fn delete_reports_removal() {
    let mut store = make_store();
    let delete = AdminCommand::Delete {
        entity: EntityKind::Redemption,
        id: 2,
    };

    match dispatch(&mut store, delete.clone()).expect("delete dispatches") {
        CommandOutcome::Deleted { removed, .. } => assert!(removed),
        other => panic!("expected Deleted, got {other:?}"),
    }
    match dispatch(&mut store, delete).expect("delete dispatches") {
        CommandOutcome::Deleted { removed, .. } => assert!(!removed),
        other => panic!("expected Deleted, got {other:?}"),
    }
}

/// List returns the entity's full sequence as a JSON array.
#[test]
fn list_returns_all_rows() {
    let mut store = make_store();

    let outcome = dispatch(
        &mut store,
        AdminCommand::List {
            entity: EntityKind::Tier,
        },
    )
    .expect("list dispatches");

    match outcome {
        CommandOutcome::Rows { rows } => {
            let rows = rows.as_array().expect("rows is an array");
            assert_eq!(rows.len(), 3);
            assert_eq!(rows[0]["name"], "Bronze");
        }
        other => panic!("expected Rows, got {other:?}"),
    }
}

/// Related runs the named foreign-key filter.
#[test]
fn related_runs_relationship_query() {
    let mut store = make_store();

    let outcome = dispatch(
        &mut store,
        AdminCommand::Related {
            relation: RelationKind::OffersForBusiness,
            id: 1,
        },
    )
    .expect("related dispatches");

    match outcome {
        CommandOutcome::Rows { rows } => {
            let rows = rows.as_array().expect("rows is an array");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["title"], "Free Flat White");
        }
        other => panic!("expected Rows, got {other:?}"),
    }
}

/// Counts mirrors the store's per-entity row counts.
#[test]
fn counts_reports_store_shape() {
    let mut store = make_store();

    let outcome = dispatch(&mut store, AdminCommand::Counts).expect("counts dispatches");
    match outcome {
        CommandOutcome::Counts { counts } => {
            assert_eq!(counts.businesses, 3);
            assert_eq!(counts.customers, 4);
            assert_eq!(counts.transactions, 5);
        }
        other => panic!("expected Counts, got {other:?}"),
    }
}

/// A malformed payload fails with InvalidPayload naming the entity —
/// nothing reaches the sequence.
#[test]
fn malformed_payload_is_rejected() {
    let mut store = make_store();
    let customers_before = store.list_customers().len();

    let err = dispatch(
        &mut store,
        AdminCommand::Create {
            entity: EntityKind::Customer,
            fields: json!({ "name": 17 }),
        },
    )
    .expect_err("bad payload must fail");

    match err {
        AdminError::InvalidPayload { entity, .. } => assert_eq!(entity, "customer"),
        other => panic!("expected InvalidPayload, got {other}"),
    }
    assert_eq!(
        store.list_customers().len(),
        customers_before,
        "failed create must not append"
    );
}

/// Commands themselves round-trip through their wire shape.
#[test]
fn commands_parse_from_wire_json() {
    let parsed: AdminCommand = serde_json::from_str(
        r#"{ "cmd": "related", "relation": "flags_for_transaction", "id": 99 }"#,
    )
    .expect("command parses");

    let mut store = make_store();
    match dispatch(&mut store, parsed).expect("dispatches") {
        CommandOutcome::Rows { rows } => {
            assert_eq!(rows.as_array().map(Vec::len), Some(1), "orphaned flag found");
        }
        other => panic!("expected Rows, got {other:?}"),
    }
}
