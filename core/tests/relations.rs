//! Foreign-key relationship queries over the demo dataset: plain
//! filters, insertion order, dangling references, no cascade.

use loyalty_core::{config::AdminConfig, store::AdminStore};

fn make_store() -> AdminStore {
    AdminStore::with_demo_data(&AdminConfig::default_test())
}

/// Children queries return exactly the records carrying the parent id,
/// in insertion order.
#[test]
fn children_filtered_by_parent_id() {
    let mut store = make_store();

    let products = store.products_for_business(1);
    let ids: Vec<u64> = products.iter().map(|p| p.product_id).collect();
    assert_eq!(ids, vec![1, 2], "business 1 owns products 1 and 2");

    let transactions = store.transactions_for_customer(1);
    let ids: Vec<u64> = transactions.iter().map(|t| t.transaction_id).collect();
    assert_eq!(ids, vec![1, 2], "customer 1 made transactions 1 and 2");

    let offers = store.offers_for_business(2);
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0].title, "5 Off Any Book");
}

/// An unknown parent id yields an empty result, not an error.
#[test]
fn unknown_parent_yields_empty() {
    let mut store = make_store();

    assert!(store.products_for_business(999).is_empty());
    assert!(store.transactions_for_customer(999).is_empty());
    assert!(store.redemptions_for_offer(999).is_empty());
}

/// The seeded dangling reference: fraud flag 2 points at transaction 99,
/// which does not exist. The flag is still readable and filterable; the
/// transaction lookup resolves to "no related record".
#[test]
fn dangling_foreign_key_resolves_to_absence() {
    let mut store = make_store();

    let flags = store.flags_for_transaction(99);
    assert_eq!(flags.len(), 1, "the orphaned flag must still match");
    assert_eq!(flags[0].flag_id, 2);

    assert!(
        store.get_transaction(99).is_none(),
        "transaction 99 must not exist"
    );
}

/// Deleting a parent leaves dependents in place: no cascade, no
/// null-out. Their foreign keys simply stop resolving.
#[test]
fn delete_parent_leaves_orphans_behind() {
    let mut store = make_store();

    let products_before = store.products_for_business(1).len();
    assert!(products_before > 0);

    assert!(store.delete_business(1));

    let orphans = store.products_for_business(1);
    assert_eq!(
        orphans.len(),
        products_before,
        "products must survive their business"
    );
    for product in &orphans {
        assert!(
            store.get_business(product.business_id).is_none(),
            "orphaned key must resolve to no related record"
        );
    }

    // Offers, promotions and analytics of business 1 are equally untouched.
    assert!(!store.offers_for_business(1).is_empty());
    assert!(!store.promotions_for_business(1).is_empty());
    assert!(!store.analytics_for_business(1).is_empty());
}

/// Customer-side queries: redemptions, loyalty accounts, referrals,
/// feedback and fraud flags all filter on the same customer id.
#[test]
fn customer_children_queries() {
    let mut store = make_store();

    assert_eq!(store.redemptions_for_customer(1).len(), 1);
    assert_eq!(store.loyalty_accounts_for_customer(1).len(), 2);
    assert_eq!(store.referrals_for_customer(1).len(), 1);
    assert_eq!(store.feedback_for_customer(1).len(), 1);
    assert_eq!(store.flags_for_customer(2).len(), 1);
    assert_eq!(store.tiers_for_customer(2).len(), 1);
}

/// Relationship queries see writes immediately: a new child shows up in
/// the next filter, same order as insertion.
#[test]
fn new_children_appear_in_subsequent_queries() {
    let mut store = make_store();

    let before = store.feedback_for_business(1).len();
    let mut draft = store.get_feedback(1).expect("seed feedback 1 exists");
    draft.business_id = 1;
    draft.comment = "Second visit, still great.".into();
    let created = store.create_feedback(draft);

    let after = store.feedback_for_business(1);
    assert_eq!(after.len(), before + 1);
    assert_eq!(
        after.last().map(|f| f.feedback_id),
        Some(created.feedback_id),
        "newest child must come last"
    );
}
