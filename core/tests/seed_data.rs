//! Demo dataset invariants: unique ids, resolvable foreign keys (bar the
//! one intentional orphan), deterministic expansion.

use loyalty_core::seed::{demo_dataset, expanded_demo_dataset};
use std::collections::HashSet;

fn assert_unique(label: &str, ids: Vec<u64>) {
    let set: HashSet<u64> = ids.iter().copied().collect();
    assert_eq!(set.len(), ids.len(), "duplicate {label} ids in {ids:?}");
}

/// Every entity sequence carries unique primary keys.
#[test]
fn seed_ids_are_unique_per_entity() {
    let data = demo_dataset();

    assert_unique(
        "business",
        data.businesses.iter().map(|b| b.business_id).collect(),
    );
    assert_unique(
        "product",
        data.products.iter().map(|p| p.product_id).collect(),
    );
    assert_unique(
        "customer",
        data.customers.iter().map(|c| c.customer_id).collect(),
    );
    assert_unique("offer", data.offers.iter().map(|o| o.offer_id).collect());
    assert_unique(
        "transaction",
        data.transactions.iter().map(|t| t.transaction_id).collect(),
    );
    assert_unique(
        "redemption",
        data.redemptions.iter().map(|r| r.redemption_id).collect(),
    );
    assert_unique(
        "loyalty account",
        data.loyalty_accounts.iter().map(|a| a.loyalty_id).collect(),
    );
    assert_unique("tier", data.tiers.iter().map(|t| t.tier_id).collect());
    assert_unique(
        "customer tier",
        data.customer_tiers
            .iter()
            .map(|ct| ct.customer_tier_id)
            .collect(),
    );
    assert_unique(
        "referral",
        data.referrals.iter().map(|r| r.referral_id).collect(),
    );
    assert_unique(
        "feedback",
        data.feedback.iter().map(|f| f.feedback_id).collect(),
    );
    assert_unique(
        "promotion",
        data.promotions.iter().map(|p| p.promotion_id).collect(),
    );
    assert_unique(
        "fraud flag",
        data.fraud_flags.iter().map(|f| f.flag_id).collect(),
    );
    assert_unique(
        "analytics",
        data.analytics.iter().map(|a| a.analytics_id).collect(),
    );
    assert_unique(
        "admin user",
        data.admin_users.iter().map(|a| a.admin_id).collect(),
    );
}

/// All declared foreign keys resolve, except fraud flag 2, which
/// deliberately references a transaction that no longer exists.
#[test]
fn seed_foreign_keys_resolve() {
    let data = demo_dataset();
    let business_ids: HashSet<u64> = data.businesses.iter().map(|b| b.business_id).collect();
    let customer_ids: HashSet<u64> = data.customers.iter().map(|c| c.customer_id).collect();
    let offer_ids: HashSet<u64> = data.offers.iter().map(|o| o.offer_id).collect();
    let tier_ids: HashSet<u64> = data.tiers.iter().map(|t| t.tier_id).collect();
    let transaction_ids: HashSet<u64> = data
        .transactions
        .iter()
        .map(|t| t.transaction_id)
        .collect();

    for p in &data.products {
        assert!(business_ids.contains(&p.business_id), "product {}", p.product_id);
    }
    for o in &data.offers {
        assert!(business_ids.contains(&o.business_id), "offer {}", o.offer_id);
    }
    for t in &data.transactions {
        assert!(customer_ids.contains(&t.customer_id), "txn {}", t.transaction_id);
        assert!(business_ids.contains(&t.business_id), "txn {}", t.transaction_id);
    }
    for r in &data.redemptions {
        assert!(customer_ids.contains(&r.customer_id), "redemption {}", r.redemption_id);
        assert!(offer_ids.contains(&r.offer_id), "redemption {}", r.redemption_id);
    }
    for a in &data.loyalty_accounts {
        assert!(customer_ids.contains(&a.customer_id), "account {}", a.loyalty_id);
        assert!(business_ids.contains(&a.business_id), "account {}", a.loyalty_id);
    }
    for ct in &data.customer_tiers {
        assert!(customer_ids.contains(&ct.customer_id), "ct {}", ct.customer_tier_id);
        assert!(tier_ids.contains(&ct.tier_id), "ct {}", ct.customer_tier_id);
    }
    for f in &data.feedback {
        assert!(customer_ids.contains(&f.customer_id), "feedback {}", f.feedback_id);
        assert!(business_ids.contains(&f.business_id), "feedback {}", f.feedback_id);
    }

    for flag in &data.fraud_flags {
        assert!(customer_ids.contains(&flag.customer_id), "flag {}", flag.flag_id);
        if flag.flag_id == 2 {
            assert!(
                !transaction_ids.contains(&flag.transaction_id),
                "flag 2 must stay orphaned"
            );
        } else {
            assert!(
                transaction_ids.contains(&flag.transaction_id),
                "flag {}",
                flag.flag_id
            );
        }
    }
}

/// Expansion adds exactly the requested customers, each with a loyalty
/// account and at least one transaction, plus one merchant per ten
/// customers, and keeps ids unique.
#[test]
fn expansion_adds_customers_with_activity() {
    let base = demo_dataset();
    let data = expanded_demo_dataset(7, 20);

    assert_eq!(data.customers.len(), base.customers.len() + 20);
    assert_eq!(
        data.businesses.len(),
        base.businesses.len() + 2,
        "one synthetic merchant per ten customers"
    );
    assert_eq!(
        data.loyalty_accounts.len(),
        base.loyalty_accounts.len() + 20
    );
    assert!(
        data.transactions.len() >= base.transactions.len() + 20,
        "each synthetic customer makes at least one transaction"
    );

    assert_unique(
        "business",
        data.businesses.iter().map(|b| b.business_id).collect(),
    );
    assert_unique(
        "customer",
        data.customers.iter().map(|c| c.customer_id).collect(),
    );
    assert_unique(
        "transaction",
        data.transactions.iter().map(|t| t.transaction_id).collect(),
    );
    assert_unique(
        "loyalty account",
        data.loyalty_accounts.iter().map(|a| a.loyalty_id).collect(),
    );

    let business_ids: HashSet<u64> = data.businesses.iter().map(|b| b.business_id).collect();
    for account in &data.loyalty_accounts {
        assert!(
            business_ids.contains(&account.business_id),
            "synthetic account {} must point at an existing business",
            account.loyalty_id
        );
    }
}

/// The same seed produces byte-identical expansions; a different seed
/// does not.
#[test]
fn expansion_is_deterministic_under_seed() {
    let a = expanded_demo_dataset(1234, 15);
    let b = expanded_demo_dataset(1234, 15);
    assert_eq!(a, b, "same seed must reproduce the same dataset");

    let c = expanded_demo_dataset(4321, 15);
    assert_ne!(
        a.customers, c.customers,
        "a different seed must generate different customers"
    );
}
