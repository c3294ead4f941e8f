//! The built-in demo dataset.
//!
//! Every store starts from hard-coded initial sequences — the same rows
//! on every launch, nothing loaded from disk. `expanded_demo_dataset`
//! layers deterministic synthetic customers and activity on top for
//! larger demo sessions.

use crate::{
    names::NameGenerator,
    rng::{RngBank, StreamRng, StreamSlot},
    store::{
        AdminUser, AnalyticsRecord, Business, Customer, CustomerTier, Dataset, Feedback,
        FraudFlag, LoyaltyAccount, Offer, Product, Promotion, Redemption, Referral, Tier,
        Transaction,
    },
    table::Keyed,
    types::RecordId,
};
use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid calendar date")
}

fn ts(y: i32, m: u32, day: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, day, h, min, 0)
        .single()
        .expect("valid timestamp")
}

fn next_id<T: Keyed>(rows: &[T]) -> RecordId {
    rows.iter().map(Keyed::id).max().map_or(1, |max| max + 1)
}

/// The fixed initial dataset the dashboard ships with.
///
/// Fraud flag 2 deliberately references transaction 99, which does not
/// exist: orphaned foreign keys are part of the data model and must
/// resolve to "no related record" at read time.
pub fn demo_dataset() -> Dataset {
    Dataset {
        businesses: vec![
            Business {
                business_id: 1,
                name: "Corner Coffee Co.".into(),
                email: "hello@cornercoffee.example.com".into(),
                phone: "555-201-0001".into(),
                address: "12 Market Street".into(),
                category: "cafe".into(),
                joined_on: d(2023, 2, 11),
            },
            Business {
                business_id: 2,
                name: "Riverside Books".into(),
                email: "contact@riversidebooks.example.com".into(),
                phone: "555-201-0002".into(),
                address: "48 Quay Lane".into(),
                category: "retail".into(),
                joined_on: d(2023, 6, 3),
            },
            Business {
                business_id: 3,
                name: "Summit Fitness Studio".into(),
                email: "team@summitfit.example.com".into(),
                phone: "555-201-0003".into(),
                address: "7 Hillcrest Avenue".into(),
                category: "fitness".into(),
                joined_on: d(2024, 1, 19),
            },
        ],
        products: vec![
            Product {
                product_id: 1,
                business_id: 1,
                name: "Flat White".into(),
                price: 4.50,
                points_per_purchase: 5,
                category: "drinks".into(),
                active: true,
            },
            Product {
                product_id: 2,
                business_id: 1,
                name: "Beans 250g".into(),
                price: 14.00,
                points_per_purchase: 15,
                category: "retail".into(),
                active: true,
            },
            Product {
                product_id: 3,
                business_id: 2,
                name: "Paperback".into(),
                price: 12.99,
                points_per_purchase: 12,
                category: "books".into(),
                active: true,
            },
            Product {
                product_id: 4,
                business_id: 3,
                name: "Day Pass".into(),
                price: 18.00,
                points_per_purchase: 20,
                category: "access".into(),
                active: false,
            },
        ],
        customers: vec![
            Customer {
                customer_id: 1,
                name: "Maria Garcia".into(),
                email: "maria.garcia@example.com".into(),
                phone: "555-301-0001".into(),
                joined_on: d(2023, 3, 5),
                status: "active".into(),
            },
            Customer {
                customer_id: 2,
                name: "Wei Chen".into(),
                email: "wei.chen@example.com".into(),
                phone: "555-301-0002".into(),
                joined_on: d(2023, 9, 14),
                status: "active".into(),
            },
            Customer {
                customer_id: 3,
                name: "Aisha Okafor".into(),
                email: "aisha.okafor@example.com".into(),
                phone: "555-301-0003".into(),
                joined_on: d(2024, 2, 27),
                status: "active".into(),
            },
            Customer {
                customer_id: 4,
                name: "Daniel Novak".into(),
                email: "daniel.novak@example.com".into(),
                phone: "555-301-0004".into(),
                joined_on: d(2024, 5, 8),
                status: "inactive".into(),
            },
        ],
        offers: vec![
            Offer {
                offer_id: 1,
                business_id: 1,
                title: "Free Flat White".into(),
                description: "Any regular hot drink on the house.".into(),
                points_required: 50,
                valid_from: d(2024, 1, 1),
                valid_until: None,
                active: true,
            },
            Offer {
                offer_id: 2,
                business_id: 2,
                title: "5 Off Any Book".into(),
                description: "Five currency units off a single title.".into(),
                points_required: 80,
                valid_from: d(2024, 3, 1),
                valid_until: Some(d(2024, 12, 31)),
                active: true,
            },
            Offer {
                offer_id: 3,
                business_id: 3,
                title: "Guest Pass".into(),
                description: "Bring a friend for free.".into(),
                points_required: 120,
                valid_from: d(2024, 2, 1),
                valid_until: Some(d(2024, 8, 31)),
                active: false,
            },
        ],
        transactions: vec![
            Transaction {
                transaction_id: 1,
                customer_id: 1,
                business_id: 1,
                product_id: Some(1),
                amount: 4.50,
                points_earned: 5,
                occurred_at: ts(2024, 6, 1, 8, 40),
                payment_method: "card".into(),
            },
            Transaction {
                transaction_id: 2,
                customer_id: 1,
                business_id: 2,
                product_id: Some(3),
                amount: 12.99,
                points_earned: 12,
                occurred_at: ts(2024, 6, 2, 15, 5),
                payment_method: "card".into(),
            },
            Transaction {
                transaction_id: 3,
                customer_id: 2,
                business_id: 1,
                product_id: Some(2),
                amount: 14.00,
                points_earned: 15,
                occurred_at: ts(2024, 6, 3, 10, 12),
                payment_method: "cash".into(),
            },
            Transaction {
                transaction_id: 4,
                customer_id: 3,
                business_id: 3,
                product_id: None,
                amount: 18.00,
                points_earned: 20,
                occurred_at: ts(2024, 6, 4, 18, 30),
                payment_method: "app".into(),
            },
            Transaction {
                transaction_id: 5,
                customer_id: 2,
                business_id: 1,
                product_id: Some(1),
                amount: 4.50,
                points_earned: 5,
                occurred_at: ts(2024, 6, 5, 9, 2),
                payment_method: "app".into(),
            },
        ],
        redemptions: vec![
            Redemption {
                redemption_id: 1,
                customer_id: 1,
                offer_id: 1,
                points_spent: 50,
                redeemed_at: ts(2024, 6, 10, 8, 55),
                status: "fulfilled".into(),
            },
            Redemption {
                redemption_id: 2,
                customer_id: 2,
                offer_id: 2,
                points_spent: 80,
                redeemed_at: ts(2024, 6, 12, 16, 20),
                status: "pending".into(),
            },
        ],
        loyalty_accounts: vec![
            LoyaltyAccount {
                loyalty_id: 1,
                customer_id: 1,
                business_id: 1,
                points_balance: 35,
                lifetime_points: 85,
                last_activity: Some(d(2024, 6, 10)),
            },
            LoyaltyAccount {
                loyalty_id: 2,
                customer_id: 1,
                business_id: 2,
                points_balance: 12,
                lifetime_points: 12,
                last_activity: Some(d(2024, 6, 2)),
            },
            LoyaltyAccount {
                loyalty_id: 3,
                customer_id: 2,
                business_id: 1,
                points_balance: 20,
                lifetime_points: 100,
                last_activity: Some(d(2024, 6, 12)),
            },
            LoyaltyAccount {
                loyalty_id: 4,
                customer_id: 3,
                business_id: 3,
                points_balance: 20,
                lifetime_points: 20,
                last_activity: Some(d(2024, 6, 4)),
            },
        ],
        tiers: vec![
            Tier {
                tier_id: 1,
                name: "Bronze".into(),
                min_points: 0,
                point_multiplier: 1.0,
                description: "Entry tier.".into(),
            },
            Tier {
                tier_id: 2,
                name: "Silver".into(),
                min_points: 100,
                point_multiplier: 1.25,
                description: "Unlocked at 100 lifetime points.".into(),
            },
            Tier {
                tier_id: 3,
                name: "Gold".into(),
                min_points: 500,
                point_multiplier: 1.5,
                description: "Unlocked at 500 lifetime points.".into(),
            },
        ],
        customer_tiers: vec![
            CustomerTier {
                customer_tier_id: 1,
                customer_id: 1,
                tier_id: 1,
                assigned_on: d(2023, 3, 5),
            },
            CustomerTier {
                customer_tier_id: 2,
                customer_id: 2,
                tier_id: 2,
                assigned_on: d(2024, 6, 12),
            },
            CustomerTier {
                customer_tier_id: 3,
                customer_id: 3,
                tier_id: 1,
                assigned_on: d(2024, 2, 27),
            },
        ],
        referrals: vec![
            Referral {
                referral_id: 1,
                referrer_id: 1,
                referred_id: Some(3),
                code: "REF-M4K2PX".into(),
                bonus_points: 25,
                status: "completed".into(),
                created_on: d(2024, 2, 20),
            },
            Referral {
                referral_id: 2,
                referrer_id: 2,
                referred_id: None,
                code: "REF-Q9T7RW".into(),
                bonus_points: 25,
                status: "pending".into(),
                created_on: d(2024, 5, 30),
            },
        ],
        feedback: vec![
            Feedback {
                feedback_id: 1,
                customer_id: 1,
                business_id: 1,
                rating: 5,
                comment: "Best flat white in town.".into(),
                submitted_on: d(2024, 6, 1),
            },
            Feedback {
                feedback_id: 2,
                customer_id: 2,
                business_id: 2,
                rating: 4,
                comment: "Great range, slow checkout.".into(),
                submitted_on: d(2024, 6, 3),
            },
            Feedback {
                feedback_id: 3,
                customer_id: 3,
                business_id: 3,
                rating: 3,
                comment: "Busy at peak hours.".into(),
                submitted_on: d(2024, 6, 5),
            },
        ],
        promotions: vec![
            Promotion {
                promotion_id: 1,
                business_id: 1,
                name: "Double Points June".into(),
                description: "All drinks earn double points.".into(),
                discount_percent: 0.0,
                starts_on: d(2024, 6, 1),
                ends_on: d(2024, 6, 30),
                active: true,
            },
            Promotion {
                promotion_id: 2,
                business_id: 2,
                name: "Summer Reading".into(),
                description: "10% off all paperbacks.".into(),
                discount_percent: 10.0,
                starts_on: d(2024, 7, 1),
                ends_on: d(2024, 8, 31),
                active: false,
            },
        ],
        fraud_flags: vec![
            FraudFlag {
                flag_id: 1,
                transaction_id: 5,
                customer_id: 2,
                reason: "Repeated small purchases within one minute.".into(),
                severity: "medium".into(),
                flagged_on: d(2024, 6, 5),
                resolved: false,
            },
            FraudFlag {
                flag_id: 2,
                transaction_id: 99, // transaction was hard-deleted; flag remains
                customer_id: 4,
                reason: "Points earned without matching sale.".into(),
                severity: "high".into(),
                flagged_on: d(2024, 5, 22),
                resolved: true,
            },
        ],
        analytics: vec![
            AnalyticsRecord {
                analytics_id: 1,
                business_id: 1,
                period: "2024-05".into(),
                total_sales: 1824.50,
                transaction_count: 312,
                points_issued: 1950,
                points_redeemed: 640,
                new_customers: 18,
            },
            AnalyticsRecord {
                analytics_id: 2,
                business_id: 2,
                period: "2024-05".into(),
                total_sales: 964.20,
                transaction_count: 75,
                points_issued: 880,
                points_redeemed: 160,
                new_customers: 6,
            },
        ],
        admin_users: vec![
            AdminUser {
                admin_id: 1,
                username: "owner".into(),
                email: "owner@example.com".into(),
                role: "owner".into(),
                last_login: Some(ts(2024, 6, 14, 7, 45)),
            },
            AdminUser {
                admin_id: 2,
                username: "support".into(),
                email: "support@example.com".into(),
                role: "support".into(),
                last_login: None,
            },
        ],
    }
}

/// The demo dataset plus `extra_customers` synthetic members, each with a
/// loyalty account and a handful of transactions, the occasional pending
/// referral, and one new merchant for roughly every ten members.
/// Deterministic under `seed`.
pub fn expanded_demo_dataset(seed: u64, extra_customers: usize) -> Dataset {
    let mut dataset = demo_dataset();
    let bank = RngBank::new(seed);
    let mut rng = bank.for_stream(StreamSlot::SeedData);
    expand(&mut dataset, &mut rng, extra_customers);
    dataset
}

fn expand(dataset: &mut Dataset, rng: &mut StreamRng, extra_customers: usize) {
    let epoch = d(2024, 1, 1);

    // Merchants first, so the new customers below can attach to them.
    for _ in 0..extra_customers / 10 {
        let name = NameGenerator::business_name(rng);
        dataset.businesses.push(Business {
            business_id: next_id(&dataset.businesses),
            email: NameGenerator::business_email(&name),
            phone: NameGenerator::phone(rng),
            address: format!(
                "{} {}",
                rng.next_u64_in(1, 180),
                rng.pick(&["Market Street", "Quay Lane", "Hillcrest Avenue", "Station Road"])
            ),
            category: rng.pick(&["cafe", "retail", "fitness", "services"]).to_string(),
            joined_on: epoch
                .checked_add_days(Days::new(rng.next_u64_below(300)))
                .expect("date within range"),
            name,
        });
    }

    for _ in 0..extra_customers {
        let name = NameGenerator::full_name(rng);
        let customer_id = next_id(&dataset.customers);
        dataset.customers.push(Customer {
            customer_id,
            email: NameGenerator::email_for(&name, rng),
            phone: NameGenerator::phone(rng),
            name,
            joined_on: epoch
                .checked_add_days(Days::new(rng.next_u64_below(300)))
                .expect("date within range"),
            status: "active".into(),
        });

        let business = rng.pick(&dataset.businesses).clone();
        let mut lifetime = 0;
        for _ in 0..rng.next_u64_in(1, 3) {
            let amount = (rng.next_f64_in(4.0, 120.0) * 100.0).round() / 100.0;
            let points = amount.round() as i64;
            lifetime += points;
            dataset.transactions.push(Transaction {
                transaction_id: next_id(&dataset.transactions),
                customer_id,
                business_id: business.business_id,
                product_id: None,
                amount,
                points_earned: points,
                occurred_at: ts(2024, 6, 1, 0, 0)
                    + chrono::Duration::minutes(rng.next_u64_below(40_000) as i64),
                payment_method: rng.pick(&["card", "cash", "app"]).to_string(),
            });
        }

        dataset.loyalty_accounts.push(LoyaltyAccount {
            loyalty_id: next_id(&dataset.loyalty_accounts),
            customer_id,
            business_id: business.business_id,
            points_balance: lifetime,
            lifetime_points: lifetime,
            last_activity: Some(epoch),
        });

        if rng.chance(0.25) {
            dataset.referrals.push(Referral {
                referral_id: next_id(&dataset.referrals),
                referrer_id: customer_id,
                referred_id: None,
                code: NameGenerator::referral_code(rng),
                bonus_points: 25,
                status: "pending".into(),
                created_on: epoch,
            });
        }
    }
}
