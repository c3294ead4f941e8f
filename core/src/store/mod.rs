//! The in-memory entity store.
//!
//! RULE: Only the store owns record sequences.
//! Callers go through the per-entity operations — they never hold a
//! table. One `AdminStore` is constructed at process start (seeded or
//! empty) and passed where it is needed; there is no global state and
//! nothing survives the process.
//!
//! Per-entity CRUD wrappers and the foreign-key relationship queries are
//! grouped by domain in the submodules below; each is an `impl AdminStore`
//! extension next to the record types it serves.

mod business;
mod customer;
mod engagement;
mod loyalty;
mod offer;
mod risk;
mod transaction;

pub use business::{Business, BusinessPatch, Product, ProductPatch};
pub use customer::{AdminUser, AdminUserPatch, Customer, CustomerPatch};
pub use engagement::{Feedback, FeedbackPatch, Referral, ReferralPatch};
pub use loyalty::{
    CustomerTier, CustomerTierPatch, LoyaltyAccount, LoyaltyAccountPatch, Tier, TierPatch,
};
pub use offer::{Offer, OfferPatch, Promotion, PromotionPatch};
pub use risk::{AnalyticsRecord, AnalyticsRecordPatch, FraudFlag, FraudFlagPatch};
pub use transaction::{Redemption, RedemptionPatch, Transaction, TransactionPatch};

use crate::{
    config::AdminConfig,
    latency::Latency,
    rng::{RngBank, StreamSlot},
    table::Table,
};
use serde::{Deserialize, Serialize};

/// Every record sequence in the store, as one serializable bundle.
/// This is what seeds a store and what a snapshot captures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub businesses: Vec<Business>,
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub offers: Vec<Offer>,
    pub transactions: Vec<Transaction>,
    pub redemptions: Vec<Redemption>,
    pub loyalty_accounts: Vec<LoyaltyAccount>,
    pub tiers: Vec<Tier>,
    pub customer_tiers: Vec<CustomerTier>,
    pub referrals: Vec<Referral>,
    pub feedback: Vec<Feedback>,
    pub promotions: Vec<Promotion>,
    pub fraud_flags: Vec<FraudFlag>,
    pub analytics: Vec<AnalyticsRecord>,
    pub admin_users: Vec<AdminUser>,
}

/// Row counts per entity, for summaries and the runner's status output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreCounts {
    pub businesses: usize,
    pub products: usize,
    pub customers: usize,
    pub offers: usize,
    pub transactions: usize,
    pub redemptions: usize,
    pub loyalty_accounts: usize,
    pub tiers: usize,
    pub customer_tiers: usize,
    pub referrals: usize,
    pub feedback: usize,
    pub promotions: usize,
    pub fraud_flags: usize,
    pub analytics: usize,
    pub admin_users: usize,
}

pub struct AdminStore {
    latency: Latency,
    businesses: Table<Business>,
    products: Table<Product>,
    customers: Table<Customer>,
    offers: Table<Offer>,
    transactions: Table<Transaction>,
    redemptions: Table<Redemption>,
    loyalty_accounts: Table<LoyaltyAccount>,
    tiers: Table<Tier>,
    customer_tiers: Table<CustomerTier>,
    referrals: Table<Referral>,
    feedback: Table<Feedback>,
    promotions: Table<Promotion>,
    fraud_flags: Table<FraudFlag>,
    analytics: Table<AnalyticsRecord>,
    admin_users: Table<AdminUser>,
}

impl AdminStore {
    /// An empty store. Mostly useful in tests; the product entry points
    /// are [`AdminStore::with_demo_data`] and [`AdminStore::from_dataset`].
    pub fn new(config: &AdminConfig) -> Self {
        Self::from_dataset(config, Dataset::default())
    }

    /// A store seeded with the built-in demo dataset.
    pub fn with_demo_data(config: &AdminConfig) -> Self {
        Self::from_dataset(config, crate::seed::demo_dataset())
    }

    /// Build a store owning the given dataset.
    pub fn from_dataset(config: &AdminConfig, dataset: Dataset) -> Self {
        let bank = RngBank::new(config.seed);
        let latency = Latency::new(config.latency, bank.for_stream(StreamSlot::Latency));
        Self {
            latency,
            businesses: Table::from_rows(dataset.businesses),
            products: Table::from_rows(dataset.products),
            customers: Table::from_rows(dataset.customers),
            offers: Table::from_rows(dataset.offers),
            transactions: Table::from_rows(dataset.transactions),
            redemptions: Table::from_rows(dataset.redemptions),
            loyalty_accounts: Table::from_rows(dataset.loyalty_accounts),
            tiers: Table::from_rows(dataset.tiers),
            customer_tiers: Table::from_rows(dataset.customer_tiers),
            referrals: Table::from_rows(dataset.referrals),
            feedback: Table::from_rows(dataset.feedback),
            promotions: Table::from_rows(dataset.promotions),
            fraud_flags: Table::from_rows(dataset.fraud_flags),
            analytics: Table::from_rows(dataset.analytics),
            admin_users: Table::from_rows(dataset.admin_users),
        }
    }

    /// Copy every sequence out of the store. Bypasses the latency gate:
    /// this is the snapshot/export seam, not a dashboard operation.
    pub fn dataset(&self) -> Dataset {
        Dataset {
            businesses: self.businesses.list(),
            products: self.products.list(),
            customers: self.customers.list(),
            offers: self.offers.list(),
            transactions: self.transactions.list(),
            redemptions: self.redemptions.list(),
            loyalty_accounts: self.loyalty_accounts.list(),
            tiers: self.tiers.list(),
            customer_tiers: self.customer_tiers.list(),
            referrals: self.referrals.list(),
            feedback: self.feedback.list(),
            promotions: self.promotions.list(),
            fraud_flags: self.fraud_flags.list(),
            analytics: self.analytics.list(),
            admin_users: self.admin_users.list(),
        }
    }

    /// Row counts per entity. Also bypasses the latency gate.
    pub fn counts(&self) -> StoreCounts {
        StoreCounts {
            businesses: self.businesses.len(),
            products: self.products.len(),
            customers: self.customers.len(),
            offers: self.offers.len(),
            transactions: self.transactions.len(),
            redemptions: self.redemptions.len(),
            loyalty_accounts: self.loyalty_accounts.len(),
            tiers: self.tiers.len(),
            customer_tiers: self.customer_tiers.len(),
            referrals: self.referrals.len(),
            feedback: self.feedback.len(),
            promotions: self.promotions.len(),
            fraud_flags: self.fraud_flags.len(),
            analytics: self.analytics.len(),
            admin_users: self.admin_users.len(),
        }
    }

    pub fn latency_enabled(&self) -> bool {
        self.latency.is_enabled()
    }
}
