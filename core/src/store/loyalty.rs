use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::{Points, RecordId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer's point balance at one business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyAccount {
    #[serde(default)]
    pub loyalty_id: RecordId,
    pub customer_id: RecordId,
    pub business_id: RecordId,
    pub points_balance: Points,
    pub lifetime_points: Points,
    pub last_activity: Option<NaiveDate>,
}

impl Keyed for LoyaltyAccount {
    fn id(&self) -> RecordId {
        self.loyalty_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.loyalty_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoyaltyAccountPatch {
    pub customer_id: Option<RecordId>,
    pub business_id: Option<RecordId>,
    pub points_balance: Option<Points>,
    pub lifetime_points: Option<Points>,
    pub last_activity: Option<NaiveDate>,
}

impl Patch<LoyaltyAccount> for LoyaltyAccountPatch {
    fn apply(&self, row: &mut LoyaltyAccount) {
        if let Some(v) = self.customer_id {
            row.customer_id = v;
        }
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = self.points_balance {
            row.points_balance = v;
        }
        if let Some(v) = self.lifetime_points {
            row.lifetime_points = v;
        }
        if let Some(v) = self.last_activity {
            row.last_activity = Some(v);
        }
    }
}

/// A membership level definition (bronze/silver/gold style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    #[serde(default)]
    pub tier_id: RecordId,
    pub name: String,
    pub min_points: Points,
    pub point_multiplier: f64,
    pub description: String,
}

impl Keyed for Tier {
    fn id(&self) -> RecordId {
        self.tier_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.tier_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TierPatch {
    pub name: Option<String>,
    pub min_points: Option<Points>,
    pub point_multiplier: Option<f64>,
    pub description: Option<String>,
}

impl Patch<Tier> for TierPatch {
    fn apply(&self, row: &mut Tier) {
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = self.min_points {
            row.min_points = v;
        }
        if let Some(v) = self.point_multiplier {
            row.point_multiplier = v;
        }
        if let Some(v) = &self.description {
            row.description = v.clone();
        }
    }
}

/// The tier currently assigned to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerTier {
    #[serde(default)]
    pub customer_tier_id: RecordId,
    pub customer_id: RecordId,
    pub tier_id: RecordId,
    pub assigned_on: NaiveDate,
}

impl Keyed for CustomerTier {
    fn id(&self) -> RecordId {
        self.customer_tier_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.customer_tier_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerTierPatch {
    pub customer_id: Option<RecordId>,
    pub tier_id: Option<RecordId>,
    pub assigned_on: Option<NaiveDate>,
}

impl Patch<CustomerTier> for CustomerTierPatch {
    fn apply(&self, row: &mut CustomerTier) {
        if let Some(v) = self.customer_id {
            row.customer_id = v;
        }
        if let Some(v) = self.tier_id {
            row.tier_id = v;
        }
        if let Some(v) = self.assigned_on {
            row.assigned_on = v;
        }
    }
}

impl AdminStore {
    // ── Loyalty accounts ──────────────────────────────────────

    pub fn list_loyalty_accounts(&mut self) -> Vec<LoyaltyAccount> {
        self.latency.pause();
        self.loyalty_accounts.list()
    }

    pub fn get_loyalty_account(&mut self, id: RecordId) -> Option<LoyaltyAccount> {
        self.latency.pause();
        self.loyalty_accounts.get(id)
    }

    pub fn create_loyalty_account(&mut self, draft: LoyaltyAccount) -> LoyaltyAccount {
        self.latency.pause();
        let row = self.loyalty_accounts.create(draft);
        log::debug!(
            "created loyalty account {} (customer {}, business {})",
            row.loyalty_id,
            row.customer_id,
            row.business_id
        );
        row
    }

    pub fn update_loyalty_account(
        &mut self,
        id: RecordId,
        patch: &LoyaltyAccountPatch,
    ) -> Option<LoyaltyAccount> {
        self.latency.pause();
        self.loyalty_accounts.update(id, patch)
    }

    pub fn delete_loyalty_account(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.loyalty_accounts.delete(id)
    }

    // ── Tiers ─────────────────────────────────────────────────

    pub fn list_tiers(&mut self) -> Vec<Tier> {
        self.latency.pause();
        self.tiers.list()
    }

    pub fn get_tier(&mut self, id: RecordId) -> Option<Tier> {
        self.latency.pause();
        self.tiers.get(id)
    }

    pub fn create_tier(&mut self, draft: Tier) -> Tier {
        self.latency.pause();
        let row = self.tiers.create(draft);
        log::debug!("created tier {} ({})", row.tier_id, row.name);
        row
    }

    pub fn update_tier(&mut self, id: RecordId, patch: &TierPatch) -> Option<Tier> {
        self.latency.pause();
        self.tiers.update(id, patch)
    }

    pub fn delete_tier(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.tiers.delete(id)
    }

    // ── Customer tiers ────────────────────────────────────────

    pub fn list_customer_tiers(&mut self) -> Vec<CustomerTier> {
        self.latency.pause();
        self.customer_tiers.list()
    }

    pub fn get_customer_tier(&mut self, id: RecordId) -> Option<CustomerTier> {
        self.latency.pause();
        self.customer_tiers.get(id)
    }

    pub fn create_customer_tier(&mut self, draft: CustomerTier) -> CustomerTier {
        self.latency.pause();
        let row = self.customer_tiers.create(draft);
        log::debug!(
            "assigned tier {} to customer {}",
            row.tier_id,
            row.customer_id
        );
        row
    }

    pub fn update_customer_tier(
        &mut self,
        id: RecordId,
        patch: &CustomerTierPatch,
    ) -> Option<CustomerTier> {
        self.latency.pause();
        self.customer_tiers.update(id, patch)
    }

    pub fn delete_customer_tier(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.customer_tiers.delete(id)
    }

    // ── Relationship queries ──────────────────────────────────

    pub fn loyalty_accounts_for_customer(&mut self, customer_id: RecordId) -> Vec<LoyaltyAccount> {
        self.latency.pause();
        self.loyalty_accounts
            .filter_by(|a| a.customer_id == customer_id)
    }

    pub fn tiers_for_customer(&mut self, customer_id: RecordId) -> Vec<CustomerTier> {
        self.latency.pause();
        self.customer_tiers
            .filter_by(|ct| ct.customer_id == customer_id)
    }
}
