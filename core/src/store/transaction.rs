use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::{Points, RecordId},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A purchase at a business, with the points it earned.
/// `product_id` is optional: walk-in sales are recorded without one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub transaction_id: RecordId,
    pub customer_id: RecordId,
    pub business_id: RecordId,
    pub product_id: Option<RecordId>,
    pub amount: f64,
    pub points_earned: Points,
    pub occurred_at: DateTime<Utc>,
    pub payment_method: String, // "card" | "cash" | "app"
}

impl Keyed for Transaction {
    fn id(&self) -> RecordId {
        self.transaction_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.transaction_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TransactionPatch {
    pub customer_id: Option<RecordId>,
    pub business_id: Option<RecordId>,
    pub product_id: Option<RecordId>,
    pub amount: Option<f64>,
    pub points_earned: Option<Points>,
    pub occurred_at: Option<DateTime<Utc>>,
    pub payment_method: Option<String>,
}

impl Patch<Transaction> for TransactionPatch {
    fn apply(&self, row: &mut Transaction) {
        if let Some(v) = self.customer_id {
            row.customer_id = v;
        }
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = self.product_id {
            row.product_id = Some(v);
        }
        if let Some(v) = self.amount {
            row.amount = v;
        }
        if let Some(v) = self.points_earned {
            row.points_earned = v;
        }
        if let Some(v) = self.occurred_at {
            row.occurred_at = v;
        }
        if let Some(v) = &self.payment_method {
            row.payment_method = v.clone();
        }
    }
}

/// Points spent against an offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    #[serde(default)]
    pub redemption_id: RecordId,
    pub customer_id: RecordId,
    pub offer_id: RecordId,
    pub points_spent: Points,
    pub redeemed_at: DateTime<Utc>,
    pub status: String, // "pending" | "fulfilled" | "cancelled"
}

impl Keyed for Redemption {
    fn id(&self) -> RecordId {
        self.redemption_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.redemption_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RedemptionPatch {
    pub customer_id: Option<RecordId>,
    pub offer_id: Option<RecordId>,
    pub points_spent: Option<Points>,
    pub redeemed_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

impl Patch<Redemption> for RedemptionPatch {
    fn apply(&self, row: &mut Redemption) {
        if let Some(v) = self.customer_id {
            row.customer_id = v;
        }
        if let Some(v) = self.offer_id {
            row.offer_id = v;
        }
        if let Some(v) = self.points_spent {
            row.points_spent = v;
        }
        if let Some(v) = self.redeemed_at {
            row.redeemed_at = v;
        }
        if let Some(v) = &self.status {
            row.status = v.clone();
        }
    }
}

impl AdminStore {
    // ── Transaction ───────────────────────────────────────────

    pub fn list_transactions(&mut self) -> Vec<Transaction> {
        self.latency.pause();
        self.transactions.list()
    }

    pub fn get_transaction(&mut self, id: RecordId) -> Option<Transaction> {
        self.latency.pause();
        self.transactions.get(id)
    }

    pub fn create_transaction(&mut self, draft: Transaction) -> Transaction {
        self.latency.pause();
        let row = self.transactions.create(draft);
        log::debug!(
            "created transaction {} (customer {}, business {}, {:.2})",
            row.transaction_id,
            row.customer_id,
            row.business_id,
            row.amount
        );
        row
    }

    pub fn update_transaction(
        &mut self,
        id: RecordId,
        patch: &TransactionPatch,
    ) -> Option<Transaction> {
        self.latency.pause();
        self.transactions.update(id, patch)
    }

    pub fn delete_transaction(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.transactions.delete(id)
    }

    // ── Redemption ────────────────────────────────────────────

    pub fn list_redemptions(&mut self) -> Vec<Redemption> {
        self.latency.pause();
        self.redemptions.list()
    }

    pub fn get_redemption(&mut self, id: RecordId) -> Option<Redemption> {
        self.latency.pause();
        self.redemptions.get(id)
    }

    pub fn create_redemption(&mut self, draft: Redemption) -> Redemption {
        self.latency.pause();
        let row = self.redemptions.create(draft);
        log::debug!(
            "created redemption {} (customer {}, offer {})",
            row.redemption_id,
            row.customer_id,
            row.offer_id
        );
        row
    }

    pub fn update_redemption(
        &mut self,
        id: RecordId,
        patch: &RedemptionPatch,
    ) -> Option<Redemption> {
        self.latency.pause();
        self.redemptions.update(id, patch)
    }

    pub fn delete_redemption(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.redemptions.delete(id)
    }

    // ── Relationship queries ──────────────────────────────────

    pub fn transactions_for_customer(&mut self, customer_id: RecordId) -> Vec<Transaction> {
        self.latency.pause();
        self.transactions.filter_by(|t| t.customer_id == customer_id)
    }

    pub fn transactions_for_business(&mut self, business_id: RecordId) -> Vec<Transaction> {
        self.latency.pause();
        self.transactions.filter_by(|t| t.business_id == business_id)
    }

    pub fn redemptions_for_customer(&mut self, customer_id: RecordId) -> Vec<Redemption> {
        self.latency.pause();
        self.redemptions.filter_by(|r| r.customer_id == customer_id)
    }

    pub fn redemptions_for_offer(&mut self, offer_id: RecordId) -> Vec<Redemption> {
        self.latency.pause();
        self.redemptions.filter_by(|r| r.offer_id == offer_id)
    }
}
