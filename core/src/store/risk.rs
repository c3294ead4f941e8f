use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::{Points, RecordId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A suspicious-activity marker raised against a transaction.
/// The flag outlives the transaction it points at; a deleted
/// transaction simply stops resolving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudFlag {
    #[serde(default)]
    pub flag_id: RecordId,
    pub transaction_id: RecordId,
    pub customer_id: RecordId,
    pub reason: String,
    pub severity: String, // "low" | "medium" | "high"
    pub flagged_on: NaiveDate,
    pub resolved: bool,
}

impl Keyed for FraudFlag {
    fn id(&self) -> RecordId {
        self.flag_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.flag_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FraudFlagPatch {
    pub transaction_id: Option<RecordId>,
    pub customer_id: Option<RecordId>,
    pub reason: Option<String>,
    pub severity: Option<String>,
    pub flagged_on: Option<NaiveDate>,
    pub resolved: Option<bool>,
}

impl Patch<FraudFlag> for FraudFlagPatch {
    fn apply(&self, row: &mut FraudFlag) {
        if let Some(v) = self.transaction_id {
            row.transaction_id = v;
        }
        if let Some(v) = self.customer_id {
            row.customer_id = v;
        }
        if let Some(v) = &self.reason {
            row.reason = v.clone();
        }
        if let Some(v) = &self.severity {
            row.severity = v.clone();
        }
        if let Some(v) = self.flagged_on {
            row.flagged_on = v;
        }
        if let Some(v) = self.resolved {
            row.resolved = v;
        }
    }
}

/// One reporting period of rolled-up numbers for a business. The
/// dashboard charts read these rows as-is; nothing recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    #[serde(default)]
    pub analytics_id: RecordId,
    pub business_id: RecordId,
    pub period: String, // "YYYY-MM"
    pub total_sales: f64,
    pub transaction_count: u64,
    pub points_issued: Points,
    pub points_redeemed: Points,
    pub new_customers: u64,
}

impl Keyed for AnalyticsRecord {
    fn id(&self) -> RecordId {
        self.analytics_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.analytics_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsRecordPatch {
    pub business_id: Option<RecordId>,
    pub period: Option<String>,
    pub total_sales: Option<f64>,
    pub transaction_count: Option<u64>,
    pub points_issued: Option<Points>,
    pub points_redeemed: Option<Points>,
    pub new_customers: Option<u64>,
}

impl Patch<AnalyticsRecord> for AnalyticsRecordPatch {
    fn apply(&self, row: &mut AnalyticsRecord) {
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = &self.period {
            row.period = v.clone();
        }
        if let Some(v) = self.total_sales {
            row.total_sales = v;
        }
        if let Some(v) = self.transaction_count {
            row.transaction_count = v;
        }
        if let Some(v) = self.points_issued {
            row.points_issued = v;
        }
        if let Some(v) = self.points_redeemed {
            row.points_redeemed = v;
        }
        if let Some(v) = self.new_customers {
            row.new_customers = v;
        }
    }
}

impl AdminStore {
    // ── Fraud flags ───────────────────────────────────────────

    pub fn list_fraud_flags(&mut self) -> Vec<FraudFlag> {
        self.latency.pause();
        self.fraud_flags.list()
    }

    pub fn get_fraud_flag(&mut self, id: RecordId) -> Option<FraudFlag> {
        self.latency.pause();
        self.fraud_flags.get(id)
    }

    pub fn create_fraud_flag(&mut self, draft: FraudFlag) -> FraudFlag {
        self.latency.pause();
        let row = self.fraud_flags.create(draft);
        log::debug!(
            "created fraud flag {} (transaction {}, severity {})",
            row.flag_id,
            row.transaction_id,
            row.severity
        );
        row
    }

    pub fn update_fraud_flag(&mut self, id: RecordId, patch: &FraudFlagPatch) -> Option<FraudFlag> {
        self.latency.pause();
        self.fraud_flags.update(id, patch)
    }

    pub fn delete_fraud_flag(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.fraud_flags.delete(id)
    }

    // ── Analytics ─────────────────────────────────────────────

    pub fn list_analytics(&mut self) -> Vec<AnalyticsRecord> {
        self.latency.pause();
        self.analytics.list()
    }

    pub fn get_analytics(&mut self, id: RecordId) -> Option<AnalyticsRecord> {
        self.latency.pause();
        self.analytics.get(id)
    }

    pub fn create_analytics(&mut self, draft: AnalyticsRecord) -> AnalyticsRecord {
        self.latency.pause();
        let row = self.analytics.create(draft);
        log::debug!(
            "created analytics record {} (business {}, period {})",
            row.analytics_id,
            row.business_id,
            row.period
        );
        row
    }

    pub fn update_analytics(
        &mut self,
        id: RecordId,
        patch: &AnalyticsRecordPatch,
    ) -> Option<AnalyticsRecord> {
        self.latency.pause();
        self.analytics.update(id, patch)
    }

    pub fn delete_analytics(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.analytics.delete(id)
    }

    // ── Relationship queries ──────────────────────────────────

    pub fn flags_for_customer(&mut self, customer_id: RecordId) -> Vec<FraudFlag> {
        self.latency.pause();
        self.fraud_flags.filter_by(|f| f.customer_id == customer_id)
    }

    pub fn flags_for_transaction(&mut self, transaction_id: RecordId) -> Vec<FraudFlag> {
        self.latency.pause();
        self.fraud_flags
            .filter_by(|f| f.transaction_id == transaction_id)
    }

    pub fn analytics_for_business(&mut self, business_id: RecordId) -> Vec<AnalyticsRecord> {
        self.latency.pause();
        self.analytics.filter_by(|a| a.business_id == business_id)
    }
}
