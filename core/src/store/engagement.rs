use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::{Points, RecordId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A refer-a-friend entry. `referred_id` stays empty until the invited
/// customer actually signs up with the code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Referral {
    #[serde(default)]
    pub referral_id: RecordId,
    pub referrer_id: RecordId,
    pub referred_id: Option<RecordId>,
    pub code: String,
    pub bonus_points: Points,
    pub status: String, // "pending" | "completed" | "expired"
    pub created_on: NaiveDate,
}

impl Keyed for Referral {
    fn id(&self) -> RecordId {
        self.referral_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.referral_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReferralPatch {
    pub referrer_id: Option<RecordId>,
    pub referred_id: Option<RecordId>,
    pub code: Option<String>,
    pub bonus_points: Option<Points>,
    pub status: Option<String>,
    pub created_on: Option<NaiveDate>,
}

impl Patch<Referral> for ReferralPatch {
    fn apply(&self, row: &mut Referral) {
        if let Some(v) = self.referrer_id {
            row.referrer_id = v;
        }
        if let Some(v) = self.referred_id {
            row.referred_id = Some(v);
        }
        if let Some(v) = &self.code {
            row.code = v.clone();
        }
        if let Some(v) = self.bonus_points {
            row.bonus_points = v;
        }
        if let Some(v) = &self.status {
            row.status = v.clone();
        }
        if let Some(v) = self.created_on {
            row.created_on = v;
        }
    }
}

/// A customer's rating of a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(default)]
    pub feedback_id: RecordId,
    pub customer_id: RecordId,
    pub business_id: RecordId,
    pub rating: u8, // 1..=5
    pub comment: String,
    pub submitted_on: NaiveDate,
}

impl Keyed for Feedback {
    fn id(&self) -> RecordId {
        self.feedback_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.feedback_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeedbackPatch {
    pub customer_id: Option<RecordId>,
    pub business_id: Option<RecordId>,
    pub rating: Option<u8>,
    pub comment: Option<String>,
    pub submitted_on: Option<NaiveDate>,
}

impl Patch<Feedback> for FeedbackPatch {
    fn apply(&self, row: &mut Feedback) {
        if let Some(v) = self.customer_id {
            row.customer_id = v;
        }
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = self.rating {
            row.rating = v;
        }
        if let Some(v) = &self.comment {
            row.comment = v.clone();
        }
        if let Some(v) = self.submitted_on {
            row.submitted_on = v;
        }
    }
}

impl AdminStore {
    // ── Referral ──────────────────────────────────────────────

    pub fn list_referrals(&mut self) -> Vec<Referral> {
        self.latency.pause();
        self.referrals.list()
    }

    pub fn get_referral(&mut self, id: RecordId) -> Option<Referral> {
        self.latency.pause();
        self.referrals.get(id)
    }

    pub fn create_referral(&mut self, draft: Referral) -> Referral {
        self.latency.pause();
        let row = self.referrals.create(draft);
        log::debug!(
            "created referral {} (referrer {}, code {})",
            row.referral_id,
            row.referrer_id,
            row.code
        );
        row
    }

    pub fn update_referral(&mut self, id: RecordId, patch: &ReferralPatch) -> Option<Referral> {
        self.latency.pause();
        self.referrals.update(id, patch)
    }

    pub fn delete_referral(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.referrals.delete(id)
    }

    // ── Feedback ──────────────────────────────────────────────

    pub fn list_feedback(&mut self) -> Vec<Feedback> {
        self.latency.pause();
        self.feedback.list()
    }

    pub fn get_feedback(&mut self, id: RecordId) -> Option<Feedback> {
        self.latency.pause();
        self.feedback.get(id)
    }

    pub fn create_feedback(&mut self, draft: Feedback) -> Feedback {
        self.latency.pause();
        let row = self.feedback.create(draft);
        log::debug!(
            "created feedback {} (customer {}, business {}, rating {})",
            row.feedback_id,
            row.customer_id,
            row.business_id,
            row.rating
        );
        row
    }

    pub fn update_feedback(&mut self, id: RecordId, patch: &FeedbackPatch) -> Option<Feedback> {
        self.latency.pause();
        self.feedback.update(id, patch)
    }

    pub fn delete_feedback(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.feedback.delete(id)
    }

    // ── Relationship queries ──────────────────────────────────

    pub fn referrals_for_customer(&mut self, customer_id: RecordId) -> Vec<Referral> {
        self.latency.pause();
        self.referrals.filter_by(|r| r.referrer_id == customer_id)
    }

    pub fn feedback_for_business(&mut self, business_id: RecordId) -> Vec<Feedback> {
        self.latency.pause();
        self.feedback.filter_by(|f| f.business_id == business_id)
    }

    pub fn feedback_for_customer(&mut self, customer_id: RecordId) -> Vec<Feedback> {
        self.latency.pause();
        self.feedback.filter_by(|f| f.customer_id == customer_id)
    }
}
