use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::{Points, RecordId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A reward a customer can redeem points against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub offer_id: RecordId,
    pub business_id: RecordId,
    pub title: String,
    pub description: String,
    pub points_required: Points,
    pub valid_from: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub active: bool,
}

impl Keyed for Offer {
    fn id(&self) -> RecordId {
        self.offer_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.offer_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OfferPatch {
    pub business_id: Option<RecordId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub points_required: Option<Points>,
    pub valid_from: Option<NaiveDate>,
    pub valid_until: Option<NaiveDate>,
    pub active: Option<bool>,
}

impl Patch<Offer> for OfferPatch {
    fn apply(&self, row: &mut Offer) {
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = &self.title {
            row.title = v.clone();
        }
        if let Some(v) = &self.description {
            row.description = v.clone();
        }
        if let Some(v) = self.points_required {
            row.points_required = v;
        }
        if let Some(v) = self.valid_from {
            row.valid_from = v;
        }
        if let Some(v) = self.valid_until {
            row.valid_until = Some(v);
        }
        if let Some(v) = self.active {
            row.active = v;
        }
    }
}

/// A time-boxed discount campaign run by a business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    #[serde(default)]
    pub promotion_id: RecordId,
    pub business_id: RecordId,
    pub name: String,
    pub description: String,
    pub discount_percent: f64,
    pub starts_on: NaiveDate,
    pub ends_on: NaiveDate,
    pub active: bool,
}

impl Keyed for Promotion {
    fn id(&self) -> RecordId {
        self.promotion_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.promotion_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromotionPatch {
    pub business_id: Option<RecordId>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub discount_percent: Option<f64>,
    pub starts_on: Option<NaiveDate>,
    pub ends_on: Option<NaiveDate>,
    pub active: Option<bool>,
}

impl Patch<Promotion> for PromotionPatch {
    fn apply(&self, row: &mut Promotion) {
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = &self.description {
            row.description = v.clone();
        }
        if let Some(v) = self.discount_percent {
            row.discount_percent = v;
        }
        if let Some(v) = self.starts_on {
            row.starts_on = v;
        }
        if let Some(v) = self.ends_on {
            row.ends_on = v;
        }
        if let Some(v) = self.active {
            row.active = v;
        }
    }
}

impl AdminStore {
    // ── Offer ─────────────────────────────────────────────────

    pub fn list_offers(&mut self) -> Vec<Offer> {
        self.latency.pause();
        self.offers.list()
    }

    pub fn get_offer(&mut self, id: RecordId) -> Option<Offer> {
        self.latency.pause();
        self.offers.get(id)
    }

    pub fn create_offer(&mut self, draft: Offer) -> Offer {
        self.latency.pause();
        let row = self.offers.create(draft);
        log::debug!(
            "created offer {} ({}) for business {}",
            row.offer_id,
            row.title,
            row.business_id
        );
        row
    }

    pub fn update_offer(&mut self, id: RecordId, patch: &OfferPatch) -> Option<Offer> {
        self.latency.pause();
        self.offers.update(id, patch)
    }

    pub fn delete_offer(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.offers.delete(id)
    }

    // ── Promotion ─────────────────────────────────────────────

    pub fn list_promotions(&mut self) -> Vec<Promotion> {
        self.latency.pause();
        self.promotions.list()
    }

    pub fn get_promotion(&mut self, id: RecordId) -> Option<Promotion> {
        self.latency.pause();
        self.promotions.get(id)
    }

    pub fn create_promotion(&mut self, draft: Promotion) -> Promotion {
        self.latency.pause();
        let row = self.promotions.create(draft);
        log::debug!(
            "created promotion {} ({}) for business {}",
            row.promotion_id,
            row.name,
            row.business_id
        );
        row
    }

    pub fn update_promotion(&mut self, id: RecordId, patch: &PromotionPatch) -> Option<Promotion> {
        self.latency.pause();
        self.promotions.update(id, patch)
    }

    pub fn delete_promotion(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.promotions.delete(id)
    }

    // ── Relationship queries ──────────────────────────────────

    pub fn offers_for_business(&mut self, business_id: RecordId) -> Vec<Offer> {
        self.latency.pause();
        self.offers.filter_by(|o| o.business_id == business_id)
    }

    pub fn promotions_for_business(&mut self, business_id: RecordId) -> Vec<Promotion> {
        self.latency.pause();
        self.promotions.filter_by(|p| p.business_id == business_id)
    }
}
