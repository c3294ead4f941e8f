use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::{Points, RecordId},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A merchant enrolled in the loyalty program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    #[serde(default)]
    pub business_id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub category: String,
    pub joined_on: NaiveDate,
}

impl Keyed for Business {
    fn id(&self) -> RecordId {
        self.business_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.business_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub category: Option<String>,
    pub joined_on: Option<NaiveDate>,
}

impl Patch<Business> for BusinessPatch {
    fn apply(&self, row: &mut Business) {
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = &self.email {
            row.email = v.clone();
        }
        if let Some(v) = &self.phone {
            row.phone = v.clone();
        }
        if let Some(v) = &self.address {
            row.address = v.clone();
        }
        if let Some(v) = &self.category {
            row.category = v.clone();
        }
        if let Some(v) = self.joined_on {
            row.joined_on = v;
        }
    }
}

/// Something a business sells; purchases of it earn points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub product_id: RecordId,
    pub business_id: RecordId,
    pub name: String,
    pub price: f64,
    pub points_per_purchase: Points,
    pub category: String,
    pub active: bool,
}

impl Keyed for Product {
    fn id(&self) -> RecordId {
        self.product_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.product_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductPatch {
    pub business_id: Option<RecordId>,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub points_per_purchase: Option<Points>,
    pub category: Option<String>,
    pub active: Option<bool>,
}

impl Patch<Product> for ProductPatch {
    fn apply(&self, row: &mut Product) {
        if let Some(v) = self.business_id {
            row.business_id = v;
        }
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = self.price {
            row.price = v;
        }
        if let Some(v) = self.points_per_purchase {
            row.points_per_purchase = v;
        }
        if let Some(v) = &self.category {
            row.category = v.clone();
        }
        if let Some(v) = self.active {
            row.active = v;
        }
    }
}

impl AdminStore {
    // ── Business ──────────────────────────────────────────────

    pub fn list_businesses(&mut self) -> Vec<Business> {
        self.latency.pause();
        self.businesses.list()
    }

    pub fn get_business(&mut self, id: RecordId) -> Option<Business> {
        self.latency.pause();
        self.businesses.get(id)
    }

    pub fn create_business(&mut self, draft: Business) -> Business {
        self.latency.pause();
        let row = self.businesses.create(draft);
        log::debug!("created business {} ({})", row.business_id, row.name);
        row
    }

    pub fn update_business(&mut self, id: RecordId, patch: &BusinessPatch) -> Option<Business> {
        self.latency.pause();
        self.businesses.update(id, patch)
    }

    /// Removing a business leaves its products, offers, promotions and
    /// analytics in place. Dependents keep their now-dangling key and
    /// resolve to "no related record" at read time.
    pub fn delete_business(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.businesses.delete(id)
    }

    // ── Product ───────────────────────────────────────────────

    pub fn list_products(&mut self) -> Vec<Product> {
        self.latency.pause();
        self.products.list()
    }

    pub fn get_product(&mut self, id: RecordId) -> Option<Product> {
        self.latency.pause();
        self.products.get(id)
    }

    pub fn create_product(&mut self, draft: Product) -> Product {
        self.latency.pause();
        let row = self.products.create(draft);
        log::debug!(
            "created product {} ({}) for business {}",
            row.product_id,
            row.name,
            row.business_id
        );
        row
    }

    pub fn update_product(&mut self, id: RecordId, patch: &ProductPatch) -> Option<Product> {
        self.latency.pause();
        self.products.update(id, patch)
    }

    pub fn delete_product(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.products.delete(id)
    }

    // ── Relationship queries ──────────────────────────────────

    pub fn products_for_business(&mut self, business_id: RecordId) -> Vec<Product> {
        self.latency.pause();
        self.products.filter_by(|p| p.business_id == business_id)
    }
}
