use super::AdminStore;
use crate::{
    table::{Keyed, Patch},
    types::RecordId,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A program member. Point balances live on the customer's
/// loyalty accounts, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub customer_id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined_on: NaiveDate,
    pub status: String, // "active" | "inactive"
}

impl Keyed for Customer {
    fn id(&self) -> RecordId {
        self.customer_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.customer_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub joined_on: Option<NaiveDate>,
    pub status: Option<String>,
}

impl Patch<Customer> for CustomerPatch {
    fn apply(&self, row: &mut Customer) {
        if let Some(v) = &self.name {
            row.name = v.clone();
        }
        if let Some(v) = &self.email {
            row.email = v.clone();
        }
        if let Some(v) = &self.phone {
            row.phone = v.clone();
        }
        if let Some(v) = self.joined_on {
            row.joined_on = v;
        }
        if let Some(v) = &self.status {
            row.status = v.clone();
        }
    }
}

/// A dashboard operator account. Credentials and sessions are handled
/// outside the store; this is the directory row the admin pages edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(default)]
    pub admin_id: RecordId,
    pub username: String,
    pub email: String,
    pub role: String, // "owner" | "manager" | "support"
    pub last_login: Option<DateTime<Utc>>,
}

impl Keyed for AdminUser {
    fn id(&self) -> RecordId {
        self.admin_id
    }
    fn set_id(&mut self, id: RecordId) {
        self.admin_id = id;
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AdminUserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub last_login: Option<DateTime<Utc>>,
}

impl Patch<AdminUser> for AdminUserPatch {
    fn apply(&self, row: &mut AdminUser) {
        if let Some(v) = &self.username {
            row.username = v.clone();
        }
        if let Some(v) = &self.email {
            row.email = v.clone();
        }
        if let Some(v) = &self.role {
            row.role = v.clone();
        }
        if let Some(v) = self.last_login {
            row.last_login = Some(v);
        }
    }
}

impl AdminStore {
    // ── Customer ──────────────────────────────────────────────

    pub fn list_customers(&mut self) -> Vec<Customer> {
        self.latency.pause();
        self.customers.list()
    }

    pub fn get_customer(&mut self, id: RecordId) -> Option<Customer> {
        self.latency.pause();
        self.customers.get(id)
    }

    pub fn create_customer(&mut self, draft: Customer) -> Customer {
        self.latency.pause();
        let row = self.customers.create(draft);
        log::debug!("created customer {} ({})", row.customer_id, row.name);
        row
    }

    pub fn update_customer(&mut self, id: RecordId, patch: &CustomerPatch) -> Option<Customer> {
        self.latency.pause();
        self.customers.update(id, patch)
    }

    pub fn delete_customer(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.customers.delete(id)
    }

    // ── Admin users ───────────────────────────────────────────

    pub fn list_admin_users(&mut self) -> Vec<AdminUser> {
        self.latency.pause();
        self.admin_users.list()
    }

    pub fn get_admin_user(&mut self, id: RecordId) -> Option<AdminUser> {
        self.latency.pause();
        self.admin_users.get(id)
    }

    pub fn create_admin_user(&mut self, draft: AdminUser) -> AdminUser {
        self.latency.pause();
        let row = self.admin_users.create(draft);
        log::debug!("created admin user {} ({})", row.admin_id, row.username);
        row
    }

    pub fn update_admin_user(&mut self, id: RecordId, patch: &AdminUserPatch) -> Option<AdminUser> {
        self.latency.pause();
        self.admin_users.update(id, patch)
    }

    pub fn delete_admin_user(&mut self, id: RecordId) -> bool {
        self.latency.pause();
        self.admin_users.delete(id)
    }
}
