//! Customer Model

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Timestamp, UnvalidatedForeignKey};

/// Customer entity (宽带用户 / 潜在客户)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub location: String,
    pub service_provider: Option<String>,
    /// Service plan reference, not checked against the plan table
    pub plan_id: Option<UnvalidatedForeignKey>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Customer {
    pub fn new(id: RecordId, now: Timestamp, data: CustomerCreate) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            location: data.location,
            service_provider: data.service_provider,
            plan_id: data.plan_id,
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
        }
    }

    pub fn apply(&mut self, data: CustomerUpdate) {
        if let Some(v) = data.name {
            self.name = v;
        }
        if let Some(v) = data.email {
            self.email = v;
        }
        if let Some(v) = data.phone {
            self.phone = v;
        }
        if let Some(v) = data.address {
            self.address = v;
        }
        if let Some(v) = data.location {
            self.location = v;
        }
        if data.service_provider.is_some() {
            self.service_provider = data.service_provider;
        }
        if data.plan_id.is_some() {
            self.plan_id = data.plan_id;
        }
        if let Some(v) = data.is_active {
            self.is_active = v;
        }
    }
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub location: String,
    #[serde(default)]
    pub service_provider: Option<String>,
    #[serde(default)]
    pub plan_id: Option<UnvalidatedForeignKey>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl CustomerCreate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            address: address.into(),
            location: location.into(),
            service_provider: None,
            plan_id: None,
            is_active: None,
        }
    }
}

/// Update customer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub location: Option<String>,
    pub service_provider: Option<String>,
    pub plan_id: Option<UnvalidatedForeignKey>,
    pub is_active: Option<bool>,
}
