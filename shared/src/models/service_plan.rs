//! Service Plan Model

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Timestamp};

/// Service plan entity (套餐目录)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlan {
    pub id: RecordId,
    pub name: String,
    pub provider: String,
    /// Free-form speed label, e.g. "100 Mbps"
    pub speed: String,
    pub price: f64,
    /// Validity in days
    pub validity: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl ServicePlan {
    pub fn new(id: RecordId, now: Timestamp, data: ServicePlanCreate) -> Self {
        Self {
            id,
            name: data.name,
            provider: data.provider,
            speed: data.speed,
            price: data.price,
            validity: data.validity,
            description: data.description,
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
        }
    }

    pub fn apply(&mut self, data: ServicePlanUpdate) {
        if let Some(v) = data.name {
            self.name = v;
        }
        if let Some(v) = data.provider {
            self.provider = v;
        }
        if let Some(v) = data.speed {
            self.speed = v;
        }
        if let Some(v) = data.price {
            self.price = v;
        }
        if let Some(v) = data.validity {
            self.validity = v;
        }
        if data.description.is_some() {
            self.description = data.description;
        }
        if let Some(v) = data.is_active {
            self.is_active = v;
        }
    }
}

/// Create service plan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlanCreate {
    pub name: String,
    pub provider: String,
    pub speed: String,
    pub price: f64,
    pub validity: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ServicePlanCreate {
    pub fn new(
        name: impl Into<String>,
        provider: impl Into<String>,
        speed: impl Into<String>,
        price: f64,
        validity: i32,
    ) -> Self {
        Self {
            name: name.into(),
            provider: provider.into(),
            speed: speed.into(),
            price,
            validity,
            description: None,
            is_active: None,
        }
    }
}

/// Update service plan payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePlanUpdate {
    pub name: Option<String>,
    pub provider: Option<String>,
    pub speed: Option<String>,
    pub price: Option<f64>,
    pub validity: Option<i32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}
