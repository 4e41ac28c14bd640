//! Support Ticket Model

use serde::{Deserialize, Serialize};

use super::Priority;
use crate::types::{RecordId, Timestamp, UnvalidatedForeignKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

/// Support ticket entity (客服工单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicket {
    pub id: RecordId,
    pub customer_id: UnvalidatedForeignKey,
    pub subject: String,
    pub message: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub category: String,
    /// Handling user, not checked against the user table
    pub assigned_to: Option<UnvalidatedForeignKey>,
    pub response: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SupportTicket {
    pub const DEFAULT_CATEGORY: &'static str = "general";

    pub fn new(id: RecordId, now: Timestamp, data: SupportTicketCreate) -> Self {
        Self {
            id,
            customer_id: data.customer_id,
            subject: data.subject,
            message: data.message,
            priority: data.priority.unwrap_or_default(),
            status: data.status.unwrap_or_default(),
            category: data
                .category
                .unwrap_or_else(|| Self::DEFAULT_CATEGORY.to_string()),
            assigned_to: data.assigned_to,
            response: data.response,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the given fields and stamp `updated_at`.
    pub fn apply(&mut self, data: SupportTicketUpdate, now: Timestamp) {
        if let Some(v) = data.customer_id {
            self.customer_id = v;
        }
        if let Some(v) = data.subject {
            self.subject = v;
        }
        if let Some(v) = data.message {
            self.message = v;
        }
        if let Some(v) = data.priority {
            self.priority = v;
        }
        if let Some(v) = data.status {
            self.status = v;
        }
        if let Some(v) = data.category {
            self.category = v;
        }
        if data.assigned_to.is_some() {
            self.assigned_to = data.assigned_to;
        }
        if data.response.is_some() {
            self.response = data.response;
        }
        self.updated_at = now;
    }
}

/// Create support ticket payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketCreate {
    pub customer_id: UnvalidatedForeignKey,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<TicketStatus>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<UnvalidatedForeignKey>,
    #[serde(default)]
    pub response: Option<String>,
}

impl SupportTicketCreate {
    pub fn new(
        customer_id: UnvalidatedForeignKey,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            subject: subject.into(),
            message: message.into(),
            priority: None,
            status: None,
            category: None,
            assigned_to: None,
            response: None,
        }
    }
}

/// Update support ticket payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportTicketUpdate {
    pub customer_id: Option<UnvalidatedForeignKey>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub category: Option<String>,
    pub assigned_to: Option<UnvalidatedForeignKey>,
    pub response: Option<String>,
}
