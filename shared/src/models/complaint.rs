//! Complaint Model

use serde::{Deserialize, Serialize};

use super::Priority;
use crate::types::{RecordId, Timestamp, UnvalidatedForeignKey};

/// Complaint lifecycle status
///
/// No transition graph is enforced; any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComplaintStatus {
    #[default]
    Pending,
    Assigned,
    InProgress,
    Visited,
    Resolved,
    NotResolved,
}

impl ComplaintStatus {
    pub const ALL: [ComplaintStatus; 6] = [
        Self::Pending,
        Self::Assigned,
        Self::InProgress,
        Self::Visited,
        Self::Resolved,
        Self::NotResolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in-progress",
            Self::Visited => "visited",
            Self::Resolved => "resolved",
            Self::NotResolved => "not-resolved",
        }
    }
}

/// Complaint entity (投诉工单)
///
/// `resolved_at` is caller-managed: moving `status` to `Resolved` does not set it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: RecordId,
    pub customer_id: UnvalidatedForeignKey,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub engineer_id: Option<UnvalidatedForeignKey>,
    pub location: String,
    pub resolution: Option<String>,
    /// Customer rating 1–5
    pub rating: Option<i32>,
    pub feedback: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
}

impl Complaint {
    pub fn new(id: RecordId, now: Timestamp, data: ComplaintCreate) -> Self {
        Self {
            id,
            customer_id: data.customer_id,
            title: data.title,
            description: data.description,
            priority: data.priority.unwrap_or_default(),
            status: data.status.unwrap_or_default(),
            engineer_id: data.engineer_id,
            location: data.location,
            resolution: data.resolution,
            rating: data.rating,
            feedback: data.feedback,
            created_at: now,
            updated_at: now,
            resolved_at: data.resolved_at,
        }
    }

    /// Merge the given fields and stamp `updated_at`.
    pub fn apply(&mut self, data: ComplaintUpdate, now: Timestamp) {
        if let Some(v) = data.customer_id {
            self.customer_id = v;
        }
        if let Some(v) = data.title {
            self.title = v;
        }
        if let Some(v) = data.description {
            self.description = v;
        }
        if let Some(v) = data.priority {
            self.priority = v;
        }
        if let Some(v) = data.status {
            self.status = v;
        }
        if data.engineer_id.is_some() {
            self.engineer_id = data.engineer_id;
        }
        if let Some(v) = data.location {
            self.location = v;
        }
        if data.resolution.is_some() {
            self.resolution = data.resolution;
        }
        if data.rating.is_some() {
            self.rating = data.rating;
        }
        if data.feedback.is_some() {
            self.feedback = data.feedback;
        }
        if data.resolved_at.is_some() {
            self.resolved_at = data.resolved_at;
        }
        self.updated_at = now;
    }

    /// Time from creation to resolution, when `resolved_at` is set.
    ///
    /// Widened to `i128` so any pair of `i64` timestamps has a representable span.
    pub fn resolution_millis(&self) -> Option<i128> {
        self.resolved_at
            .map(|resolved| i128::from(resolved) - i128::from(self.created_at))
    }
}

/// Create complaint payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintCreate {
    pub customer_id: UnvalidatedForeignKey,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub status: Option<ComplaintStatus>,
    #[serde(default)]
    pub engineer_id: Option<UnvalidatedForeignKey>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub resolved_at: Option<Timestamp>,
}

impl ComplaintCreate {
    pub fn new(
        customer_id: UnvalidatedForeignKey,
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            customer_id,
            title: title.into(),
            description: description.into(),
            location: location.into(),
            priority: None,
            status: None,
            engineer_id: None,
            resolution: None,
            rating: None,
            feedback: None,
            resolved_at: None,
        }
    }
}

/// Update complaint payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintUpdate {
    pub customer_id: Option<UnvalidatedForeignKey>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<ComplaintStatus>,
    pub engineer_id: Option<UnvalidatedForeignKey>,
    pub location: Option<String>,
    pub resolution: Option<String>,
    pub rating: Option<i32>,
    pub feedback: Option<String>,
    pub resolved_at: Option<Timestamp>,
}

/// Complaint statistics (投诉统计)
///
/// `avg_resolution_hours` averages only complaints that carry `resolved_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStats {
    pub total: usize,
    pub pending: usize,
    pub assigned: usize,
    pub in_progress: usize,
    pub visited: usize,
    pub resolved: usize,
    pub not_resolved: usize,
    pub avg_resolution_hours: f64,
}

impl ComplaintStats {
    /// Count for a single status
    pub fn count(&self, status: ComplaintStatus) -> usize {
        match status {
            ComplaintStatus::Pending => self.pending,
            ComplaintStatus::Assigned => self.assigned,
            ComplaintStatus::InProgress => self.in_progress,
            ComplaintStatus::Visited => self.visited,
            ComplaintStatus::Resolved => self.resolved,
            ComplaintStatus::NotResolved => self.not_resolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complaint_defaults() {
        let complaint = Complaint::new(1, 500, ComplaintCreate::new(3, "No signal", "Router dead", "Sector 5"));
        assert_eq!(complaint.priority, Priority::Medium);
        assert_eq!(complaint.status, ComplaintStatus::Pending);
        assert_eq!(complaint.created_at, 500);
        assert_eq!(complaint.updated_at, 500);
        assert!(complaint.resolved_at.is_none());
    }

    #[test]
    fn test_resolving_does_not_stamp_resolved_at() {
        let mut complaint = Complaint::new(1, 500, ComplaintCreate::new(3, "t", "d", "l"));
        complaint.apply(
            ComplaintUpdate {
                status: Some(ComplaintStatus::Resolved),
                ..Default::default()
            },
            900,
        );
        assert_eq!(complaint.status, ComplaintStatus::Resolved);
        assert_eq!(complaint.updated_at, 900);
        assert!(complaint.resolved_at.is_none());
        assert!(complaint.resolution_millis().is_none());
    }

    #[test]
    fn test_resolution_span_at_timestamp_extremes() {
        let mut complaint = Complaint::new(1, 500, ComplaintCreate::new(3, "t", "d", "l"));
        complaint.resolved_at = Some(i64::MIN);
        assert_eq!(complaint.resolution_millis(), Some(i128::from(i64::MIN) - 500));

        complaint.created_at = i64::MIN;
        complaint.resolved_at = Some(i64::MAX);
        assert_eq!(complaint.resolution_millis(), Some(u64::MAX as i128));
    }

    #[test]
    fn test_status_serde_is_kebab_case() {
        let json = serde_json::to_string(&ComplaintStatus::NotResolved).unwrap();
        assert_eq!(json, "\"not-resolved\"");
        let status: ComplaintStatus = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(status, ComplaintStatus::InProgress);
        for status in ComplaintStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json.trim_matches('"'), status.as_str());
        }
    }

    #[test]
    fn test_stats_serialize_camel_case() {
        let stats = ComplaintStats {
            total: 3,
            in_progress: 1,
            ..Default::default()
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["inProgress"], 1);
        assert_eq!(json["avgResolutionHours"], 0.0);
        assert_eq!(stats.count(ComplaintStatus::InProgress), 1);
    }
}
