//! Engineer Model

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Timestamp};

/// Highest stored rating (5.0 stars)
pub const MAX_ENGINEER_RATING: i32 = 50;

/// Field engineer entity (上门工程师)
///
/// `rating` is an integer in tenths of a star: 0..=50 maps to 0.0..=5.0.
/// Counters are caller-managed and may go negative through updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Engineer {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub specialization: String,
    pub rating: i32,
    pub completed_jobs: i32,
    pub active_jobs: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl Engineer {
    pub fn new(id: RecordId, now: Timestamp, data: EngineerCreate) -> Self {
        Self {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            location: data.location,
            specialization: data.specialization,
            rating: data.rating.unwrap_or(0),
            completed_jobs: data.completed_jobs.unwrap_or(0),
            active_jobs: data.active_jobs.unwrap_or(0),
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
        }
    }

    pub fn apply(&mut self, data: EngineerUpdate) {
        if let Some(v) = data.name {
            self.name = v;
        }
        if let Some(v) = data.email {
            self.email = v;
        }
        if let Some(v) = data.phone {
            self.phone = v;
        }
        if let Some(v) = data.location {
            self.location = v;
        }
        if let Some(v) = data.specialization {
            self.specialization = v;
        }
        if let Some(v) = data.rating {
            self.rating = v;
        }
        if let Some(v) = data.completed_jobs {
            self.completed_jobs = v;
        }
        if let Some(v) = data.active_jobs {
            self.active_jobs = v;
        }
        if let Some(v) = data.is_active {
            self.is_active = v;
        }
    }

    /// Rating on the 0.0–5.0 display scale
    pub fn stars(&self) -> f64 {
        f64::from(self.rating) / 10.0
    }
}

/// Create engineer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub specialization: String,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub completed_jobs: Option<i32>,
    #[serde(default)]
    pub active_jobs: Option<i32>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl EngineerCreate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
        specialization: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            location: location.into(),
            specialization: specialization.into(),
            rating: None,
            completed_jobs: None,
            active_jobs: None,
            is_active: None,
        }
    }
}

/// Update engineer payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub specialization: Option<String>,
    pub rating: Option<i32>,
    pub completed_jobs: Option<i32>,
    pub active_jobs: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engineer_defaults() {
        let engineer = Engineer::new(
            4,
            1_000,
            EngineerCreate::new("X", "x@y.com", "123", "A", "B"),
        );
        assert!(engineer.is_active);
        assert_eq!(engineer.rating, 0);
        assert_eq!(engineer.completed_jobs, 0);
        assert_eq!(engineer.active_jobs, 0);
    }

    #[test]
    fn test_apply_allows_negative_counters() {
        let mut engineer = Engineer::new(1, 0, EngineerCreate::new("X", "x@y.com", "1", "A", "B"));
        engineer.apply(EngineerUpdate {
            active_jobs: Some(-1),
            ..Default::default()
        });
        assert_eq!(engineer.active_jobs, -1);
        assert_eq!(engineer.name, "X");
    }

    #[test]
    fn test_stars() {
        let mut engineer = Engineer::new(1, 0, EngineerCreate::new("X", "x@y.com", "1", "A", "B"));
        engineer.rating = 45;
        assert_eq!(engineer.stars(), 4.5);
    }

    #[test]
    fn test_create_payload_from_minimal_json() {
        let json = r#"{"name":"X","email":"x@y.com","phone":"123","location":"A","specialization":"B"}"#;
        let data: EngineerCreate = serde_json::from_str(json).unwrap();
        assert!(data.rating.is_none());
        assert!(data.is_active.is_none());
    }
}
