//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors (1xxx and 2xxx are unassigned and fold in here)
/// - 3xxx: Customer and service plan errors
/// - 4xxx: Complaint errors
/// - 5xxx: Engineer errors
/// - 6xxx: Support ticket errors
/// - 7xxx: Notification errors
/// - 8xxx: User errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Customer,
    Complaint,
    Engineer,
    SupportTicket,
    Notification,
    User,
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..3000 => Self::General,
            3000..4000 => Self::Customer,
            4000..5000 => Self::Complaint,
            5000..6000 => Self::Engineer,
            6000..7000 => Self::SupportTicket,
            7000..8000 => Self::Notification,
            8000..9000 => Self::User,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Customer => "customer",
            Self::Complaint => "complaint",
            Self::Engineer => "engineer",
            Self::SupportTicket => "support_ticket",
            Self::Notification => "notification",
            Self::User => "user",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(2999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(3101), ErrorCategory::Customer);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Complaint);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Engineer);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::SupportTicket);
        assert_eq!(ErrorCategory::from_code(7001), ErrorCategory::Notification);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::User);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ServicePlanNotFound.category(), ErrorCategory::Customer);
        assert_eq!(ErrorCode::ComplaintNotFound.category(), ErrorCategory::Complaint);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&ErrorCategory::SupportTicket).unwrap();
        assert_eq!(json, "\"support_ticket\"");
        let category: ErrorCategory = serde_json::from_str("\"engineer\"").unwrap();
        assert_eq!(category, ErrorCategory::Engineer);
        assert_eq!(ErrorCategory::SupportTicket.name(), "support_ticket");
    }
}
