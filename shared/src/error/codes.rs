//! Unified error codes for the back-office
//!
//! This module defines all error codes used across admin-server and the dashboard.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx, 2xxx: unassigned
//! - 3xxx: Customer and service plan errors
//! - 4xxx: Complaint errors
//! - 5xxx: Engineer errors
//! - 6xxx: Support ticket errors
//! - 7xxx: Notification errors
//! - 8xxx: User errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 3001,
    /// Service plan not found
    ServicePlanNotFound = 3101,

    // ==================== 4xxx: Complaint ====================
    /// Complaint not found
    ComplaintNotFound = 4001,
    /// Complaint rating outside 1–5
    ComplaintRatingInvalid = 4002,

    // ==================== 5xxx: Engineer ====================
    /// Engineer not found
    EngineerNotFound = 5001,
    /// Engineer rating outside 0–50
    EngineerRatingInvalid = 5002,

    // ==================== 6xxx: Support ticket ====================
    /// Support ticket not found
    SupportTicketNotFound = 6001,

    // ==================== 7xxx: Notification ====================
    /// Notification not found
    NotificationNotFound = 7001,

    // ==================== 8xxx: User ====================
    /// User not found
    UserNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::ServicePlanNotFound => "Service plan not found",

            // Complaint
            ErrorCode::ComplaintNotFound => "Complaint not found",
            ErrorCode::ComplaintRatingInvalid => "Complaint rating must be between 1 and 5",

            // Engineer
            ErrorCode::EngineerNotFound => "Engineer not found",
            ErrorCode::EngineerRatingInvalid => "Engineer rating must be between 0 and 50",

            // Support ticket
            ErrorCode::SupportTicketNotFound => "Support ticket not found",

            // Notification
            ErrorCode::NotificationNotFound => "Notification not found",

            // User
            ErrorCode::UserNotFound => "User not found",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Customer
            3001 => Ok(ErrorCode::CustomerNotFound),
            3101 => Ok(ErrorCode::ServicePlanNotFound),

            // Complaint
            4001 => Ok(ErrorCode::ComplaintNotFound),
            4002 => Ok(ErrorCode::ComplaintRatingInvalid),

            // Engineer
            5001 => Ok(ErrorCode::EngineerNotFound),
            5002 => Ok(ErrorCode::EngineerRatingInvalid),

            // Support ticket
            6001 => Ok(ErrorCode::SupportTicketNotFound),

            // Notification
            7001 => Ok(ErrorCode::NotificationNotFound),

            // User
            8001 => Ok(ErrorCode::UserNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
