//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! API handlers. The store itself accepts anything it is given.

use shared::models::MAX_ENGINEER_RATING;

use crate::utils::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: customer, engineer, plan, titles, subjects
pub const MAX_NAME_LEN: usize = 200;

/// Descriptions, resolutions, feedback, responses
pub const MAX_NOTE_LEN: usize = 500;

/// Notification and ticket bodies
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Short identifiers: phone, speed label, category, provider
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Timestamp limits ────────────────────────────────────────────────

/// 9999-12-31T23:59:59.999Z in Unix milliseconds
pub const MAX_TIMESTAMP_MILLIS: i64 = 253_402_300_799_999;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")).with_detail("field", field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a replacement value for a required field: when present it must
/// satisfy the same rules as on create.
pub fn validate_text_update(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    match value {
        Some(v) => validate_required_text(v, field, max_len),
        None => Ok(()),
    }
}

/// Validate an email address: non-empty, bounded, `local@domain` shape.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => {
            Ok(())
        }
        _ => Err(AppError::validation(format!("{field} is not a valid email address"))
            .with_detail("field", field)),
    }
}

/// Validate an optional email address.
pub fn validate_optional_email(value: &Option<String>, field: &str) -> Result<(), AppError> {
    match value {
        Some(v) => validate_email(v, field),
        None => Ok(()),
    }
}

/// Engineer rating in tenths of a star (0–50)
pub fn validate_engineer_rating(rating: Option<i32>) -> Result<(), AppError> {
    match rating {
        Some(r) if !(0..=MAX_ENGINEER_RATING).contains(&r) => Err(AppError::new(
            ErrorCode::EngineerRatingInvalid,
        )
        .with_detail("rating", r)),
        _ => Ok(()),
    }
}

/// Customer satisfaction rating on a complaint (1–5)
pub fn validate_complaint_rating(rating: Option<i32>) -> Result<(), AppError> {
    match rating {
        Some(r) if !(1..=5).contains(&r) => {
            Err(AppError::new(ErrorCode::ComplaintRatingInvalid).with_detail("rating", r))
        }
        _ => Ok(()),
    }
}

/// Job counters must not start negative (updates are not checked).
pub fn validate_non_negative(value: Option<i32>, field: &str) -> Result<(), AppError> {
    match value {
        Some(v) if v < 0 => Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative"),
        )
        .with_detail("field", field)),
        _ => Ok(()),
    }
}

/// A resolution time must not precede creation nor run past year 9999.
pub fn validate_resolved_at(resolved_at: Option<i64>, created_at: i64) -> Result<(), AppError> {
    match resolved_at {
        Some(at) if at < created_at || at > MAX_TIMESTAMP_MILLIS => Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "resolvedAt must fall between createdAt and 9999-12-31",
        )
        .with_detail("field", "resolvedAt")
        .with_detail("resolvedAt", at)),
        _ => Ok(()),
    }
}

/// Plan price and validity
pub fn validate_plan_terms(price: Option<f64>, validity: Option<i32>) -> Result<(), AppError> {
    if let Some(p) = price
        && (!p.is_finite() || p < 0.0)
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "price must be a non-negative number",
        )
        .with_detail("field", "price"));
    }
    if let Some(v) = validity
        && v <= 0
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "validity must be at least one day",
        )
        .with_detail("field", "validity"));
    }
    Ok(())
}
