//! Common types for the shared crate
//!
//! Utility types used across the workspace

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;

/// Record identity. Assigned by the store, starts at 1, never reused.
pub type RecordId = i64;

/// Reference to another record's id that is never checked for existence.
///
/// Complaints, tickets and customers point at customers, engineers and plans
/// through this alias; deleting the target leaves the reference dangling.
pub type UnvalidatedForeignKey = RecordId;

/// Milliseconds per hour, used for resolution-time averages
pub const MILLIS_PER_HOUR: f64 = 3_600_000.0;
