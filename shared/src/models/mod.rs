//! Data models
//!
//! Shared between admin-server and the dashboard frontend (via API).
//! All IDs are `i64` assigned by the store; timestamps are Unix milliseconds.
//! JSON field names are camelCase.

pub mod complaint;
pub mod customer;
pub mod engineer;
pub mod notification;
pub mod priority;
pub mod service_plan;
pub mod support_ticket;
pub mod user;

// Re-exports
pub use complaint::*;
pub use customer::*;
pub use engineer::*;
pub use notification::*;
pub use priority::*;
pub use service_plan::*;
pub use support_ticket::*;
pub use user::*;
