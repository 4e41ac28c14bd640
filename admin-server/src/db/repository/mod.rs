//! Repository Module
//!
//! CRUD operations over the in-memory [`Store`](crate::db::Store), one module
//! per entity. Lookups return `Option` (None = not found), deletes return
//! whether a row was removed. Filters are linear scans.
//!
//! The store performs no validation, uniqueness or referential checks; that
//! is left to callers.

// Operators
pub mod user;

// Subscribers and catalog
pub mod customer;
pub mod service_plan;

// Field operations
pub mod complaint;
pub mod engineer;

// Support
pub mod notification;
pub mod support_ticket;
