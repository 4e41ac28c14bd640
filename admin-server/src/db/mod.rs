//! Record Store
//!
//! Process-local, in-memory store for every back-office entity. Nothing is
//! persisted: a restart starts from an empty (or freshly seeded) store.
//!
//! One [`Table`] per entity holds rows keyed by id. Ids come from a per-table
//! counter that only moves forward, so key order equals insertion order.

pub mod repository;
pub mod seed;

use std::collections::BTreeMap;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use serde::Serialize;
use shared::models::{
    Complaint, Customer, Engineer, Notification, ServicePlan, SupportTicket, User,
};
use shared::types::RecordId;

/// Identity-keyed rows of a single entity kind
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T: Clone> Table<T> {
    /// Take the next id, build the row with it and store it.
    pub fn insert_with(&mut self, build: impl FnOnce(RecordId) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn get_mut(&mut self, id: RecordId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    /// Remove a row. The counter is left alone so the id is never handed out again.
    pub fn remove(&mut self, id: RecordId) -> bool {
        self.rows.remove(&id).is_some()
    }

    /// Rows in insertion order
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Clone every row matching the predicate, in insertion order
    pub fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows.values().filter(|row| pred(row)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The id the next insert will receive
    pub fn next_id(&self) -> RecordId {
        self.next_id
    }
}

/// All entity tables
#[derive(Debug, Default, Clone)]
pub struct Tables {
    pub users: Table<User>,
    pub customers: Table<Customer>,
    pub engineers: Table<Engineer>,
    pub service_plans: Table<ServicePlan>,
    pub complaints: Table<Complaint>,
    pub notifications: Table<Notification>,
    pub support_tickets: Table<SupportTicket>,
}

/// Row counts per table (health endpoint)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCounts {
    pub users: usize,
    pub customers: usize,
    pub engineers: usize,
    pub service_plans: usize,
    pub complaints: usize,
    pub notifications: usize,
    pub support_tickets: usize,
}

/// In-memory record store
///
/// All tables sit behind one lock. Every repository call takes it exactly
/// once and never holds it across an await point.
#[derive(Debug, Default)]
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-loaded with the fixture data set
    pub fn seeded() -> Self {
        let store = Self::new();
        seed::load_fixtures(&store);
        store
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write()
    }

    pub fn counts(&self) -> TableCounts {
        let tables = self.read();
        TableCounts {
            users: tables.users.len(),
            customers: tables.customers.len(),
            engineers: tables.engineers.len(),
            service_plans: tables.service_plans.len(),
            complaints: tables.complaints.len(),
            notifications: tables.notifications.len(),
            support_tickets: tables.support_tickets.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: RecordId,
        label: &'static str,
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut table = Table::<Row>::default();
        let a = table.insert_with(|id| Row { id, label: "a" });
        let b = table.insert_with(|id| Row { id, label: "b" });
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_ids_never_reused_after_remove() {
        let mut table = Table::<Row>::default();
        table.insert_with(|id| Row { id, label: "a" });
        let b = table.insert_with(|id| Row { id, label: "b" });
        assert!(table.remove(b.id));
        assert!(!table.remove(b.id));
        let c = table.insert_with(|id| Row { id, label: "c" });
        assert_eq!(c.id, 3);
        assert_eq!(table.next_id(), 4);
    }

    #[test]
    fn test_values_in_insertion_order() {
        let mut table = Table::<Row>::default();
        for label in ["x", "y", "z"] {
            table.insert_with(|id| Row { id, label });
        }
        table.remove(2);
        let labels: Vec<_> = table.values().map(|r| r.label).collect();
        assert_eq!(labels, vec!["x", "z"]);
        assert_eq!(table.filter(|r| r.label == "z").len(), 1);
    }

    #[test]
    fn test_empty_store_counts() {
        let store = Store::new();
        let counts = store.counts();
        assert_eq!(counts.users, 0);
        assert_eq!(counts.complaints, 0);
        assert!(store.read().customers.is_empty());
    }
}
