//! Engineer Repository

use shared::models::{Engineer, EngineerCreate, EngineerUpdate};
use shared::types::RecordId;

use crate::db::Store;

pub fn find_all(store: &Store) -> Vec<Engineer> {
    store.read().engineers.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<Engineer> {
    store.read().engineers.get(id).cloned()
}

pub fn find_by_location(store: &Store, location: &str) -> Vec<Engineer> {
    store.read().engineers.filter(|e| e.location == location)
}

pub fn create(store: &Store, data: EngineerCreate) -> Engineer {
    let now = shared::util::now_millis();
    let engineer = store
        .write()
        .engineers
        .insert_with(|id| Engineer::new(id, now, data));
    tracing::debug!(id = engineer.id, "Engineer created");
    engineer
}

pub fn update(store: &Store, id: RecordId, data: EngineerUpdate) -> Option<Engineer> {
    let mut tables = store.write();
    let engineer = tables.engineers.get_mut(id)?;
    engineer.apply(data);
    Some(engineer.clone())
}

/// Complaints assigned to the engineer keep their `engineer_id`.
pub fn delete(store: &Store, id: RecordId) -> bool {
    let removed = store.write().engineers.remove(id);
    if removed {
        tracing::debug!(id, "Engineer deleted");
    }
    removed
}
