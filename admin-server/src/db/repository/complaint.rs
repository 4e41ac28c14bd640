//! Complaint Repository

use shared::models::{Complaint, ComplaintCreate, ComplaintStats, ComplaintStatus, ComplaintUpdate};
use shared::types::{RecordId, UnvalidatedForeignKey};

use crate::db::Store;

pub fn find_all(store: &Store) -> Vec<Complaint> {
    store.read().complaints.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<Complaint> {
    store.read().complaints.get(id).cloned()
}

pub fn find_by_status(store: &Store, status: ComplaintStatus) -> Vec<Complaint> {
    store.read().complaints.filter(|c| c.status == status)
}

pub fn find_by_engineer(store: &Store, engineer_id: UnvalidatedForeignKey) -> Vec<Complaint> {
    store
        .read()
        .complaints
        .filter(|c| c.engineer_id == Some(engineer_id))
}

pub fn find_by_customer(store: &Store, customer_id: UnvalidatedForeignKey) -> Vec<Complaint> {
    store.read().complaints.filter(|c| c.customer_id == customer_id)
}

pub fn create(store: &Store, data: ComplaintCreate) -> Complaint {
    let now = shared::util::now_millis();
    let complaint = store
        .write()
        .complaints
        .insert_with(|id| Complaint::new(id, now, data));
    tracing::debug!(
        id = complaint.id,
        customer_id = complaint.customer_id,
        priority = complaint.priority.as_str(),
        "Complaint created"
    );
    complaint
}

/// Merge fields and stamp `updated_at`.
///
/// Setting `status` to resolved does not touch `resolved_at`; callers send it.
pub fn update(store: &Store, id: RecordId, data: ComplaintUpdate) -> Option<Complaint> {
    let now = shared::util::now_millis();
    let mut tables = store.write();
    let complaint = tables.complaints.get_mut(id)?;
    complaint.apply(data, now);
    tracing::debug!(id, status = complaint.status.as_str(), "Complaint updated");
    Some(complaint.clone())
}

pub fn delete(store: &Store, id: RecordId) -> bool {
    store.write().complaints.remove(id)
}

/// Counts per status plus mean resolution time in hours.
///
/// Only complaints carrying `resolved_at` enter the average; the status field
/// plays no part in it.
pub fn stats(store: &Store) -> ComplaintStats {
    let tables = store.read();
    let mut stats = ComplaintStats::default();
    let mut resolution_total: i128 = 0;
    let mut resolution_samples: u64 = 0;

    for complaint in tables.complaints.values() {
        stats.total += 1;
        match complaint.status {
            ComplaintStatus::Pending => stats.pending += 1,
            ComplaintStatus::Assigned => stats.assigned += 1,
            ComplaintStatus::InProgress => stats.in_progress += 1,
            ComplaintStatus::Visited => stats.visited += 1,
            ComplaintStatus::Resolved => stats.resolved += 1,
            ComplaintStatus::NotResolved => stats.not_resolved += 1,
        }
        if let Some(millis) = complaint.resolution_millis() {
            resolution_total = resolution_total.saturating_add(millis);
            resolution_samples += 1;
        }
    }

    if resolution_samples > 0 {
        stats.avg_resolution_hours =
            shared::util::millis_to_hours(resolution_total) / resolution_samples as f64;
    }
    stats
}
