//! Fixture data
//!
//! Illustrative records loaded into a fresh store at startup so the
//! dashboard has something to show. Timestamps are relative to load time.

use serde_json::json;
use shared::models::{
    Complaint, ComplaintCreate, ComplaintStatus, CustomerCreate, EngineerCreate, Notification,
    NotificationCreate, Priority, ServicePlanCreate, SupportTicketCreate, TicketStatus, UserCreate,
    UserRole,
};

use super::Store;
use super::repository::{customer, engineer, service_plan, support_ticket, user};

const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Load the fixture set into `store`.
pub fn load_fixtures(store: &Store) {
    let now = shared::util::now_millis();

    seed_users(store);
    seed_service_plans(store);
    seed_customers(store);
    seed_engineers(store);
    seed_complaints(store, now);
    seed_notifications(store, now);
    seed_support_tickets(store);

    let counts = store.counts();
    tracing::info!(
        users = counts.users,
        customers = counts.customers,
        engineers = counts.engineers,
        service_plans = counts.service_plans,
        complaints = counts.complaints,
        notifications = counts.notifications,
        support_tickets = counts.support_tickets,
        "Fixture data loaded"
    );
}

fn seed_users(store: &Store) {
    let users = [
        ("superadmin", "superadmin@wifinet.local", UserRole::SuperAdmin),
        ("admin", "admin@wifinet.local", UserRole::Admin),
        ("manager", "manager@wifinet.local", UserRole::Manager),
    ];
    for (username, email, role) in users {
        let mut data = UserCreate::new(username, email, "changeme");
        data.role = Some(role);
        if let Err(e) = user::create(store, data) {
            tracing::error!(username, error = %e, "Failed to seed user");
        }
    }
}

fn seed_service_plans(store: &Store) {
    let plans = [
        ("Basic 30", "AirLink", "30 Mbps", 19.0, 30, "Entry plan for light browsing"),
        ("Home 100", "AirLink", "100 Mbps", 35.0, 30, "Streaming and video calls"),
        ("Fiber 300", "FiberNet", "300 Mbps", 55.0, 30, "Households with many devices"),
        ("Business 1G", "FiberNet", "1 Gbps", 120.0, 90, "Quarterly business line"),
    ];
    for (name, provider, speed, price, validity, description) in plans {
        let mut data = ServicePlanCreate::new(name, provider, speed, price, validity);
        data.description = Some(description.to_string());
        service_plan::create(store, data);
    }
}

fn seed_customers(store: &Store) {
    let customers = [
        ("Rahul Mehta", "rahul@example.com", "555-0101", "14 Lake View Rd", "North Zone", "AirLink", 2),
        ("Priya Nair", "priya@example.com", "555-0102", "7 Hill Crescent", "South Zone", "FiberNet", 3),
        ("Arjun Das", "arjun@example.com", "555-0103", "221 Market St", "North Zone", "AirLink", 1),
    ];
    for (name, email, phone, address, location, provider, plan_id) in customers {
        let mut data = CustomerCreate::new(name, email, phone, address, location);
        data.service_provider = Some(provider.to_string());
        data.plan_id = Some(plan_id);
        customer::create(store, data);
    }
}

fn seed_engineers(store: &Store) {
    let engineers = [
        ("Vikram Singh", "vikram@wifinet.local", "555-0201", "North Zone", "Fiber splicing", 46, 128, 2),
        ("Meera Iyer", "meera@wifinet.local", "555-0202", "South Zone", "Wireless CPE", 42, 87, 1),
        ("Sanjay Rao", "sanjay@wifinet.local", "555-0203", "North Zone", "Router configuration", 38, 54, 0),
    ];
    for (name, email, phone, location, specialization, rating, completed, active) in engineers {
        let mut data = EngineerCreate::new(name, email, phone, location, specialization);
        data.rating = Some(rating);
        data.completed_jobs = Some(completed);
        data.active_jobs = Some(active);
        engineer::create(store, data);
    }
}

/// One assigned, one in progress, one resolved (with `resolved_at`).
fn seed_complaints(store: &Store, now: i64) {
    let mut assigned = ComplaintCreate::new(
        1,
        "Frequent disconnections",
        "Connection drops several times every evening",
        "North Zone",
    );
    assigned.priority = Some(Priority::High);
    assigned.status = Some(ComplaintStatus::Assigned);
    assigned.engineer_id = Some(1);

    let mut in_progress = ComplaintCreate::new(
        2,
        "Slow speeds",
        "Measured speed is far below the subscribed plan",
        "South Zone",
    );
    in_progress.status = Some(ComplaintStatus::InProgress);
    in_progress.engineer_id = Some(2);

    let mut resolved = ComplaintCreate::new(
        3,
        "No internet",
        "Router shows no WAN link since morning",
        "North Zone",
    );
    resolved.priority = Some(Priority::Urgent);
    resolved.status = Some(ComplaintStatus::Resolved);
    resolved.engineer_id = Some(3);
    resolved.resolution = Some("Replaced damaged drop cable".to_string());
    resolved.rating = Some(5);
    resolved.feedback = Some("Quick and polite".to_string());
    resolved.resolved_at = Some(now - 2 * DAY_MS);

    let fixtures = [
        (assigned, now - DAY_MS),
        (in_progress, now - 2 * DAY_MS),
        (resolved, now - 3 * DAY_MS),
    ];
    let mut tables = store.write();
    for (data, created_at) in fixtures {
        tables
            .complaints
            .insert_with(|id| Complaint::new(id, created_at, data));
    }
}

fn seed_notifications(store: &Store, now: i64) {
    let mut outage = NotificationCreate::new(
        "Scheduled maintenance",
        "Service in North Zone will be interrupted tonight from 01:00 to 03:00",
        1,
    );
    outage.kind = Some("maintenance".to_string());
    outage.priority = Some(Priority::High);
    outage.recipient_type = Some("customers".to_string());
    outage.recipients = Some(json!({ "locations": ["North Zone"] }));
    outage.delivered_count = Some(2);
    outage.read_count = Some(1);

    let mut offer = NotificationCreate::new(
        "Fiber upgrade offer",
        "Upgrade to Fiber 300 this month and get the first month free",
        2,
    );
    offer.kind = Some("promotion".to_string());
    offer.priority = Some(Priority::Low);

    let fixtures = [(outage, now - HOUR_MS), (offer, now - DAY_MS)];
    let mut tables = store.write();
    for (data, sent_at) in fixtures {
        tables
            .notifications
            .insert_with(|id| Notification::new(id, sent_at, data));
    }
}

fn seed_support_tickets(store: &Store) {
    let mut billing = SupportTicketCreate::new(
        1,
        "Charged twice",
        "My card was charged twice for this month's renewal",
    );
    billing.category = Some("billing".to_string());
    billing.priority = Some(Priority::High);
    support_ticket::create(store, billing);

    let mut relocation = SupportTicketCreate::new(
        2,
        "Moving house",
        "Can the connection be moved to my new address next week?",
    );
    relocation.category = Some("relocation".to_string());
    relocation.status = Some(TicketStatus::InProgress);
    relocation.assigned_to = Some(3);
    relocation.response = Some("Site survey scheduled".to_string());
    support_ticket::create(store, relocation);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::complaint;

    #[test]
    fn test_seeded_counts() {
        let store = Store::seeded();
        let counts = store.counts();
        assert_eq!(counts.users, 3);
        assert_eq!(counts.customers, 3);
        assert_eq!(counts.engineers, 3);
        assert_eq!(counts.service_plans, 4);
        assert_eq!(counts.complaints, 3);
        assert_eq!(counts.notifications, 2);
        assert_eq!(counts.support_tickets, 2);
    }

    #[test]
    fn test_seeded_complaint_stats() {
        let store = Store::seeded();
        let stats = complaint::stats(&store);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.assigned, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
        // created 3 days ago, resolved 2 days ago
        assert_eq!(stats.avg_resolution_hours, 24.0);
    }

    #[test]
    fn test_seeded_roles() {
        let store = Store::seeded();
        let root = user::find_by_email(&store, "superadmin@wifinet.local").unwrap();
        assert_eq!(root.role, UserRole::SuperAdmin);
    }

    #[test]
    fn test_seeded_passwords_are_hashed() {
        let store = Store::seeded();
        for seeded in user::find_all(&store) {
            assert_ne!(seeded.hash_pass, "changeme");
            assert!(crate::utils::password::verify_password("changeme", &seeded.hash_pass));
        }
    }
}
