//! User Repository

use shared::models::{User, UserCreate, UserUpdate};
use shared::types::RecordId;

use crate::db::Store;
use crate::utils::password::{HashError, hash_password};

pub fn find_all(store: &Store) -> Vec<User> {
    store.read().users.values().cloned().collect()
}

pub fn find_by_id(store: &Store, id: RecordId) -> Option<User> {
    store.read().users.get(id).cloned()
}

/// First user with this email, in insertion order.
///
/// Inserts never reject duplicates, so more than one row may match.
pub fn find_by_email(store: &Store, email: &str) -> Option<User> {
    store
        .read()
        .users
        .values()
        .find(|u| u.email == email)
        .cloned()
}

pub fn find_by_username(store: &Store, username: &str) -> Option<User> {
    store
        .read()
        .users
        .values()
        .find(|u| u.username == username)
        .cloned()
}

/// Insert a user, storing only the argon2 hash of `data.password`.
///
/// Hashing runs before the write lock is taken.
pub fn create(store: &Store, data: UserCreate) -> Result<User, HashError> {
    let now = shared::util::now_millis();
    let hash_pass = hash_password(&data.password)?;
    let user = store
        .write()
        .users
        .insert_with(|id| User::new(id, now, data, hash_pass));
    tracing::debug!(id = user.id, role = user.role.as_str(), "User created");
    Ok(user)
}

/// Merge fields; a new password is re-hashed. `Ok(None)` when `id` is unknown.
pub fn update(store: &Store, id: RecordId, mut data: UserUpdate) -> Result<Option<User>, HashError> {
    let hash_pass = data.password.take().map(|p| hash_password(&p)).transpose()?;
    let mut tables = store.write();
    let Some(user) = tables.users.get_mut(id) else {
        return Ok(None);
    };
    user.apply(data);
    if let Some(hash_pass) = hash_pass {
        user.hash_pass = hash_pass;
    }
    Ok(Some(user.clone()))
}

pub fn delete(store: &Store, id: RecordId) -> bool {
    store.write().users.remove(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;
    use shared::models::UserRole;

    #[test]
    fn test_duplicate_email_is_accepted() {
        let store = Store::new();
        let first = create(&store, UserCreate::new("a", "same@isp.net", "x")).unwrap();
        let second = create(&store, UserCreate::new("b", "same@isp.net", "y")).unwrap();
        assert_ne!(first.id, second.id);
        assert_eq!(find_all(&store).len(), 2);
        // Lookup returns the earliest row
        assert_eq!(find_by_email(&store, "same@isp.net").unwrap().id, first.id);
    }

    #[test]
    fn test_find_by_username() {
        let store = Store::new();
        let mut data = UserCreate::new("root", "root@isp.net", "x");
        data.role = Some(UserRole::SuperAdmin);
        create(&store, data).unwrap();
        let found = find_by_username(&store, "root").unwrap();
        assert_eq!(found.role, UserRole::SuperAdmin);
        assert!(find_by_username(&store, "nobody").is_none());
        assert!(find_by_email(&store, "nobody@isp.net").is_none());
    }

    #[test]
    fn test_update_and_delete() {
        let store = Store::new();
        let user = create(&store, UserCreate::new("a", "a@isp.net", "x")).unwrap();
        let updated = update(
            &store,
            user.id,
            UserUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
        assert!(!updated.is_active);
        assert_eq!(updated.email, user.email);
        assert_eq!(updated.hash_pass, user.hash_pass);

        assert!(delete(&store, user.id));
        assert!(find_by_id(&store, user.id).is_none());
        assert!(update(&store, user.id, UserUpdate::default()).unwrap().is_none());
    }

    #[test]
    fn test_passwords_stored_hashed() {
        let store = Store::new();
        let user = create(&store, UserCreate::new("ops", "ops@isp.net", "hunter22")).unwrap();
        assert_ne!(user.hash_pass, "hunter22");
        assert!(verify_password("hunter22", &user.hash_pass));

        let updated = update(
            &store,
            user.id,
            UserUpdate {
                password: Some("s3cond-secret".into()),
                ..Default::default()
            },
        )
        .unwrap()
        .unwrap();
        assert_ne!(updated.hash_pass, user.hash_pass);
        assert!(verify_password("s3cond-secret", &updated.hash_pass));
        assert!(!verify_password("hunter22", &updated.hash_pass));
    }
}
