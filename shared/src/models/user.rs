//! User Model

use serde::{Deserialize, Serialize};

use crate::types::{RecordId, Timestamp};

/// Dashboard operator role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserRole {
    SuperAdmin,
    #[default]
    Admin,
    Manager,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SuperAdmin => "super-admin",
            Self::Admin => "admin",
            Self::Manager => "manager",
        }
    }
}

/// User entity (后台操作员)
///
/// Email uniqueness is a lookup concern only; nothing rejects a duplicate on insert.
/// The plaintext password never reaches this struct, only its argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl User {
    /// `hash_pass` replaces `data.password`, which is dropped here.
    pub fn new(id: RecordId, now: Timestamp, data: UserCreate, hash_pass: String) -> Self {
        Self {
            id,
            username: data.username,
            email: data.email,
            hash_pass,
            role: data.role.unwrap_or_default(),
            is_active: data.is_active.unwrap_or(true),
            created_at: now,
        }
    }

    /// Shallow merge. `data.password` is ignored; the caller hashes it and
    /// sets `hash_pass` itself.
    pub fn apply(&mut self, data: UserUpdate) {
        if let Some(v) = data.username {
            self.username = v;
        }
        if let Some(v) = data.email {
            self.email = v;
        }
        if let Some(v) = data.role {
            self.role = v;
        }
        if let Some(v) = data.is_active {
            self.is_active = v;
        }
    }
}

/// User response (without password)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: RecordId,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Create user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl UserCreate {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
            role: None,
            is_active: None,
        }
    }
}

/// Update user payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults() {
        let data = UserCreate::new("ops", "ops@isp.net", "secret");
        let user = User::new(1, 100, data, "$argon2id$x".into());
        assert_eq!(user.hash_pass, "$argon2id$x");
        assert_eq!(user.role, UserRole::Admin);
        assert!(user.is_active);
        assert_eq!(user.created_at, 100);
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&UserRole::SuperAdmin).unwrap();
        assert_eq!(json, "\"super-admin\"");
        let role: UserRole = serde_json::from_str("\"manager\"").unwrap();
        assert_eq!(role, UserRole::Manager);
        assert_eq!(UserRole::SuperAdmin.as_str(), "super-admin");
    }

    #[test]
    fn test_apply_leaves_hash_alone() {
        let data = UserCreate::new("a", "a@b.c", "pw");
        let mut user = User::new(1, 0, data, "$argon2id$x".into());
        user.apply(UserUpdate {
            password: Some("plaintext".into()),
            is_active: Some(false),
            ..Default::default()
        });
        assert_eq!(user.hash_pass, "$argon2id$x");
        assert!(!user.is_active);
    }

    #[test]
    fn test_response_hides_password() {
        let data = UserCreate::new("a", "a@b.c", "pw");
        let user = User::new(7, 0, data, "$argon2id$x".into());
        assert!(serde_json::to_value(&user).unwrap().get("hashPass").is_none());
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["isActive"], true);
    }
}
