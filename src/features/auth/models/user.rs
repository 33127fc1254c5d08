use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;

/// User role stored as text in the database.
///
/// `admin` is a superset role: any action gated on `user` or `pro` is also
/// allowed for admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Pro,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "user"),
            UserRole::Pro => write!(f, "pro"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}

/// Database model for a registered user. The `password` column holds a
/// salted argon2 hash, never the clear text.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
}

/// Data for inserting a new user row.
#[derive(Debug)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Identity attached to a request by the auth middleware.
///
/// This is also the exact claim set of the signed cookie token; the store is
/// only re-queried where fresher data matters (`/api/auth/me`).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub email: String,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Role check used throughout: the required role itself, or admin.
    #[allow(dead_code)]
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role || self.is_admin()
    }
}
