//! Role-based authorization guards.
//!
//! The auth middleware attaches an `AuthenticatedUser` to the request; guards
//! extract it and verify the caller holds the required role. `admin` is a
//! superset role and passes every guard.

use crate::core::error::AppError;
use crate::features::auth::models::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for admin-only endpoints.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireAdmin(user): RequireAdmin) { ... }
/// ```
pub struct RequireAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("Unauthorized".to_string()))?;

        if !user.is_admin() {
            return Err(AppError::Forbidden("Forbidden".to_string()));
        }

        Ok(RequireAdmin(user.clone()))
    }
}
