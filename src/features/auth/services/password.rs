//! Password hashing helpers.
//!
//! Argon2 is deliberately CPU-expensive, so both hashing and verification run
//! on the blocking thread pool instead of the async executor.

use argon2::{
    password_hash::{PasswordHasher, PasswordVerifier, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;

use crate::core::error::{AppError, Result};

/// Hash a clear-text password with a fresh random salt.
pub async fn hash(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
    })
    .await
    .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
}

/// Check a clear-text password against a stored hash.
pub async fn verify(password: String, stored_hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || {
        let parsed = PasswordHash::new(&stored_hash)
            .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    })
    .await
    .map_err(|e| AppError::Internal(format!("Verification task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_then_verify_round_trip() {
        let hashed = hash("password123".to_string()).await.unwrap();
        assert_ne!(hashed, "password123");
        assert!(verify("password123".to_string(), hashed.clone())
            .await
            .unwrap());
        assert!(!verify("wrong".to_string(), hashed).await.unwrap());
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let a = hash("password123".to_string()).await.unwrap();
        let b = hash("password123".to_string()).await.unwrap();
        assert_ne!(a, b);
    }
}
