use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginRequestDto, ProfileDto, RegisterRequestDto};
use crate::features::auth::models::{AuthenticatedUser, NewUser};
use crate::features::auth::repository::UserRepository;
use crate::features::auth::services::password;
use crate::features::auth::services::TokenService;

/// Credential registration and login.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a new account and issue its auth token.
    ///
    /// A duplicate email surfaces as a conflict from the unique constraint.
    pub async fn register(&self, dto: RegisterRequestDto) -> Result<(ProfileDto, String)> {
        let password_hash = password::hash(dto.password).await?;

        let user = self
            .users
            .create(&NewUser {
                name: dto.name,
                email: dto.email,
                password_hash,
                role: dto.role.unwrap_or_default(),
            })
            .await?;

        let token = self.tokens.encode(&AuthenticatedUser {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        })?;

        tracing::info!(user_id = user.id, "user registered");
        Ok((user.into(), token))
    }

    /// Verify credentials and issue an auth token.
    ///
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn login(&self, dto: LoginRequestDto) -> Result<(ProfileDto, String)> {
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::Auth("Invalid credentials".to_string()))?;

        if !password::verify(dto.password, user.password.clone()).await? {
            return Err(AppError::Auth("Invalid credentials".to_string()));
        }

        let token = self.tokens.encode(&AuthenticatedUser {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
        })?;

        Ok((user.into(), token))
    }

    /// Current profile, re-read from the store rather than trusted from the
    /// token claims.
    pub async fn me(&self, user: &AuthenticatedUser) -> Result<ProfileDto> {
        self.users
            .find_by_id(user.id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::UserRole;
    use crate::features::auth::repository::SqliteUserRepository;
    use crate::shared::test_helpers::test_pool;

    async fn service() -> AuthService {
        let pool = test_pool().await;
        AuthService::new(
            Arc::new(SqliteUserRepository::new(pool)),
            Arc::new(TokenService::new("test-secret")),
        )
    }

    fn register_dto(email: &str, role: Option<UserRole>) -> RegisterRequestDto {
        RegisterRequestDto {
            name: "Test User".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role,
        }
    }

    #[tokio::test]
    async fn register_defaults_to_user_role() {
        let service = service().await;
        let (profile, token) = service.register(register_dto("a@b.mg", None)).await.unwrap();
        assert_eq!(profile.role, UserRole::User);
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn duplicate_email_conflicts() {
        let service = service().await;
        service.register(register_dto("a@b.mg", None)).await.unwrap();
        let err = service
            .register(register_dto("a@b.mg", Some(UserRole::Pro)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_checks_password() {
        let service = service().await;
        service.register(register_dto("a@b.mg", None)).await.unwrap();

        let ok = service
            .login(LoginRequestDto {
                email: "a@b.mg".to_string(),
                password: "password123".to_string(),
            })
            .await;
        assert!(ok.is_ok());

        let err = service
            .login(LoginRequestDto {
                email: "a@b.mg".to_string(),
                password: "nope".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(msg) if msg == "Invalid credentials"));
    }

    #[tokio::test]
    async fn login_unknown_email_is_invalid_credentials() {
        let service = service().await;
        let err = service
            .login(LoginRequestDto {
                email: "ghost@b.mg".to_string(),
                password: "password123".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Auth(msg) if msg == "Invalid credentials"));
    }

    #[tokio::test]
    async fn me_rereads_the_store() {
        let service = service().await;
        let (profile, _) = service
            .register(register_dto("a@b.mg", Some(UserRole::Pro)))
            .await
            .unwrap();

        let me = service
            .me(&AuthenticatedUser {
                id: profile.id,
                email: profile.email.clone(),
                role: profile.role,
            })
            .await
            .unwrap();
        assert_eq!(me.name, "Test User");
        assert_eq!(me.role, UserRole::Pro);
    }
}
