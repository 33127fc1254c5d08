use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedUser;

/// Issues and verifies the self-contained auth tokens carried by the cookie.
///
/// Tokens embed `{id, email, role}` and carry no expiry claim; they stay
/// valid for as long as the signature checks out, which also makes logout a
/// pure cookie removal.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn encode(&self, user: &AuthenticatedUser) -> Result<String> {
        encode(&Header::default(), user, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    pub fn decode(&self, token: &str) -> Result<AuthenticatedUser> {
        decode::<AuthenticatedUser>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::models::UserRole;

    fn claims() -> AuthenticatedUser {
        AuthenticatedUser {
            id: 42,
            email: "pro@mada.mg".to_string(),
            role: UserRole::Pro,
        }
    }

    #[test]
    fn encode_decode_round_trip() {
        let service = TokenService::new("test-secret");
        let token = service.encode(&claims()).unwrap();
        let decoded = service.decode(&token).unwrap();
        assert_eq!(decoded.id, 42);
        assert_eq!(decoded.email, "pro@mada.mg");
        assert_eq!(decoded.role, UserRole::Pro);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("secret-a").encode(&claims()).unwrap();
        let err = TokenService::new("secret-b").decode(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(msg) if msg == "Invalid token"));
    }

    #[test]
    fn rejects_garbage() {
        let service = TokenService::new("test-secret");
        assert!(service.decode("not-a-token").is_err());
    }
}
