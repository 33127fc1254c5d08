use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginRequestDto, ProfileDto, RegisterRequestDto};
use crate::features::auth::models::AuthenticatedUser;
use crate::features::auth::services::AuthService;
use crate::features::auth::AUTH_COOKIE;
use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;
use validator::Validate;

/// Auth cookie: HTTP-only, secure, cross-site-sendable, path-wide.
fn auth_cookie(token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::None)
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, "")).path("/").build()
}

/// Register a new user, set the auth cookie and return the profile
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequestDto,
    responses(
        (status = 200, description = "User registered successfully", body = ProfileDto),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    jar: CookieJar,
    AppJson(dto): AppJson<RegisterRequestDto>,
) -> Result<(CookieJar, Json<ProfileDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (profile, token) = service.register(dto).await?;
    Ok((jar.add(auth_cookie(token)), Json(profile)))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = ProfileDto),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    jar: CookieJar,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<(CookieJar, Json<ProfileDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (profile, token) = service.login(dto).await?;
    Ok((jar.add(auth_cookie(token)), Json(profile)))
}

/// Clear the auth cookie
///
/// Tokens are self-contained, so there is nothing to invalidate server-side.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses(
        (status = 200, description = "Cookie cleared")
    ),
    tag = "auth"
)]
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    (
        jar.remove(removal_cookie()),
        Json(serde_json::json!({ "success": true })),
    )
}

/// Get the current authenticated user's profile
#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses(
        (status = 200, description = "Current user profile", body = ProfileDto),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User no longer exists")
    ),
    tag = "auth",
    security(
        ("cookie_auth" = [])
    )
)]
pub async fn me(
    user: AuthenticatedUser,
    State(service): State<Arc<AuthService>>,
) -> Result<Json<ProfileDto>> {
    let profile = service.me(&user).await?;
    Ok(Json(profile))
}
