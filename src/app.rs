//! Service wiring and router assembly, shared by `main` and the HTTP tests.

use std::sync::Arc;

use axum::{middleware::from_fn_with_state, routing::get, Router};
use sqlx::SqlitePool;

use crate::core::middleware;
use crate::features::admin::{routes as admin_routes, AdminService};
use crate::features::auth::repository::SqliteUserRepository;
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::categories::repository::SqliteCategoryRepository;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::listings::repository::{SqliteListingRepository, SqliteReviewRepository};
use crate::features::listings::{routes as listings_routes, ListingService};
use crate::features::regions::repository::SqliteRegionRepository;
use crate::features::regions::{routes as regions_routes, RegionService};

pub struct AppServices {
    pub tokens: Arc<TokenService>,
    pub auth: Arc<AuthService>,
    pub categories: Arc<CategoryService>,
    pub regions: Arc<RegionService>,
    pub listings: Arc<ListingService>,
    pub admin: Arc<AdminService>,
}

impl AppServices {
    /// Wire repositories and services over the shared pool.
    pub fn init(pool: SqlitePool, jwt_secret: &str) -> Self {
        let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
        let listing_repo = Arc::new(SqliteListingRepository::new(pool.clone()));
        let review_repo = Arc::new(SqliteReviewRepository::new(pool.clone()));
        let category_repo = Arc::new(SqliteCategoryRepository::new(pool.clone()));
        let region_repo = Arc::new(SqliteRegionRepository::new(pool));

        let tokens = Arc::new(TokenService::new(jwt_secret));
        let auth = Arc::new(AuthService::new(user_repo.clone(), tokens.clone()));
        let categories = Arc::new(CategoryService::new(category_repo));
        let regions = Arc::new(RegionService::new(region_repo));
        let listings = Arc::new(ListingService::new(listing_repo.clone(), review_repo));
        let admin = Arc::new(AdminService::new(user_repo, listing_repo));

        Self {
            tokens,
            auth,
            categories,
            regions,
            listings,
            admin,
        }
    }
}

async fn health_check() -> axum::http::StatusCode {
    axum::http::StatusCode::OK
}

/// Assemble the API router: public routes, token-guarded routes and the
/// nested admin group.
pub fn build_router(services: &AppServices) -> Router {
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(services.auth.clone()))
        .merge(listings_routes::protected_routes(services.listings.clone()))
        .nest("/api/admin", admin_routes::routes(services.admin.clone()))
        .route_layer(from_fn_with_state(
            services.tokens.clone(),
            middleware::auth_middleware,
        ));

    let public_routes = Router::new()
        .merge(auth_routes::public_routes(services.auth.clone()))
        .merge(categories_routes::routes(services.categories.clone()))
        .merge(regions_routes::routes(services.regions.clone()))
        .merge(listings_routes::public_routes(services.listings.clone()));

    Router::new()
        .merge(protected_routes)
        .merge(public_routes)
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::seeded_pool;
    use axum::http::{header, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let pool = seeded_pool().await;
        let services = AppServices::init(pool, "test-secret");
        TestServer::builder()
            .save_cookies()
            .build(build_router(&services))
            .unwrap()
    }

    async fn login(server: &TestServer, email: &str) {
        let res = server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": "password123" }))
            .await;
        res.assert_status_ok();
    }

    #[tokio::test]
    async fn register_sets_cookie_and_me_returns_profile() {
        let server = server().await;

        let res = server
            .post("/api/auth/register")
            .json(&json!({
                "name": "Voahangy",
                "email": "voahangy@exemple.mg",
                "password": "secret-pass"
            }))
            .await;
        res.assert_status_ok();
        let profile: Value = res.json();
        assert_eq!(profile["email"], "voahangy@exemple.mg");
        assert_eq!(profile["role"], "user");

        let me: Value = server.get("/api/auth/me").await.json();
        assert_eq!(me["name"], "Voahangy");
    }

    #[tokio::test]
    async fn duplicate_registration_conflicts() {
        let server = server().await;
        let res = server
            .post("/api/auth/register")
            .json(&json!({
                "name": "Doublon",
                "email": "user@mada.mg",
                "password": "whatever"
            }))
            .await;
        res.assert_status(StatusCode::CONFLICT);
        let body: Value = res.json();
        assert_eq!(body["error"], "Email already registered");
    }

    #[tokio::test]
    async fn me_without_cookie_is_unauthorized() {
        let server = server().await;
        let res = server.get("/api/auth/me").await;
        res.assert_status_unauthorized();
        let body: Value = res.json();
        assert_eq!(body["error"], "Unauthorized");
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let server = server().await;
        let res = server
            .get("/api/my-listings")
            .add_header(header::COOKIE, HeaderValue::from_static("token=garbage"))
            .await;
        res.assert_status_unauthorized();
        let body: Value = res.json();
        assert_eq!(body["error"], "Invalid token");
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let server = server().await;
        let res = server
            .post("/api/auth/login")
            .json(&json!({ "email": "user@mada.mg", "password": "wrong" }))
            .await;
        res.assert_status_unauthorized();
        let body: Value = res.json();
        assert_eq!(body["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn logout_clears_the_session() {
        let server = server().await;
        login(&server, "user@mada.mg").await;
        server.get("/api/auth/me").await.assert_status_ok();

        server.post("/api/auth/logout").await.assert_status_ok();
        server.get("/api/auth/me").await.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn reference_data_is_public() {
        let server = server().await;

        let categories: Value = server.get("/api/categories").await.json();
        assert_eq!(categories.as_array().unwrap().len(), 8);

        let cities: Value = server.get("/api/cities").await.json();
        let tana = &cities.as_array().unwrap()[0];
        assert_eq!(tana["name"], "Antananarivo");
        assert_eq!(tana["region_name"], "Analamanga");
    }

    #[tokio::test]
    async fn admin_stats_require_the_admin_role() {
        let server = server().await;

        login(&server, "user@mada.mg").await;
        let res = server.get("/api/admin/stats").await;
        res.assert_status(StatusCode::FORBIDDEN);
        let body: Value = res.json();
        assert_eq!(body["error"], "Forbidden");

        login(&server, "admin@mada.mg").await;
        let stats: Value = server.get("/api/admin/stats").await.json();
        assert_eq!(stats["users"]["count"], 3);
        assert_eq!(stats["listings"]["count"], 5);
        assert_eq!(stats["pending"]["count"], 0);
    }

    #[tokio::test]
    async fn listing_lifecycle_from_creation_to_publication() {
        let server = server().await;

        // A pro user submits a listing; it starts pending.
        login(&server, "pro@mada.mg").await;
        let created: Value = server
            .post("/api/listings")
            .json(&json!({
                "title": "Hôtel Colbert",
                "category_id": 1,
                "city_id": 1,
                "description": "Palace historique d'Antaninarenina.",
                "images": ["https://img.mg/a.jpg", "https://img.mg/b.jpg"]
            }))
            .await
            .json();
        let slug = created["slug"].as_str().unwrap().to_string();
        assert!(slug.starts_with("hotel-colbert-"));

        // Hidden from public search, visible to its owner and by slug.
        let search: Value = server.get("/api/listings").await.json();
        assert_eq!(search.as_array().unwrap().len(), 5);

        let mine: Value = server.get("/api/my-listings").await.json();
        assert_eq!(mine.as_array().unwrap().len(), 5 + 1);

        let detail: Value = server.get(&format!("/api/listings/{}", slug)).await.json();
        assert_eq!(detail["status"], "pending");
        assert_eq!(detail["views"], 1);
        assert_eq!(detail["images"][0], "https://img.mg/a.jpg");

        // Admin publishes it; it now shows up in search.
        login(&server, "admin@mada.mg").await;
        let queue: Value = server.get("/api/admin/listings?status=pending").await.json();
        let id = queue.as_array().unwrap()[0]["id"].as_i64().unwrap();

        server
            .patch(&format!("/api/admin/listings/{}/status", id))
            .json(&json!({ "status": "published" }))
            .await
            .assert_status_ok();

        let search: Value = server.get("/api/listings").await.json();
        assert_eq!(search.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn moderation_rejects_pending_as_target() {
        let server = server().await;
        login(&server, "admin@mada.mg").await;

        let res = server
            .patch("/api/admin/listings/1/status")
            .json(&json!({ "status": "pending" }))
            .await;
        res.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = res.json();
        assert_eq!(body["error"], "Invalid status");
    }

    #[tokio::test]
    async fn detail_fetches_count_views() {
        let server = server().await;

        let first: Value = server.get("/api/listings/hotel-carlton").await.json();
        assert_eq!(first["views"], 1);
        assert_eq!(first["owner_name"], "Jean Pro");
        assert_eq!(first["reviews"].as_array().unwrap().len(), 2);

        let second: Value = server.get("/api/listings/hotel-carlton").await.json();
        assert_eq!(second["views"], 2);
    }

    #[tokio::test]
    async fn unknown_slug_is_not_found() {
        let server = server().await;
        let res = server.get("/api/listings/no-such-slug").await;
        res.assert_status_not_found();
        let body: Value = res.json();
        assert_eq!(body["error"], "Not found");
    }
}
