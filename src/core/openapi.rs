use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::auth::{dtos as auth_dtos, handlers as auth_handlers, models as auth_models};
use crate::features::categories::{handlers as categories_handlers, models as categories_models};
use crate::features::listings::{
    dtos as listings_dtos, handlers as listings_handlers, models as listings_models,
};
use crate::features::regions::{handlers as regions_handlers, models as regions_models};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::register,
        auth_handlers::login,
        auth_handlers::logout,
        auth_handlers::me,
        // Reference data
        categories_handlers::list_categories,
        regions_handlers::list_regions,
        regions_handlers::list_cities,
        // Listings
        listings_handlers::search_listings,
        listings_handlers::get_listing,
        listings_handlers::my_listings,
        listings_handlers::create_listing,
        // Admin
        admin_handlers::get_stats,
        admin_handlers::list_moderation_queue,
        admin_handlers::update_listing_status,
    ),
    components(
        schemas(
            // Auth
            auth_models::UserRole,
            auth_models::AuthenticatedUser,
            auth_dtos::RegisterRequestDto,
            auth_dtos::LoginRequestDto,
            auth_dtos::ProfileDto,
            // Reference data
            categories_models::Category,
            regions_models::Region,
            regions_models::CityWithRegion,
            // Listings
            listings_models::ListingStatus,
            listings_models::Listing,
            listings_models::Review,
            listings_dtos::CreateListingDto,
            listings_dtos::CreatedListingDto,
            listings_dtos::ListingDetailDto,
            // Admin
            admin_dtos::CountDto,
            admin_dtos::ViewSumDto,
            admin_dtos::StatsDto,
            admin_dtos::UpdateListingStatusDto,
        )
    ),
    tags(
        (name = "auth", description = "Registration, login and the auth cookie"),
        (name = "reference-data", description = "Categories, regions and cities (public)"),
        (name = "listings", description = "Business listings: search, detail, creation"),
        (name = "admin", description = "Moderation and stats (admin only)"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Annuaire API",
        version = "0.1.0",
        description = "Business directory backend",
    )
)]
pub struct ApiDoc;

/// Adds the auth-cookie security scheme to the OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(
                    crate::features::auth::AUTH_COOKIE,
                ))),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
