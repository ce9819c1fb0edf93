//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Registers the bearer token scheme used by the mobile endpoints.
struct BearerAddon;

impl Modify for BearerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected into
/// a unified OpenAPI document served at `/api/docs/openapi.json`.
///
/// # Registered Endpoints
/// - `POST /api/auth/register`, `POST /api/auth/login`, `POST /api/auth/logout`,
///   `GET /api/auth/me` - Web accounts and sessions
/// - `POST /api/mobile/auth/register`, `POST /api/mobile/auth/login`,
///   `POST /api/mobile/auth/refresh` - Mobile accounts and bearer tokens
/// - `GET /api/users/check-role`, `POST /api/admin/roles` - Roles
/// - `GET|POST /api/kos`, `GET|PUT|DELETE /api/kos/{id}`, `GET /api/owner/kos` - Listings
/// - `POST /api/kos/{id}/images`, `DELETE /api/images/{id}` - Listing photos
/// - `GET /api/mobile/kos`, `GET /api/mobile/kos/{id}` - Mobile listing search and detail
/// - `GET|POST /api/likes`, `GET /api/likes/status` - Favorites
/// - `POST /api/sewa`, `GET /api/tagihan` - Leases and invoices
/// - `POST|PATCH /api/mobile/transactions`, `GET /api/transactions` - Payments
/// - `POST /api/midtrans/webhook` - Payment gateway notifications
/// - `GET /api/dashboard` - Role-based statistics
/// - `GET|POST /api/mobile/profile` - Tenant profile
///
/// # Returns
/// An Axum `Router<AppState>` with all routes and Swagger UI, ready for state and the session
/// layer to be applied.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        modifiers(&BearerAddon),
        info(title = "Kosku", description = "Kosku boarding-house rental API"),
        tags(
            (name = controller::auth::AUTH_TAG, description = "Web account and session routes"),
            (name = controller::auth::MOBILE_AUTH_TAG, description = "Mobile account and token routes"),
            (name = controller::role::ROLE_TAG, description = "Role lookup and assignment"),
            (name = controller::kos::KOS_TAG, description = "Listing search and management"),
            (name = controller::image::IMAGE_TAG, description = "Listing photos"),
            (name = controller::search::MOBILE_KOS_TAG, description = "Mobile listing search"),
            (name = controller::favorite::FAVORITE_TAG, description = "Liked listings"),
            (name = controller::rental::RENTAL_TAG, description = "Leases and monthly invoices"),
            (name = controller::payment::PAYMENT_TAG, description = "Invoice payments"),
            (name = controller::webhook::WEBHOOK_TAG, description = "Payment gateway notifications"),
            (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard statistics"),
            (name = controller::profile::PROFILE_TAG, description = "Tenant profile"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::me))
        .routes(routes!(controller::auth::mobile_register))
        .routes(routes!(controller::auth::mobile_login))
        .routes(routes!(controller::auth::mobile_refresh))
        .routes(routes!(controller::role::check_role))
        .routes(routes!(controller::role::assign_role))
        .routes(routes!(
            controller::kos::search_kos,
            controller::kos::create_kos
        ))
        .routes(routes!(
            controller::kos::get_kos,
            controller::kos::update_kos,
            controller::kos::delete_kos
        ))
        .routes(routes!(controller::kos::list_owner_kos))
        .routes(routes!(controller::image::upload_image))
        .routes(routes!(controller::image::delete_image))
        .routes(routes!(controller::search::list_mobile_kos))
        .routes(routes!(controller::search::get_mobile_kos))
        .routes(routes!(
            controller::favorite::toggle_like,
            controller::favorite::list_favorites
        ))
        .routes(routes!(controller::favorite::like_status))
        .routes(routes!(controller::rental::create_rental))
        .routes(routes!(controller::rental::list_invoices))
        .routes(routes!(
            controller::payment::create_payment,
            controller::payment::confirm_payment
        ))
        .routes(routes!(controller::payment::list_transactions))
        .routes(routes!(controller::webhook::midtrans_notification))
        .routes(routes!(controller::dashboard::get_dashboard))
        .routes(routes!(
            controller::profile::get_profile,
            controller::profile::upsert_profile
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
