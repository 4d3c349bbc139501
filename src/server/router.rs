//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every API endpoint is registered here with its OpenAPI specification, and Swagger UI serves
//! interactive documentation at `/api/docs`.

use axum::{middleware, Router};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/pulsepoint/updateCommodities` - Run a commodity pass (admin)
/// - `POST /api/pulsepoint/updateStarSystems` - Run a star system pass (admin)
/// - `POST /api/outposts` - Create an outpost
/// - `PATCH /api/outpost-commodities/{id}` - Set the stock amount of an outpost commodity
/// - `GET /api/outposts/{id}/commodities` - List the stock rows of an outpost
///
/// Admin routes are wrapped in [`controller::auth::require_admin`], which reads the admin
/// token from the state, hence the state is required up front.
///
/// # Example
/// ```ignore
/// let router = routes(app_state.clone()).with_state(app_state);
/// ```
pub fn routes(state: AppState) -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "PulsePoint", description = "PulsePoint API"),
        modifiers(&AdminTokenAddon),
        tags(
            (name = controller::sync::SYNC_TAG, description = "UEX synchronisation triggers"),
            (name = controller::outpost::OUTPOST_TAG, description = "Outposts and stock"),
        )
    )]
    struct ApiDoc;

    let admin_routes = OpenApiRouter::new()
        .routes(routes!(controller::sync::update_commodities))
        .routes(routes!(controller::sync::update_star_systems))
        .route_layer(middleware::from_fn_with_state(
            state,
            controller::auth::require_admin,
        ));

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(admin_routes)
        .routes(routes!(controller::outpost::create_outpost))
        .routes(routes!(controller::outpost::update_outpost_commodity))
        .routes(routes!(controller::outpost::get_outpost_commodities))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Registers the bearer scheme referenced by the admin routes.
struct AdminTokenAddon;

impl Modify for AdminTokenAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);

        components.add_security_scheme(
            "admin_token",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}
