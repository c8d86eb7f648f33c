use crate::AppState;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Assembles the full application: welcome and health probes plus the
/// versioned API, with per-request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Cookiteer API is running" }))
        .route("/health", get(|| async { "OK" }))
        .nest("/api/v1", create_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the `/api/v1` router.
///
/// Session enforcement is not a router-level layer here: the three
/// owner-scoped routes take the session gate as an extractor, so paths
/// like `/food-requests` can keep a public POST next to a gated GET.
pub fn create_router() -> Router<AppState> {
    Router::new()
        // Session routes
        .route("/jwt", post(crate::api::handlers::auth::issue_token))
        .route("/logout", post(crate::api::handlers::auth::logout))
        // Public food listing routes
        .route("/foods", get(crate::api::handlers::foods::list_foods))
        .route(
            "/foods/{id}",
            get(crate::api::handlers::foods::get_food)
                .delete(crate::api::handlers::foods::delete_food),
        )
        .route("/add-food", post(crate::api::handlers::foods::add_food))
        .route(
            "/update-food/{id}",
            patch(crate::api::handlers::foods::update_food),
        )
        // Owner-scoped listing management (session + ownership)
        .route(
            "/manage-food",
            get(crate::api::handlers::foods::manage_food),
        )
        // Food request routes; GET is owner-scoped, POST is public intake
        .route(
            "/food-requests",
            get(crate::api::handlers::requests::my_requests)
                .post(crate::api::handlers::requests::create_request),
        )
        .route(
            "/food-requests/{id}",
            delete(crate::api::handlers::requests::delete_request),
        )
        // Per-listing request management; GET is owner-scoped
        .route(
            "/manage-food-requests",
            get(crate::api::handlers::requests::requests_for_listing)
                .patch(crate::api::handlers::requests::deliver_request),
        )
}
