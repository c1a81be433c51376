use crate::compiler::RouteBinding;
use crate::error::ErrorResponse;
use crate::handlers;
use crate::routes;
use crate::state::AppState;
use axum::{
    Json, Router,
    http::{Method, StatusCode, Uri},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Assemble the router from the compiled bindings in one pass.
///
/// The binding list is complete and immutable before this runs, so there is
/// no observable partially-registered state. Compiled routes go in first,
/// then the static infrastructure routes; static-segment-vs-capture overlap
/// between patterns is left to axum's matcher.
pub fn build_router(state: AppState, bindings: &[RouteBinding]) -> Router {
    let mut router = Router::new();
    for binding in bindings {
        if routes::RESERVED.contains(&binding.pattern.as_str()) {
            tracing::warn!(
                "spec declares reserved path {}; keeping the infrastructure route",
                binding.pattern
            );
            continue;
        }
        router = router.route(&binding.pattern, handlers::mock::method_router(binding.clone()));
    }

    router
        .route(routes::ROOT, get(handlers::root_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(routes::API_SPEC, get(handlers::api_spec_handler))
        .route(routes::API_DOCS, get(handlers::docs_handler))
        .fallback(not_found_handler)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Unmatched (method, path) pairs are a normal client-facing outcome; the
/// payload names both verbatim.
async fn not_found_handler(method: Method, uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(
            "Not Found",
            format!("Route {} {} not found", method, uri.path()),
        )),
    )
}
