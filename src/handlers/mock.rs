use crate::compiler::{MockMethod, RouteBinding};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{MethodRouter, delete, get, post, put},
};

/// Build the method router for one compiled binding.
///
/// The fixture key was derived at compile time; request handling only
/// performs the lookup. Captured path values are routed on but never read.
pub fn method_router(binding: RouteBinding) -> MethodRouter<AppState> {
    let method = binding.method;
    let handler = move |State(state): State<AppState>| {
        let binding = binding.clone();
        async move { serve(state, binding).await }
    };
    match method {
        MockMethod::Get => get(handler),
        MockMethod::Post => post(handler),
        MockMethod::Put => put(handler),
        MockMethod::Delete => delete(handler),
    }
}

async fn serve(state: AppState, binding: RouteBinding) -> Response {
    if !binding.method.performs_lookup() {
        // DELETE: 204, empty body, no store access
        return StatusCode::NO_CONTENT.into_response();
    }

    match state.fixtures.lookup(&binding.fixture_key).await {
        Ok(lookup) => {
            tracing::debug!(
                "{} {} served from fixture {} (found: {})",
                binding.method.as_str(),
                binding.pattern,
                binding.fixture_key,
                lookup.is_found()
            );
            (binding.method.status(), Json(lookup.into_body())).into_response()
        }
        Err(err) => ApiError::Fixture(err).into_response(),
    }
}
