use crate::models::{EndpointDirectory, LandingResponse};
use crate::routes;
use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::Value as JsonValue;

/// GET /api-spec handler - Serve the loaded OpenAPI document as JSON
///
/// The document was converted to JSON once at load time; this is a clone of
/// that value, never a re-parse.
pub async fn api_spec_handler(State(state): State<AppState>) -> Json<JsonValue> {
    Json(state.spec.as_json().clone())
}

/// GET / handler - JSON landing page with the endpoint directory and the
/// compiled route count
pub async fn root_handler(State(state): State<AppState>) -> Json<LandingResponse> {
    Json(LandingResponse {
        message: "Mock API Server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: EndpointDirectory {
            health: routes::HEALTH.to_string(),
            spec: routes::API_SPEC.to_string(),
            documentation: routes::API_DOCS.to_string(),
        },
        total_routes: state.route_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fixture::FixtureStore;
    use crate::spec::ApiSpec;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use std::sync::Arc;
    use std::time::Instant;
    use tower::ServiceExt;

    const SPEC: &str = r#"
openapi: 3.0.0
info:
  title: Sample
  version: 1.0.0
paths:
  /users/me:
    get: {}
"#;

    fn test_app() -> Router {
        let config = Config {
            spec_path: "openapi.yaml".into(),
            fixture_dir: "mock-data".into(),
            service_port: 3002,
            service_host: "0.0.0.0".to_string(),
            environment: "test".to_string(),
        };
        let state = AppState {
            spec: Arc::new(ApiSpec::parse(SPEC).unwrap()),
            fixtures: FixtureStore::new("mock-data"),
            config: Arc::new(config),
            route_count: 1,
            started_at: Instant::now(),
        };
        Router::new()
            .route(routes::ROOT, get(root_handler))
            .route(routes::API_SPEC, get(api_spec_handler))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_api_spec_round_trips_the_document() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api-spec").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let doc: JsonValue = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["title"], "Sample");
        assert!(doc["paths"]["/users/me"].get("get").is_some());
    }

    #[tokio::test]
    async fn test_landing_page_reports_route_count() {
        let response = test_app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let landing: LandingResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(landing.total_routes, 1);
        assert_eq!(landing.endpoints.spec, "/api-spec");
    }
}
