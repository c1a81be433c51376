use crate::models::HealthResponse;
use crate::state::AppState;
use axum::{Json, extract::State};
use chrono::Utc;

/// GET /health handler - Health check endpoint
///
/// The server has no backing dependencies once startup completes, so a
/// process that answers at all is healthy. Reports uptime and environment
/// for operators.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
        environment: state.config.environment.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::fixture::FixtureStore;
    use crate::routes;
    use crate::spec::ApiSpec;
    use axum::{Router, body::Body, http::Request, http::StatusCode, routing::get};
    use std::sync::Arc;
    use std::time::Instant;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_endpoint() {
        let config = Config {
            spec_path: "openapi.yaml".into(),
            fixture_dir: "mock-data".into(),
            service_port: 3002,
            service_host: "0.0.0.0".to_string(),
            environment: "test".to_string(),
        };
        let state = AppState {
            spec: Arc::new(ApiSpec::parse("paths: {}").unwrap()),
            fixtures: FixtureStore::new("mock-data"),
            config: Arc::new(config),
            route_count: 0,
            started_at: Instant::now(),
        };

        let app = Router::new()
            .route(routes::HEALTH, get(health_handler))
            .with_state(state);

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let response_json: HealthResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.environment, "test");
    }
}
