use serde::{Deserialize, Serialize};

/// Response type for the health check endpoint
#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub environment: String,
}

/// Static endpoints advertised on the landing page
#[derive(Serialize, Deserialize)]
pub struct EndpointDirectory {
    pub health: String,
    pub spec: String,
    pub documentation: String,
}

/// Response type for the landing page
#[derive(Serialize, Deserialize)]
pub struct LandingResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointDirectory,
    pub total_routes: usize,
}
