// Route path constants - single source of truth for the static routes

pub const ROOT: &str = "/";
pub const HEALTH: &str = "/health";
pub const API_SPEC: &str = "/api-spec";
pub const API_DOCS: &str = "/api-docs";

/// Paths the mock compiler may not shadow; a spec that declares one of these
/// loses to the infrastructure route.
pub const RESERVED: [&str; 4] = [ROOT, HEALTH, API_SPEC, API_DOCS];
