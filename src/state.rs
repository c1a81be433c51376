use crate::config::Config;
use crate::fixture::FixtureStore;
use crate::spec::ApiSpec;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
///
/// Everything in here is constructed before the listener binds and is
/// read-only afterwards, so handlers can share it without locks.
#[derive(Clone)]
pub struct AppState {
    pub spec: Arc<ApiSpec>,
    pub fixtures: FixtureStore,
    pub config: Arc<Config>,
    pub route_count: usize,
    pub started_at: Instant,
}
