mod compiler;
mod config;
mod error;
mod fixture;
mod handlers;
mod models;
mod routes;
mod server;
mod spec;
mod state;

use anyhow::Context;
use config::Config;
use fixture::FixtureStore;
use spec::ApiSpec;
use state::AppState;
use std::sync::Arc;
use std::time::Instant;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    tracing::info!("mockapi-server starting");

    let config = Config::from_env()?;
    config.log_startup();

    // A document that fails to load is fatal: no routes can be trusted, so
    // the listener is never bound.
    let spec = ApiSpec::load(&config.spec_path)?;
    tracing::info!("OpenAPI document loaded: {} paths", spec.path_count());

    let bindings = compiler::compile(&spec);
    tracing::info!("{} mock routes compiled", bindings.len());

    let addr = format!("{}:{}", config.service_host, config.service_port);
    let state = AppState {
        spec: Arc::new(spec),
        fixtures: FixtureStore::new(&config.fixture_dir),
        config: Arc::new(config),
        route_count: bindings.len(),
        started_at: Instant::now(),
    };

    let app = server::build_router(state, &bindings);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
