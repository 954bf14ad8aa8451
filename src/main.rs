// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::repo_path_service::RepoPathService;
use crate::infrastructure::config::{
    load_directory_seed, load_prebuilt_dashboards, load_service_config,
};
use crate::infrastructure::memory_store::MemoryStore;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    create_dashboard, delete_prebuilt_dashboard, health_check, list_dashboards,
    list_prebuilt_dashboards, parse_repo_path,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let service_config = load_service_config()?;
    let prebuilt = load_prebuilt_dashboards()?;
    let seed = load_directory_seed()?;

    // Create store (infrastructure layer)
    let store = Arc::new(MemoryStore::from_seed(seed));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(store.clone(), prebuilt);
    let repo_path_service = RepoPathService::new(store.clone());

    // Create application state
    let state = Arc::new(AppState {
        directory: store,
        dashboard_service,
        repo_path_service,
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route(
            "/projects/:organization_slug/:project_slug/repo-path-parsing",
            post(parse_repo_path),
        )
        .route(
            "/organizations/:organization_slug/dashboards",
            get(list_dashboards).post(create_dashboard),
        )
        .route(
            "/organizations/:organization_slug/dashboards/prebuilt",
            get(list_prebuilt_dashboards),
        )
        .route(
            "/organizations/:organization_slug/dashboards/prebuilt/:slug",
            delete(delete_prebuilt_dashboard),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = service_config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid bind address {}", service_config.server.bind))?;
    tracing::info!("Starting stacklink service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
