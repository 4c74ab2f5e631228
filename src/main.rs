// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::filter_store::FilterStore;
use crate::application::snapshot_provider::SnapshotProvider;
use crate::domain::dashboard::TargetDefaults;
use crate::infrastructure::config::{load_app_config, ProviderKind, ProviderSettings};
use crate::infrastructure::http_provider::HttpSnapshotProvider;
use crate::infrastructure::mock_provider::MockSnapshotProvider;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    get_config_panel, get_dashboard, get_filters, get_matrix, get_ops, get_snapshots,
    health_check, list_departments, list_stores, reset_filters, set_department, set_query,
    set_store, set_timeframe,
};

fn build_provider(settings: &ProviderSettings) -> anyhow::Result<Arc<dyn SnapshotProvider>> {
    match settings.kind {
        ProviderKind::Mock => Ok(Arc::new(MockSnapshotProvider::new(settings.latency()))),
        ProviderKind::Http => {
            let base_url = settings
                .base_url
                .clone()
                .context("provider.base_url is required for the http provider")?;
            Ok(Arc::new(HttpSnapshotProvider::new(base_url)))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("retail_ops_dashboard=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let config = load_app_config().context("Failed to load config/dashboard")?;

    // Create provider (infrastructure layer)
    let provider = build_provider(&config.provider)?;
    tracing::info!("Using {:?} snapshot provider", config.provider.kind);

    // Create services (application layer)
    let dashboard_service = DashboardService::new(
        provider,
        config.stores.clone(),
        TargetDefaults::from(&config.targets),
        config.provider.cache_ttl(),
    );

    let state = Arc::new(AppState {
        dashboard_service,
        filters: FilterStore::new(),
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/healthz", get(health_check))
        .route("/stores", get(list_stores))
        .route("/departments", get(list_departments))
        .route("/filters", get(get_filters))
        .route("/filters/store", put(set_store))
        .route("/filters/timeframe", put(set_timeframe))
        .route("/filters/query", put(set_query))
        .route("/filters/department", put(set_department))
        .route("/filters/reset", post(reset_filters))
        .route("/snapshots", get(get_snapshots))
        .route("/dashboard", get(get_dashboard))
        .route("/dashboard/matrix", get(get_matrix))
        .route("/dashboard/ops", get(get_ops))
        .route("/dashboard/config", get(get_config_panel))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind
        .parse()
        .with_context(|| format!("Invalid server.bind address: {}", config.server.bind))?;
    tracing::info!("Starting retail-ops-dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn settings(kind: ProviderKind, base_url: Option<&str>) -> ProviderSettings {
        ProviderSettings {
            kind,
            latency_ms: 0,
            base_url: base_url.map(str::to_string),
            cache_ttl_secs: 60,
        }
    }

    #[test]
    fn test_http_provider_requires_base_url() {
        assert!(build_provider(&settings(ProviderKind::Http, None)).is_err());
        assert!(build_provider(&settings(ProviderKind::Http, Some("http://localhost:9000"))).is_ok());
    }

    #[test]
    fn test_mock_provider_latency_from_settings() {
        let s = settings(ProviderKind::Mock, None);
        assert_eq!(s.latency(), Duration::ZERO);
        assert!(build_provider(&s).is_ok());
    }
}
