#![forbid(unsafe_code)]

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;

mod config;
mod http;
mod middleware;
mod store;

pub use config::{validate_startup_config_contract, ApiConfig};
pub use store::fake::FakeStore;
pub use store::redis_backend::RedisDocumentStore;
pub use store::{DocumentStore, StoreError};

pub const CRATE_NAME: &str = "folio-server";

/// Routes advertised by the API 404 fallback.
pub const KNOWN_API_ENDPOINTS: [&str; 4] = [
    "/api/health",
    "/api/portfolio",
    "/api/contact",
    "/api/admin/contacts",
];

#[derive(Clone)]
pub struct AppState {
    pub store: Option<Arc<dyn DocumentStore>>,
    pub api: ApiConfig,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Option<Arc<dyn DocumentStore>>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }

    /// The store handle, but only when the connection currently answers.
    /// Liveness is asked of the backend per request rather than cached in
    /// process-wide state, so tests can flip it deterministically.
    pub(crate) async fn live_store(&self) -> Option<Arc<dyn DocumentStore>> {
        match &self.store {
            Some(store) if store.is_live().await => Some(Arc::clone(store)),
            _ => None,
        }
    }

    pub(crate) async fn database_status(&self) -> &'static str {
        if self.live_store().await.is_some() {
            "connected"
        } else {
            "disconnected"
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::root_handler))
        .route("/api/health", get(http::handlers::health_handler))
        .route("/api/portfolio", get(http::handlers::portfolio_handler))
        .route(
            "/api/contact",
            get(http::handlers::contact_info_handler).post(http::handlers::submit_contact_handler),
        )
        .route(
            "/api/admin/contacts",
            get(http::handlers::admin_contacts_handler),
        )
        .fallback(http::handlers::not_found_handler)
        .layer(from_fn_with_state(state.clone(), middleware::cors_middleware))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::timeout_middleware,
        ))
        .layer(DefaultBodyLimit::max(state.api.max_body_bytes))
        .with_state(state)
}

#[cfg(test)]
mod state_tests {
    use super::*;

    #[tokio::test]
    async fn unconfigured_store_is_never_live() {
        let state = AppState::new(None);
        assert!(state.live_store().await.is_none());
        assert_eq!(state.database_status().await, "disconnected");
    }

    #[tokio::test]
    async fn store_liveness_follows_the_connection_flag() {
        let store = Arc::new(FakeStore::default());
        let state = AppState::new(Some(Arc::clone(&store) as Arc<dyn DocumentStore>));
        assert_eq!(state.database_status().await, "connected");

        store.set_live(false);
        assert_eq!(state.database_status().await, "disconnected");

        store.set_live(true);
        assert!(state.live_store().await.is_some());
    }
}
