#![forbid(unsafe_code)]

use folio_server::{
    build_router, validate_startup_config_contract, ApiConfig, AppState, DocumentStore,
    RedisDocumentStore, CRATE_NAME,
};
use std::env;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn env_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| match v.as_str() {
            "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
            "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
            _ => None,
        })
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
}

fn env_duration_ms(name: &str, default_ms: u64) -> Duration {
    Duration::from_millis(env_u64(name, default_ms))
}

fn env_origin_list(name: &str, default: Vec<String>) -> Vec<String> {
    match env::var(name) {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
            .collect(),
        Err(_) => default,
    }
}

fn load_config() -> ApiConfig {
    let defaults = ApiConfig::default();
    let mut contact = defaults.contact;
    if let Ok(v) = env::var("FOLIO_CONTACT_EMAIL") {
        contact.email = v;
    }
    if let Ok(v) = env::var("FOLIO_CONTACT_PHONE") {
        contact.phone = v;
    }
    ApiConfig {
        environment: env::var("FOLIO_ENV").unwrap_or(defaults.environment),
        request_timeout: env_duration_ms("FOLIO_REQUEST_TIMEOUT_MS", 30_000),
        max_body_bytes: env_usize("FOLIO_MAX_BODY_BYTES", defaults.max_body_bytes),
        cors_allowed_origins: env_origin_list(
            "FOLIO_CORS_ALLOWED_ORIGINS",
            defaults.cors_allowed_origins,
        ),
        admin_recent_limit: env_usize("FOLIO_ADMIN_RECENT_LIMIT", defaults.admin_recent_limit),
        store_url: env::var("FOLIO_STORE_URL").ok(),
        store_prefix: env::var("FOLIO_STORE_PREFIX").unwrap_or(defaults.store_prefix),
        store_command_timeout: env_duration_ms("FOLIO_STORE_TIMEOUT_MS", 2000),
        contact,
        log_json: env_bool("FOLIO_LOG_JSON", true),
    }
}

fn init_tracing(log_json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("register SIGTERM");
        let mut sigint = signal(SignalKind::interrupt()).expect("register SIGINT");
        tokio::select! {
            _ = sigterm.recv() => {}
            _ = sigint.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let cfg = load_config();
    init_tracing(cfg.log_json);
    validate_startup_config_contract(&cfg)?;

    let bind_addr = env::var("FOLIO_BIND").unwrap_or_else(|_| "0.0.0.0:5500".to_string());

    // An unset store URL is a valid mode: every profile read serves the
    // fallback document and contact messages are acknowledged unpersisted.
    let store: Option<Arc<dyn DocumentStore>> = match cfg.store_url.as_deref() {
        Some(url) => {
            match RedisDocumentStore::new(url, &cfg.store_prefix, cfg.store_command_timeout) {
                Ok(store) => {
                    info!("document store configured");
                    Some(Arc::new(store) as Arc<dyn DocumentStore>)
                }
                Err(e) => {
                    error!("store connection error: {e}; running in fallback-only mode");
                    None
                }
            }
        }
        None => {
            warn!("FOLIO_STORE_URL not set; running in fallback-only mode");
            None
        }
    };

    let state = AppState::with_config(store, cfg);
    let app = build_router(state.clone());

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("bind failed on {bind_addr}: {e}"))?;
    info!("{CRATE_NAME} listening on {bind_addr}");

    // Shutdown closes the store connection and exits without draining
    // in-flight requests.
    tokio::select! {
        served = axum::serve(listener, app).into_future() => {
            served.map_err(|e| format!("server failed: {e}"))?;
        }
        () = wait_for_shutdown_signal() => {
            info!("shutdown signal received");
            if let Some(store) = state.store.as_ref() {
                store.close().await;
            }
        }
    }
    Ok(())
}
