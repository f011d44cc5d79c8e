use crate::config::{PortalConfig, StoreBackend};
use crate::handlers;
use crate::services::{Assistant, MemoryStore, MongoStore, Store};
use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
    Router, ServiceExt,
};
use service_core::error::AppError;
use service_core::middleware::{metrics::metrics_middleware, tracing::request_id_middleware};
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePathLayer;
use tower_http::trace::TraceLayer;

/// Shared application state. Configuration is loaded once at startup and
/// carried here as a value; nothing global.
#[derive(Clone)]
pub struct AppState {
    pub config: PortalConfig,
    pub store: Arc<dyn Store>,
    pub assistant: Assistant,
}

pub struct Application {
    port: u16,
    server: std::pin::Pin<Box<dyn std::future::Future<Output = std::io::Result<()>> + Send>>,
    state: AppState,
}

impl Application {
    pub async fn build(config: PortalConfig) -> Result<Self, AppError> {
        let store: Arc<dyn Store> = match config.store.backend {
            StoreBackend::Mongo => {
                let store = MongoStore::connect(&config.store.uri, &config.store.database)
                    .await
                    .map_err(|e| {
                        tracing::error!("Failed to connect to MongoDB: {}", e);
                        e
                    })?;
                store.initialize_indexes().await.map_err(|e| {
                    tracing::error!("Failed to initialize database indexes: {}", e);
                    e
                })?;
                Arc::new(store)
            }
            StoreBackend::Memory => {
                tracing::info!("Using in-memory store backend");
                Arc::new(MemoryStore::new())
            }
        };

        let assistant = Assistant::new(&config.llm);

        let state = AppState {
            config: config.clone(),
            store,
            assistant,
        };

        // Business routes live under the /api prefix; infra endpoints at the root.
        let api_router = Router::new()
            .route("/", get(handlers::root))
            .route(
                "/status",
                post(handlers::create_status_check).get(handlers::list_status_checks),
            )
            .route(
                "/demo-requests",
                post(handlers::create_demo_request).get(handlers::list_demo_requests),
            )
            .route("/chat/stream", post(handlers::chat_stream));

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .nest("/api", api_router)
            .with_state(state.clone())
            .layer(from_fn(metrics_middleware))
            .layer(TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .and_then(|value| value.to_str().ok())
                        .unwrap_or("-");

                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                    )
                },
            ))
            .layer(from_fn(request_id_middleware))
            .layer(cors_layer(&config.cors.allowed_origins));

        // A nested router only matches its root at the bare prefix, so strip
        // trailing slashes before routing: `/api/` and `/api` both reach the
        // API root. Must wrap the router, not be a Router layer, to run
        // before route matching.
        let app = NormalizePathLayer::trim_trailing_slash().layer(app);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
            .with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn store(&self) -> Arc<dyn Store> {
        self.state.store.clone()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(
            allowed_origins
                .iter()
                .filter_map(|origin| {
                    origin
                        .parse::<HeaderValue>()
                        .map_err(|e| {
                            tracing::error!("Invalid CORS origin '{}': {}. Skipping.", origin, e);
                        })
                        .ok()
                })
                .collect::<Vec<HeaderValue>>(),
        )
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
