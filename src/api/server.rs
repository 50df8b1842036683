use axum::{Router, routing::get};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::handlers;
use crate::config::{Mode, ServerConfig};
use crate::error::ServerError;

#[derive(Clone)]
pub struct AppState {
    pub mode: Mode,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/time", get(handlers::current_time))
        .route("/random", get(handlers::random))
        .route("/user", get(handlers::user))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    if config.mode == Mode::Vulnerable {
        warn!("serving the vulnerable variant, /user is open to SQL injection");
    }

    let state = Arc::new(AppState { mode: config.mode });
    let app = router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr.as_str()).await.map_err(|source| ServerError::Bind {
        addr: addr.clone(),
        source,
    })?;

    info!(%addr, mode = %config.mode, "server running");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
