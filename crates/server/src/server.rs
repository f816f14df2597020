use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tokio::sync::RwLock;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use std::{any::Any, sync::Arc};

use crate::{ServerError, health, summary, transactions};
use engine::Engine;

/// Shared handler state.
///
/// The engine is single-writer: add/remove/reset take the write lock, every
/// read takes the read lock, so a listing and its count never disagree.
#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<RwLock<Engine>>,
}

impl ServerState {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine: Arc::new(RwLock::new(engine)),
        }
    }
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    ServerError::Internal(format!("handler panicked: {detail}")).into_response()
}

fn api() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health::get))
        .route(
            "/transactions",
            get(transactions::list).post(transactions::create),
        )
        .route("/transactions/{id}", delete(transactions::remove))
        .route("/summary", get(summary::get_summary))
        .route("/report", get(summary::get_report))
        .route("/breakdown", get(summary::get_breakdown))
        .route("/savings-rate", get(summary::get_savings_rate))
        .route("/reset", post(transactions::reset))
}

pub fn router(engine: Engine) -> Router {
    Router::new()
        .nest("/api", api())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ServerState::new(engine))
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
