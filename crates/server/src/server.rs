use axum::{
    Router,
    routing::{delete, get},
};

use std::sync::Arc;

use crate::{costs, export, incomes, summary};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Builds the application router. Public so integration tests can drive the
/// router directly without binding a socket.
pub fn app(engine: Engine) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    Router::new()
        .route("/api/incomes", get(incomes::list).post(incomes::create))
        .route("/api/incomes/download", get(export::incomes))
        .route("/api/incomes/{id}", delete(incomes::remove))
        .route("/api/costs", get(costs::list).post(costs::create))
        .route("/api/costs/download", get(export::costs))
        .route("/api/costs/{id}", delete(costs::remove))
        .route("/api/summary", get(summary::get_summary))
        .route("/api/summary/download", get(export::summary))
        .with_state(state)
}

pub async fn run(engine: Engine) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(engine, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(engine)).await
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
