use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use anyhow::{Context, Result};
use std::{
    net::SocketAddr,
    sync::{Arc, atomic::{AtomicBool, Ordering}},
};
use tokio::sync::Semaphore;
use tracing::{info, warn, error};
use crate::consts::SplineConfig;
use crate::utils::{interp::interpolate, parser::target_parser};
#[derive(Clone)]
pub struct AppState {
    server_ready: Arc<AtomicBool>,
    concurrency_semaphore: Arc<Semaphore>,
    config: Arc<SplineConfig>,
}
impl AppState {
    pub fn new(config: SplineConfig) -> Self {
        Self {
            server_ready: Arc::new(AtomicBool::new(false)),
            concurrency_semaphore: Arc::new(Semaphore::new(config.max_workers)),
            config: Arc::new(config),
        }
    }
}
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.server_ready.load(Ordering::SeqCst);
    let (status, msg) = if ready {
        (StatusCode::OK, "Server Ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Server Initializing")
    };
    info!("{}", msg);
    (status, msg.to_string())
}
async fn handle_post(State(state): State<AppState>, body: String) -> (StatusCode, String) {
    if !state.server_ready.load(Ordering::SeqCst) {
        warn!("POST arrived but server not ready.");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "Server initializing, please retry.".to_string(),
        );
    }
    let target = match target_parser(&body) {
        Ok(t) => t,
        Err(e) => {
            warn!("Rejected body {:?}: {:#}", body, e);
            return (StatusCode::BAD_REQUEST, format!("{:#}", e));
        }
    };
    let _permit = match state.concurrency_semaphore.acquire().await {
        Ok(permit) => permit,
        Err(e) => {
            error!("Worker pool closed: {}", e);
            return (StatusCode::SERVICE_UNAVAILABLE, "Server shutting down.".to_string());
        }
    };
    let config = state.config.clone();
    let outcome = tokio::task::spawn_blocking(move || {
        interpolate(&config.x_vals, &config.y_vals, target)
    })
    .await;
    match outcome {
        Ok(Ok(value)) => {
            info!("x = {} -> {}", target, value);
            (StatusCode::OK, format!("{:.*}", state.config.precision, value))
        }
        Ok(Err(e)) if e.is_input_error() => {
            warn!("x = {} rejected: {}", target, e);
            (StatusCode::BAD_REQUEST, e.to_string())
        }
        Ok(Err(e)) => {
            error!("x = {} failed: {}", target, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error processing: Internal error.".to_string())
        }
        Err(e) => {
            error!("Evaluation task for x = {} aborted: {}", target, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error processing: Internal error.".to_string())
        }
    }
}
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check).post(handle_post))
        .with_state(state)
}
pub async fn run(config: SplineConfig) -> Result<()> {
    let port = config.port;
    info!("Starting server (max_workers={})...", config.max_workers);
    let app_state = AppState::new(config);
    let app = router(app_state.clone());
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Bind {}", addr))?;
    app_state.server_ready.store(true, Ordering::SeqCst);
    info!(
        "Listening on {}; axum + spline-workers={}",
        listener.local_addr()?,
        app_state.config.max_workers
    );
    axum::serve(listener, app).await.context("Serve HTTP")?;
    Ok(())
}
