/// Server setup and initialization
///
/// Wires storage into the HTTP routes and runs the listener. Storage is
/// opened and its schema ensured before anything binds, so a broken database
/// stops startup instead of serving errors.

use crate::{
    api::{create_workout_routes, AppState, ApiError},
    config::Config,
    workout::storage::WorkoutStorage,
};
use anyhow::Result;
use axum::{
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Create the main Axum application with all routes and middleware
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("📋 Initializing workout storage");
    let storage = WorkoutStorage::connect(&config.database.path).await?;

    Ok(build_router(AppState { storage }))
}

/// Mount the workout routes over an already-initialized state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(create_workout_routes().with_state(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Open storage, then bind and serve until the process exits
///
/// Storage comes first: if the database cannot be opened the listener is
/// never bound.
pub async fn start_server(config: Config) -> Result<()> {
    init_tracing();

    let bind_addr = config.bind_addr();
    tracing::info!("Starting workout service (database: {})", config.database.path);
    let app = create_app(config).await?;

    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", bind_addr, e))?;
    tracing::info!("🏋️ Serving workouts on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Human-readable log output on stdout
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .try_init();
}

/// A panicking handler still answers with the usual 500 envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    ApiError::Storage(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
