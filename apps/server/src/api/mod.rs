//! HTTP surface: per-domain routers assembled under `/api/v1`.

mod budgets;
mod categories;
mod goals;
mod health;
mod spending;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(budgets::router())
        .merge(categories::router())
        .merge(goals::router())
        .merge(spending::router())
        .merge(health::router());

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .with_state(state)
}
