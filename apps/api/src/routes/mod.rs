pub mod health;

use axum::{routing::get, Router};

use crate::state::AppState;
use crate::web::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/",
            get(handlers::handle_home).post(handlers::handle_analyze),
        )
        .with_state(state)
}
