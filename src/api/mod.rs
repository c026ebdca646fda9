mod handlers;
mod models;

use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::AppState;

pub use handlers::{method_not_allowed, not_found, solve};
pub use models::{ErrorResponse, SolveRequest, SolveResponse};

pub const SOLVE_PATH: &str = "/api/solve";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            SOLVE_PATH,
            post(solve)
                .fallback(method_not_allowed)
                .layer(DefaultBodyLimit::disable()),
        )
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(handlers::panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
