pub mod health;

use axum::{
    handler::Handler,
    routing::{get, post, MethodRouter},
    Router,
};

use crate::errors::AppError;
use crate::sequence::handlers;
use crate::state::AppState;

async fn method_not_allowed() -> Result<(), AppError> {
    Err(AppError::InvalidMethod)
}

/// POST-only method router. Other verbs get the structured `INVALID_METHOD`
/// body instead of Axum's bare 405.
fn post_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    post(handler).fallback(method_not_allowed)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/sequence", post_only(handlers::handle_sequence))
        .route(
            "/api/v1/sequence/tailored",
            post_only(handlers::handle_tailored_sequence),
        )
        .route(
            "/api/v1/sequence/scheduled",
            post_only(handlers::handle_scheduled_sequence),
        )
        .route("/api/v1/email", post_only(handlers::handle_single_email))
        .with_state(state)
}
