//! API routes module

pub mod health;
pub mod produtos;

use axum::Router;
use domain_produtos::BASE_PATH;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest(BASE_PATH, produtos::router(state))
        .merge(health::router(state.clone()))
}
