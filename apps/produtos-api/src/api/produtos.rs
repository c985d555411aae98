//! Produtos routes

use axum::Router;
use domain_produtos::{ProductService, SqlProductRepository, handlers};

use crate::state::AppState;

/// Product CRUD backed by the configured SQL store
pub fn router(state: &AppState) -> Router {
    let repository = SqlProductRepository::new(state.db.clone());
    let service = ProductService::new(repository);
    handlers::router(service)
}
