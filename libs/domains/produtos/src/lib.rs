//! Produtos Domain
//!
//! Product catalogue records: create, list, fetch, replace and delete.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, ValidatedJson runs the field rules
//! └──────┬──────┘
//!        │  mapper (request → entity, entity → response)
//! ┌──────▼──────┐
//! │   Service   │  ← Validation, existence checks, NotFound
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Trait + in-memory and SQL implementations
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, request/response shapes
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_produtos::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = axum::Router::new().nest(handlers::BASE_PATH, handlers::router(service));
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod repository;
pub mod service;
pub mod sql;
pub mod validation;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::{ApiDoc, BASE_PATH};
pub use models::{Product, ProductId, ProductRequest, ProductResponse};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
pub use sql::SqlProductRepository;
