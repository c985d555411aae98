//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Produtos API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "API de Produtos - Grupo Casas Bahia",
        version = "1.0",
        description = "CRUD do cadastro de produtos"
    ),
    servers(
        (url = "http://localhost:8080", description = "Servidor local")
    ),
    nest(
        (path = "/api/produtos", api = domain_produtos::ApiDoc)
    )
)]
pub struct ApiDoc;
