use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse, ServiceUnavailableResponse,
    },
    IdPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ProductResult;
use crate::mapper;
use crate::models::{ProductRequest, ProductResponse};
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// Mount point of [`router`]; also used to build `Location` headers
pub const BASE_PATH: &str = "/api/produtos";

const TAG: &str = "Produtos";

/// OpenAPI documentation for the Produtos API
#[derive(OpenApi)]
#[openapi(
    paths(create_product, list_products, get_product, update_product, delete_product),
    components(
        schemas(ProductRequest, ProductResponse),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse,
            ServiceUnavailableResponse
        )
    ),
    tags(
        (name = TAG, description = "Cadastro de produtos")
    )
)]
pub struct ApiDoc;

/// Create the product router; mount it at [`BASE_PATH`]
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(Arc::new(service))
}

/// Criar um novo produto
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Produto criado com sucesso", body = ProductResponse,
            headers(("Location" = String, description = "URL do produto criado"))),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> ProductResult<impl IntoResponse> {
    let product = service.create(mapper::to_entity(request)).await?;
    let response = mapper::to_response(product);

    let location = match response.id {
        Some(id) => format!("{BASE_PATH}/{id}"),
        None => BASE_PATH.to_string(),
    };

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

/// Listar todos os produtos
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    responses(
        (status = 200, description = "Lista de produtos retornada com sucesso", body = Vec<ProductResponse>),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
) -> ProductResult<Json<Vec<ProductResponse>>> {
    let products = service.list().await?;
    Ok(Json(products.into_iter().map(mapper::to_response).collect()))
}

/// Buscar produto por ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Código identificador do produto a ser buscado")
    ),
    responses(
        (status = 200, description = "Produto encontrado", body = ProductResponse),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<Json<ProductResponse>> {
    let product = service.get_by_id(id).await?;
    Ok(Json(mapper::to_response(product)))
}

/// Atualizar um produto existente
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Código identificador do produto a ser atualizado")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Produto atualizado com sucesso", body = ProductResponse),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ProductRequest>,
) -> ProductResult<Json<ProductResponse>> {
    let mut product = mapper::to_entity(request);
    product.id = Some(id);

    let updated = service.update(product).await?;
    Ok(Json(mapper::to_response(updated)))
}

/// Deletar um produto
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(
        ("id" = i64, Path, description = "Código identificador do produto a ser deletado")
    ),
    responses(
        (status = 204, description = "Produto deletado com sucesso"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse),
        (status = 503, response = ServiceUnavailableResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    IdPath(id): IdPath,
) -> ProductResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
