//! Conversions between the wire shapes and the entity.
//!
//! Both functions assume their input already passed validation or came from the store.

use crate::models::{Product, ProductRequest, ProductResponse};

/// Builds an unsaved entity from a request payload
pub fn to_entity(request: ProductRequest) -> Product {
    Product {
        id: None,
        name: request.name.unwrap_or_default(),
        ncm: request.ncm.unwrap_or_default(),
        ncm_description: request.ncm_description,
        price: request.price.unwrap_or_default(),
        quantity: request.quantity.unwrap_or_default(),
    }
}

pub fn to_response(product: Product) -> ProductResponse {
    ProductResponse {
        id: product.id,
        name: product.name,
        ncm: product.ncm,
        ncm_description: product.ncm_description,
        price: product.price,
        quantity: product.quantity,
    }
}
