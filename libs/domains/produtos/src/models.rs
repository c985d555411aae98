use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::validation::{self, ProductFields};

/// Store-assigned surrogate key
pub type ProductId = i64;

/// Product entity, the persisted shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    /// Assigned by the store on first save
    pub id: Option<ProductId>,
    pub name: String,
    /// Tariff classification code (Nomenclatura Comum do Mercosul), 8 digits
    pub ncm: String,
    pub ncm_description: Option<String>,
    pub price: Decimal,
    pub quantity: i32,
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validation::validate_fields(&ProductFields {
            name: Some(&self.name),
            ncm: Some(&self.ncm),
            ncm_description: self.ncm_description.as_deref(),
            price: Some(self.price),
            quantity: Some(self.quantity),
        })
    }
}

/// Payload for creating or replacing a product.
///
/// Every field is optional at the wire level so that a missing field is reported as a
/// validation message instead of a deserialization failure. Any `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRequest {
    #[serde(rename = "nome")]
    #[schema(example = "Notebook Dell", min_length = 3, max_length = 100)]
    pub name: Option<String>,

    #[schema(example = "84713012", pattern = "^[0-9]{8}$")]
    pub ncm: Option<String>,

    #[serde(rename = "descricaoNcm")]
    #[schema(example = "Notebook com processador Intel Core i7", max_length = 255)]
    pub ncm_description: Option<String>,

    #[serde(rename = "preco")]
    #[schema(example = 2999.99, minimum = 0.01, maximum = 999999999999.99, multiple_of = 0.01)]
    pub price: Option<Decimal>,

    #[serde(rename = "quantidade")]
    #[schema(example = 10, minimum = 0)]
    pub quantity: Option<i32>,
}

impl Validate for ProductRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        validation::validate_fields(&ProductFields {
            name: self.name.as_deref(),
            ncm: self.ncm.as_deref(),
            ncm_description: self.ncm_description.as_deref(),
            price: self.price,
            quantity: self.quantity,
        })
    }
}

/// Product as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = 1)]
    pub id: Option<ProductId>,

    #[serde(rename = "nome")]
    #[schema(example = "Notebook Dell")]
    pub name: String,

    #[schema(example = "84713012")]
    pub ncm: String,

    #[serde(rename = "descricaoNcm")]
    #[schema(example = "Notebook com processador Intel Core i7")]
    pub ncm_description: Option<String>,

    /// Serialized as a JSON number
    #[serde(rename = "preco", with = "rust_decimal::serde::float")]
    #[schema(example = 2999.99)]
    pub price: Decimal,

    #[serde(rename = "quantidade")]
    #[schema(example = 10)]
    pub quantity: i32,
}
