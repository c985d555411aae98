use rust_decimal::Decimal;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::Product;

/// Scale of the `preco` column
const PRICE_SCALE: u32 = 2;

/// Sea-ORM Entity for the `produtos` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "produtos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "nome")]
    pub name: String,
    pub ncm: String,
    #[sea_orm(column_name = "descricao_ncm")]
    pub ncm_description: Option<String>,
    #[sea_orm(column_name = "preco", column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
    #[sea_orm(column_name = "quantidade")]
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// SQLite hands decimals back through f64; rounding restores the column scale.
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            ncm: model.ncm,
            ncm_description: model.ncm_description,
            price: model.price.round_dp(PRICE_SCALE),
            quantity: model.quantity,
        }
    }
}

// Leaving the key unset lets the store assign it on insert.
impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        ActiveModel {
            id: product.id.map_or(NotSet, Set),
            name: Set(product.name),
            ncm: Set(product.ncm),
            ncm_description: Set(product.ncm_description),
            price: Set(product.price),
            quantity: Set(product.quantity),
        }
    }
}
