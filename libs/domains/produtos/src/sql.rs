use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::{Product, ProductId},
    repository::ProductRepository,
};

/// SeaORM-backed repository; works against SQLite and PostgreSQL alike
#[derive(Clone)]
pub struct SqlProductRepository {
    db: DatabaseConnection,
}

impl SqlProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SqlProductRepository {
    async fn save(&self, product: Product) -> ProductResult<Product> {
        let id = product.id;
        let active_model: entity::ActiveModel = product.into();

        let model = match id {
            None => {
                let model = active_model.insert(&self.db).await?;
                tracing::info!(product_id = model.id, "Created product");
                model
            }
            Some(id) => {
                let model = active_model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated => ProductError::NotFound(id),
                    other => ProductError::Database(other),
                })?;
                tracing::info!(product_id = id, "Updated product");
                model
            }
        };

        Ok(model.into())
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: ProductId) -> ProductResult<bool> {
        let count = entity::Entity::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    async fn delete_by_id(&self, id: ProductId) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}
