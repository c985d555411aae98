use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{Product, ProductId};
use crate::repository::ProductRepository;

/// Service layer for Product business logic
///
/// Validation runs before any repository call, so an invalid product never reaches the store.
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new product; any id on the input is discarded
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, mut product: Product) -> ProductResult<Product> {
        product.validate()?;
        product.id = None;

        self.repository.save(product).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ProductResult<Vec<Product>> {
        self.repository.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: ProductId) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    /// Replace every field of an existing product
    #[instrument(skip(self, product), fields(id = ?product.id))]
    pub async fn update(&self, product: Product) -> ProductResult<Product> {
        let id = product.id.ok_or(ProductError::MissingId)?;
        product.validate()?;

        if !self.repository.exists_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }

        self.repository.save(product).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> ProductResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{InMemoryProductRepository, MockProductRepository};
    use mockall::predicate::eq;
    use rust_decimal::Decimal;
    use sea_orm::DbErr;

    fn notebook() -> Product {
        Product {
            id: None,
            name: "Notebook Dell".to_string(),
            ncm: "84713012".to_string(),
            ncm_description: Some("Notebook com processador Intel Core i7".to_string()),
            price: Decimal::new(299999, 2),
            quantity: 10,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_round_trips() {
        let service = ProductService::new(InMemoryProductRepository::new());

        let created = service.create(notebook()).await.unwrap();
        let id = created.id.expect("id assigned");
        let fetched = service.get_by_id(id).await.unwrap();

        assert_eq!(fetched, Product { id: Some(id), ..notebook() });
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_save()
            .withf(|product| product.id.is_none())
            .times(1)
            .returning(|product| Ok(Product { id: Some(1), ..product }));

        let service = ProductService::new(mock_repo);
        let created = service
            .create(Product { id: Some(99), ..notebook() })
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
    }

    #[tokio::test]
    async fn test_create_invalid_never_reaches_repository() {
        let invalid = [
            Product { name: "ab".to_string(), ..notebook() },
            Product { ncm: "123".to_string(), ..notebook() },
            Product { price: Decimal::ZERO, ..notebook() },
            Product { quantity: -1, ..notebook() },
        ];

        for product in invalid {
            // No expectations: any repository call panics
            let service = ProductService::new(MockProductRepository::new());
            let result = service.create(product).await;
            assert!(matches!(result, Err(ProductError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(404))
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let result = service.get_by_id(404).await;

        assert!(matches!(result, Err(ProductError::NotFound(404))));
    }

    #[tokio::test]
    async fn test_update_missing_product_leaves_store_untouched() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_exists_by_id()
            .with(eq(7))
            .returning(|_| Ok(false));
        mock_repo.expect_save().never();

        let service = ProductService::new(mock_repo);
        let result = service.update(Product { id: Some(7), ..notebook() }).await;

        assert!(matches!(result, Err(ProductError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_update_requires_id() {
        let service = ProductService::new(MockProductRepository::new());
        let result = service.update(notebook()).await;

        assert!(matches!(result, Err(ProductError::MissingId)));
    }

    #[tokio::test]
    async fn test_update_validates_before_existence_check() {
        let service = ProductService::new(MockProductRepository::new());
        let result = service
            .update(Product { id: Some(1), quantity: -5, ..notebook() })
            .await;

        assert!(matches!(result, Err(ProductError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields_keeping_id() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let created = service.create(notebook()).await.unwrap();

        let replacement = Product {
            id: created.id,
            name: "Notebook Lenovo".to_string(),
            ncm: "84713019".to_string(),
            ncm_description: None,
            price: Decimal::new(189990, 2),
            quantity: 4,
        };
        service.update(replacement.clone()).await.unwrap();

        let fetched = service.get_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(fetched, replacement);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = ProductService::new(InMemoryProductRepository::new());
        let id = service.create(notebook()).await.unwrap().id.unwrap();

        service.delete(id).await.unwrap();

        assert!(matches!(
            service.get_by_id(id).await,
            Err(ProductError::NotFound(_))
        ));
        assert!(matches!(
            service.delete(id).await,
            Err(ProductError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_returns_every_created_product() {
        let service = ProductService::new(InMemoryProductRepository::new());
        for quantity in 0..3 {
            service
                .create(Product { quantity, ..notebook() })
                .await
                .unwrap();
        }

        let products = service.list().await.unwrap();
        assert_eq!(products.len(), 3);
        for product in products {
            let id = product.id.unwrap();
            assert_eq!(service.get_by_id(id).await.unwrap(), product);
        }
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_all()
            .returning(|| Err(DbErr::Custom("database is locked".to_string()).into()));

        let service = ProductService::new(mock_repo);
        let result = service.list().await;

        assert!(matches!(result, Err(ProductError::Database(_))));
    }
}
