use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::ProductResult;
use crate::models::{Product, ProductId};

/// Repository trait for Product persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert when `product.id` is unset, otherwise overwrite the stored row.
    /// Returns the stored product with its id.
    async fn save(&self, product: Product) -> ProductResult<Product>;

    /// Get a product by ID
    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>>;

    /// All products, ordered by id
    async fn find_all(&self) -> ProductResult<Vec<Product>>;

    async fn exists_by_id(&self, id: ProductId) -> ProductResult<bool>;

    /// Delete a product by ID; deleting a missing id is a no-op
    async fn delete_by_id(&self, id: ProductId) -> ProductResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    last_id: ProductId,
    products: BTreeMap<ProductId, Product>,
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, mut product: Product) -> ProductResult<Product> {
        let mut store = self.store.write().await;

        let id = match product.id {
            Some(id) => {
                store.last_id = store.last_id.max(id);
                tracing::info!(product_id = id, "Updated product");
                id
            }
            None => {
                store.last_id += 1;
                tracing::info!(product_id = store.last_id, "Created product");
                store.last_id
            }
        };

        product.id = Some(id);
        store.products.insert(id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: ProductId) -> ProductResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn find_all(&self) -> ProductResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: ProductId) -> ProductResult<bool> {
        let store = self.store.read().await;
        Ok(store.products.contains_key(&id))
    }

    async fn delete_by_id(&self, id: ProductId) -> ProductResult<()> {
        let mut store = self.store.write().await;

        if store.products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}
