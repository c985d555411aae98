//! Integration tests for the Produtos domain
//!
//! These tests run the SQL repository against a migrated in-memory SQLite
//! database to ensure:
//! - Inserts assign increasing ids
//! - Column mapping survives a round trip
//! - Updates and deletes touch only the targeted row

use domain_produtos::*;
use rust_decimal::Decimal;
use test_utils::{TestDataBuilder, TestDatabase, assertions::*};

fn product(builder: &TestDataBuilder, suffix: &str) -> Product {
    Product {
        id: None,
        name: builder.name("produto", suffix),
        ncm: builder.ncm(),
        ncm_description: Some("Máquinas automáticas para processamento de dados".to_string()),
        price: Decimal::new(123456, 2),
        quantity: 3,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_save_and_find_product() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("save_and_find");

    let input = product(&builder, "main");
    let created = repo.save(input.clone()).await.unwrap();
    let id = assert_some(created.id, "created product id");

    let found = repo.find_by_id(id).await.unwrap();
    let found = assert_some(found, "product should exist");

    assert_eq!(found, Product { id: Some(id), ..input });
}

#[tokio::test]
async fn test_ids_increase_across_deletes() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("ids_increase");

    let first = repo.save(product(&builder, "a")).await.unwrap();
    let second = repo.save(product(&builder, "b")).await.unwrap();
    assert_eq!(first.id, Some(1));
    assert_eq!(second.id, Some(2));

    repo.delete_by_id(1).await.unwrap();
    let third = repo.save(product(&builder, "c")).await.unwrap();
    assert_eq!(third.id, Some(3));
}

#[tokio::test]
async fn test_optional_description_round_trips_as_none() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("no_description");

    let input = Product {
        ncm_description: None,
        ..product(&builder, "main")
    };
    let created = repo.save(input).await.unwrap();

    let found = repo.find_by_id(created.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.ncm_description, None);
}

#[tokio::test]
async fn test_update_overwrites_row() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_row");

    let created = repo.save(product(&builder, "before")).await.unwrap();
    let other = repo.save(product(&builder, "other")).await.unwrap();

    let replacement = Product {
        name: builder.name("produto", "after"),
        price: Decimal::new(9990, 2),
        quantity: 0,
        ..created.clone()
    };
    let updated = repo.save(replacement.clone()).await.unwrap();
    assert_eq!(updated, replacement);

    let untouched = repo.find_by_id(other.id.unwrap()).await.unwrap();
    assert_eq!(untouched, Some(other));
}

#[tokio::test]
async fn test_update_missing_row_is_not_found() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("update_missing");

    let result = repo
        .save(Product {
            id: Some(404),
            ..product(&builder, "ghost")
        })
        .await;

    assert!(matches!(result, Err(ProductError::NotFound(404))));
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_exists_and_delete() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("exists_delete");

    let id = repo.save(product(&builder, "main")).await.unwrap().id.unwrap();
    assert!(repo.exists_by_id(id).await.unwrap());

    repo.delete_by_id(id).await.unwrap();

    assert!(!repo.exists_by_id(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());

    // Deleting an absent row is not an error at the store level
    repo.delete_by_id(id).await.unwrap();
}

#[tokio::test]
async fn test_find_all_in_id_order() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("find_all");

    for suffix in ["x", "y", "z"] {
        repo.save(product(&builder, suffix)).await.unwrap();
    }

    let all = repo.find_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|p| p.name.clone()).collect();
    assert_eq!(
        names,
        vec![
            builder.name("produto", "x"),
            builder.name("produto", "y"),
            builder.name("produto", "z"),
        ]
    );
}

#[tokio::test]
async fn test_price_extremes_round_trip_exactly() {
    let db = TestDatabase::new().await;
    let repo = SqlProductRepository::new(db.connection());
    let builder = TestDataBuilder::from_test_name("price_extremes");

    // Largest accepted price, the smallest, and values just off a cent boundary
    let prices = [
        Decimal::new(99_999_999_999_999, 2),
        Decimal::new(1, 2),
        Decimal::new(299_999, 2),
        Decimal::new(2, 2),
        Decimal::new(1_234_567_890_105, 2),
    ];

    for (index, price) in prices.into_iter().enumerate() {
        let input = Product {
            price,
            ..product(&builder, &index.to_string())
        };
        let created = repo.save(input.clone()).await.unwrap();
        let id = assert_some(created.id, "created product id");

        let found = repo.find_by_id(id).await.unwrap();
        let found = assert_some(found, "product should exist");
        assert_eq!(found.price, price, "price {price} changed in storage");
        assert_eq!(found, Product { id: Some(id), ..input });
    }
}

// ============================================================================
// Service over SQL
// ============================================================================

#[tokio::test]
async fn test_service_rejects_invalid_product_without_writing() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(SqlProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_invalid");

    let result = service
        .create(Product {
            ncm: "1234".to_string(),
            ..product(&builder, "main")
        })
        .await;

    assert!(matches!(result, Err(ProductError::Validation(_))));
    assert!(service.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_service_rejects_prices_storage_would_alter() {
    let db = TestDatabase::new().await;
    let service = ProductService::new(SqlProductRepository::new(db.connection()));
    let builder = TestDataBuilder::from_test_name("service_price_digits");

    let prices = [
        // 2999.999 and 0.015 would be rounded to another price
        Decimal::new(2_999_999, 3),
        Decimal::new(15, 3),
        // 1e12 and beyond lose cents through f64
        Decimal::new(100_000_000_000_000, 2),
        Decimal::new(1_234_567_890_123_456_789, 2),
    ];

    for price in prices {
        let result = service
            .create(Product {
                price,
                ..product(&builder, "main")
            })
            .await;

        match result {
            Err(ProductError::Validation(errors)) => {
                let fields = errors.field_errors();
                let preco = assert_some(fields.get("preco"), "preco error");
                assert_eq!(
                    preco[0].message.as_deref(),
                    Some(validation::PRICE_DIGITS),
                    "price {price}"
                );
            }
            other => panic!("expected validation error for {price}, got {other:?}"),
        }
    }

    assert!(service.list().await.unwrap().is_empty());
}
