//! Shared test fixtures for core unit tests.

use async_trait::async_trait;
use chrono::Utc;
use mockall::mock;

use crate::domain::{NewProduct, Product};
use crate::ports::{ProductRepository, RepositoryError};

mock! {
    pub Repo {}

    #[async_trait]
    impl ProductRepository for Repo {
        async fn find_by_name(&self, name: &str) -> Result<Option<Product>, RepositoryError>;
        async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn insert(&self, product: &NewProduct) -> Result<Product, RepositoryError>;
        async fn update_price(&self, name: &str, price: f64) -> Result<Product, RepositoryError>;
        async fn delete(&self, name: &str) -> Result<Product, RepositoryError>;
        async fn list_by_price(&self, min: f64, max: f64) -> Result<Vec<Product>, RepositoryError>;
        async fn count(&self) -> Result<u64, RepositoryError>;
    }
}

pub fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}
