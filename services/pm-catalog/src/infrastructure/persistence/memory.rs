//! 内存仓储实现（用于测试和本地开发）

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use plaza_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::enums::Category;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

/// 内存产品仓储
///
/// 与 PostgreSQL 实现遵循同一契约，锁不跨 await 持有
#[derive(Default)]
pub struct MemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<std::sync::RwLockReadGuard<'_, HashMap<Uuid, Product>>> {
        self.products
            .read()
            .map_err(|_| AppError::internal("Product store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Product>>> {
        self.products
            .write()
            .map_err(|_| AppError::internal("Product store lock poisoned".to_string()))
    }

    fn filter(&self, predicate: impl Fn(&Product) -> bool) -> AppResult<Vec<Product>> {
        Ok(self
            .read()?
            .values()
            .filter(|p| predicate(*p))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn create(&self, product: &Product) -> AppResult<Product> {
        if product.id().is_some() {
            return Err(AppError::validation(
                "Cannot create a product that already has an id".to_string(),
            ));
        }

        let id = ProductId::new();
        let persisted = product.clone().with_id(id.clone());
        self.write()?.insert(id.0, persisted.clone());
        Ok(persisted)
    }

    async fn update(&self, product: &Product) -> AppResult<Product> {
        let id = product.id().ok_or_else(|| {
            AppError::validation("Cannot update a product without an id".to_string())
        })?;

        let mut products = self.write()?;
        if !products.contains_key(&id.0) {
            return Err(AppError::not_found(format!(
                "product with id [{}] was not found",
                id
            )));
        }
        products.insert(id.0, product.clone());
        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        self.write()?.remove(&id.0);
        Ok(())
    }

    async fn find(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.read()?.get(&id.0).cloned())
    }

    async fn all(&self) -> AppResult<Vec<Product>> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        self.filter(|p| p.name() == name)
    }

    async fn find_by_category(&self, category: Category) -> AppResult<Vec<Product>> {
        self.filter(|p| p.category() == category)
    }

    async fn find_by_availability(&self, available: bool) -> AppResult<Vec<Product>> {
        self.filter(|p| p.available() == available)
    }

    async fn find_by_price(&self, price: Decimal) -> AppResult<Vec<Product>> {
        self.filter(|p| p.price() == price)
    }
}
