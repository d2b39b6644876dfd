//! PostgreSQL repository implementation

use async_trait::async_trait;
use plaza_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::entities::Product;
use crate::domain::enums::Category;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;

use super::rows::ProductRow;

const SELECT_PRODUCT: &str = r#"
    SELECT id, name, description, price, available, category
    FROM products
"#;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn collect(rows: Vec<ProductRow>) -> AppResult<Vec<Product>> {
        rows.into_iter().map(ProductRow::into_product).collect()
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: &Product) -> AppResult<Product> {
        if product.id().is_some() {
            return Err(AppError::validation(
                "Cannot create a product that already has an id".to_string(),
            ));
        }

        let id = ProductId::new();
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, price, available, category)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id.0)
        .bind(product.name())
        .bind(product.description())
        .bind(product.price())
        .bind(product.available())
        .bind(i16::from(product.category()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("保存产品失败: {}", e)))?;

        Ok(product.clone().with_id(id))
    }

    async fn update(&self, product: &Product) -> AppResult<Product> {
        let id = product.id().ok_or_else(|| {
            AppError::validation("Cannot update a product without an id".to_string())
        })?;

        let result = sqlx::query(
            r#"
            UPDATE products SET
                name = $1,
                description = $2,
                price = $3,
                available = $4,
                category = $5
            WHERE id = $6
            "#,
        )
        .bind(product.name())
        .bind(product.description())
        .bind(product.price())
        .bind(product.available())
        .bind(i16::from(product.category()))
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("更新产品失败: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!(
                "product with id [{}] was not found",
                id
            )));
        }

        Ok(product.clone())
    }

    async fn delete(&self, id: &ProductId) -> AppResult<()> {
        // 幂等删除：不检查影响行数
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("删除产品失败: {}", e)))?;

        Ok(())
    }

    async fn find(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE id = $1", SELECT_PRODUCT))
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("查询产品失败: {}", e)))?;

        row.map(ProductRow::into_product).transpose()
    }

    async fn all(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(SELECT_PRODUCT)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("查询产品失败: {}", e)))?;

        Self::collect(rows)
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE name = $1", SELECT_PRODUCT))
            .bind(name)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("按名称查询产品失败: {}", e)))?;

        Self::collect(rows)
    }

    async fn find_by_category(&self, category: Category) -> AppResult<Vec<Product>> {
        let rows =
            sqlx::query_as::<_, ProductRow>(&format!("{} WHERE category = $1", SELECT_PRODUCT))
                .bind(i16::from(category))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("按分类查询产品失败: {}", e)))?;

        Self::collect(rows)
    }

    async fn find_by_availability(&self, available: bool) -> AppResult<Vec<Product>> {
        let rows =
            sqlx::query_as::<_, ProductRow>(&format!("{} WHERE available = $1", SELECT_PRODUCT))
                .bind(available)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("按可售状态查询产品失败: {}", e)))?;

        Self::collect(rows)
    }

    async fn find_by_price(&self, price: Decimal) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!("{} WHERE price = $1", SELECT_PRODUCT))
            .bind(price)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("按价格查询产品失败: {}", e)))?;

        Self::collect(rows)
    }
}
