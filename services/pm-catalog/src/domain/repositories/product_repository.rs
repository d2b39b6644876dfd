//! 产品仓储接口

use async_trait::async_trait;
use plaza_errors::AppResult;
use rust_decimal::Decimal;

use crate::domain::entities::Product;
use crate::domain::enums::Category;
use crate::domain::value_objects::ProductId;

/// 产品仓储接口
#[async_trait]
pub trait ProductRepository: Send + Sync {
    // ========== CRUD ==========

    /// 持久化瞬态产品，分配唯一 ID，返回持久化后的实体
    ///
    /// 实体已有 ID 时返回校验错误
    async fn create(&self, product: &Product) -> AppResult<Product>;

    /// 按 ID 更新已存在的产品
    ///
    /// ID 为 None 时返回校验错误，无匹配行时返回 NotFound
    async fn update(&self, product: &Product) -> AppResult<Product>;

    /// 按 ID 删除产品（幂等：不存在不视为错误）
    async fn delete(&self, id: &ProductId) -> AppResult<()>;

    /// 按 ID 查找产品
    async fn find(&self, id: &ProductId) -> AppResult<Option<Product>>;

    // ========== 查询 ==========

    /// 返回所有产品（顺序不保证）
    async fn all(&self) -> AppResult<Vec<Product>>;

    /// 按名称精确匹配（大小写敏感）
    async fn find_by_name(&self, name: &str) -> AppResult<Vec<Product>>;

    /// 按分类精确匹配
    async fn find_by_category(&self, category: Category) -> AppResult<Vec<Product>>;

    /// 按可售标记匹配
    async fn find_by_availability(&self, available: bool) -> AppResult<Vec<Product>>;

    /// 按价格精确匹配（十进制比较）
    async fn find_by_price(&self, price: Decimal) -> AppResult<Vec<Product>>;
}
