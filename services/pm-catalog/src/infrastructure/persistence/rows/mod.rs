//! 数据库行类型

use plaza_errors::AppResult;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::entities::Product;
use crate::domain::enums::Category;
use crate::domain::value_objects::ProductId;

/// products 表行
#[derive(Debug, sqlx::FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: i16,
}

impl ProductRow {
    /// 转换为领域实体，分类代码越界时报错
    pub fn into_product(self) -> AppResult<Product> {
        let category = Category::try_from(self.category)?;
        Ok(Product::from_parts(
            ProductId::from_uuid(self.id),
            self.name,
            self.description,
            self.price,
            self.available,
            category,
        ))
    }
}
