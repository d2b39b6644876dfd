//! 产品聚合根

use plaza_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::Category;
use crate::domain::value_objects::ProductId;

/// 产品实体
///
/// 目录服务的核心实体。id 在持久化之前为 None，由仓储在创建时分配，
/// 分配后不可变。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// 产品 ID（未持久化时为 None）
    id: Option<ProductId>,
    /// 产品名称
    name: String,
    /// 产品描述
    description: String,
    /// 价格（精确十进制，非负）
    price: Decimal,
    /// 是否可售
    available: bool,
    /// 产品分类
    category: Category,
}

/// 反序列化用的原始负载
///
/// 不包含 id：id 由服务端分配，负载中出现的 id 会被忽略
#[derive(Debug, Deserialize)]
struct ProductPayload {
    name: String,
    description: String,
    price: Decimal,
    available: bool,
    category: Category,
}

impl Product {
    /// 创建瞬态产品（尚未持久化，id 为 None）
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> AppResult<Self> {
        if price.is_sign_negative() {
            return Err(AppError::validation(format!(
                "Price must be non-negative, got {}",
                price
            )));
        }
        Ok(Self {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        })
    }

    /// 从各部分构建产品（用于从数据库加载）
    pub fn from_parts(
        id: ProductId,
        name: String,
        description: String,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            description,
            price,
            available,
            category,
        }
    }

    /// 将持久化 ID 附加到瞬态实体
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = Some(id);
        self
    }

    // ========== Getters ==========

    pub fn id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn category(&self) -> Category {
        self.category
    }

    // ========== 序列化契约 ==========

    /// 从无类型键值负载构建瞬态产品
    ///
    /// 缺少必填键、类型错误（如 available 不是布尔值）或分类名称
    /// 不在封闭集合内时返回校验错误
    pub fn deserialize(value: serde_json::Value) -> AppResult<Self> {
        let payload: ProductPayload = serde_json::from_value(value)
            .map_err(|e| AppError::validation(format!("Invalid product payload: {}", e)))?;
        Self::new(
            payload.name,
            payload.description,
            payload.price,
            payload.available,
            payload.category,
        )
    }

    /// 转换为无类型键值负载
    ///
    /// 暴露所有字段；分类按名称渲染，瞬态产品的 id 为 null
    pub fn serialize(&self) -> AppResult<serde_json::Value> {
        serde_json::to_value(self)
            .map_err(|e| AppError::internal(format!("Failed to serialize product: {}", e)))
    }
}
