//! 产品分类枚举

use plaza_errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 产品分类（封闭集合）
///
/// 序列化时使用大写名称，数据库中存储为 SMALLINT
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    /// 未知
    #[default]
    Unknown,
    /// 服装
    Cloths,
    /// 食品
    Food,
    /// 家居
    Housewares,
    /// 汽车
    Automotive,
    /// 工具
    Tools,
}

impl Category {
    /// 序列化名称
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Unknown => "UNKNOWN",
            Category::Cloths => "CLOTHS",
            Category::Food => "FOOD",
            Category::Housewares => "HOUSEWARES",
            Category::Automotive => "AUTOMOTIVE",
            Category::Tools => "TOOLS",
        }
    }

    /// 所有成员
    pub fn all() -> &'static [Category] {
        &[
            Category::Unknown,
            Category::Cloths,
            Category::Food,
            Category::Housewares,
            Category::Automotive,
            Category::Tools,
        ]
    }
}

impl FromStr for Category {
    type Err = AppError;

    /// 名称映射（大小写不敏感），未识别的名称返回校验错误
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "UNKNOWN" => Ok(Category::Unknown),
            "CLOTHS" => Ok(Category::Cloths),
            "FOOD" => Ok(Category::Food),
            "HOUSEWARES" => Ok(Category::Housewares),
            "AUTOMOTIVE" => Ok(Category::Automotive),
            "TOOLS" => Ok(Category::Tools),
            other => Err(AppError::validation(format!(
                "Unrecognized category name: {}",
                other
            ))),
        }
    }
}

impl TryFrom<i16> for Category {
    type Error = AppError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Category::Unknown),
            1 => Ok(Category::Cloths),
            2 => Ok(Category::Food),
            3 => Ok(Category::Housewares),
            4 => Ok(Category::Automotive),
            5 => Ok(Category::Tools),
            other => Err(AppError::internal(format!(
                "Invalid category code in storage: {}",
                other
            ))),
        }
    }
}

impl From<Category> for i16 {
    fn from(category: Category) -> Self {
        match category {
            Category::Unknown => 0,
            Category::Cloths => 1,
            Category::Food => 2,
            Category::Housewares => 3,
            Category::Automotive => 4,
            Category::Tools => 5,
        }
    }
}
