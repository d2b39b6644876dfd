//! 领域枚举

mod category;

pub use category::*;
