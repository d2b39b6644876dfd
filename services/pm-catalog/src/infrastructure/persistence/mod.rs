//! 持久化实现

mod memory;
mod postgres;
mod rows;

pub use memory::MemoryProductRepository;
pub use postgres::PostgresProductRepository;
