//! API layer - REST endpoints

mod routes;

pub use routes::{AppState, metrics_routes, product_routes};
