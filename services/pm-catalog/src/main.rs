//! pm-catalog Service - Product Catalog

use std::net::SocketAddr;
use std::sync::Arc;

use secrecy::ExposeSecret;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use plaza_adapter_postgres::{PostgresConfig, check_connection, create_pool};
use plaza_config::AppConfig;
use plaza_telemetry::{init_metrics, init_tracing, init_tracing_json};

use pm_catalog::api::{AppState, metrics_routes, product_routes};
use pm_catalog::domain::repositories::ProductRepository;
use pm_catalog::infrastructure::persistence::PostgresProductRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载配置
    let config = AppConfig::load("config")?;

    // 初始化 tracing
    if config.is_production() {
        init_tracing_json(&config.telemetry.log_level);
    } else {
        init_tracing(&config.telemetry.log_level);
    }

    info!("Initializing {} service...", config.app_name);

    // 数据库连接池
    let pg_config = PostgresConfig::new(config.database.url.expose_secret())
        .with_max_connections(config.database.max_connections);
    let pool = create_pool(&pg_config).await?;
    check_connection(&pool).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Database ready");

    let repository: Arc<dyn ProductRepository> = Arc::new(PostgresProductRepository::new(pool));

    // 指标
    let metrics_handle = init_metrics();

    // 构建路由
    let app = product_routes(AppState { repository })
        .merge(metrics_routes(metrics_handle))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // 启动服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    info!(%addr, "Starting pm-catalog service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
