//! 产品 REST 路由

use std::str::FromStr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};
use uuid::Uuid;

use plaza_errors::AppError;

use crate::domain::entities::Product;
use crate::domain::enums::Category;
use crate::domain::repositories::ProductRepository;
use crate::domain::value_objects::ProductId;
use crate::error::{ApiError, ApiResult};

/// 共享应用状态（依赖注入，无全局句柄）
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ProductRepository>,
}

/// 产品路由
pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/", get(index))
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(read_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

/// Prometheus 指标路由（仅在二进制入口合并）
pub fn metrics_routes(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || async move { handle.render() }))
}

// ========== 工具函数 ==========

/// 校验写操作的媒体类型
fn check_content_type(headers: &HeaderMap) -> ApiResult<()> {
    match headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    {
        Some(value) if value.starts_with("application/json") => Ok(()),
        Some(value) => {
            error!("Invalid Content-Type: {}", value);
            Err(AppError::unsupported_media_type(
                "Content-Type must be application/json".to_string(),
            )
            .into())
        }
        None => {
            error!("No Content-Type specified");
            Err(AppError::unsupported_media_type(
                "Content-Type must be application/json".to_string(),
            )
            .into())
        }
    }
}

fn parse_body(body: &Bytes) -> ApiResult<serde_json::Value> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::validation(format!("Request body is not valid JSON: {}", e)).into())
}

fn not_found(id: Uuid) -> ApiError {
    AppError::not_found(format!("product with id [{}] was not found", id)).into()
}

// ========== 健康检查 / 首页 ==========

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: u16,
    message: String,
}

async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: 200,
        message: "OK".to_string(),
    })
}

async fn index() -> Html<&'static str> {
    Html(include_str!("index.html"))
}

// ========== CRUD ==========

async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<impl axum::response::IntoResponse> {
    info!("Request to create a product");
    check_content_type(&headers)?;

    let product = Product::deserialize(parse_body(&body)?)?;
    let created = state.repository.create(&product).await?;
    metrics::counter!("catalog_products_created_total").increment(1);

    let location = created
        .id()
        .map(|id| format!("/products/{}", id))
        .unwrap_or_else(|| "/products".to_string());
    info!("Product with new id [{:?}] saved", created.id());

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// 列表查询参数；过滤器按 name → category → available 的优先级取一个
#[derive(Debug, Deserialize)]
struct ListParams {
    name: Option<String>,
    category: Option<String>,
    available: Option<String>,
}

async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Product>>> {
    let products = if let Some(name) = params.name {
        debug!("Fetching products by name: {}", name);
        state.repository.find_by_name(&name).await?
    } else if let Some(category) = params.category {
        let category = Category::from_str(&category)?;
        debug!("Fetching products by category: {:?}", category);
        state.repository.find_by_category(category).await?
    } else if let Some(available) = params.available {
        let available: bool = available.parse().map_err(|_| {
            AppError::validation(format!(
                "Query parameter 'available' must be 'true' or 'false', got '{}'",
                available
            ))
        })?;
        debug!("Fetching products by availability: {}", available);
        state.repository.find_by_availability(available).await?
    } else {
        debug!("Fetching all products");
        state.repository.all().await?
    };

    Ok(Json(products))
}

async fn read_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Product>> {
    info!("Request to read product [{}]", id);
    let product = state
        .repository
        .find(&ProductId::from_uuid(id))
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(product))
}

async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<Product>> {
    info!("Request to update product [{}]", id);
    check_content_type(&headers)?;

    let product_id = ProductId::from_uuid(id);
    state
        .repository
        .find(&product_id)
        .await?
        .ok_or_else(|| not_found(id))?;

    let updated = Product::deserialize(parse_body(&body)?)?.with_id(product_id);
    let saved = state.repository.update(&updated).await?;
    metrics::counter!("catalog_products_updated_total").increment(1);

    Ok(Json(saved))
}

async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    info!("Request to delete product [{}]", id);
    state.repository.delete(&ProductId::from_uuid(id)).await?;
    metrics::counter!("catalog_products_deleted_total").increment(1);

    Ok(StatusCode::NO_CONTENT)
}
