//! HTTP 错误映射

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use plaza_errors::AppError;

/// AppError 的 HTTP 包装
///
/// 按 RFC 7807 Problem Details 渲染响应体，状态码由错误类型决定
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let problem = self.0.to_problem_details();
        let status = StatusCode::from_u16(problem.status)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(problem)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
