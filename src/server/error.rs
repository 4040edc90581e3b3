// API 错误类型

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// 1MB，用于在错误信息中换算请求体上限
const MEGABYTE: f64 = 1024.0 * 1024.0;

/// API 错误
///
/// 统一以纯文本返回错误信息
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request body must not be empty")]
    EmptyBody,

    /// 请求体 JSON 不完整
    #[error("Request body contains badly-formed JSON")]
    TruncatedJson,

    /// JSON 语法错误（行、列）
    #[error("Request body contains badly-formed JSON (at line {line}, column {column})")]
    MalformedJson { line: usize, column: usize },

    /// 字段值类型错误或缺少字段
    #[error("Request body contains an invalid value for the {field:?} field ({detail})")]
    InvalidField { field: &'static str, detail: String },

    #[error("Request body must not be larger than {:.2} MB", megabytes(.limit))]
    BodyTooLarge { limit: usize },

    #[error("Unknown menu code: {0}")]
    UnknownMenu(String),

    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::EmptyBody
            | ApiError::TruncatedJson
            | ApiError::MalformedJson { .. }
            | ApiError::InvalidField { .. }
            | ApiError::UnknownMenu(_) => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(detail) = &self {
            tracing::error!("请求处理失败: {}", detail);
        }
        (self.status(), self.to_string()).into_response()
    }
}

fn megabytes(limit: &usize) -> f64 {
    *limit as f64 / MEGABYTE
}

pub type ApiResult<T> = Result<T, ApiError>;
