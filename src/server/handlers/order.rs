// 订单 API 处理器

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::error::Category;
use tracing::{info, warn};

use crate::server::error::{ApiError, ApiResult};
use crate::server::AppState;

/// 下单请求
#[derive(Debug, Deserialize)]
pub struct OrderRequest {
    /// 菜品代码
    pub code: String,
}

/// 解析订单请求体
///
/// 空请求体、截断的 JSON、语法错误和字段类型错误分别返回不同的错误。
/// 只解析第一个 JSON 值，其后的内容忽略。
pub fn decode_order(body: &[u8]) -> ApiResult<OrderRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }

    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<OrderRequest>()
        .next()
        .ok_or(ApiError::EmptyBody)?;

    first.map_err(|e| match e.classify() {
        Category::Eof => ApiError::TruncatedJson,
        Category::Syntax => ApiError::MalformedJson {
            line: e.line(),
            column: e.column(),
        },
        Category::Data => ApiError::InvalidField {
            field: "code",
            detail: e.to_string(),
        },
        Category::Io => ApiError::Internal(e.to_string()),
    })
}

/// POST /orders
/// 下单，等待空闲厨师完成制作后返回
pub async fn place_order(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, &'static str)> {
    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BodyTooLarge {
                limit: state.max_order_bytes,
            }
        } else {
            ApiError::Internal(rejection.body_text())
        }
    })?;

    let order = decode_order(&body)?;

    if !state.menu.contains(&order.code) {
        warn!("未知菜品代码，拒绝订单: {}", order.code);
        return Err(ApiError::UnknownMenu(order.code));
    }

    info!("收到新订单: {}", order.code);

    // 订单在独立任务中制作：请求超时或客户端断开时订单仍会完成并归还厨师
    let pool = state.pool.clone();
    let code = order.code;
    let kitchen = tokio::spawn(async move {
        let chef = pool.acquire().await;
        chef.cook(&code).await;
        pool.release(chef);
        code
    });

    let code = kitchen
        .await
        .map_err(|e| ApiError::Internal(format!("订单任务异常退出: {}", e)))?;

    info!("订单完成: {}", code);
    Ok((StatusCode::OK, "Order Finished"))
}
