//! HTTP Middleware
//!
//! - error_logging_middleware: HTTP 状态码错误日志
//! - simulated_latency: 模拟网络延迟
//! - require_bearer: 业务接口的 Bearer 令牌校验

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http::header::AUTHORIZATION;
use rand::Rng;
use uuid::Uuid;

use super::error::MockApiError;
use super::state::{MockState, MOCK_TOKEN};

/// 4xx 记 warn，5xx 记 error；信封里的业务错误由 MockApiError 自己记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4();
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            "HTTP client error"
        );
    }

    response
}

/// 在配置区间内随机等待后再处理请求
pub async fn simulated_latency(
    State(state): State<Arc<MockState>>,
    request: Request,
    next: Next,
) -> Response {
    let delay = latency_ms(state.config.latency_min_ms, state.config.latency_max_ms);
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    next.run(request).await
}

fn latency_ms(min: u64, max: u64) -> u64 {
    if max <= min {
        min
    } else {
        rand::rng().random_range(min..=max)
    }
}

/// 校验 `Authorization: Bearer <token>`
pub async fn require_bearer(
    State(state): State<Arc<MockState>>,
    request: Request,
    next: Next,
) -> Response {
    if !state.config.require_auth {
        return next.run(request).await;
    }

    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .is_some_and(|token| token == MOCK_TOKEN);

    if authorized {
        next.run(request).await
    } else {
        MockApiError::Unauthorized.into_response()
    }
}
