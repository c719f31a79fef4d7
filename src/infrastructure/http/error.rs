//! HTTP Error Handling
//!
//! 业务错误以 HTTP 200 + 信封 code 返回；只有缺少凭证时返回 HTTP 401

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::Envelope;

/// 信封 code 定义
pub mod code {
    pub const SUCCESS: i64 = 200;
    pub const BAD_REQUEST: i64 = 400;
    pub const UNAUTHORIZED: i64 = 401;
    pub const NOT_FOUND: i64 = 404;
}

/// Mock 后端错误
#[derive(Debug)]
pub enum MockApiError {
    /// 用户名或密码错误（HTTP 200）
    InvalidCredentials,
    /// 缺少或错误的 Bearer 令牌（HTTP 401）
    Unauthorized,
    NotFound(String),
    BadRequest(String),
}

impl IntoResponse for MockApiError {
    fn into_response(self) -> Response {
        let (status, response) = match &self {
            MockApiError::InvalidCredentials => {
                tracing::warn!(code = code::UNAUTHORIZED, "Login rejected");
                (
                    StatusCode::OK,
                    Envelope::error(code::UNAUTHORIZED, "用户名或密码错误"),
                )
            }
            MockApiError::Unauthorized => {
                tracing::warn!(code = code::UNAUTHORIZED, "Missing or invalid bearer token");
                (
                    StatusCode::UNAUTHORIZED,
                    Envelope::error(code::UNAUTHORIZED, "未登录或登录已过期"),
                )
            }
            MockApiError::NotFound(msg) => {
                tracing::warn!(code = code::NOT_FOUND, error = %msg, "Resource not found");
                (StatusCode::OK, Envelope::error(code::NOT_FOUND, msg.clone()))
            }
            MockApiError::BadRequest(msg) => {
                tracing::warn!(code = code::BAD_REQUEST, error = %msg, "Bad request");
                (StatusCode::OK, Envelope::error(code::BAD_REQUEST, msg.clone()))
            }
        };

        (status, Json(response)).into_response()
    }
}
