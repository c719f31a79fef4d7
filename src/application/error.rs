//! 应用层错误定义
//!
//! 客户端调用链统一的错误类型：传输失败、HTTP 状态错误、业务错误、解码错误

use thiserror::Error;

use crate::application::ports::TokenStoreError;

/// 信封 message 缺失时的兜底提示
pub const DEFAULT_ERROR_MESSAGE: &str = "请求失败";

/// API 调用错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 网络不可达或连接失败
    #[error("Network error: {0}")]
    Network(String),

    /// 超过客户端固定超时时间
    #[error("Request timeout")]
    Timeout,

    /// 非 2xx 的 HTTP 状态码
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// 信封 code != 200
    #[error("{message}")]
    Business { code: Option<i64>, message: String },

    /// data 与期望类型不符
    #[error("Decode error: {0}")]
    Decode(String),

    /// 请求构造失败
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// 本地 token 存储失败
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ApiError {
    /// 创建业务错误，message 为空时使用兜底提示
    pub fn business(code: Option<i64>, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string());
        Self::Business { code, message }
    }

    /// HTTP 401 或信封 code 401
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 401,
            Self::Business { code, .. } => *code == Some(401),
            _ => false,
        }
    }

    /// 传输层的暂时性失败
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Timeout)
    }

    /// 面向调用方（视图）的提示文本
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } | Self::Business { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<TokenStoreError> for ApiError {
    fn from(err: TokenStoreError) -> Self {
        Self::Storage(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_fallback_message() {
        let err = ApiError::business(Some(500), None);
        assert_eq!(err.to_string(), DEFAULT_ERROR_MESSAGE);

        let err = ApiError::business(Some(500), Some(String::new()));
        assert_eq!(err.message(), DEFAULT_ERROR_MESSAGE);
    }

    #[test]
    fn test_unauthorized_detection() {
        assert!(ApiError::Status {
            status: 401,
            message: "x".into()
        }
        .is_unauthorized());
        assert!(ApiError::business(Some(401), Some("用户名或密码错误".into())).is_unauthorized());
        assert!(!ApiError::Timeout.is_unauthorized());
    }

    #[test]
    fn test_transient() {
        assert!(ApiError::Timeout.is_transient());
        assert!(ApiError::Network("refused".into()).is_transient());
        assert!(!ApiError::business(None, None).is_transient());
    }
}
