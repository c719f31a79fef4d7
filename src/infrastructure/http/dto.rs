//! Data Transfer Objects - 统一信封

use serde::Serialize;

use super::error::code;

/// 统一 API 响应格式 `{ code, data?, message? }`
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T: Serialize> Envelope<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            code: code::SUCCESS,
            data: Some(data),
            message: None,
        }
    }
}

impl Envelope<()> {
    /// 成功但无数据
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            code: code::SUCCESS,
            data: None,
            message: Some(message.into()),
        }
    }

    /// 错误响应
    pub fn error(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            data: None,
            message: Some(message.into()),
        }
    }
}
