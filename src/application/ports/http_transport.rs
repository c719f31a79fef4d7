//! HTTP Transport Port - 请求发送抽象
//!
//! 真实网络（reqwest）与进程内 Mock 路由表都实现该端口，
//! 拦截器和信封解析在 ApiClient 中完成，与具体传输无关。

use async_trait::async_trait;
use http::header::AUTHORIZATION;
use http::{HeaderMap, Method, StatusCode};
use serde_json::Value;

use crate::application::error::ApiError;

/// 出站请求
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// 完整 URL（base_url + path），进程内传输只使用其中的 path 与 query
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// 当前携带的 Authorization 头
    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
    }
}

/// 传输层原始响应
///
/// body 为解析后的 JSON；非 JSON 文本保留为字符串，空响应体为 null
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 从原始字节解析响应体
    pub fn from_bytes(status: StatusCode, bytes: &[u8]) -> Self {
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(bytes).into_owned()))
        };
        Self { status, body }
    }
}

/// HTTP Transport Port
#[async_trait]
pub trait HttpTransportPort: Send + Sync {
    /// 发送请求；任何 HTTP 状态码都以 Ok 返回，只有传输失败才返回 Err
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}
