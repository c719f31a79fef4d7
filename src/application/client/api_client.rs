//! ApiClient - 带拦截器链的 HTTP 客户端
//!
//! 单次调用内严格按顺序执行：请求拦截器 → 传输 → 响应拦截器 → 解码 data。
//! 超时由客户端统一控制，超时后调用失败且不提交任何状态。

use std::sync::Arc;
use std::time::Duration;

use http::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::interceptors::{RequestInterceptor, ResponseInterceptor};
use crate::application::error::ApiError;
use crate::application::ports::{ApiRequest, HttpTransportPort, RawResponse};

/// ApiClient 配置
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// 基础路径，如 `http://localhost:5060/api` 或进程内的 `/api`
    pub base_url: String,
    /// 单次请求超时
    pub timeout: Duration,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "/api".to_string(),
            timeout: Duration::from_millis(5000),
        }
    }
}

impl ApiClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP 客户端
pub struct ApiClient {
    config: ApiClientConfig,
    transport: Arc<dyn HttpTransportPort>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// 创建不带拦截器的客户端
    pub fn new(config: ApiClientConfig, transport: Arc<dyn HttpTransportPort>) -> Self {
        Self {
            config,
            transport,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// 追加请求拦截器（按追加顺序执行）
    pub fn with_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    /// 追加响应拦截器（按追加顺序执行）
    pub fn with_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// 拼接完整 URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// 执行请求，返回经过响应拦截器处理后的 body
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let mut request = ApiRequest::new(method, self.url(path));
        request.body = body;

        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut request)?;
        }

        let method = request.method.clone();
        let url = request.url.clone();
        tracing::debug!(
            method = %method,
            url = %url,
            authorized = request.authorization().is_some(),
            "Sending API request"
        );

        let outcome =
            match tokio::time::timeout(self.config.timeout, self.transport.execute(request)).await
            {
                Ok(result) => result.and_then(reject_error_status),
                Err(_) => Err(ApiError::Timeout),
            };

        let outcome = self
            .response_interceptors
            .iter()
            .fold(outcome, |acc, interceptor| interceptor.on_response(acc));

        match outcome {
            Ok(response) => Ok(response.body),
            Err(e) => {
                tracing::debug!(method = %method, url = %url, error = %e, "API request failed");
                Err(e)
            }
        }
    }

    /// GET 并解码 data
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.execute(Method::GET, path, None).await?)
    }

    /// POST JSON 并解码 data
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode(self.execute(Method::POST, path, Some(json_body(body)?)).await?)
    }

    /// PATCH JSON 并解码 data
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode(self.execute(Method::PATCH, path, Some(json_body(body)?)).await?)
    }

    /// 不关心返回 data 的请求
    pub async fn send_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(), ApiError> {
        self.execute(method, path, body).await.map(|_| ())
    }
}

/// 序列化请求体
pub(crate) fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest(e.to_string()))
}

fn decode<T: DeserializeOwned>(data: Value) -> Result<T, ApiError> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// 非 2xx 状态码转换为错误，与拦截器看到的传输错误走同一条链
fn reject_error_status(response: RawResponse) -> Result<RawResponse, ApiError> {
    if response.status.is_success() {
        return Ok(response);
    }

    let status = response.status.as_u16();
    let message = response
        .body
        .get("message")
        .and_then(Value::as_str)
        .or_else(|| response.body.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status code {}", status));

    Err(ApiError::Status { status, message })
}
