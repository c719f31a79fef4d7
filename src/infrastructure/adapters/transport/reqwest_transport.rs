//! Reqwest Transport - 通过 HTTP 调用真实后端
//!
//! 实现 HttpTransportPort trait。任何 HTTP 状态码都原样返回，
//! 状态码与信封的判断交给 ApiClient 的拦截器链。

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::error::ApiError;
use crate::application::ports::{ApiRequest, HttpTransportPort, RawResponse};

/// reqwest 传输
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// 创建传输，timeout 与 ApiClient 的超时保持一致
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransportPort for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        tracing::debug!(
            url = %request.url,
            status = status.as_u16(),
            size = bytes.len(),
            "HTTP response received"
        );

        Ok(RawResponse::from_bytes(status, &bytes))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else if e.is_builder() {
        ApiError::InvalidRequest(e.to_string())
    } else if e.is_connect() {
        ApiError::Network(format!("Cannot connect to API server: {}", e))
    } else {
        ApiError::Network(e.to_string())
    }
}
