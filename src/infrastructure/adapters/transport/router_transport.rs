//! Router Transport - 进程内 Mock 传输
//!
//! 把 ApiRequest 直接交给 axum Router 处理，不经过网络；
//! 只使用 URL 中的 path 与 query。

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::Router;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Uri};
use tower::util::ServiceExt;

use crate::application::error::ApiError;
use crate::application::ports::{ApiRequest, HttpTransportPort, RawResponse};
use crate::infrastructure::http::{build_router, MockApiConfig, MockState};
use crate::infrastructure::memory::MockDataStore;

/// 进程内传输
#[derive(Clone)]
pub struct RouterTransport {
    router: Router,
}

impl RouterTransport {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// 使用 Mock 后端路由表
    pub fn mock(config: MockApiConfig, store: Arc<MockDataStore>) -> Self {
        Self::new(build_router(Arc::new(MockState::new(config, store))))
    }
}

#[async_trait]
impl HttpTransportPort for RouterTransport {
    async fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let uri: Uri = request
            .url
            .parse()
            .map_err(|e| ApiError::InvalidRequest(format!("Invalid url {}: {}", request.url, e)))?;
        let path_and_query = uri
            .path_and_query()
            .map(|p| p.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        let mut builder = http::Request::builder()
            .method(request.method)
            .uri(path_and_query);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(request.headers);
        }

        let body = match &request.body {
            Some(value) => {
                builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                let bytes = serde_json::to_vec(value)
                    .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        let http_request = builder
            .body(body)
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let response = self
            .router
            .clone()
            .oneshot(http_request)
            .await
            .unwrap_or_else(|never| match never {});

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(RawResponse::from_bytes(status, &bytes))
    }
}
