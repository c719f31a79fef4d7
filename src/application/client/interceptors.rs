//! Interceptors - 请求/响应拦截器
//!
//! 请求拦截器就地修改出站请求；响应拦截器接收上一环节的结果并返回新的结果，
//! 成功与失败都会流经整条链。

use std::sync::Arc;

use http::header::{HeaderValue, AUTHORIZATION};
use serde::Deserialize;
use serde_json::Value;

use crate::application::error::ApiError;
use crate::application::ports::{ApiRequest, NavigatorPort, RawResponse, TokenStorePort};

/// 登录页路径
pub const LOGIN_PATH: &str = "/login";

/// 信封中表示成功的 code
const SUCCESS_CODE: i64 = 200;

/// 请求拦截器
pub trait RequestInterceptor: Send + Sync {
    fn on_request(&self, request: &mut ApiRequest) -> Result<(), ApiError>;
}

/// 响应拦截器
pub trait ResponseInterceptor: Send + Sync {
    fn on_response(
        &self,
        outcome: Result<RawResponse, ApiError>,
    ) -> Result<RawResponse, ApiError>;
}

/// 附加 Bearer token
///
/// 每次请求时从持久化存储读取 token；没有 token 时请求保持未认证，不报错
pub struct BearerAuth {
    token_store: Arc<dyn TokenStorePort>,
}

impl BearerAuth {
    pub fn new(token_store: Arc<dyn TokenStorePort>) -> Self {
        Self { token_store }
    }
}

impl RequestInterceptor for BearerAuth {
    fn on_request(&self, request: &mut ApiRequest) -> Result<(), ApiError> {
        let token = match self.token_store.load() {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted token, sending unauthenticated");
                None
            }
        };

        if let Some(token) = token {
            let value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::InvalidRequest(format!("Invalid token: {}", e)))?;
            request.headers.insert(AUTHORIZATION, value);
        }

        Ok(())
    }
}

/// HTTP 401 时整页跳转到登录页，错误原样继续传递
///
/// 只看传输层状态码，信封内的 code 401 不会触发跳转
pub struct UnauthorizedRedirect {
    navigator: Arc<dyn NavigatorPort>,
}

impl UnauthorizedRedirect {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }
}

impl ResponseInterceptor for UnauthorizedRedirect {
    fn on_response(
        &self,
        outcome: Result<RawResponse, ApiError>,
    ) -> Result<RawResponse, ApiError> {
        if let Err(ApiError::Status { status: 401, .. }) = &outcome {
            tracing::warn!(to = LOGIN_PATH, "HTTP 401, redirecting to login");
            self.navigator.hard_redirect(LOGIN_PATH);
        }
        outcome
    }
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    data: Value,
    #[serde(default)]
    message: Option<String>,
}

/// 解析 `{code, data, message}` 信封
///
/// code == 200 时 body 替换为 data，否则以 message（或兜底提示）失败
pub struct EnvelopeUnwrap;

impl ResponseInterceptor for EnvelopeUnwrap {
    fn on_response(
        &self,
        outcome: Result<RawResponse, ApiError>,
    ) -> Result<RawResponse, ApiError> {
        let response = outcome?;

        // 非对象响应体没有 code，按业务失败处理
        let envelope: Envelope = match serde_json::from_value(response.body) {
            Ok(envelope) => envelope,
            Err(_) => return Err(ApiError::business(None, None)),
        };

        if envelope.code == Some(SUCCESS_CODE) {
            return Ok(RawResponse::new(response.status, envelope.data));
        }

        Err(ApiError::business(envelope.code, envelope.message))
    }
}
