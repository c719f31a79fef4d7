//! HTTP Client Wrapper
//!
//! 一个按配置构造的 ApiClient，请求/响应两条拦截器链显式组合:
//! - 请求: BearerAuth（附加 Authorization 头）
//! - 响应: UnauthorizedRedirect（401 整页跳转登录）→ EnvelopeUnwrap（解析 {code, data, message}）

mod api_client;
mod interceptors;

#[cfg(test)]
pub(crate) mod testing;

pub use api_client::{ApiClient, ApiClientConfig};
pub(crate) use api_client::json_body;
pub use interceptors::{
    BearerAuth, EnvelopeUnwrap, RequestInterceptor, ResponseInterceptor, UnauthorizedRedirect,
    LOGIN_PATH,
};
