//! 应用层 - 客户端用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（HttpTransport、TokenStore、Navigator）
//! - client: 带拦截器链的 HTTP 客户端
//! - facades: 按领域划分的 API 方法组
//! - session: 会话状态
//! - routing: 路由表与导航守卫
//! - context: 显式组装的应用上下文
//! - error: 应用层错误定义

pub mod client;
pub mod context;
pub mod error;
pub mod facades;
pub mod ports;
pub mod routing;
pub mod session;

// Re-exports
pub use client::{ApiClient, ApiClientConfig};
pub use context::AppContext;
pub use error::{ApiError, DEFAULT_ERROR_MESSAGE};
pub use facades::{AuthApi, DashboardApi, OrderApi, ProductApi};
pub use ports::{
    ApiRequest, HttpTransportPort, NavigatorPort, RawResponse, TokenStoreError, TokenStorePort,
};
pub use routing::{Location, Navigation, NavigationDecision, RouteGuard, RouteTable, Router};
pub use session::{AuthStore, Session};
