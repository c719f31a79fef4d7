//! HTTP Layer - Mock 后端
//!
//! 用 axum 路由表模拟管理后台 API：统一信封、Bearer 鉴权、模拟延迟。
//! 同一个 Router 既可监听 TCP，也可通过 RouterTransport 在进程内调用。

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use dto::Envelope;
pub use error::MockApiError;
pub use routes::build_router;
pub use server::{MockApiServer, ServerConfig};
pub use state::{MockApiConfig, MockState};
