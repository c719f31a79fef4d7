//! Mock API Server
//!
//! 在 TCP 上提供 Mock 后端，附加请求追踪与跨域支持

use std::future::{pending, Future};
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::build_router;
use super::state::MockState;

/// 监听地址
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new("0.0.0.0", 5060)
    }
}

/// Mock 后端服务器
pub struct MockApiServer {
    config: ServerConfig,
    state: Arc<MockState>,
}

impl MockApiServer {
    pub fn new(config: ServerConfig, state: MockState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// 路由表外层再套追踪与 CORS
    pub fn app(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers([AUTHORIZATION, CONTENT_TYPE])
            .max_age(Duration::from_secs(3600));

        build_router(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// 一直运行直到进程退出
    pub async fn run(self) -> io::Result<()> {
        self.run_with_shutdown(pending()).await
    }

    /// 收到 shutdown 信号后停止接收新连接并等待进行中的请求结束
    pub async fn run_with_shutdown<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.addr()).await?;
        self.serve(listener, shutdown).await
    }

    /// 在已绑定的监听器上提供服务
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local: SocketAddr = listener.local_addr()?;
        tracing::info!(addr = %local, "Mock API server listening");

        axum::serve(listener, self.app())
            .with_graceful_shutdown(shutdown)
            .await
    }
}
